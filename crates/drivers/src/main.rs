mod config;
mod editor;
mod logging;
mod ui;

use std::process::ExitCode;

use config::AppConfig;
use editor::FileNoteEditor;
use photoclip_adapters::{
    present_album_summary, present_asset_row, JsonSettingsStore, UreqAlbumClient,
};
use photoclip_application::{
    EnsureAlbumCommand, GalleryService, LinkAssetCommand, RefreshAlbumCommand, SettingField,
    ShowSettingsQuery, UpdateSettingCommand,
};

fn main() -> ExitCode {
    logging::init_logging();
    let args: Vec<String> = std::env::args().collect();
    let config = AppConfig::default();

    let mut service = build_gallery_service(&config);

    let command = parse_command(&args);
    match run_command(command, &mut service, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(CommandError::Usage(msg)) => {
            eprintln!("{msg}");
            print_usage();
            ExitCode::from(2)
        }
        Err(CommandError::Runtime(msg)) => {
            eprintln!("{msg}");
            ExitCode::from(1)
        }
    }
}

fn build_gallery_service(config: &AppConfig) -> GalleryService {
    GalleryService::new(
        Box::new(UreqAlbumClient::new()),
        Box::new(JsonSettingsStore::new(config.settings_path.clone())),
    )
}

#[derive(Debug, Clone)]
enum Command {
    Ui { note: Option<String> },
    Refresh,
    List,
    Link { asset_id: String },
    ConfigShow,
    ConfigSet { field: SettingField, value: String },
}

#[derive(Debug, Clone)]
enum CommandError {
    Usage(String),
    Runtime(String),
}

fn parse_command(args: &[String]) -> Result<Command, CommandError> {
    if args.len() <= 1 {
        return Ok(Command::Ui { note: None });
    }

    match args[1].as_str() {
        "ui" => Ok(Command::Ui {
            note: args.get(2).cloned(),
        }),
        "refresh" => Ok(Command::Refresh),
        "list" => Ok(Command::List),
        "link" => {
            if args.len() < 3 {
                return Err(CommandError::Usage("missing asset id".to_string()));
            }
            Ok(Command::Link {
                asset_id: args[2].clone(),
            })
        }
        "config" => match args.len() {
            2 => Ok(Command::ConfigShow),
            4 => {
                let field = SettingField::parse(&args[2]).ok_or_else(|| {
                    CommandError::Usage(format!("unknown setting: {}", args[2]))
                })?;
                Ok(Command::ConfigSet {
                    field,
                    value: args[3].clone(),
                })
            }
            _ => Err(CommandError::Usage(
                "config takes no arguments or <field> <value>".to_string(),
            )),
        },
        other => Err(CommandError::Usage(format!("unknown command: {other}"))),
    }
}

fn run_command(
    command: Result<Command, CommandError>,
    service: &mut GalleryService,
    config: &AppConfig,
) -> Result<(), CommandError> {
    match command? {
        Command::Ui { note } => {
            let note_path = note.unwrap_or_else(|| config.note_path.clone());
            let mut editor = FileNoteEditor::open(&note_path)
                .map_err(|error| CommandError::Runtime(format!("cannot open note: {error}")))?;
            let thumbnails = UreqAlbumClient::new();
            ui::launch_window(service, &thumbnails, &mut editor).map_err(CommandError::Runtime)
        }
        Command::Refresh => {
            let album = service
                .refresh_album(RefreshAlbumCommand)
                .map_err(|error| CommandError::Runtime(format!("refresh failed: {error}")))?;
            println!("refreshed {}", present_album_summary(&album));
            Ok(())
        }
        Command::List => {
            let album = service
                .ensure_album(EnsureAlbumCommand)
                .map_err(|error| CommandError::Runtime(format!("list failed: {error}")))?;
            println!("{}", present_album_summary(&album));
            for (index, asset) in album.assets.iter().enumerate() {
                println!("{}", present_asset_row(index, asset));
            }
            Ok(())
        }
        Command::Link { asset_id } => {
            let link = service
                .link_asset(LinkAssetCommand { asset_id })
                .map_err(|error| CommandError::Runtime(format!("link failed: {error}")))?;
            print!("{link}");
            Ok(())
        }
        Command::ConfigShow => {
            let settings = service
                .show_settings(ShowSettingsQuery)
                .map_err(|error| CommandError::Runtime(format!("config load failed: {error}")))?;
            println!("service-url\t{}", settings.service_url);
            println!("api-key\t{}", settings.api_key);
            println!("album-id\t{}", settings.album_id);
            println!("album-share-key\t{}", settings.album_share_key);
            Ok(())
        }
        Command::ConfigSet { field, value } => {
            service
                .update_setting(UpdateSettingCommand { field, value })
                .map_err(|error| CommandError::Runtime(format!("config save failed: {error}")))?;
            println!("saved {}", field.as_str());
            Ok(())
        }
    }
}

fn print_usage() {
    println!("usage:");
    println!("  photoclip ui [note.md]");
    println!("  photoclip refresh");
    println!("  photoclip list");
    println!("  photoclip link <asset_id>");
    println!("  photoclip config");
    println!("  photoclip config <service-url|api-key|album-id|album-share-key> <value>");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(parts: &[&str]) -> Vec<String> {
        std::iter::once("photoclip")
            .chain(parts.iter().copied())
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn no_arguments_defaults_to_the_ui() {
        let command = parse_command(&args(&[])).expect("default should parse");
        assert!(matches!(command, Command::Ui { note: None }));
    }

    #[test]
    fn ui_accepts_an_optional_note_path() {
        let command = parse_command(&args(&["ui", "journal.md"])).expect("ui should parse");
        match command {
            Command::Ui { note } => assert_eq!(note.as_deref(), Some("journal.md")),
            other => panic!("expected ui command, got {other:?}"),
        }
    }

    #[test]
    fn link_requires_an_asset_id() {
        assert!(matches!(
            parse_command(&args(&["link"])),
            Err(CommandError::Usage(_))
        ));
        assert!(matches!(
            parse_command(&args(&["link", "a1"])),
            Ok(Command::Link { .. })
        ));
    }

    #[test]
    fn config_parses_show_and_set_forms() {
        assert!(matches!(
            parse_command(&args(&["config"])),
            Ok(Command::ConfigShow)
        ));
        let command =
            parse_command(&args(&["config", "album-id", "alb-9"])).expect("set should parse");
        match command {
            Command::ConfigSet { field, value } => {
                assert_eq!(field, SettingField::AlbumId);
                assert_eq!(value, "alb-9");
            }
            other => panic!("expected config set, got {other:?}"),
        }
    }

    #[test]
    fn config_rejects_unknown_fields() {
        assert!(matches!(
            parse_command(&args(&["config", "password", "x"])),
            Err(CommandError::Usage(_))
        ));
    }

    #[test]
    fn unknown_commands_are_usage_errors() {
        assert!(matches!(
            parse_command(&args(&["explode"])),
            Err(CommandError::Usage(_))
        ));
    }
}

use std::fs;
use std::path::PathBuf;

use photoclip_application::{ApplicationError, SettingsStore};
use photoclip_domain::Settings;

/// Settings persisted as a JSON file. A missing file reads as default
/// (all-empty) settings; saving writes the whole record back.
#[derive(Debug, Clone)]
pub struct JsonSettingsStore {
    path: PathBuf,
}

impl JsonSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SettingsStore for JsonSettingsStore {
    fn load(&self) -> Result<Settings, ApplicationError> {
        if !self.path.exists() {
            return Ok(Settings::default());
        }
        let raw = fs::read_to_string(&self.path)
            .map_err(|error| ApplicationError::Io(error.to_string()))?;
        serde_json::from_str(&raw)
            .map_err(|error| ApplicationError::Persistence(error.to_string()))
    }

    fn save(&self, settings: &Settings) -> Result<(), ApplicationError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|error| ApplicationError::Io(error.to_string()))?;
            }
        }
        let raw = serde_json::to_string_pretty(settings)
            .map_err(|error| ApplicationError::Persistence(error.to_string()))?;
        fs::write(&self.path, raw).map_err(|error| ApplicationError::Io(error.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn missing_file_loads_default_settings() {
        let dir = TempDir::new().expect("tempdir");
        let store = JsonSettingsStore::new(dir.path().join("settings.json"));
        let settings = store.load().expect("load");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn save_and_load_roundtrip() {
        let dir = TempDir::new().expect("tempdir");
        let store = JsonSettingsStore::new(dir.path().join("nested/settings.json"));

        let settings = Settings {
            service_url: "https://photos.example.com".to_string(),
            api_key: "key".to_string(),
            album_id: "alb".to_string(),
            album_share_key: "share".to_string(),
        };
        store.save(&settings).expect("save");

        let loaded = store.load().expect("load");
        assert_eq!(loaded, settings);
    }

    #[test]
    fn corrupt_file_is_a_persistence_error() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "not json").expect("write");

        let store = JsonSettingsStore::new(path);
        assert!(matches!(
            store.load(),
            Err(ApplicationError::Persistence(_))
        ));
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub settings_path: String,
    pub note_path: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            settings_path: "photoclip.json".to_string(),
            note_path: "note.md".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_local_paths() {
        let config = AppConfig::default();
        assert_eq!(config.settings_path, "photoclip.json");
        assert_eq!(config.note_path, "note.md");
    }
}

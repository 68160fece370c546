mod settings;

pub use settings::JsonSettingsStore;

use serde::{Deserialize, Serialize};

/// User-supplied connection settings, persisted as-is. No validation
/// happens at save time; required fields are checked when a fetch is
/// actually attempted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub service_url: String,
    pub api_key: String,
    pub album_id: String,
    pub album_share_key: String,
}

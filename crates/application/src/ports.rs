use photoclip_domain::{Album, Settings};

use crate::ApplicationError;

/// Read access to the remote album service. One call maps to one HTTP
/// request; no retry or caching happens behind this trait.
pub trait AlbumApi {
    fn fetch_album(&self, settings: &Settings) -> Result<Album, ApplicationError>;
}

/// A decoded thumbnail, pixels packed as 0xRRGGBB rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThumbnailImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u32>,
}

pub trait ThumbnailFetcher {
    fn fetch_thumbnail(&self, url: &str) -> Result<ThumbnailImage, ApplicationError>;
}

pub trait SettingsStore {
    fn load(&self) -> Result<Settings, ApplicationError>;

    fn save(&self, settings: &Settings) -> Result<(), ApplicationError>;
}

/// The host document this tool writes into. Only two things are ever
/// asked of it: where the cursor is, and to splice text there.
pub trait DocumentEditor {
    fn cursor(&self) -> usize;

    fn insert_at_cursor(&mut self, text: &str) -> Result<(), ApplicationError>;
}

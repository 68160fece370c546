mod cache;
mod error;
mod ports;
mod service;
mod session;
mod use_cases;

pub use cache::AlbumCache;
pub use error::ApplicationError;
pub use ports::{AlbumApi, DocumentEditor, SettingsStore, ThumbnailFetcher, ThumbnailImage};
pub use service::GalleryService;
pub use session::{GallerySession, GalleryTile};
pub use use_cases::{
    EnsureAlbumCommand, InvalidateCacheCommand, LinkAssetCommand, OpenGalleryCommand,
    RefreshAlbumCommand, SettingField, ShowSettingsQuery, UpdateSettingCommand,
};

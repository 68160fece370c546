mod asset;
mod batch;
mod error;
mod link;
mod settings;

pub use asset::{Album, Asset, AssetId};
pub use batch::{BatchPager, DEFAULT_BATCH_SIZE};
pub use error::DomainError;
pub use link::{album_url, asset_thumbnail_url, markdown_image_link, ThumbnailSize};
pub use settings::Settings;

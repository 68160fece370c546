pub mod fs;
pub mod http;
pub mod presenters;

pub use fs::JsonSettingsStore;
pub use http::UreqAlbumClient;
pub use presenters::{present_album_summary, present_asset_row};

use std::sync::Arc;

use photoclip_domain::Album;

/// Single-slot memo of the last fetched album, owned by the service and
/// shared by every gallery opened during the process lifetime.
/// `invalidate` is the only way to empty it and `store` the only way to
/// overwrite it. Every `store` allocates a fresh `Arc`, so a refresh is
/// distinguishable from the previous result by pointer identity.
#[derive(Debug, Default)]
pub struct AlbumCache {
    slot: Option<Arc<Album>>,
}

impl AlbumCache {
    pub fn get(&self) -> Option<Arc<Album>> {
        self.slot.clone()
    }

    pub fn store(&mut self, album: Album) -> Arc<Album> {
        let album = Arc::new(album);
        self.slot = Some(Arc::clone(&album));
        album
    }

    pub fn invalidate(&mut self) {
        self.slot = None;
    }

    pub fn is_empty(&self) -> bool {
        self.slot.is_none()
    }
}

use std::sync::Arc;

use photoclip_domain::{
    asset_thumbnail_url, markdown_image_link, Album, BatchPager, Settings, ThumbnailSize,
};

/// One gallery cell: the thumbnail to show and the exact markdown to
/// insert when it is clicked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryTile {
    pub asset_id: String,
    pub original_file_name: String,
    pub thumbnail_url: String,
    pub insertion_text: String,
}

/// One opened gallery. Owns its own pager (cursor starts at zero for
/// every new session) and a snapshot of the album taken at open, so the
/// batch windows stay coherent even if the shared cache is refreshed
/// while this gallery is still on screen. Driving `next_batch` is the
/// caller's job; an exhausted session keeps answering with empty
/// batches, which makes over-eager scroll triggers harmless.
#[derive(Debug)]
pub struct GallerySession {
    album: Arc<Album>,
    pager: BatchPager,
    service_url: String,
    share_key: String,
}

impl GallerySession {
    pub(crate) fn new(album: Arc<Album>, settings: &Settings) -> Self {
        Self {
            album,
            pager: BatchPager::default(),
            service_url: settings.service_url.clone(),
            share_key: settings.album_share_key.clone(),
        }
    }

    pub fn album(&self) -> &Album {
        &self.album
    }

    pub fn total(&self) -> usize {
        self.album.asset_count()
    }

    pub fn loaded(&self) -> usize {
        self.pager.cursor()
    }

    pub fn is_exhausted(&self) -> bool {
        self.pager.is_exhausted(self.total())
    }

    pub fn next_batch(&mut self) -> Vec<GalleryTile> {
        let range = self.pager.next_batch(self.album.asset_count());
        self.album.assets[range]
            .iter()
            .map(|asset| {
                let thumbnail_url = asset_thumbnail_url(
                    &self.service_url,
                    &asset.id,
                    ThumbnailSize::Thumbnail,
                    &self.share_key,
                );
                let preview_url = asset_thumbnail_url(
                    &self.service_url,
                    &asset.id,
                    ThumbnailSize::Preview,
                    &self.share_key,
                );
                GalleryTile {
                    asset_id: asset.id.clone(),
                    original_file_name: asset.original_file_name.clone(),
                    thumbnail_url,
                    insertion_text: markdown_image_link(&preview_url),
                }
            })
            .collect()
    }
}

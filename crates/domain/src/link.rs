#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThumbnailSize {
    Thumbnail,
    Preview,
}

impl ThumbnailSize {
    pub fn as_query_value(self) -> &'static str {
        match self {
            Self::Thumbnail => "thumbnail",
            Self::Preview => "preview",
        }
    }
}

/// `{serviceUrl}/api/assets/{id}/thumbnail?size={size}&key={shareKey}`.
/// A trailing slash on the service URL must not produce `//` in the path.
pub fn asset_thumbnail_url(
    service_url: &str,
    asset_id: &str,
    size: ThumbnailSize,
    share_key: &str,
) -> String {
    format!(
        "{}/api/assets/{}/thumbnail?size={}&key={}",
        service_url.trim_end_matches('/'),
        asset_id,
        size.as_query_value(),
        share_key
    )
}

pub fn album_url(service_url: &str, album_id: &str) -> String {
    format!(
        "{}/api/albums/{}",
        service_url.trim_end_matches('/'),
        album_id
    )
}

/// The exact text inserted into the note for one chosen photo.
pub fn markdown_image_link(preview_url: &str) -> String {
    format!("![]({preview_url})\n")
}

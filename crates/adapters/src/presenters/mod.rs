use photoclip_domain::{Album, Asset};

pub fn present_album_summary(album: &Album) -> String {
    let name = if album.album_name.is_empty() {
        "(unnamed album)"
    } else {
        album.album_name.as_str()
    };
    format!("{name}: {} assets", album.asset_count())
}

pub fn present_asset_row(index: usize, asset: &Asset) -> String {
    format!("{index}\t{}\t{}", asset.id, asset.original_file_name)
}

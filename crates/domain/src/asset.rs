use serde::Deserialize;

use crate::DomainError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetId(String);

impl AssetId {
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::EmptyAssetId);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One entry in the album's asset list. The service returns many more
/// fields per asset; only the id participates in URL construction, so
/// everything else is ignored during deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Asset {
    pub id: String,
    #[serde(rename = "originalFileName", default)]
    pub original_file_name: String,
}

/// Parsed body of `GET /api/albums/{albumId}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Album {
    #[serde(rename = "albumName", default)]
    pub album_name: String,
    #[serde(default)]
    pub assets: Vec<Asset>,
}

impl Album {
    pub fn asset_count(&self) -> usize {
        self.assets.len()
    }

    pub fn find_asset(&self, asset_id: &AssetId) -> Option<&Asset> {
        self.assets.iter().find(|asset| asset.id == asset_id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_id_must_not_be_empty() {
        assert!(AssetId::new("b6c1cb46").is_ok());
        assert!(matches!(AssetId::new("  "), Err(DomainError::EmptyAssetId)));
    }

    #[test]
    fn album_parses_service_payload_ignoring_extra_fields() {
        let body = r#"{
            "albumName": "obsidian",
            "shared": true,
            "assetCount": 2,
            "assets": [
                {"id": "a1", "originalFileName": "IMG_0001.jpg", "type": "IMAGE"},
                {"id": "a2", "originalFileName": "IMG_0002.jpg", "type": "IMAGE"}
            ]
        }"#;

        let album: Album = serde_json::from_str(body).expect("album should parse");
        assert_eq!(album.album_name, "obsidian");
        assert_eq!(album.asset_count(), 2);
        assert_eq!(album.assets[0].id, "a1");
        assert_eq!(album.assets[1].original_file_name, "IMG_0002.jpg");
    }

    #[test]
    fn album_without_assets_field_parses_as_empty() {
        let album: Album = serde_json::from_str(r#"{"albumName": "x"}"#).expect("parse");
        assert_eq!(album.asset_count(), 0);
    }

    #[test]
    fn find_asset_matches_on_id() {
        let album: Album = serde_json::from_str(
            r#"{"assets": [{"id": "a1"}, {"id": "a2"}]}"#,
        )
        .expect("parse");
        let hit = AssetId::new("a2").expect("valid id");
        let miss = AssetId::new("a3").expect("valid id");
        assert!(album.find_asset(&hit).is_some());
        assert!(album.find_asset(&miss).is_none());
    }
}

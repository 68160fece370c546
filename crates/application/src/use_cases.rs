#[derive(Debug, Clone, Default)]
pub struct ShowSettingsQuery;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingField {
    ServiceUrl,
    ApiKey,
    AlbumId,
    AlbumShareKey,
}

impl SettingField {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "service-url" => Some(Self::ServiceUrl),
            "api-key" => Some(Self::ApiKey),
            "album-id" => Some(Self::AlbumId),
            "album-share-key" => Some(Self::AlbumShareKey),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::ServiceUrl => "service-url",
            Self::ApiKey => "api-key",
            Self::AlbumId => "album-id",
            Self::AlbumShareKey => "album-share-key",
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateSettingCommand {
    pub field: SettingField,
    pub value: String,
}

#[derive(Debug, Clone, Default)]
pub struct EnsureAlbumCommand;

#[derive(Debug, Clone, Default)]
pub struct RefreshAlbumCommand;

#[derive(Debug, Clone, Default)]
pub struct InvalidateCacheCommand;

#[derive(Debug, Clone, Default)]
pub struct OpenGalleryCommand;

#[derive(Debug, Clone)]
pub struct LinkAssetCommand {
    pub asset_id: String,
}

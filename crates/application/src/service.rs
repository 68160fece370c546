use std::sync::Arc;

use photoclip_domain::{
    asset_thumbnail_url, markdown_image_link, Album, AssetId, Settings, ThumbnailSize,
};

use crate::{
    AlbumCache, ApplicationError, DocumentEditor, EnsureAlbumCommand, GallerySession, GalleryTile,
    InvalidateCacheCommand, LinkAssetCommand, OpenGalleryCommand, RefreshAlbumCommand,
    SettingField, ShowSettingsQuery, UpdateSettingCommand,
};
use crate::ports::{AlbumApi, SettingsStore};

pub struct GalleryService {
    api: Box<dyn AlbumApi>,
    settings: Box<dyn SettingsStore>,
    cache: AlbumCache,
}

impl GalleryService {
    pub fn new(api: Box<dyn AlbumApi>, settings: Box<dyn SettingsStore>) -> Self {
        Self {
            api,
            settings,
            cache: AlbumCache::default(),
        }
    }

    pub fn show_settings(&self, _query: ShowSettingsQuery) -> Result<Settings, ApplicationError> {
        self.settings.load()
    }

    /// Sets one field and saves immediately. Values are stored verbatim;
    /// a wrong URL only surfaces when a fetch is attempted.
    pub fn update_setting(&self, command: UpdateSettingCommand) -> Result<(), ApplicationError> {
        let mut settings = self.settings.load()?;
        match command.field {
            SettingField::ServiceUrl => settings.service_url = command.value,
            SettingField::ApiKey => settings.api_key = command.value,
            SettingField::AlbumId => settings.album_id = command.value,
            SettingField::AlbumShareKey => settings.album_share_key = command.value,
        }
        self.settings.save(&settings)
    }

    /// Returns the cached album, fetching it first if the cache is
    /// empty. A failed fetch leaves the cache empty and propagates the
    /// error.
    pub fn ensure_album(
        &mut self,
        _command: EnsureAlbumCommand,
    ) -> Result<Arc<Album>, ApplicationError> {
        if let Some(album) = self.cache.get() {
            return Ok(album);
        }
        self.fetch_and_store()
    }

    /// Unconditional re-fetch, overwriting whatever is cached.
    pub fn refresh_album(
        &mut self,
        _command: RefreshAlbumCommand,
    ) -> Result<Arc<Album>, ApplicationError> {
        self.fetch_and_store()
    }

    pub fn invalidate_cache(&mut self, _command: InvalidateCacheCommand) {
        self.cache.invalidate();
    }

    /// Opens a new gallery over the (fetched-if-needed) album. Each
    /// session starts with its batch cursor at zero.
    pub fn open_gallery(
        &mut self,
        _command: OpenGalleryCommand,
    ) -> Result<GallerySession, ApplicationError> {
        let settings = self.settings.load()?;
        let album = self.ensure_album(EnsureAlbumCommand)?;
        Ok(GallerySession::new(album, &settings))
    }

    /// Markdown insertion text for a single asset, looked up by id.
    /// The id is validated before any network round trip.
    pub fn link_asset(&mut self, command: LinkAssetCommand) -> Result<String, ApplicationError> {
        let asset_id = AssetId::new(command.asset_id)?;
        let settings = self.settings.load()?;
        let album = self.ensure_album(EnsureAlbumCommand)?;
        let asset = album.find_asset(&asset_id).ok_or_else(|| {
            ApplicationError::NotFound(format!("asset not in album: {}", asset_id.as_str()))
        })?;
        let preview_url = asset_thumbnail_url(
            &settings.service_url,
            &asset.id,
            ThumbnailSize::Preview,
            &settings.album_share_key,
        );
        Ok(markdown_image_link(&preview_url))
    }

    /// Splices a tile's insertion text into the host document at its
    /// current cursor. The gallery stays open; repeated insertions are
    /// expected.
    pub fn insert_tile(
        &self,
        editor: &mut dyn DocumentEditor,
        tile: &GalleryTile,
    ) -> Result<(), ApplicationError> {
        editor.insert_at_cursor(&tile.insertion_text)
    }

    fn fetch_and_store(&mut self) -> Result<Arc<Album>, ApplicationError> {
        let settings = self.settings.load()?;
        if settings.service_url.trim().is_empty() {
            return Err(ApplicationError::InvalidInput(
                "service url is not configured".to_string(),
            ));
        }
        if settings.album_id.trim().is_empty() {
            return Err(ApplicationError::InvalidInput(
                "album id is not configured".to_string(),
            ));
        }

        let album = self.api.fetch_album(&settings)?;
        log::info!(
            "fetched album '{}' with {} assets",
            album.album_name,
            album.asset_count()
        );
        Ok(self.cache.store(album))
    }
}

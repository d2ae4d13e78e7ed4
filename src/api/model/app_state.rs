use std::sync::Arc;

use crate::api::model::playlist_cache::PlaylistCache;
use crate::model::Config;
use crate::playlist::FsDirectoryLister;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub http_client: Arc<reqwest::Client>,
    pub directory_lister: FsDirectoryLister,
    pub cache: Arc<Option<PlaylistCache>>,
}

impl AppState {
    pub fn new(config: Arc<Config>, http_client: reqwest::Client) -> Self {
        let cache = if config.cache.enabled {
            Some(PlaylistCache::new(config.cache.ttl(), config.cache.max_entries))
        } else {
            None
        };
        Self {
            config,
            http_client: Arc::new(http_client),
            directory_lister: FsDirectoryLister,
            cache: Arc::new(cache),
        }
    }
}

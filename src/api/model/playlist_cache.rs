use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;

use crate::model::PlaylistTrack;

struct CacheEntry {
    created: Instant,
    tracks: Arc<Vec<PlaylistTrack>>,
}

/// Resolved playlists keyed by request, each entry lives for `ttl`.
///
/// When `max_entries` is reached, expired entries are dropped first, then the oldest one.
pub struct PlaylistCache {
    ttl: Duration,
    max_entries: usize,
    entries: RwLock<HashMap<String, CacheEntry>>,
}

impl PlaylistCache {
    pub fn new(ttl: Duration, max_entries: usize) -> Self {
        Self {
            ttl,
            max_entries: max_entries.max(1),
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub async fn get(&self, key: &str) -> Option<Arc<Vec<PlaylistTrack>>> {
        let entries = self.entries.read().await;
        entries.get(key)
            .filter(|entry| entry.created.elapsed() < self.ttl)
            .map(|entry| Arc::clone(&entry.tracks))
    }

    pub async fn insert(&self, key: String, tracks: Arc<Vec<PlaylistTrack>>) {
        let mut entries = self.entries.write().await;
        if !entries.contains_key(&key) && entries.len() >= self.max_entries {
            let ttl = self.ttl;
            entries.retain(|_, entry| entry.created.elapsed() < ttl);
            if entries.len() >= self.max_entries {
                let oldest = entries.iter().min_by_key(|(_, entry)| entry.created).map(|(k, _)| k.clone());
                if let Some(oldest_key) = oldest {
                    entries.remove(&oldest_key);
                }
            }
        }
        entries.insert(key, CacheEntry { created: Instant::now(), tracks });
    }

    pub async fn size(&self) -> usize {
        self.entries.read().await.len()
    }
}

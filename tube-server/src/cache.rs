//! Caching layer for the line directory.
//!
//! The planner looks the line directory up on every request. Lines change
//! rarely, so a loaded directory is kept for a short TTL instead of being
//! refetched each time. Failed (empty) loads are not cached: the next
//! request fetches again.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;
use tracing::debug;

use crate::domain::LineDirectory;
use crate::tfl::TransitApi;

/// There is one directory per server, so one key.
const LINES_KEY: () = ();

/// Configuration for the line cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for a loaded directory.
    pub ttl: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(10 * 60),
        }
    }
}

/// Line directory with a time-limited cache in front of the loader.
#[derive(Clone)]
pub struct CachedLineDirectory {
    cache: MokaCache<(), Arc<LineDirectory>>,
}

impl CachedLineDirectory {
    /// Create an empty cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let cache = MokaCache::builder()
            .time_to_live(config.ttl)
            .build();

        Self { cache }
    }

    /// Store an already-loaded directory, e.g. the one fetched at startup.
    ///
    /// Empty directories are ignored.
    pub async fn seed(&self, lines: LineDirectory) {
        if !lines.is_empty() {
            self.cache.insert(LINES_KEY, Arc::new(lines)).await;
        }
    }

    /// Get the directory, loading it through `api` on a cache miss.
    pub async fn get(&self, api: &impl TransitApi) -> Arc<LineDirectory> {
        if let Some(cached) = self.cache.get(&LINES_KEY).await {
            return cached;
        }

        debug!("line directory cache miss");
        let lines = Arc::new(LineDirectory::load(api).await);
        if !lines.is_empty() {
            self.cache.insert(LINES_KEY, lines.clone()).await;
        }
        lines
    }

    /// Whether a directory is currently cached.
    pub fn is_cached(&self) -> bool {
        self.cache.contains_key(&LINES_KEY)
    }
}

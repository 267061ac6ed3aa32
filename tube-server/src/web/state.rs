//! Application state for the web layer.

use std::sync::Arc;

use tracing::{info, warn};

use crate::cache::{CacheConfig, CachedLineDirectory};
use crate::domain::{LineDirectory, StationDirectory};
use crate::tfl::TransitBackend;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Transit data source
    pub api: Arc<TransitBackend>,

    /// Station names offered by the pickers, loaded once at startup
    pub stations: Arc<StationDirectory>,

    /// Line id → name lookup, cached between requests
    pub lines: CachedLineDirectory,
}

impl AppState {
    /// Create a new app state.
    pub fn new(api: TransitBackend, stations: StationDirectory, lines: CachedLineDirectory) -> Self {
        Self {
            api: Arc::new(api),
            stations: Arc::new(stations),
            lines,
        }
    }

    /// Load both directories and build the state.
    ///
    /// Stations and lines are fetched concurrently. Neither failure is
    /// fatal: the planner runs with whatever loaded.
    pub async fn initialize(api: TransitBackend, cache_config: &CacheConfig) -> Self {
        let (stations, lines) = tokio::join!(
            StationDirectory::load(&api),
            LineDirectory::load(&api)
        );

        let stations = stations.unwrap_or_else(|e| {
            warn!(error = %e, "failed to fetch station names");
            StationDirectory::empty()
        });
        info!(
            stations = stations.len(),
            lines = lines.len(),
            "loaded directories"
        );

        let cache = CachedLineDirectory::new(cache_config);
        cache.seed(lines).await;
        if !cache.is_cached() {
            warn!("line directory not cached, retrying on the next plan");
        }

        Self::new(api, stations, cache)
    }
}

//! Application state for the web layer.

use std::sync::Arc;

use crate::autocomplete::StationDirectory;
use crate::backend::BackendClient;
use crate::config::ViewerConfig;
use crate::timeline::RailwayPalette;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Search service client
    pub backend: Arc<BackendClient>,

    /// Station names for autocomplete, loaded once at startup
    pub stations: StationDirectory,

    /// Railway line colors for timelines
    pub colors: Arc<RailwayPalette>,

    pub config: Arc<ViewerConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        backend: BackendClient,
        stations: StationDirectory,
        colors: RailwayPalette,
        config: ViewerConfig,
    ) -> Self {
        Self {
            backend: Arc::new(backend),
            stations,
            colors: Arc::new(colors),
            config: Arc::new(config),
        }
    }
}

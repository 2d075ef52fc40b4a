//! Application state for the web layer.

use std::sync::Arc;

use crate::service::LiveRouteService;
use crate::stations::StationCatalog;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Route planning service
    pub routes: Arc<LiveRouteService>,

    /// Station catalog, for diagnostics
    pub catalog: StationCatalog,
}

impl AppState {
    /// Create a new app state. The catalog is shared with the service.
    pub fn new(routes: LiveRouteService) -> Self {
        let catalog = routes.catalog().clone();
        Self {
            routes: Arc::new(routes),
            catalog,
        }
    }
}

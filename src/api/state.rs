//! API server state

use std::sync::Arc;

use crate::osrm::RouteProvider;

/// API server state
#[derive(Clone)]
pub struct AppState {
    /// Upstream route source
    pub routes: Arc<dyn RouteProvider>,
}

impl AppState {
    pub fn new(routes: Arc<dyn RouteProvider>) -> Self {
        Self { routes }
    }
}

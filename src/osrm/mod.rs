//! Upstream routing service

use async_trait::async_trait;

use crate::Result;

pub mod client;
pub mod types;

pub use client::OsrmClient;
pub use types::{project_routes, RouteQuery, RouteSummary};

/// Source of route alternatives between two coordinates
#[async_trait]
pub trait RouteProvider: Send + Sync {
    /// Look up route alternatives for `query`, in upstream order.
    async fn routes(&self, query: &RouteQuery) -> Result<Vec<RouteSummary>>;
}

//! HTTP API server

use axum::{
    http::HeaderValue,
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::CorsSection;
use crate::osrm::RouteProvider;
use crate::{Error, Result};

pub mod handlers;
pub mod state;

pub use handlers::RouteOutcome;
pub use state::AppState;

/// Build the API router using the provided application state
pub fn create_router(state: AppState, cors: &CorsSection) -> Result<Router> {
    Ok(api_routes()
        .layer(cors_layer(cors)?)
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}

/// Convenience helper wiring a route provider with the default (permissive) CORS settings
pub fn create_default_router(provider: Arc<dyn RouteProvider>) -> Router {
    let cors = CorsSection::default();

    api_routes()
        .layer(permissive_layer(cors.allow_credentials))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState::new(provider))
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::health))
        .route("/ping", get(handlers::health))
        .route("/routes", get(handlers::routes))
}

/// Translate the `cors` section into a tower-http layer.
///
/// Browsers refuse a literal `*` alongside credentials, so a wildcard origin
/// with credentials mirrors the request's origin, method and headers instead.
pub fn cors_layer(cors: &CorsSection) -> Result<CorsLayer> {
    if cors.allows_any_origin() {
        return Ok(permissive_layer(cors.allow_credentials));
    }

    let origins = cors
        .allowed_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin.trim())
                .map_err(|e| Error::config(format!("invalid CORS origin '{}': {}", origin, e)))
        })
        .collect::<Result<Vec<_>>>()?;

    let layer = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(cors.allow_credentials);

    Ok(layer)
}

fn permissive_layer(allow_credentials: bool) -> CorsLayer {
    if allow_credentials {
        CorsLayer::new()
            .allow_origin(AllowOrigin::mirror_request())
            .allow_methods(AllowMethods::mirror_request())
            .allow_headers(AllowHeaders::mirror_request())
            .allow_credentials(true)
    } else {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

//! API handlers

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::api::AppState;
use crate::osrm::{RouteQuery, RouteSummary};

/// Liveness probe
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        message: "pong".to_string(),
    })
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub message: String,
}

/// Outcome of a route lookup.
///
/// Both variants are answered with `200 OK`; failures travel in the body as
/// `{"error": ..., "routes": []}` so clients only ever read `routes`.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum RouteOutcome {
    Found {
        routes: Vec<RouteSummary>,
    },
    Failed {
        error: String,
        routes: Vec<RouteSummary>,
    },
}

impl RouteOutcome {
    pub fn failed(error: impl ToString) -> Self {
        RouteOutcome::Failed {
            error: error.to_string(),
            routes: Vec::new(),
        }
    }
}

impl IntoResponse for RouteOutcome {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Look up driving routes between two coordinates
pub async fn routes(State(state): State<AppState>, Query(query): Query<RouteQuery>) -> RouteOutcome {
    match state.routes.routes(&query).await {
        Ok(routes) => {
            tracing::debug!(count = routes.len(), "Route lookup succeeded");
            RouteOutcome::Found { routes }
        }
        Err(err) => {
            tracing::warn!(
                error = %err,
                start_lat = query.start_lat,
                start_lng = query.start_lng,
                end_lat = query.end_lat,
                end_lng = query.end_lng,
                "Route lookup failed"
            );
            RouteOutcome::failed(err)
        }
    }
}

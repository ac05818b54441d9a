//! Request and response shapes for route lookups

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Error, Result};

/// Start and end coordinates of a lookup, in degrees
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct RouteQuery {
    pub start_lat: f64,
    pub start_lng: f64,
    pub end_lat: f64,
    pub end_lng: f64,
}

/// One route alternative as returned to clients.
///
/// Values are carried as raw JSON so they round-trip exactly as OSRM sent them
/// (integer distances stay integers, geometry may be a polyline string or GeoJSON).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RouteSummary {
    pub distance: Value,
    pub duration: Value,
    pub geometry: Value,
    pub steps: Vec<Value>,
}

/// Project an OSRM `route` response body into route summaries.
///
/// An object body without a `routes` key yields no routes; any other
/// non-object body is malformed. Each route must carry
/// `distance`, `duration` and `geometry`; steps come from the first leg when
/// `legs` is present and are empty otherwise.
pub fn project_routes(body: &Value) -> Result<Vec<RouteSummary>> {
    if !body.is_object() {
        return Err(Error::malformed("response body is not an object"));
    }

    let routes = match body.get("routes") {
        None => return Ok(Vec::new()),
        Some(Value::Array(routes)) => routes,
        Some(_) => return Err(Error::malformed("'routes' is not a list")),
    };

    routes
        .iter()
        .enumerate()
        .map(|(idx, route)| project_route(idx, route))
        .collect()
}

fn project_route(idx: usize, route: &Value) -> Result<RouteSummary> {
    if !route.is_object() {
        return Err(Error::malformed(format!("routes[{}] is not an object", idx)));
    }

    let field = |name: &str| {
        route
            .get(name)
            .cloned()
            .ok_or_else(|| Error::malformed(format!("routes[{}] is missing '{}'", idx, name)))
    };

    let steps = match route.get("legs") {
        None => Vec::new(),
        Some(legs) => {
            let first = legs
                .get(0)
                .ok_or_else(|| Error::malformed(format!("routes[{}].legs has no first leg", idx)))?;

            match first.get("steps") {
                Some(Value::Array(steps)) => steps.clone(),
                Some(_) => {
                    return Err(Error::malformed(format!(
                        "routes[{}].legs[0].steps is not a list",
                        idx
                    )))
                }
                None => {
                    return Err(Error::malformed(format!(
                        "routes[{}].legs[0] is missing 'steps'",
                        idx
                    )))
                }
            }
        }
    };

    Ok(RouteSummary {
        distance: field("distance")?,
        duration: field("duration")?,
        geometry: field("geometry")?,
        steps,
    })
}

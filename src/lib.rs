//! routeproxy - a small backend that proxies OSRM route lookups for mobile clients
//!
//! The server exposes:
//! - `GET /` and `GET /ping` liveness probes
//! - `GET /routes?start_lat=&start_lng=&end_lat=&end_lng=` driving route alternatives,
//!   reshaped from the upstream OSRM response

pub mod api;
pub mod config;
pub mod error;
pub mod osrm;

pub use error::{Error, Result};

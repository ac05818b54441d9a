//! reqwest-backed OSRM client

use async_trait::async_trait;
use serde_json::Value;
use url::Url;

use super::types::{project_routes, RouteQuery, RouteSummary};
use super::RouteProvider;
use crate::config::UpstreamSection;
use crate::{Error, Result};

/// Query string sent with every lookup: full geometry, alternatives,
/// turn-by-turn steps and per-segment duration/distance annotations.
const ROUTE_OPTIONS: &str =
    "overview=full&alternatives=true&steps=true&annotations=duration,distance";

#[derive(Clone)]
pub struct OsrmClient {
    inner: reqwest::Client,
    base: Url,
}

impl OsrmClient {
    pub fn new(base: Url, inner: reqwest::Client) -> Self {
        Self { inner, base }
    }

    /// Build a client from the `upstream` configuration section.
    pub fn from_config(config: &UpstreamSection) -> anyhow::Result<Self> {
        let base = config.base_url()?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self::new(base, builder.build()?))
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// URL of the driving-profile route lookup for `query`.
    ///
    /// OSRM takes coordinates as `lng,lat` pairs separated by `;`.
    pub fn route_url(&self, query: &RouteQuery) -> Result<Url> {
        let raw = format!(
            "{}/route/v1/driving/{},{};{},{}?{}",
            self.base.as_str().trim_end_matches('/'),
            query.start_lng,
            query.start_lat,
            query.end_lng,
            query.end_lat,
            ROUTE_OPTIONS,
        );

        Url::parse(&raw).map_err(|e| Error::config(format!("invalid route url '{}': {}", raw, e)))
    }
}

#[async_trait]
impl RouteProvider for OsrmClient {
    async fn routes(&self, query: &RouteQuery) -> Result<Vec<RouteSummary>> {
        let url = self.route_url(query)?;
        tracing::debug!(%url, "Requesting routes from upstream");

        let response = self.inner.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::UpstreamStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let bytes = response.bytes().await?;
        let body: Value = serde_json::from_slice(&bytes)?;

        project_routes(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> OsrmClient {
        OsrmClient::new(base.parse().unwrap(), reqwest::Client::new())
    }

    fn query() -> RouteQuery {
        RouteQuery {
            start_lat: 40.5,
            start_lng: -73.25,
            end_lat: 41.0,
            end_lng: -74.0,
        }
    }

    #[test]
    fn test_route_url_orders_lng_before_lat() {
        let url = client("http://router.project-osrm.org").route_url(&query()).unwrap();

        assert_eq!(url.host_str(), Some("router.project-osrm.org"));
        assert_eq!(url.path(), "/route/v1/driving/-73.25,40.5;-74,41");
        assert_eq!(
            url.query(),
            Some("overview=full&alternatives=true&steps=true&annotations=duration,distance")
        );
    }

    #[test]
    fn test_route_url_keeps_base_path_prefix() {
        let url = client("http://localhost:5000/osrm/").route_url(&query()).unwrap();

        assert_eq!(url.port(), Some(5000));
        assert_eq!(url.path(), "/osrm/route/v1/driving/-73.25,40.5;-74,41");
    }

    #[test]
    fn test_from_config_rejects_bad_scheme() {
        let section = UpstreamSection {
            base_url: "ftp://example.com".to_string(),
            timeout_secs: 1,
        };

        assert!(OsrmClient::from_config(&section).is_err());
    }
}

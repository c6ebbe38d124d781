//! MapmyIndia directions client.
//!
//! Request shape:
//!
//! ```text
//! GET {base}/directions/v1/{api_key}
//!     ?start={lng},{lat}&destination={lng},{lat}
//!     &alternatives=false&overview=full&geometries=geojson
//! ```
//!
//! Coordinates go out **longitude first**.  The response's
//! `routes[0].geometry` is returned as-is.

use std::fmt;
use std::time::Duration;

use serde::Deserialize;
use serde_json::value::RawValue;

use ct_core::GeoPoint;

use crate::{ProviderError, ProviderResult, RouteGeometry, RoutingProvider};

pub const DEFAULT_BASE_URL: &str = "https://apis.mapmyindia.com";

/// Upper bound on how much of an error body is kept for logging.
const MAX_ERROR_BODY: usize = 512;

// ── Response payload ──────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct DirectionsPayload<'a> {
    #[serde(borrow)]
    routes: Vec<&'a RawValue>,
}

#[derive(Deserialize)]
struct DirectionsRoute {
    #[serde(default)]
    geometry: Option<RouteGeometry>,
}

/// Extract the first route's geometry from a directions response body.
///
/// An empty `routes` array (or a first route without geometry) is
/// `Ok(None)`; a body without a `routes` array is malformed.
pub fn parse_route_response(bytes: &[u8]) -> ProviderResult<Option<RouteGeometry>> {
    let malformed = |e: serde_json::Error| ProviderError::Malformed(e.to_string());
    let payload: DirectionsPayload = serde_json::from_slice(bytes).map_err(malformed)?;
    let Some(first) = payload.routes.first() else {
        return Ok(None);
    };
    let route: DirectionsRoute = serde_json::from_str(first.get()).map_err(malformed)?;
    Ok(route.geometry)
}

// ── Provider ──────────────────────────────────────────────────────────────────

/// [`RoutingProvider`] backed by the MapmyIndia directions API.
#[derive(Clone)]
pub struct MapmyIndiaProvider {
    client:   reqwest::Client,
    base_url: String,
    api_key:  String,
}

impl MapmyIndiaProvider {
    /// Build a provider with its own HTTP client and a bounded request timeout.
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> ProviderResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ProviderError::transport)?;
        Ok(Self::with_client(client, api_key, base_url))
    }

    /// Build a provider around an existing client.
    pub fn with_client(
        client: reqwest::Client,
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            api_key:  api_key.into(),
        }
    }

    /// The full request URL for a route from `start` to `end`.
    pub fn request_url(&self, start: GeoPoint, end: GeoPoint) -> String {
        let [start_lng, start_lat] = start.lng_lat();
        let [end_lng, end_lat] = end.lng_lat();
        format!(
            "{}/directions/v1/{}?start={start_lng},{start_lat}&destination={end_lng},{end_lat}&alternatives=false&overview=full&geometries=geojson",
            self.base_url, self.api_key,
        )
    }
}

impl fmt::Debug for MapmyIndiaProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapmyIndiaProvider")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl RoutingProvider for MapmyIndiaProvider {
    async fn route(&self, start: GeoPoint, end: GeoPoint) -> ProviderResult<Option<RouteGeometry>> {
        let response = self
            .client
            .get(self.request_url(start, end))
            .send()
            .await
            .map_err(ProviderError::transport)?;

        let status = response.status();
        if !status.is_success() {
            let mut body = response.text().await.unwrap_or_default();
            if body.len() > MAX_ERROR_BODY {
                let cut = (0..=MAX_ERROR_BODY).rev().find(|i| body.is_char_boundary(*i)).unwrap_or(0);
                body.truncate(cut);
            }
            return Err(ProviderError::Status { status: status.as_u16(), body });
        }

        let bytes = response.bytes().await.map_err(ProviderError::transport)?;
        parse_route_response(&bytes)
    }
}

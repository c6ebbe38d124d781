//! Where the client gets its data from.

use std::collections::BTreeMap;
use std::future::Future;
use std::time::Duration;

use serde::Deserialize;
use serde_json::json;

use ct_core::{Building, GeoPoint, Vehicle, VehicleId};
use ct_routing::RouteResult;

use crate::{ClientError, ClientResult};

/// The vehicle mapping served by `GET /api/vehicles`.
pub type VehicleFeed = BTreeMap<VehicleId, Vehicle>;

/// Read side of the campus server, plus the on-demand route call.
pub trait FeedSource: Send + Sync + 'static {
    fn fetch_buildings(&self) -> impl Future<Output = ClientResult<Vec<Building>>> + Send;

    fn fetch_vehicles(&self) -> impl Future<Output = ClientResult<VehicleFeed>> + Send;

    fn optimize_route(
        &self,
        start: GeoPoint,
        end: GeoPoint,
    ) -> impl Future<Output = ClientResult<RouteResult>> + Send;
}

// ── HttpFeed ──────────────────────────────────────────────────────────────────

pub const DEFAULT_SERVER_URL: &str = "http://localhost:5002";

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// [`FeedSource`] talking JSON to a running `ct-server`.
#[derive(Clone, Debug)]
pub struct HttpFeed {
    client:   reqwest::Client,
    base_url: String,
}

impl HttpFeed {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> ClientResult<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self { client, base_url: base_url.into().trim_end_matches('/').to_owned() }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Turn a non-2xx answer into [`ClientError::Server`], keeping the
    /// server's `{"error": …}` message when there is one.
    async fn check(response: reqwest::Response) -> ClientResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&text)
            .map(|b| b.error)
            .unwrap_or(text);
        Err(ClientError::Server { status: status.as_u16(), message })
    }
}

impl FeedSource for HttpFeed {
    async fn fetch_buildings(&self) -> ClientResult<Vec<Building>> {
        let response = self.client.get(self.url("/api/buildings")).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    async fn fetch_vehicles(&self) -> ClientResult<VehicleFeed> {
        let response = self.client.get(self.url("/api/vehicles")).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    async fn optimize_route(&self, start: GeoPoint, end: GeoPoint) -> ClientResult<RouteResult> {
        let response = self
            .client
            .post(self.url("/api/routes/optimize"))
            .json(&json!({ "start": start, "end": end }))
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }
}

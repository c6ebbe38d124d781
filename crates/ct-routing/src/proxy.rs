//! `RouteProxy<P>` — the one entry point for route optimisation.

use tracing::{error, info};

use crate::{ProxyResult, RouteError, RouteRequest, RouteRequestBody, RouteResult, RoutingProvider};

/// Stateless translator between internal route requests and a
/// [`RoutingProvider`].
///
/// # Type parameter
///
/// `P` is fixed at compile time (e.g. [`MapmyIndiaProvider`](crate::MapmyIndiaProvider)
/// in the server, a stub in tests).
pub struct RouteProxy<P: RoutingProvider> {
    provider: P,
}

impl<P: RoutingProvider> RouteProxy<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Validate `body` and optimise the route it describes.
    pub async fn optimize_route(&self, body: &RouteRequestBody) -> ProxyResult<RouteResult> {
        let request = RouteRequest::validate(body)?;
        self.optimize(request).await
    }

    /// Optimise an already-validated request.
    pub async fn optimize(&self, request: RouteRequest) -> ProxyResult<RouteResult> {
        match self.provider.route(request.start, request.end).await {
            Ok(Some(geometry)) => Ok(RouteResult { geometry }),
            Ok(None) => {
                info!(start = %request.start, end = %request.end, "routing provider returned no route");
                Err(RouteError::NotFound)
            }
            Err(e) => {
                error!(start = %request.start, end = %request.end, error = %e, "routing provider request failed");
                Err(RouteError::Upstream(e))
            }
        }
    }
}

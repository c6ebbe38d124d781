//! Routing provider trait.
//!
//! # Pluggability
//!
//! [`RouteProxy`](crate::RouteProxy) only talks to a provider through
//! [`RoutingProvider`], so the MapmyIndia client can be swapped for another
//! vendor, or for a stub in tests, without touching validation or error
//! mapping.

use std::future::Future;

use ct_core::GeoPoint;

use crate::{ProviderResult, RouteGeometry};

/// An external directions service.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so one instance can serve every
/// request handler concurrently.
pub trait RoutingProvider: Send + Sync + 'static {
    /// Fetch the geometry of a single route from `start` to `end`.
    ///
    /// Returns `Ok(None)` when the provider answered but had no route.
    fn route(
        &self,
        start: GeoPoint,
        end: GeoPoint,
    ) -> impl Future<Output = ProviderResult<Option<RouteGeometry>>> + Send;
}

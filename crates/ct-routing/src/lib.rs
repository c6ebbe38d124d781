//! `ct-routing` — the route proxy.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                     |
//! |-----------------|--------------------------------------------------------------|
//! | [`request`]     | `RouteRequestBody` (raw JSON) → `RouteRequest` (validated)   |
//! | [`geometry`]    | `RouteGeometry`, `RouteResult`                               |
//! | [`provider`]    | `RoutingProvider` trait                                      |
//! | [`mapmyindia`]  | `MapmyIndiaProvider` — HTTP directions client                |
//! | [`proxy`]       | `RouteProxy<P>` — validate → call provider → normalise       |
//! | [`error`]       | `RouteError`, `ProviderError`                                |
//!
//! # Flow
//!
//! ```text
//! RouteRequestBody ─validate─▶ RouteRequest ─provider.route(start, end)─▶
//!     Ok(Some(geometry)) → RouteResult { geometry }     (passed through unchanged)
//!     Ok(None)           → RouteError::NotFound
//!     Err(provider err)  → logged in full, RouteError::Upstream (generic message)
//! ```
//!
//! Validation failures return before the provider is touched.  There is no
//! retry, no caching, and only the first route of a response is used; the
//! provider is asked for a single route (`alternatives=false`).

pub mod error;
pub mod geometry;
pub mod mapmyindia;
pub mod provider;
pub mod proxy;
pub mod request;


pub use error::{ProviderError, ProviderResult, ProxyResult, RouteError};
pub use geometry::{RouteGeometry, RouteResult};
pub use mapmyindia::{MapmyIndiaProvider, parse_route_response};
pub use provider::RoutingProvider;
pub use proxy::RouteProxy;
pub use request::{RouteRequest, RouteRequestBody};

//! `ct-client` — the live view side of the campus twin.
//!
//! # Modules
//!
//! | Module        | Contents                                                      |
//! |---------------|---------------------------------------------------------------|
//! | [`surface`]   | `MapSurface` capability, marker/polyline specs                |
//! | [`feed`]      | `FeedSource` trait, `HttpFeed` client for `ct-server`         |
//! | [`reconcile`] | `MarkerBindings`: one marker per vehicle, stale ones retired  |
//! | [`sync`]      | `SyncLoop` / `SyncHandle`: cancellable recurring poll         |
//! | [`client`]    | `CampusClient`: bootstrap sequence and the route action       |
//!
//! # Startup
//!
//! ```text
//!  surface ready ──► fetch buildings ──► draw building markers
//!                ──► fetch vehicles  ──► reconcile
//!                ──► SyncLoop::spawn (every interval: fetch ──► reconcile)
//! ```

pub mod client;
pub mod error;
pub mod feed;
pub mod reconcile;
pub mod surface;
pub mod sync;


pub use client::{CampusClient, DEFAULT_ROUTE_FROM, DEFAULT_ROUTE_TO, building_marker};
pub use error::{ClientError, ClientResult};
pub use feed::{DEFAULT_SERVER_URL, FeedSource, HttpFeed, VehicleFeed};
pub use reconcile::{MarkerBindings, ReconcileReport};
pub use surface::{
    InfoPopup, MapSurface, MarkerHandle, MarkerIcon, MarkerSpec, PolylineHandle, PolylineStyle,
    SharedSurface, shared,
};
pub use sync::{SyncConfig, SyncHandle, SyncLoop, SyncSummary};

//! The map-rendering capability the client draws onto.
//!
//! A vendor SDK, a test recorder, and the headless log renderer all sit
//! behind [`MapSurface`].  The client never inspects what the surface does
//! with a marker; it only keeps the returned [`MarkerHandle`] so the marker
//! can be moved or removed later.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use ct_core::GeoPoint;

/// Opaque reference to a marker owned by the surface.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkerHandle(pub u64);

/// Opaque reference to a polyline owned by the surface.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PolylineHandle(pub u64);

#[derive(Clone, Debug, PartialEq)]
pub enum MarkerIcon {
    /// Red fill whose opacity is `intensity` in `[0, 1]`.
    Building { intensity: f32 },
    Vehicle,
}

/// Popup opened when the marker is clicked.
#[derive(Clone, Debug, PartialEq)]
pub struct InfoPopup {
    pub title: String,
    pub body:  String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MarkerSpec {
    pub position: GeoPoint,
    pub icon:     MarkerIcon,
    pub popup:    Option<InfoPopup>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PolylineStyle {
    pub color:   String,
    pub opacity: f32,
    pub weight:  f32,
}

impl Default for PolylineStyle {
    fn default() -> Self {
        Self { color: "#007cbf".to_owned(), opacity: 1.0, weight: 5.0 }
    }
}

/// Minimal drawing surface.
pub trait MapSurface: Send + 'static {
    fn add_marker(&mut self, spec: MarkerSpec) -> MarkerHandle;

    /// Move an existing marker in place.
    fn update_marker(&mut self, handle: MarkerHandle, position: GeoPoint);

    fn remove_marker(&mut self, handle: MarkerHandle);

    /// Draw a line through `path`, given in lat/lng order.
    fn add_polyline(&mut self, path: &[GeoPoint], style: &PolylineStyle) -> PolylineHandle;

    /// Show a blocking user-facing message.
    fn alert(&mut self, message: &str);
}

/// A surface shared between the sync task and user actions.
pub type SharedSurface<S> = Arc<Mutex<S>>;

pub fn shared<S: MapSurface>(surface: S) -> SharedSurface<S> {
    Arc::new(Mutex::new(surface))
}

/// Lock a shared surface, recovering from poisoning.
pub(crate) fn lock<S>(surface: &Mutex<S>) -> MutexGuard<'_, S> {
    surface.lock().unwrap_or_else(PoisonError::into_inner)
}

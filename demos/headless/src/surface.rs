//! A `MapSurface` that draws into the log.

use std::collections::BTreeMap;

use ct_client::{MapSurface, MarkerHandle, MarkerIcon, MarkerSpec, PolylineHandle, PolylineStyle};
use ct_core::GeoPoint;
use tracing::{debug, info, warn};

#[derive(Default)]
pub struct LogSurface {
    next_marker:   u64,
    next_polyline: u64,
    markers:       BTreeMap<MarkerHandle, GeoPoint>,
}

impl LogSurface {
    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    pub fn position(&self, handle: MarkerHandle) -> Option<GeoPoint> {
        self.markers.get(&handle).copied()
    }
}

impl MapSurface for LogSurface {
    fn add_marker(&mut self, spec: MarkerSpec) -> MarkerHandle {
        self.next_marker += 1;
        let handle = MarkerHandle(self.next_marker);
        self.markers.insert(handle, spec.position);

        match (&spec.icon, &spec.popup) {
            (MarkerIcon::Building { intensity }, Some(popup)) => info!(
                marker = handle.0,
                at = %spec.position,
                intensity = *intensity,
                "building {} ({})", popup.title, popup.body
            ),
            (MarkerIcon::Building { intensity }, None) => {
                info!(marker = handle.0, at = %spec.position, intensity = *intensity, "building")
            }
            (MarkerIcon::Vehicle, _) => info!(marker = handle.0, at = %spec.position, "vehicle"),
        }
        handle
    }

    fn update_marker(&mut self, handle: MarkerHandle, position: GeoPoint) {
        match self.markers.get_mut(&handle) {
            Some(current) => {
                let moved_m = current.distance_m(position);
                *current = position;
                debug!(marker = handle.0, at = %position, moved_m, "marker moved");
            }
            None => warn!(marker = handle.0, "update for unknown marker"),
        }
    }

    fn remove_marker(&mut self, handle: MarkerHandle) {
        if self.markers.remove(&handle).is_some() {
            info!(marker = handle.0, "marker removed");
        }
    }

    fn add_polyline(&mut self, path: &[GeoPoint], style: &PolylineStyle) -> PolylineHandle {
        self.next_polyline += 1;
        let (Some(first), Some(last)) = (path.first(), path.last()) else {
            warn!("empty polyline");
            return PolylineHandle(self.next_polyline);
        };
        let length_m: f64 = path.windows(2).map(|w| w[0].distance_m(w[1])).sum();
        info!(
            points = path.len(),
            from = %first,
            to = %last,
            length_m = length_m.round(),
            color = %style.color,
            "route drawn"
        );
        PolylineHandle(self.next_polyline)
    }

    fn alert(&mut self, message: &str) {
        warn!("ALERT: {message}");
    }
}

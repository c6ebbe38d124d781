//! Bootstrap sequence and the user-facing route action.

use std::future::Future;
use std::sync::Arc;

use rustc_hash::FxHashMap;
use tracing::{error, info, warn};

use ct_core::{Building, BuildingId};
use ct_routing::RouteGeometry;

use crate::feed::FeedSource;
use crate::surface::{
    InfoPopup, MapSurface, MarkerHandle, MarkerIcon, MarkerSpec, PolylineHandle, PolylineStyle,
    SharedSurface, lock,
};
use crate::sync::{SyncConfig, SyncHandle, SyncLoop, SyncSummary};
use crate::{ClientError, ClientResult};

pub const DEFAULT_ROUTE_FROM: &str = "b1";
pub const DEFAULT_ROUTE_TO: &str = "b2";

pub const ROUTE_FAILED_ALERT: &str = "Could not generate route.";
pub const MISSING_BUILDINGS_ALERT: &str = "Could not find start/end buildings!";

/// Marker for one building: opacity from the carbon score, popup with name
/// and score.
pub fn building_marker(building: &Building) -> MarkerSpec {
    MarkerSpec {
        position: building.location,
        icon:     MarkerIcon::Building { intensity: building.carbon_intensity() },
        popup:    Some(InfoPopup {
            title: building.name.clone(),
            body:  format!("Carbon Score: {}", building.carbon_score),
        }),
    }
}

fn draw_buildings<S: MapSurface>(
    surface: &SharedSurface<S>,
    buildings: &[Building],
) -> FxHashMap<BuildingId, MarkerHandle> {
    let mut surface = lock(surface);
    buildings
        .iter()
        .map(|b| (b.id.clone(), surface.add_marker(building_marker(b))))
        .collect()
}

/// A bootstrapped client: static building markers drawn, vehicle sync running.
pub struct CampusClient<F: FeedSource, S: MapSurface> {
    feed:             Arc<F>,
    surface:          SharedSurface<S>,
    buildings:        Vec<Building>,
    building_markers: FxHashMap<BuildingId, MarkerHandle>,
    sync:             SyncHandle,
}

impl<F: FeedSource, S: MapSurface> CampusClient<F, S> {
    /// Wait for `surface_ready`, then draw buildings, draw the first vehicle
    /// snapshot, and start the recurring sync.
    ///
    /// Nothing is fetched before `surface_ready` resolves.  Fetch failures do
    /// not stop the client: a failed building fetch is logged and leaves the
    /// map without building markers (see [`reload_buildings`](Self::reload_buildings)),
    /// and a failed first vehicle fetch is logged and left to the sync loop.
    pub async fn bootstrap<R>(
        feed: Arc<F>,
        surface: SharedSurface<S>,
        surface_ready: R,
        config: &SyncConfig,
    ) -> Self
    where
        R: Future<Output = ()>,
    {
        surface_ready.await;
        info!("map surface ready");

        let (buildings, building_markers) = match feed.fetch_buildings().await {
            Ok(buildings) => {
                let markers = draw_buildings(&surface, &buildings);
                info!(count = buildings.len(), "building markers drawn");
                (buildings, markers)
            }
            Err(e) => {
                error!(error = %e, "building fetch failed");
                (Vec::new(), FxHashMap::default())
            }
        };

        let mut sync = SyncLoop::new(Arc::clone(&feed), Arc::clone(&surface), config);
        match sync.poll_once().await {
            Ok(report) => info!(vehicles = report.created, "vehicle markers drawn"),
            Err(e) => warn!(error = %e, "initial vehicle fetch failed"),
        }

        Self { feed, surface, buildings, building_markers, sync: sync.spawn() }
    }

    /// Fetch and draw the buildings if none are loaded yet.
    ///
    /// Returns the number of buildings on the map.  Markers already drawn are
    /// never re-created.
    pub async fn reload_buildings(&mut self) -> ClientResult<usize> {
        if self.buildings.is_empty() {
            let buildings = self.feed.fetch_buildings().await?;
            self.building_markers = draw_buildings(&self.surface, &buildings);
            self.buildings = buildings;
            info!(count = self.buildings.len(), "building markers drawn");
        }
        Ok(self.buildings.len())
    }

    pub fn buildings(&self) -> &[Building] {
        &self.buildings
    }

    pub fn building_marker(&self, id: &str) -> Option<MarkerHandle> {
        self.building_markers.get(id).copied()
    }

    /// Request a route between two buildings and draw it.
    ///
    /// Any failure is logged and shown to the user as an alert before being
    /// returned.
    pub async fn optimize_route(&self, from: &str, to: &str) -> ClientResult<RouteGeometry> {
        let (Some(start), Some(end)) = (self.find(from), self.find(to)) else {
            lock(&self.surface).alert(MISSING_BUILDINGS_ALERT);
            let missing = if self.find(from).is_none() { from } else { to };
            return Err(ClientError::UnknownBuilding(missing.to_owned()));
        };

        match self.feed.optimize_route(start.location, end.location).await {
            Ok(result) => {
                let handle = self.draw_route(&result.geometry);
                info!(from, to, points = result.geometry.coordinates().len(), ?handle, "route drawn");
                Ok(result.geometry)
            }
            Err(e) => {
                error!(from, to, error = %e, "route optimization failed");
                lock(&self.surface).alert(ROUTE_FAILED_ALERT);
                Err(e)
            }
        }
    }

    /// Stop the vehicle sync and wait for it to wind down.
    pub async fn shutdown(self) -> ClientResult<SyncSummary> {
        self.sync.stop().await
    }

    fn find(&self, id: &str) -> Option<&Building> {
        self.buildings.iter().find(|b| b.id.as_str() == id)
    }

    fn draw_route(&self, geometry: &RouteGeometry) -> PolylineHandle {
        let path: Vec<_> = geometry.points().collect();
        lock(&self.surface).add_polyline(&path, &PolylineStyle::default())
    }
}

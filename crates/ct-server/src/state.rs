use std::sync::Arc;

use ct_routing::{RouteProxy, RoutingProvider};
use ct_store::{
    EntityStore, EntityStoreBuilder, StoreResult, load_buildings_csv, load_vehicles_csv,
};
use tracing::info;

use crate::config::Config;

/// Shared handler state.  The store is also held by the simulator; the
/// handlers only ever read from it.
pub struct AppState<P: RoutingProvider> {
    pub store: Arc<EntityStore>,
    pub proxy: RouteProxy<P>,
}

impl<P: RoutingProvider> AppState<P> {
    pub fn new(store: Arc<EntityStore>, proxy: RouteProxy<P>) -> Arc<Self> {
        Arc::new(Self { store, proxy })
    }
}

/// Build the entity store from the configured CSV files, falling back to the
/// built-in seed for whichever file is not set.
pub fn build_store(config: &Config) -> StoreResult<EntityStore> {
    let mut builder = EntityStoreBuilder::campus_seed();

    if let Some(path) = &config.buildings_csv {
        let buildings = load_buildings_csv(path)?;
        info!(path = %path.display(), count = buildings.len(), "loaded buildings");
        builder = builder.clear_buildings().buildings(buildings);
    }
    if let Some(path) = &config.vehicles_csv {
        let vehicles = load_vehicles_csv(path)?;
        info!(path = %path.display(), count = vehicles.len(), "loaded vehicles");
        builder = builder.clear_vehicles().vehicles(vehicles);
    }

    builder.build()
}

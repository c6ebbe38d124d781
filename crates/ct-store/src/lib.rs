//! `ct-store` — the server-side source of truth for campus entities.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                    |
//! |--------------|-------------------------------------------------------------|
//! | [`store`]    | `EntityStore` — immutable buildings + lock-guarded vehicles  |
//! | [`builder`]  | `EntityStoreBuilder` (fluent construction, duplicate checks) |
//! | [`seed`]     | Built-in campus seed data                                   |
//! | [`loader`]   | CSV loaders for buildings and vehicles                      |
//! | [`error`]    | `StoreError`, `StoreResult<T>`                              |
//!
//! # Consistency model
//!
//! Buildings are frozen at build time and read without locking.  Vehicles
//! sit behind a single `RwLock`; every mutation happens inside one write
//! guard, so a reader sees either all of a delta batch or none of it.
//!
//! The store is constructed explicitly and shared as `Arc<EntityStore>`
//! between the HTTP handlers and the simulator.

pub mod builder;
pub mod error;
pub mod loader;
pub mod seed;
pub mod store;


pub use builder::EntityStoreBuilder;
pub use error::{StoreError, StoreResult};
pub use loader::{load_buildings_csv, load_buildings_reader, load_vehicles_csv, load_vehicles_reader};
pub use seed::{seed_buildings, seed_vehicles};
pub use store::{EntityStore, VehicleDelta, VehicleSnapshot};

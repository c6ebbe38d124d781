use std::sync::Arc;

use axum::{Json, body::Bytes, extract::State};
use ct_core::Building;
use ct_routing::{RouteRequestBody, RouteResult, RoutingProvider};
use ct_store::VehicleSnapshot;
use serde_json::{Value, json};

use crate::{error::AppError, state::AppState};

pub async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn buildings_handler<P: RoutingProvider>(
    State(state): State<Arc<AppState<P>>>,
) -> Json<Vec<Building>> {
    Json(state.store.buildings().to_vec())
}

pub async fn vehicles_handler<P: RoutingProvider>(
    State(state): State<Arc<AppState<P>>>,
) -> Json<VehicleSnapshot> {
    Json(state.store.vehicles())
}

pub async fn optimize_handler<P: RoutingProvider>(
    State(state): State<Arc<AppState<P>>>,
    body: Bytes,
) -> Result<Json<RouteResult>, AppError> {
    let body = RouteRequestBody::from_slice(&body)?;
    let result = state.proxy.optimize_route(&body).await?;
    Ok(Json(result))
}

pub async fn fallback_handler() -> AppError {
    AppError::UnknownEndpoint
}

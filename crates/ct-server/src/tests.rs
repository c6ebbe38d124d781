//! In-process tests for the HTTP facade.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header::CONTENT_TYPE},
};
use ct_core::GeoPoint;
use ct_routing::{ProviderError, ProviderResult, RouteGeometry, RouteProxy, RoutingProvider};
use ct_store::EntityStoreBuilder;
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::{build_router, config::Config, state::AppState};

// ── Helpers ───────────────────────────────────────────────────────────────────

#[derive(Clone)]
enum Stub {
    Echo(RouteGeometry),
    NoRoute,
    Broken,
}

impl RoutingProvider for Stub {
    async fn route(&self, _start: GeoPoint, _end: GeoPoint) -> ProviderResult<Option<RouteGeometry>> {
        match self {
            Stub::Echo(g) => Ok(Some(g.clone())),
            Stub::NoRoute => Ok(None),
            Stub::Broken => Err(ProviderError::Malformed("upstream exploded: key=abc123".into())),
        }
    }
}

fn app(stub: Stub) -> Router {
    let store = Arc::new(EntityStoreBuilder::campus_seed().build().unwrap());
    build_router(AppState::new(store, RouteProxy::new(stub)))
}

fn campus_stub() -> Stub {
    Stub::Echo(RouteGeometry::from_coordinates(vec![
        [77.8966, 29.8649],
        [77.8970, 29.8660],
    ]))
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).unwrap() };
    (status, value)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap()
}

// ── Entity endpoints ──────────────────────────────────────────────────────────

#[cfg(test)]
mod entities {
    use super::*;

    #[tokio::test]
    async fn buildings_are_the_three_seeded() {
        let (status, body) = send(app(campus_stub()), get("/api/buildings")).await;
        assert_eq!(status, StatusCode::OK);

        let list = body.as_array().unwrap();
        let ids: Vec<&str> = list.iter().map(|b| b["id"].as_str().unwrap()).collect();
        let scores: Vec<u64> = list.iter().map(|b| b["carbonScore"].as_u64().unwrap()).collect();
        assert_eq!(ids, vec!["b1", "b2", "b3"]);
        assert_eq!(scores, vec![85, 60, 92]);
        assert_eq!(list[0]["location"], json!({"lat": 29.8649, "lng": 77.8966}));
    }

    #[tokio::test]
    async fn buildings_are_stable_between_calls() {
        let router = app(campus_stub());
        let (_, first) = send(router.clone(), get("/api/buildings")).await;
        let (_, second) = send(router, get("/api/buildings")).await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn vehicles_are_keyed_by_id() {
        let (status, body) = send(app(campus_stub()), get("/api/vehicles")).await;
        assert_eq!(status, StatusCode::OK);

        let map = body.as_object().unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map["v1"]["name"], "Shuttle 1");
        assert_eq!(map["v2"]["location"], json!({"lat": 29.8670, "lng": 77.8955}));
    }

    #[tokio::test]
    async fn vehicles_reflect_store_mutation() {
        let store = Arc::new(EntityStoreBuilder::campus_seed().build().unwrap());
        let router = build_router(AppState::new(Arc::clone(&store), RouteProxy::new(campus_stub())));
        store.apply_vehicle_delta("v1", 0.001, 0.0).unwrap();

        let (_, body) = send(router, get("/api/vehicles")).await;
        let lat = body["v1"]["location"]["lat"].as_f64().unwrap();
        assert!((lat - 29.8665).abs() < 1e-9);
    }

    #[tokio::test]
    async fn health_and_unknown_paths() {
        let (status, body) = send(app(campus_stub()), get("/api/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");

        let (status, body) = send(app(campus_stub()), get("/api/nope")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["error"].is_string());
    }
}

// ── Route optimisation ────────────────────────────────────────────────────────

#[cfg(test)]
mod optimize {
    use super::*;

    const CAMPUS_REQUEST: &str = r#"{
        "start": {"lat": 29.8649, "lng": 77.8966},
        "end":   {"lat": 29.8660, "lng": 77.8970}
    }"#;

    #[tokio::test]
    async fn echoes_provider_geometry() {
        let (status, body) =
            send(app(campus_stub()), post_json("/api/routes/optimize", CAMPUS_REQUEST)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"geometry": {"coordinates": [[77.8966, 29.8649], [77.8970, 29.8660]]}})
        );
    }

    #[tokio::test]
    async fn provider_geometry_bytes_untouched() {
        let geometry = r#"{"type":"LineString","coordinates":[[77.8966,29.8649,268.5],[77.8970,29.8660,270.0]],"bbox":[77.8966,29.8649,77.897,29.866]}"#;
        let stub = Stub::Echo(RouteGeometry::from_json(geometry).unwrap());

        let response = app(stub)
            .oneshot(post_json("/api/routes/optimize", CAMPUS_REQUEST))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(
            std::str::from_utf8(&bytes).unwrap(),
            format!(r#"{{"geometry":{geometry}}}"#)
        );
    }

    #[tokio::test]
    async fn missing_end_is_400() {
        let (status, body) = send(
            app(campus_stub()),
            post_json("/api/routes/optimize", r#"{"start": {"lat": 1, "lng": 2}}"#),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Start and end points are required.");
    }

    #[tokio::test]
    async fn non_json_body_is_400() {
        let (status, body) =
            send(app(campus_stub()), post_json("/api/routes/optimize", "start=1")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn no_route_is_404() {
        let (status, body) =
            send(app(Stub::NoRoute), post_json("/api/routes/optimize", CAMPUS_REQUEST)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Route not found.");
    }

    #[tokio::test]
    async fn provider_failure_is_500_without_detail() {
        let (status, body) =
            send(app(Stub::Broken), post_json("/api/routes/optimize", CAMPUS_REQUEST)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let message = body["error"].as_str().unwrap();
        assert!(!message.contains("abc123"));
        assert!(!message.contains("exploded"));
    }

    #[tokio::test]
    async fn cors_preflight_allowed() {
        let request = Request::builder()
            .method("OPTIONS")
            .uri("/api/routes/optimize")
            .header("origin", "http://localhost:5173")
            .header("access-control-request-method", "POST")
            .body(Body::empty())
            .unwrap();
        let response = app(campus_stub()).oneshot(request).await.unwrap();
        assert!(response.status().is_success());
        assert_eq!(
            response.headers()["access-control-allow-origin"],
            "*"
        );
    }
}

// ── Configuration ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod config {
    use std::time::Duration;

    use super::*;
    use crate::config::ConfigError;

    fn load(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let env: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        Config::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn defaults_with_only_key() {
        let config = load(&[("MAPMYINDIA_API_KEY", "k")]).unwrap();
        assert_eq!(config.port, 5002);
        assert_eq!(config.routing_base_url, "https://apis.mapmyindia.com");
        assert_eq!(config.routing_timeout, Duration::from_secs(10));
        assert_eq!(config.sim.tick_interval, Duration::from_millis(3_000));
        assert_eq!(config.sim.max_offset_deg, 0.000_05);
        assert_eq!(config.sim.seed, None);
        assert!(config.buildings_csv.is_none());
    }

    #[test]
    fn api_key_required() {
        assert_eq!(load(&[]).unwrap_err(), ConfigError::Missing("MAPMYINDIA_API_KEY"));
        assert!(load(&[("MAPMYINDIA_API_KEY", "  ")]).is_err());
    }

    #[test]
    fn overrides_parsed() {
        let config = load(&[
            ("MAPMYINDIA_API_KEY", "k"),
            ("PORT", "8080"),
            ("SIM_TICK_MS", "500"),
            ("SIM_SEED", "42"),
            ("CAMPUS_VEHICLES_CSV", "/tmp/v.csv"),
        ])
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.sim.tick_interval, Duration::from_millis(500));
        assert_eq!(config.sim.seed, Some(42));
        assert_eq!(config.vehicles_csv.as_deref(), Some(std::path::Path::new("/tmp/v.csv")));
    }

    #[test]
    fn invalid_port_reported() {
        let err = load(&[("MAPMYINDIA_API_KEY", "k"), ("PORT", "eighty")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "PORT", .. }));
    }

    #[test]
    fn debug_redacts_key() {
        let config = load(&[("MAPMYINDIA_API_KEY", "super-secret")]).unwrap();
        assert!(!format!("{config:?}").contains("super-secret"));
    }
}

// ── Store construction ────────────────────────────────────────────────────────

#[cfg(test)]
mod store {
    use std::io::Write;

    use super::*;
    use crate::state::build_store;

    fn base_config() -> Config {
        Config::from_lookup(|key| (key == "MAPMYINDIA_API_KEY").then(|| "k".to_owned())).unwrap()
    }

    #[test]
    fn seed_used_without_csv() {
        let store = build_store(&base_config()).unwrap();
        assert_eq!(store.buildings().len(), 3);
        assert_eq!(store.vehicle_count(), 2);
    }

    #[test]
    fn vehicles_csv_replaces_seed_fleet() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "id,name,lat,lng").unwrap();
        writeln!(file, "v9,Electric Cart,29.8661,77.8962").unwrap();

        let mut config = base_config();
        config.vehicles_csv = Some(file.path().to_path_buf());

        let store = build_store(&config).unwrap();
        assert_eq!(store.vehicle_count(), 1);
        assert!(store.vehicle("v9").is_some());
        assert_eq!(store.buildings().len(), 3);
    }

    #[test]
    fn unreadable_csv_is_an_error() {
        let mut config = base_config();
        config.buildings_csv = Some("/definitely/not/here.csv".into());
        assert!(build_store(&config).is_err());
    }
}

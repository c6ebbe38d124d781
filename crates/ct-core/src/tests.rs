//! Unit tests for ct-core primitives.

#[cfg(test)]
mod ids {
    use std::collections::BTreeMap;

    use crate::{BuildingId, VehicleId};

    #[test]
    fn display_is_raw_string() {
        assert_eq!(VehicleId::new("v1").to_string(), "v1");
        assert_eq!(BuildingId::from("b3").as_str(), "b3");
    }

    #[test]
    fn map_lookup_by_str() {
        let mut map = BTreeMap::new();
        map.insert(VehicleId::new("v2"), 2);
        map.insert(VehicleId::new("v1"), 1);
        assert_eq!(map.get("v1"), Some(&1));
        let order: Vec<&str> = map.keys().map(VehicleId::as_str).collect();
        assert_eq!(order, vec!["v1", "v2"]);
    }

    #[test]
    fn serialises_transparently() {
        let json = serde_json::to_string(&VehicleId::new("v9")).unwrap();
        assert_eq!(json, "\"v9\"");
    }
}

#[cfg(test)]
mod geo {
    use crate::{CtError, GeoPoint};

    #[test]
    fn zero_distance() {
        let p = GeoPoint::new(29.8649, 77.8966);
        assert!(p.distance_m(p) < 0.01);
    }

    #[test]
    fn one_degree_latitude() {
        let a = GeoPoint::new(29.0, 77.0);
        let b = GeoPoint::new(30.0, 77.0);
        let d = a.distance_m(b);
        assert!((d - 111_195.0).abs() < 500.0, "got {d}");
    }

    #[test]
    fn lng_lat_swaps_axes() {
        let p = GeoPoint::new(29.8649, 77.8966);
        assert_eq!(p.lng_lat(), [77.8966, 29.8649]);
        assert_eq!(GeoPoint::from_lng_lat([77.8966, 29.8649]), p);
    }

    #[test]
    fn checked_rejects_bad_values() {
        assert!(GeoPoint::checked(29.8, 77.9).is_ok());
        assert!(matches!(
            GeoPoint::checked(f64::NAN, 77.9),
            Err(CtError::InvalidCoordinate { .. })
        ));
        assert!(GeoPoint::checked(91.0, 0.0).is_err());
        assert!(GeoPoint::checked(0.0, -180.5).is_err());
    }

    #[test]
    fn bbox_check() {
        let center = GeoPoint::new(29.8649, 77.8966);
        assert!(center.offset(0.00004, -0.00004).within_bbox(center, 0.00005));
        assert!(!center.offset(0.0001, 0.0).within_bbox(center, 0.00005));
    }
}

#[cfg(test)]
mod entity {
    use crate::{Building, CtError, GeoPoint, Vehicle};

    #[test]
    fn building_wire_format_is_camel_case() {
        let b = Building::new("b1", "Main Building", GeoPoint::new(29.8649, 77.8966), 85).unwrap();
        let json = serde_json::to_value(&b).unwrap();
        assert_eq!(json["carbonScore"], 85);
        assert_eq!(json["location"]["lat"], 29.8649);
        assert_eq!(json["location"]["lng"], 77.8966);
        assert_eq!(json["id"], "b1");
    }

    #[test]
    fn carbon_score_bounds() {
        let p = GeoPoint::new(0.0, 0.0);
        assert!(Building::new("b", "x", p, 100).is_ok());
        assert!(matches!(
            Building::new("b", "x", p, 101),
            Err(CtError::CarbonScoreOutOfRange { score: 101, .. })
        ));
        assert!(Building::new("b", "x", p, 70_000).is_err());
    }

    #[test]
    fn out_of_range_score_rejected_on_deserialise() {
        let ok = r#"{"id":"b1","name":"Main Building","location":{"lat":29.8649,"lng":77.8966},"carbonScore":85}"#;
        let b: Building = serde_json::from_str(ok).unwrap();
        assert_eq!(b.carbon_score, 85);

        let bad = ok.replace("85", "150");
        assert!(serde_json::from_str::<Building>(&bad).is_err());
    }

    #[test]
    fn carbon_intensity_is_fraction() {
        let b = Building::new("b2", "Library", GeoPoint::new(0.0, 0.0), 60).unwrap();
        assert!((b.carbon_intensity() - 0.6).abs() < 1e-6);
    }

    #[test]
    fn vehicle_roundtrips_through_json() {
        let v = Vehicle::new("v1", "Shuttle 1", GeoPoint::new(29.8655, 77.8960));
        let back: Vehicle = serde_json::from_str(&serde_json::to_string(&v).unwrap()).unwrap();
        assert_eq!(back, v);
    }
}

#[cfg(test)]
mod time {
    use crate::Tick;

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(Tick(4).to_string(), "T4");
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            let a = r1.symmetric(1.0);
            let b = r2.symmetric(1.0);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn symmetric_in_bounds() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            let v = rng.symmetric(0.00005);
            assert!((-0.00005..=0.00005).contains(&v));
        }
        assert_eq!(rng.symmetric(0.0), 0.0);
    }
}

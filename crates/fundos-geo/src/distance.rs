use fundos_core::models::Coordinates;
use geo::Point;

/// Mean Earth radius used for straight-line distances
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometres (haversine)
pub fn distance_km(a: &Coordinates, b: &Coordinates) -> f64 {
    haversine_km(to_point(a), to_point(b))
}

/// Distance from an optional origin to optional coordinates.
///
/// `None` when either side is missing or the result is not finite.
pub fn distance_between(origin: Option<&Coordinates>, target: Option<&Coordinates>) -> Option<f64> {
    let km = distance_km(origin?, target?);
    km.is_finite().then_some(km)
}

/// Convert to a `geo` point (x = longitude, y = latitude)
pub fn to_point(coords: &Coordinates) -> Point<f64> {
    Point::new(coords.lon, coords.lat)
}

fn haversine_km(p1: Point<f64>, p2: Point<f64>) -> f64 {
    let lat1 = p1.y().to_radians();
    let lat2 = p2.y().to_radians();
    let d_lat = (p2.y() - p1.y()).to_radians();
    let d_lon = (p2.x() - p1.x()).to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    // rounding can push near-antipodal points just past 1
    let a = a.min(1.0);
    EARTH_RADIUS_KM * 2.0 * a.sqrt().atan2((1.0 - a).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn coords(lat: f64, lon: f64) -> Coordinates {
        Coordinates { lat, lon }
    }

    #[test]
    fn test_identical_points_are_zero_apart() {
        assert!(distance_km(&coords(0.0, 0.0), &coords(0.0, 0.0)).abs() < 1e-9);
        let salazar = coords(-12.1296, -77.03);
        assert!(distance_km(&salazar, &salazar).abs() < 1e-9);
    }

    #[test]
    fn test_known_distance() {
        // Parque Salazar (Miraflores) to Fundo San Vicente (Lurín), ~22 km
        let km = distance_km(&coords(-12.1296, -77.03), &coords(-12.2653, -76.877));
        assert!((km - 22.4).abs() < 1.0, "got {}", km);

        // One degree of latitude
        let km = distance_km(&coords(0.0, 0.0), &coords(1.0, 0.0));
        assert!((km - 111.19).abs() < 0.01, "got {}", km);
    }

    #[test]
    fn test_distance_between_handles_missing_sides() {
        let a = coords(-12.1, -77.0);
        assert!(distance_between(None, Some(&a)).is_none());
        assert!(distance_between(Some(&a), None).is_none());
        assert_eq!(distance_between(Some(&a), Some(&a)), Some(0.0));
    }

    proptest! {
        #[test]
        fn prop_distance_to_self_is_zero(lat in -90.0f64..=90.0, lon in -180.0f64..=180.0) {
            let p = coords(lat, lon);
            prop_assert!(distance_km(&p, &p).abs() < 1e-9);
        }

        #[test]
        fn prop_distance_is_symmetric(
            lat1 in -90.0f64..=90.0, lon1 in -180.0f64..=180.0,
            lat2 in -90.0f64..=90.0, lon2 in -180.0f64..=180.0,
        ) {
            let a = coords(lat1, lon1);
            let b = coords(lat2, lon2);
            prop_assert!((distance_km(&a, &b) - distance_km(&b, &a)).abs() < 1e-9);
        }

        #[test]
        fn prop_distance_is_bounded(
            lat1 in -90.0f64..=90.0, lon1 in -180.0f64..=180.0,
            lat2 in -90.0f64..=90.0, lon2 in -180.0f64..=180.0,
        ) {
            let km = distance_km(&coords(lat1, lon1), &coords(lat2, lon2));
            prop_assert!(km >= 0.0);
            prop_assert!(km <= std::f64::consts::PI * EARTH_RADIUS_KM + 1e-6);
        }
    }
}

//! Property tests for round-trip and matrix/point-wise consistency.

use geoanchor::{Geodetic, LocalFrame, geodetic_to_local, local_to_geodetic};
use proptest::prelude::*;

fn close(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}

/// Latitudes away from the poles, where the iterative inverse is
/// well-conditioned.
fn latitudes() -> impl Strategy<Value = f64> {
    -89.0..89.0f64
}

/// Longitudes beyond the canonical range, exercising the
/// no-normalization policy.
fn longitudes() -> impl Strategy<Value = f64> {
    -720.0..720.0f64
}

fn altitudes() -> impl Strategy<Value = f64> {
    -5_000.0..9_000.0f64
}

proptest! {
    #[test]
    fn geodetic_ecef_round_trip(lat in latitudes(), lon in longitudes(), alt in altitudes()) {
        let g = Geodetic::new(lat, lon, alt);
        let rt = g.to_ecef().unwrap().to_geodetic().unwrap();

        prop_assert!(close(rt.lat_deg, g.lat_deg, 1e-6));
        prop_assert!(close(rt.alt_m, g.alt_m, 1e-3));
        // The solver reports longitude in (-180, 180]; compare modulo 360.
        let lon_diff = (rt.lon_deg - g.lon_deg).rem_euclid(360.0);
        prop_assert!(lon_diff < 1e-6 || lon_diff > 360.0 - 1e-6);
    }

    #[test]
    fn local_round_trip(
        lat in latitudes(),
        lon in longitudes(),
        alt in altitudes(),
        // Offsets within a few hundred km of the origin.
        dlat in -2.0..2.0f64,
        dlon in -2.0..2.0f64,
        dalt in -1_000.0..1_000.0f64,
    ) {
        let origin = Geodetic::new(lat, lon, alt);
        let point = Geodetic::new((lat + dlat).clamp(-89.0, 89.0), lon + dlon, alt + dalt);

        let local = geodetic_to_local(point, origin).unwrap();
        let rt = local_to_geodetic(local, origin).unwrap();

        prop_assert!(close(rt.lat_deg, point.lat_deg, 1e-6));
        let lon_diff = (rt.lon_deg - point.lon_deg).rem_euclid(360.0);
        prop_assert!(lon_diff < 1e-6 || lon_diff > 360.0 - 1e-6);
        prop_assert!(close(rt.alt_m, point.alt_m, 1e-3));
    }

    #[test]
    fn origin_maps_to_zero(lat in latitudes(), lon in longitudes(), alt in altitudes()) {
        let origin = Geodetic::new(lat, lon, alt);
        let local = geodetic_to_local(origin, origin).unwrap();

        prop_assert!(close(local.east, 0.0, 1e-9));
        prop_assert!(close(local.up, 0.0, 1e-9));
        prop_assert!(close(local.south, 0.0, 1e-9));
    }

    #[test]
    fn matrix_agrees_with_pointwise(
        lat in latitudes(),
        lon in longitudes(),
        dlat in -2.0..2.0f64,
        dlon in -2.0..2.0f64,
    ) {
        let origin = Geodetic::new(lat, lon, 0.0);
        let frame = LocalFrame::new(origin).unwrap();
        let point = Geodetic::new((lat + dlat).clamp(-89.0, 89.0), lon + dlon, 0.0)
            .to_ecef()
            .unwrap();

        let pointwise = frame.ecef_to_local(point);

        let offset = point.to_dvec3() - frame.origin_ecef().to_dvec3();
        let via_matrix = frame.rotation_matrix().transform_vector3(offset);

        prop_assert!(close(via_matrix.x, pointwise.east, 1e-6));
        prop_assert!(close(via_matrix.y, pointwise.up, 1e-6));
        prop_assert!(close(via_matrix.z, pointwise.south, 1e-6));
    }
}

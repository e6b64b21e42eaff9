//! WGS84 ellipsoid constants.

/// WGS84 semi-major axis in meters.
pub const WGS84_A: f64 = 6_378_137.0;

/// WGS84 semi-minor axis in meters.
pub const WGS84_B: f64 = 6_356_752.314_245;

/// WGS84 first eccentricity squared, `1 - b²/a²`.
pub const WGS84_E2: f64 = 1.0 - (WGS84_B * WGS84_B) / (WGS84_A * WGS84_A);

/// Prime vertical radius of curvature `N` at a given latitude.
///
/// Takes `sin(lat)` rather than the latitude itself since callers
/// always have it on hand already.
#[must_use]
pub fn prime_vertical_radius(sin_lat: f64) -> f64 {
    WGS84_A / (1.0 - WGS84_E2 * sin_lat * sin_lat).sqrt()
}

//! Geodetic coordinates and the closed-form conversion to ECEF.

use crate::ecef::Ecef;
use crate::ellipsoid::{WGS84_E2, prime_vertical_radius};
use crate::error::{GeoError, GeoResult};

/// A position on the WGS84 ellipsoid in degrees and meters.
///
/// Longitude is kept exactly as the caller supplied it and is never
/// normalized into [-180, 180]; the conversions below are periodic in
/// longitude so any real value is valid.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Geodetic {
    /// Latitude in degrees, must lie in [-90, 90].
    pub lat_deg: f64,
    /// Longitude in degrees, any real value.
    pub lon_deg: f64,
    /// Height above the ellipsoid in meters (not mean sea level).
    pub alt_m: f64,
}

impl Geodetic {
    /// Creates a new `Geodetic`.
    #[must_use]
    pub fn new(lat_deg: f64, lon_deg: f64, alt_m: f64) -> Self {
        Self {
            lat_deg,
            lon_deg,
            alt_m,
        }
    }

    /// Convert to ECEF coordinates.
    ///
    /// # Errors
    ///
    /// Returns an error if the latitude is outside [-90, 90] or any
    /// component is NaN or infinite. Valid inputs never fail.
    pub fn to_ecef(&self) -> GeoResult<Ecef> {
        self.validate()?;

        let lat = self.lat_deg.to_radians();
        let lon = self.lon_deg.to_radians();
        let (sin_lat, cos_lat) = lat.sin_cos();
        let (sin_lon, cos_lon) = lon.sin_cos();

        let n = prime_vertical_radius(sin_lat);
        Ok(Ecef::new(
            (n + self.alt_m) * cos_lat * cos_lon,
            (n + self.alt_m) * cos_lat * sin_lon,
            (n * (1.0 - WGS84_E2) + self.alt_m) * sin_lat,
        ))
    }

    pub(crate) fn validate(&self) -> GeoResult<()> {
        if !(self.lat_deg.is_finite() && self.lon_deg.is_finite() && self.alt_m.is_finite()) {
            return Err(GeoError::NonFinite {
                context: "geodetic coordinate",
            });
        }
        if !(-90.0..=90.0).contains(&self.lat_deg) {
            return Err(GeoError::LatitudeOutOfRange {
                lat_deg: self.lat_deg,
            });
        }
        Ok(())
    }
}

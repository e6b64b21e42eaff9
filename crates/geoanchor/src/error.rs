//! Error types for coordinate conversions.

use std::fmt;

use crate::Geodetic;

/// Errors that can occur during coordinate conversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeoError {
    /// Latitude outside the valid [-90, 90] degree range.
    LatitudeOutOfRange { lat_deg: f64 },
    /// An input component is NaN or infinite.
    NonFinite { context: &'static str },
    /// The point lies close enough to the polar axis that the iterative
    /// geodetic solver is ill-conditioned. `best_effort` holds the
    /// closed-form polar solution.
    ReducedPrecision {
        /// Distance from the polar axis in meters.
        axis_distance_m: f64,
        /// Closed-form polar solution (lat = ±90°, lon = 0, alt = |z| - b).
        best_effort: Geodetic,
    },
}

impl fmt::Display for GeoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LatitudeOutOfRange { lat_deg } => {
                write!(f, "latitude {lat_deg} degrees outside [-90, 90]")
            }
            Self::NonFinite { context } => {
                write!(f, "non-finite input in {context}")
            }
            Self::ReducedPrecision {
                axis_distance_m, ..
            } => {
                write!(
                    f,
                    "point within {axis_distance_m} m of the polar axis, \
                     geodetic solve has reduced precision"
                )
            }
        }
    }
}

impl std::error::Error for GeoError {}

/// Result type for coordinate conversions.
pub type GeoResult<T> = Result<T, GeoError>;

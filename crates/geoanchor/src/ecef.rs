//! ECEF coordinates and the iterative inverse to geodetic.

use glam::DVec3;

use crate::ellipsoid::{WGS84_B, WGS84_E2, prime_vertical_radius};
use crate::error::{GeoError, GeoResult};
use crate::geodetic::Geodetic;

/// Number of refinement rounds used by [`Ecef::to_geodetic`].
///
/// The solver runs exactly this many rounds with no convergence check,
/// which keeps it deterministic and bounded in time. WGS84's eccentricity
/// is small enough that 10 rounds over-converges for any point away from
/// the polar axis. See [`Ecef::to_geodetic_converged`] for a
/// convergence-checked alternative.
pub const GEODETIC_SOLVER_ITERATIONS: usize = 10;

/// Distance from the polar axis (meters) below which the inverse solve
/// is reported as [`GeoError::ReducedPrecision`].
pub const POLAR_AXIS_EPSILON_M: f64 = 1e-3;

const CONVERGENCE_EPSILON_RAD: f64 = 1e-14;
const CONVERGED_MAX_ITERATIONS: usize = 64;

/// A position in the Earth-Centered, Earth-Fixed frame, in meters.
///
/// Origin at Earth's center of mass, Z toward the north pole, X toward
/// the intersection of the equator and the prime meridian.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ecef {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Ecef {
    /// Creates a new `Ecef`.
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// The position as a `glam` vector.
    #[must_use]
    pub fn to_dvec3(self) -> DVec3 {
        DVec3::new(self.x, self.y, self.z)
    }

    /// Convert to geodetic coordinates.
    ///
    /// Longitude is exact (`atan2`, reported in (-180, 180]); latitude and
    /// altitude are refined over [`GEODETIC_SOLVER_ITERATIONS`] fixed
    /// rounds.
    ///
    /// # Errors
    ///
    /// - [`GeoError::NonFinite`] if any component is NaN or infinite.
    /// - [`GeoError::ReducedPrecision`] if the point lies within
    ///   [`POLAR_AXIS_EPSILON_M`] of the polar axis, where the altitude
    ///   step divides by `cos(lat) ≈ 0`. The error carries the closed-form
    ///   polar solution, which is exact on the axis itself.
    pub fn to_geodetic(&self) -> GeoResult<Geodetic> {
        self.solve_geodetic(GEODETIC_SOLVER_ITERATIONS, 0.0)
    }

    /// Convergence-checked variant of [`Ecef::to_geodetic`].
    ///
    /// Iterates until the latitude update falls below 1e-14 rad, capped at
    /// 64 rounds. Offered as an alternative, not a replacement: the fixed
    /// 10-round solver remains the primary, reference-matching behavior.
    pub fn to_geodetic_converged(&self) -> GeoResult<Geodetic> {
        self.solve_geodetic(CONVERGED_MAX_ITERATIONS, CONVERGENCE_EPSILON_RAD)
    }

    fn solve_geodetic(&self, max_rounds: usize, epsilon_rad: f64) -> GeoResult<Geodetic> {
        if !(self.x.is_finite() && self.y.is_finite() && self.z.is_finite()) {
            return Err(GeoError::NonFinite {
                context: "ecef coordinate",
            });
        }

        let p = self.x.hypot(self.y);
        if p < POLAR_AXIS_EPSILON_M {
            let best_effort = self.polar_closed_form();
            tracing::debug!(
                axis_distance_m = p,
                "near-polar-axis geodetic solve, falling back to closed form"
            );
            return Err(GeoError::ReducedPrecision {
                axis_distance_m: p,
                best_effort,
            });
        }

        let lon_deg = self.y.atan2(self.x).to_degrees();

        let mut lat = self.z.atan2(p * (1.0 - WGS84_E2));
        let mut alt = 0.0;
        for _ in 0..max_rounds {
            let sin_lat = lat.sin();
            let n = prime_vertical_radius(sin_lat);
            alt = p / lat.cos() - n;
            let next = self.z.atan2(p * (1.0 - WGS84_E2 * n / (n + alt)));
            let delta = (next - lat).abs();
            lat = next;
            if delta < epsilon_rad {
                break;
            }
        }

        Ok(Geodetic::new(lat.to_degrees(), lon_deg, alt))
    }

    /// Exact solution for a point on the polar axis; near-exact just off it.
    fn polar_closed_form(&self) -> Geodetic {
        Geodetic::new(90.0_f64.copysign(self.z), 0.0, self.z.abs() - WGS84_B)
    }
}

impl From<DVec3> for Ecef {
    fn from(v: DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Ecef> for DVec3 {
    fn from(e: Ecef) -> Self {
        e.to_dvec3()
    }
}

//! WGS84 coordinate conversions for placing georeferenced 3D content.
//!
//! This crate converts between three coordinate representations used to
//! position content relative to a chosen local origin:
//!
//! - **Geodetic**: latitude, longitude (degrees) and height above the
//!   WGS84 ellipsoid (meters)
//! - **ECEF**: Earth-Centered, Earth-Fixed Cartesian meters
//! - **Local Y-up ENU**: the East-North-Up tangent plane at the origin,
//!   remapped to renderer axes (X = east, Y = up, Z = south, north = -Z)
//!
//! ECEF is the hub: geodetic and local coordinates both round-trip
//! through it. All operations are pure and stateless; they are safe to
//! call concurrently and never block or perform I/O.
//!
//! # Design principles
//!
//! - **One shared basis**: point-wise conversions and the one-shot
//!   ECEF → local matrix are derived from the same [`LocalFrame`], so the
//!   two paths can never disagree on direction conventions
//! - **Deterministic inverse**: the ECEF → geodetic solver runs a fixed
//!   number of rounds ([`GEODETIC_SOLVER_ITERATIONS`]) with no
//!   convergence check
//! - **Explicit failure**: out-of-range latitude and non-finite inputs
//!   are errors, never clamped; the near-polar-axis inverse surfaces a
//!   [`GeoError::ReducedPrecision`] condition instead of silently
//!   degrading
//!
//! # Example
//!
//! ```
//! use geoanchor::{Geodetic, LocalFrame};
//!
//! # fn main() -> Result<(), geoanchor::GeoError> {
//! let origin = Geodetic::new(35.6762, 139.6503, 0.0);
//! let frame = LocalFrame::new(origin)?;
//!
//! // Place a nearby point in the origin's local Y-up frame.
//! let point = Geodetic::new(35.6800, 139.6600, 30.0);
//! let local = frame.ecef_to_local(point.to_ecef()?);
//! assert!(local.north() > 0.0 && local.east > 0.0);
//!
//! // Or transform an entire ECEF subtree with one matrix.
//! let matrix = frame.ecef_to_local_matrix();
//! # let _ = matrix;
//! # Ok(())
//! # }
//! ```

pub mod ecef;
pub mod ellipsoid;
mod error;
pub mod frame;
mod geodetic;

pub use ecef::{Ecef, GEODETIC_SOLVER_ITERATIONS, POLAR_AXIS_EPSILON_M};
pub use ellipsoid::{WGS84_A, WGS84_B, WGS84_E2};
pub use error::{GeoError, GeoResult};
pub use frame::{LocalEnu, LocalFrame, geodetic_to_local, local_to_geodetic};
pub use geodetic::Geodetic;

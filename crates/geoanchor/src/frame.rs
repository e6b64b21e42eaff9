//! Local Y-up ENU frames anchored at a geodetic origin.
//!
//! The local frame is the East-North-Up tangent plane at the origin,
//! permuted into the Y-up convention used by renderers: X = east,
//! Y = up, Z = south (so north = -Z). The permutation is applied at
//! every boundary of this module; no operation ever returns a raw
//! east-north-up triple.

use glam::{DMat3, DMat4, DVec3};

use crate::ecef::Ecef;
use crate::error::GeoResult;
use crate::geodetic::Geodetic;

/// A position in a local Y-up ENU frame, in meters.
///
/// Axis order matches the renderer convention: x = east, y = up,
/// z = south. A point due north of the origin has a negative `south`
/// component.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocalEnu {
    pub east: f64,
    pub up: f64,
    pub south: f64,
}

impl LocalEnu {
    /// Creates a new `LocalEnu`.
    #[must_use]
    pub fn new(east: f64, up: f64, south: f64) -> Self {
        Self { east, up, south }
    }

    /// Distance north of the origin (`-south`).
    #[must_use]
    pub fn north(&self) -> f64 {
        -self.south
    }

    /// The position as a `glam` vector in (east, up, south) order.
    #[must_use]
    pub fn to_dvec3(self) -> DVec3 {
        DVec3::new(self.east, self.up, self.south)
    }
}

impl From<DVec3> for LocalEnu {
    fn from(v: DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<LocalEnu> for DVec3 {
    fn from(p: LocalEnu) -> Self {
        p.to_dvec3()
    }
}

/// The tangent-plane basis at a geodetic origin.
///
/// Holds the origin's ECEF position and the rotation mapping
/// ECEF-relative vectors into Y-up ENU axes. The rotation depends only
/// on the origin's latitude and longitude; altitude only shifts the
/// origin point. Both the point-wise conversions and the one-shot
/// matrix builders below go through this one basis, so the two paths
/// cannot drift apart.
///
/// A `LocalFrame` is cheap to build and is valid only for the origin it
/// was built from; rebuild it whenever the origin changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalFrame {
    origin_ecef: Ecef,
    rotation: DMat3,
}

impl LocalFrame {
    /// Build the frame for the given origin.
    ///
    /// # Errors
    ///
    /// Returns an error if the origin latitude is outside [-90, 90] or
    /// any component is NaN or infinite.
    pub fn new(origin: Geodetic) -> GeoResult<Self> {
        let origin_ecef = origin.to_ecef()?;

        let lat = origin.lat_deg.to_radians();
        let lon = origin.lon_deg.to_radians();
        let (sin_lat, cos_lat) = lat.sin_cos();
        let (sin_lon, cos_lon) = lon.sin_cos();

        let east = DVec3::new(-sin_lon, cos_lon, 0.0);
        let north = DVec3::new(-sin_lat * cos_lon, -sin_lat * sin_lon, cos_lat);
        let up = DVec3::new(cos_lat * cos_lon, cos_lat * sin_lon, sin_lat);

        // Rows of the ECEF → local rotation, in Y-up order (east, up, south).
        let rotation = DMat3::from_cols(east, up, -north).transpose();

        Ok(Self {
            origin_ecef,
            rotation,
        })
    }

    /// Build the frame for an origin on the ellipsoid surface (altitude 0).
    pub fn from_lat_lon(lat_deg: f64, lon_deg: f64) -> GeoResult<Self> {
        Self::new(Geodetic::new(lat_deg, lon_deg, 0.0))
    }

    /// The origin's ECEF position.
    #[must_use]
    pub fn origin_ecef(&self) -> Ecef {
        self.origin_ecef
    }

    /// Convert an ECEF point into this frame.
    #[must_use]
    pub fn ecef_to_local(&self, point: Ecef) -> LocalEnu {
        let offset = point.to_dvec3() - self.origin_ecef.to_dvec3();
        LocalEnu::from(self.rotation * offset)
    }

    /// Convert a local point back to ECEF.
    #[must_use]
    pub fn local_to_ecef(&self, point: LocalEnu) -> Ecef {
        let offset = self.rotation.transpose() * point.to_dvec3();
        Ecef::from(self.origin_ecef.to_dvec3() + offset)
    }

    /// The frame rotation as a 4x4 homogeneous matrix, translation-free.
    ///
    /// Maps ECEF-relative vectors (point minus [`LocalFrame::origin_ecef`])
    /// into local Y-up coordinates. The caller is expected to handle the
    /// translation to the origin itself, e.g. by positioning the
    /// transformed subtree; use [`LocalFrame::ecef_to_local_matrix`] for
    /// the translation folded in.
    ///
    /// `glam` matrices are column-major; apply with
    /// [`DMat4::transform_vector3`] or [`DMat4::transform_point3`].
    #[must_use]
    pub fn rotation_matrix(&self) -> DMat4 {
        DMat4::from_mat3(self.rotation)
    }

    /// The full ECEF → local Y-up transform, translation folded in.
    ///
    /// Applying this to any ECEF point yields its Y-up local coordinate
    /// relative to the origin, matching [`LocalFrame::ecef_to_local`]
    /// exactly. Intended for the one-shot case of placing an entire
    /// hierarchy of ECEF content under a single transform node: apply it
    /// once to the container, not per point.
    ///
    /// The matrix is immutable; rebuild the frame if the origin changes.
    #[must_use]
    pub fn ecef_to_local_matrix(&self) -> DMat4 {
        self.rotation_matrix() * DMat4::from_translation(-self.origin_ecef.to_dvec3())
    }
}

/// Convert a geodetic point into the Y-up ENU frame at `origin`.
///
/// # Errors
///
/// Returns an error if either coordinate has an out-of-range latitude or
/// non-finite components.
pub fn geodetic_to_local(point: Geodetic, origin: Geodetic) -> GeoResult<LocalEnu> {
    let frame = LocalFrame::new(origin)?;
    Ok(frame.ecef_to_local(point.to_ecef()?))
}

/// Convert a point in the Y-up ENU frame at `origin` back to geodetic.
///
/// Round-trips through the iterative ECEF → geodetic solver and inherits
/// its precision and near-polar-axis caveats.
///
/// # Errors
///
/// Returns an error on invalid origin, non-finite input, or a result
/// point within [`crate::POLAR_AXIS_EPSILON_M`] of the polar axis.
pub fn local_to_geodetic(point: LocalEnu, origin: Geodetic) -> GeoResult<Geodetic> {
    let frame = LocalFrame::new(origin)?;
    frame.local_to_ecef(point).to_geodetic()
}

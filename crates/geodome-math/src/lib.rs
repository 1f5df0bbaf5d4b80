#![warn(missing_docs)]

//! Math primitives for the geodome sphere-sampling kernel.
//!
//! Thin wrappers around nalgebra providing the handful of operations the
//! tessellation and spiral crates need beyond plain vector arithmetic:
//! scalar triple product, rotation about the z-axis, checked unit
//! normalization, and conversion to angular (longitude/latitude)
//! coordinates in degrees.

use thiserror::Error;

/// A vector (or point) in 3D space.
pub type Vec3 = nalgebra::Vector3<f64>;

/// Errors from math operations on degenerate input.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    /// Unit normalization or angular conversion of a zero-magnitude vector.
    #[error("cannot normalize a zero-magnitude vector")]
    DegenerateVector,
}

/// Result type for math operations.
pub type Result<T> = std::result::Result<T, MathError>;

/// Scalar triple product `a · (b × c)`.
pub fn triple(a: Vec3, b: Vec3, c: Vec3) -> f64 {
    a.dot(&b.cross(&c))
}

/// Rotate `v` about the z-axis by `ang` radians.
///
/// Decomposes the xy-components into polar form, advances the polar
/// angle, and leaves z untouched.
pub fn rot_z(v: Vec3, ang: f64) -> Vec3 {
    let r = v.x.hypot(v.y);
    let a = v.y.atan2(v.x) + ang;
    Vec3::new(r * a.cos(), r * a.sin(), v.z)
}

/// Unit-normalize `v`, rejecting zero-magnitude input.
pub fn unit(v: Vec3) -> Result<Vec3> {
    let m = v.norm();
    if m == 0.0 {
        return Err(MathError::DegenerateVector);
    }
    Ok(v / m)
}

/// Convert a Cartesian point to `(longitude, latitude)` in degrees.
///
/// Longitude is `atan2(y, x)` wrapped to `[0, 360)`; latitude is the
/// elevation from the xy-plane. The input need not be unit length but
/// must be nonzero.
pub fn lonlat_degrees(v: Vec3) -> Result<(f64, f64)> {
    let u = unit(v)?;
    let mut lon = u.y.atan2(u.x).to_degrees();
    if lon < 0.0 {
        lon += 360.0;
    }
    let lat = u.z.clamp(-1.0, 1.0).asin().to_degrees();
    Ok((lon, lat))
}

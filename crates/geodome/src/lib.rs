#![warn(missing_docs)]

//! High-level facade for the geodome sphere-sampling kernel.
//!
//! Provides the [`PointSet`] type and the two entry points:
//! [`subdivide`] for geodesic polyhedron subdivision and [`spiral`] for
//! the spiral point distribution.
//!
//! # Example
//!
//! ```
//! use geodome::{subdivide, SubdivisionParams};
//!
//! // Class I icosahedron at frequency 1: just the 12 seed vertices.
//! let points = subdivide(&SubdivisionParams::default()).unwrap();
//! assert_eq!(points.len(), 12);
//! ```

pub use geodome_math;
pub use geodome_primitives;
pub use geodome_spiral;
pub use geodome_tessellate;

pub use geodome_math::{lonlat_degrees, MathError, Vec3};
pub use geodome_primitives::{BasePolyhedron, Polyhedron};
pub use geodome_spiral::{SpiralError, SpiralParams};
pub use geodome_tessellate::{
    ClassPattern, EdgeDivision, SubdivisionParams, TessellateError,
};

use thiserror::Error;

/// Errors from the high-level entry points.
#[derive(Error, Debug)]
pub enum GeodomeError {
    /// Subdivision failed.
    #[error(transparent)]
    Tessellate(#[from] TessellateError),
    /// Spiral generation failed.
    #[error(transparent)]
    Spiral(#[from] SpiralError),
    /// Angular conversion of a degenerate point.
    #[error(transparent)]
    Math(#[from] MathError),
}

/// Result type for the high-level entry points.
pub type Result<T> = std::result::Result<T, GeodomeError>;

/// An ordered set of sample points on (or near) the unit sphere.
#[derive(Debug, Clone, PartialEq)]
pub struct PointSet {
    points: Vec<Vec3>,
}

impl PointSet {
    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The points, in generation order.
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// Consume the set, yielding the points.
    pub fn into_points(self) -> Vec<Vec3> {
        self.points
    }

    /// Convert every point to `(longitude, latitude)` in degrees.
    pub fn to_lonlat(&self) -> Result<Vec<(f64, f64)>> {
        self.points
            .iter()
            .map(|&p| Ok(lonlat_degrees(p)?))
            .collect()
    }
}

/// Subdivide a base polyhedron into an evenly distributed point set.
pub fn subdivide(params: &SubdivisionParams) -> Result<PointSet> {
    Ok(PointSet {
        points: geodome_tessellate::subdivide(params)?,
    })
}

/// Generate an evenly spaced spiral point set on the unit sphere.
pub fn spiral(params: &SpiralParams) -> Result<PointSet> {
    Ok(PointSet {
        points: geodome_spiral::spiral(params)?,
    })
}

#![warn(missing_docs)]

//! Spiral point distribution on the unit sphere.
//!
//! Places points along a single continuous path that wraps the polar
//! axis a fixed number of turns while descending from the north pole to
//! the south pole, spaced so consecutive points sit a constant chord
//! distance apart. Each step angle is found by bisecting the chord
//! distance function.

use geodome_math::Vec3;
use std::f64::consts::PI;
use thiserror::Error;

/// Default chord-distance tolerance for the bisection search. The value
/// is load-bearing for termination of the march and must stay small
/// relative to the chord target.
pub const DISTANCE_TOLERANCE: f64 = 1e-5;

/// Bisection iteration cap. A bracket of width at most π shrinks below
/// any tolerance ≥ 1e-15 well within this many halvings.
const MAX_BISECT_ITERS: u32 = 64;

/// Errors from spiral generation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SpiralError {
    /// The requested turns/spacing cannot produce a spiral on the unit
    /// sphere.
    #[error("invalid spiral parameters: {0}")]
    InvalidParams(String),

    /// The bisection search failed to reach the target spacing.
    #[error("bisection failed to reach the target spacing after {iterations} iterations")]
    Convergence {
        /// Iterations performed before giving up.
        iterations: u32,
    },
}

/// Result type for spiral operations.
pub type Result<T> = std::result::Result<T, SpiralError>;

/// Parameters for spiral generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpiralParams {
    /// Number of times the path wraps around the polar axis.
    pub turns: f64,
    /// Explicit spacing between consecutive points; the chord target is
    /// twice this value. When `None` the target is derived from `turns`
    /// as half the distance between adjacent turns on the unit sphere.
    pub point_spacing: Option<f64>,
    /// Chord-distance tolerance for accepting a point.
    pub tolerance: f64,
}

impl Default for SpiralParams {
    /// Ten turns, derived spacing, default tolerance.
    fn default() -> Self {
        Self {
            turns: 10.0,
            point_spacing: None,
            tolerance: DISTANCE_TOLERANCE,
        }
    }
}

/// Map a polar angle to its point on the spiral.
///
/// `a` sweeps from 0 at the north pole `(0, 1, 0)` to π at the south
/// pole while the path wraps `turns` times about the y-axis.
pub fn angle_to_point(a: f64, turns: f64) -> Vec3 {
    let a2 = 2.0 * a * turns;
    let r = a.sin();
    Vec3::new(r * a2.sin(), a.cos(), r * a2.cos())
}

/// Generate the spiral point sequence, pole to pole.
pub fn spiral(params: &SpiralParams) -> Result<Vec<Vec3>> {
    if !params.turns.is_finite() {
        return Err(SpiralError::InvalidParams("turns must be finite".into()));
    }
    if !(params.tolerance > 0.0) {
        return Err(SpiralError::InvalidParams(
            "tolerance must be positive".into(),
        ));
    }
    let rad = match params.point_spacing {
        Some(s) => {
            if !(s > 0.0) {
                return Err(SpiralError::InvalidParams(
                    "point spacing must be positive".into(),
                ));
            }
            2.0 * s
        }
        None => {
            if params.turns < 2.0 {
                return Err(SpiralError::InvalidParams(
                    "deriving a spacing needs at least 2 turns".into(),
                ));
            }
            // Half the distance between adjacent turns on the unit
            // sphere.
            2.0 * (1.0 - (PI / (params.turns - 1.0)).cos()).sqrt()
        }
    };
    if rad >= 2.0 {
        return Err(SpiralError::InvalidParams(
            "chord target reaches the unit-sphere diameter".into(),
        ));
    }

    let mut points = vec![Vec3::new(0.0, 1.0, 0.0)];
    let mut cur = points[0];
    let mut a0 = 0.0;
    let delt = (rad / 2.0).atan() / 10.0;
    // Start the trial just inside the first step so the initial bracket
    // is never empty.
    let mut a1 = a0 + 0.0999999 * delt;
    while a1 < PI {
        if (cur - angle_to_point(a1, params.turns)).norm() > rad {
            a0 = bisect(a1 - delt, a1, a0, rad, params)?;
            cur = angle_to_point(a0, params.turns);
            points.push(cur);
            a1 = a0;
        }
        a1 += delt;
    }
    Ok(points)
}

/// Find the angle in `(lo, hi)` whose chord distance from the point at
/// `a0` matches `rad` within tolerance.
fn bisect(mut lo: f64, mut hi: f64, a0: f64, rad: f64, params: &SpiralParams) -> Result<f64> {
    let origin = angle_to_point(a0, params.turns);
    for _ in 0..MAX_BISECT_ITERS {
        let mid = lo + (hi - lo) / 2.0;
        let dist = (angle_to_point(mid, params.turns) - origin).norm();
        if (dist - rad).abs() < params.tolerance {
            return Ok(mid);
        }
        if dist > rad {
            hi = mid;
        } else {
            lo = mid;
        }
    }
    Err(SpiralError::Convergence {
        iterations: MAX_BISECT_ITERS,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn starts_at_north_pole() {
        let points = spiral(&SpiralParams::default()).unwrap();
        assert_eq!(points[0], Vec3::new(0.0, 1.0, 0.0));
        assert!(points.len() > 2);
    }

    #[test]
    fn consecutive_chords_match_target() {
        let params = SpiralParams::default();
        let rad = 2.0 * (1.0 - (PI / (params.turns - 1.0)).cos()).sqrt();
        let points = spiral(&params).unwrap();
        for pair in points.windows(2) {
            let dist = (pair[1] - pair[0]).norm();
            assert_abs_diff_eq!(dist, rad, epsilon = params.tolerance);
        }
    }

    #[test]
    fn descends_to_the_south_pole() {
        let points = spiral(&SpiralParams::default()).unwrap();
        let last = points.last().unwrap();
        assert!(last.y < -0.85, "last y = {}", last.y);
        // Monotone descent in polar angle means monotone descent in y.
        for pair in points.windows(2) {
            assert!(pair[1].y < pair[0].y);
        }
    }

    #[test]
    fn all_points_stay_on_the_unit_sphere() {
        let points = spiral(&SpiralParams::default()).unwrap();
        for p in &points {
            assert_abs_diff_eq!(p.norm(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn explicit_spacing_controls_the_chord() {
        let params = SpiralParams {
            turns: 10.0,
            point_spacing: Some(0.05),
            tolerance: DISTANCE_TOLERANCE,
        };
        let points = spiral(&params).unwrap();
        for pair in points.windows(2) {
            assert_abs_diff_eq!((pair[1] - pair[0]).norm(), 0.1, epsilon = params.tolerance);
        }
    }

    #[test]
    fn more_turns_place_more_points() {
        let few = spiral(&SpiralParams {
            turns: 5.0,
            ..SpiralParams::default()
        })
        .unwrap();
        let many = spiral(&SpiralParams {
            turns: 20.0,
            ..SpiralParams::default()
        })
        .unwrap();
        assert!(many.len() > few.len());
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(matches!(
            spiral(&SpiralParams {
                turns: 1.0,
                ..SpiralParams::default()
            }),
            Err(SpiralError::InvalidParams(_))
        ));
        assert!(matches!(
            spiral(&SpiralParams {
                point_spacing: Some(0.0),
                ..SpiralParams::default()
            }),
            Err(SpiralError::InvalidParams(_))
        ));
        // Spacing of 1.0 means a chord target of 2.0, the full diameter.
        assert!(matches!(
            spiral(&SpiralParams {
                point_spacing: Some(1.0),
                ..SpiralParams::default()
            }),
            Err(SpiralError::InvalidParams(_))
        ));
    }

    #[test]
    fn angle_map_hits_both_poles() {
        assert_abs_diff_eq!(angle_to_point(0.0, 10.0).y, 1.0, epsilon = 1e-15);
        assert_abs_diff_eq!(angle_to_point(PI, 10.0).y, -1.0, epsilon = 1e-15);
    }
}

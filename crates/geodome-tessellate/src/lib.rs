#![warn(missing_docs)]

//! Class-pattern geodesic subdivision for the geodome kernel.
//!
//! Subdivides the triangular faces of a base polyhedron into a dense,
//! evenly distributed point set by:
//! 1. Building the class-pattern lattice once (shared by all faces)
//! 2. Interpolating each lattice site onto each face, with equal-chord
//!    or equal-angle spacing along the face edges
//! 3. Skipping sites owned by a seed vertex or by an adjacent face, so
//!    shared points are emitted exactly once
//! 4. Optionally projecting everything onto the circumscribed sphere

pub mod error;
pub mod grid;

pub use error::{Result, TessellateError};
pub use grid::{ClassPattern, Grid, GridEntry};

use geodome_math::{unit, Vec3};
use geodome_primitives::{BasePolyhedron, Polyhedron};
use std::f64::consts::FRAC_PI_2;

/// How intermediate points are spaced along a face edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgeDivision {
    /// Equal chord (Euclidean) steps along the edge.
    #[default]
    EqualLength,
    /// Steps that subtend equal great-circle angles once projected onto
    /// the circumscribed sphere.
    EqualAngle,
}

/// Parameters controlling a subdivision run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubdivisionParams {
    /// Base shape to subdivide.
    pub base: BasePolyhedron,
    /// Face-division class pattern.
    pub pattern: ClassPattern,
    /// Extra whole-pattern repeats; multiplies the frequency.
    pub repeats: u32,
    /// Keep points on the flat faces instead of projecting them onto
    /// the circumscribed sphere.
    pub flat_faced: bool,
    /// Edge spacing mode.
    pub division: EdgeDivision,
}

impl Default for SubdivisionParams {
    /// Class I icosahedron, projected, equal-length division.
    fn default() -> Self {
        Self {
            base: BasePolyhedron::Icosahedron,
            pattern: ClassPattern::default(),
            repeats: 1,
            flat_faced: false,
            division: EdgeDivision::EqualLength,
        }
    }
}

/// Subdivide a base polyhedron into a point set.
///
/// Seed vertices come first, then the per-face points in face order and
/// grid scan order. Every valid input yields a complete sequence; no
/// partial output is returned on error.
pub fn subdivide(params: &SubdivisionParams) -> Result<Vec<Vec3>> {
    if params.repeats == 0 {
        return Err(TessellateError::InvalidClassPattern(
            "repeats multiplier must be at least 1".into(),
        ));
    }
    let poly = Polyhedron::new(params.base);
    let freq = params.pattern.frequency(params.repeats);
    let grid = Grid::new(freq, &params.pattern);

    let mut points = poly.verts.clone();
    for face in &poly.faces {
        // The lone triangle has no neighbours, so it owns all three of
        // its edges; a closed shape defers shared edges to the adjacent
        // face with the smaller index triple.
        let face_order = if params.base == BasePolyhedron::Triangle {
            [0, 0, 0]
        } else {
            *face
        };
        let f_verts = [poly.verts[face[0]], poly.verts[face[1]], poly.verts[face[2]]];
        face_points(&grid, f_verts, face_order, params.division, &mut points)?;
    }

    if !params.flat_faced {
        for p in points.iter_mut() {
            *p = unit(*p)?;
        }
    }
    Ok(points)
}

/// Displacement vectors from an edge's start vertex: `freq + 1` entries,
/// entry 0 the zero vector and entry `freq` the full edge.
fn edge_displacements(
    start: Vec3,
    end: Vec3,
    freq: u32,
    division: EdgeDivision,
) -> Result<Vec<Vec3>> {
    let edge = end - start;
    let f = f64::from(freq);
    let mut out = Vec::with_capacity(freq as usize + 1);
    out.push(Vec3::zeros());
    match division {
        EdgeDivision::EqualLength => {
            for i in 1..=freq {
                out.push(edge * (f64::from(i) / f));
            }
        }
        EdgeDivision::EqualAngle => {
            // The edge is a chord of the circumscribed great circle
            // subtending `ang`; the i-th displacement lands where the
            // radial projection of the chord point sits at angle
            // `i·ang/freq` from the start vertex.
            let ang = 2.0 * (edge.norm() / 2.0).asin();
            let dir = unit(edge)?;
            for i in 1..=freq {
                let t = f64::from(i) * ang / f;
                let len = t.sin() / (FRAC_PI_2 + ang / 2.0 - t).sin();
                out.push(dir * len);
            }
        }
    }
    Ok(out)
}

/// Interpolate the grid onto one face, appending the newly generated
/// points (seed vertices are never re-emitted).
fn face_points(
    grid: &Grid,
    f_verts: [Vec3; 3],
    face_order: [usize; 3],
    division: EdgeDivision,
    out: &mut Vec<Vec3>,
) -> Result<()> {
    let freq = grid.freq();
    // Displacement tables for the directed edges f0→f1, f1→f2, f2→f0.
    let v = [
        edge_displacements(f_verts[0], f_verts[1], freq, division)?,
        edge_displacements(f_verts[1], f_verts[2], freq, division)?,
        edge_displacements(f_verts[2], f_verts[0], freq, division)?,
    ];

    for e in grid.entries() {
        let (x, y) = (e.x, e.y);
        let on_x = x == 0;
        let on_y = y == 0;
        let on_z = x + y == freq;
        // Two incidences mean the site is a seed vertex.
        if usize::from(on_x) + usize::from(on_y) + usize::from(on_z) == 2 {
            continue;
        }
        // Each shared edge is emitted by exactly one of its two faces.
        if (on_x && face_order[2] > face_order[0])
            || (on_y && face_order[0] > face_order[1])
            || (on_z && face_order[1] > face_order[2])
        {
            continue;
        }

        let n = [x as usize, y as usize, (freq - x - y) as usize];
        let fq = freq as usize;
        let anchor = |k: usize| -> Vec3 {
            let prev = (k + 2) % 3;
            let next = (k + 1) % 3;
            f_verts[k] + v[k][n[k]] + v[prev][fq - n[next]] - v[prev][fq]
        };
        let pt = match division {
            EdgeDivision::EqualLength => anchor(0),
            // Average the three symmetric anchors so no single edge's
            // parameterization dominates interior points.
            EdgeDivision::EqualAngle => (anchor(0) + anchor(1) + anchor(2)) / 3.0,
        };
        out.push(pt);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn params(base: BasePolyhedron, m: u32, n: u32, reps: u32) -> SubdivisionParams {
        SubdivisionParams {
            base,
            pattern: ClassPattern::new(m, n, reps).unwrap(),
            ..SubdivisionParams::default()
        }
    }

    /// Closed-form geodesic vertex count: V + E·(f−1) + F·(f−1)(f−2)/2.
    fn class_i_count(verts: usize, edges: usize, faces: usize, f: usize) -> usize {
        verts + edges * (f - 1) + faces * (f - 1) * (f - 2) / 2
    }

    #[test]
    fn freq_one_returns_seed_vertices() {
        for base in [
            BasePolyhedron::Tetrahedron,
            BasePolyhedron::Octahedron,
            BasePolyhedron::Icosahedron,
            BasePolyhedron::Triangle,
        ] {
            let seeds = Polyhedron::new(base).verts.len();
            let points = subdivide(&params(base, 1, 0, 1)).unwrap();
            assert_eq!(points.len(), seeds, "{base:?}");
        }
    }

    #[test]
    fn icosa_class_i_matches_closed_form() {
        for f in 2..=5usize {
            let points = subdivide(&params(BasePolyhedron::Icosahedron, 1, 0, f as u32)).unwrap();
            assert_eq!(points.len(), class_i_count(12, 30, 20, f));
            assert_eq!(points.len(), 10 * f * f + 2);
        }
    }

    #[test]
    fn octa_and_tetra_class_i_counts() {
        let octa = subdivide(&params(BasePolyhedron::Octahedron, 1, 0, 3)).unwrap();
        assert_eq!(octa.len(), class_i_count(6, 12, 8, 3));
        let tetra = subdivide(&params(BasePolyhedron::Tetrahedron, 1, 0, 3)).unwrap();
        assert_eq!(tetra.len(), class_i_count(4, 6, 4, 3));
    }

    #[test]
    fn repeats_multiplier_scales_frequency() {
        let via_pattern = subdivide(&params(BasePolyhedron::Icosahedron, 1, 0, 4)).unwrap();
        let mut p = params(BasePolyhedron::Icosahedron, 1, 0, 2);
        p.repeats = 2;
        let via_multiplier = subdivide(&p).unwrap();
        assert_eq!(via_pattern.len(), via_multiplier.len());
    }

    #[test]
    fn class_ii_icosa_has_one_interior_point_per_face() {
        // (1,1) at freq 3 yields no edge sites, so the only new points
        // are the 20 face centers.
        let points = subdivide(&params(BasePolyhedron::Icosahedron, 1, 1, 1)).unwrap();
        assert_eq!(points.len(), 32);
    }

    #[test]
    fn triangle_base_emits_all_edges() {
        // One face, freq 3: 3 seeds + 2 sites per edge + 1 interior.
        let points = subdivide(&params(BasePolyhedron::Triangle, 1, 0, 3)).unwrap();
        assert_eq!(points.len(), 3 + 3 * 2 + 1);
    }

    #[test]
    fn no_duplicate_points_on_closed_polyhedra() {
        for division in [EdgeDivision::EqualLength, EdgeDivision::EqualAngle] {
            let mut p = params(BasePolyhedron::Icosahedron, 1, 0, 3);
            p.division = division;
            let points = subdivide(&p).unwrap();
            for a in 0..points.len() {
                for b in (a + 1)..points.len() {
                    assert!(
                        (points[a] - points[b]).norm() > 1e-9,
                        "{division:?}: points {a} and {b} coincide"
                    );
                }
            }
        }
    }

    #[test]
    fn projected_points_are_unit() {
        let points = subdivide(&params(BasePolyhedron::Octahedron, 1, 0, 4)).unwrap();
        for p in &points {
            assert_relative_eq!(p.norm(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn projection_is_idempotent() {
        let points = subdivide(&params(BasePolyhedron::Icosahedron, 1, 0, 2)).unwrap();
        for &p in &points {
            assert_relative_eq!(unit(p).unwrap(), p, epsilon = 1e-15);
        }
    }

    #[test]
    fn flat_faced_keeps_points_off_the_sphere() {
        let mut p = params(BasePolyhedron::Icosahedron, 1, 0, 3);
        p.flat_faced = true;
        let points = subdivide(&p).unwrap();
        // Interior face points of a flat icosahedron sit strictly inside
        // the circumscribed sphere.
        assert!(points.iter().any(|p| p.norm() < 1.0 - 1e-3));
    }

    #[test]
    fn equal_angle_spacing_is_uniform_after_projection() {
        // Chord points placed by the equal-angle rule project onto the
        // sphere at equal angular steps along the edge.
        let freq = 5u32;
        let poly = Polyhedron::new(BasePolyhedron::Icosahedron);
        let [a, b] = [poly.verts[0], poly.verts[4]];
        let ang = 2.0 * ((b - a).norm() / 2.0).asin();
        let disp = edge_displacements(a, b, freq, EdgeDivision::EqualAngle).unwrap();
        let mut prev = unit(a).unwrap();
        for d in disp.iter().skip(1) {
            let cur = unit(a + d).unwrap();
            let step = prev.dot(&cur).clamp(-1.0, 1.0).acos();
            assert_abs_diff_eq!(step, ang / f64::from(freq), epsilon = 1e-6);
            prev = cur;
        }
    }

    #[test]
    fn zero_repeats_multiplier_is_rejected() {
        let mut p = params(BasePolyhedron::Icosahedron, 1, 0, 1);
        p.repeats = 0;
        assert!(matches!(
            subdivide(&p),
            Err(TessellateError::InvalidClassPattern(_))
        ));
    }
}

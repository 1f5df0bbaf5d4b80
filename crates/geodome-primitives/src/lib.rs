#![warn(missing_docs)]

//! Base polyhedron construction for the geodome kernel.
//!
//! Builds the seed vertex/face/edge data for the four supported base
//! shapes. Seed coordinates are geometrically exact (golden-ratio
//! relations for the icosahedron); faces are orientation-significant
//! vertex-index triples, and the undirected edge set is derived from
//! them at construction time.

use geodome_math::Vec3;
use std::collections::BTreeSet;

/// The supported base shapes for geodesic subdivision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BasePolyhedron {
    /// Regular tetrahedron: 4 vertices, 4 faces.
    Tetrahedron,
    /// Regular octahedron: 6 vertices, 8 faces.
    Octahedron,
    /// Regular icosahedron: 12 vertices, 20 faces.
    Icosahedron,
    /// A single free-standing triangle: 3 vertices, 1 face.
    Triangle,
}

/// Seed geometry for subdivision: vertices, oriented face triples, and
/// the undirected edge set derived from the faces.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyhedron {
    /// Seed vertex positions; indices are stable identities referenced
    /// by `faces`.
    pub verts: Vec<Vec3>,
    /// Faces as ordered vertex-index triples. Traversal order determines
    /// the direction edges are walked during interpolation.
    pub faces: Vec<[usize; 3]>,
    /// Undirected edges in canonical `(min, max)` form; an edge shared
    /// by two faces appears exactly once.
    pub edges: BTreeSet<(usize, usize)>,
}

impl Polyhedron {
    /// Build the seed geometry for `base`.
    pub fn new(base: BasePolyhedron) -> Self {
        let (verts, faces) = match base {
            BasePolyhedron::Tetrahedron => tetrahedron(),
            BasePolyhedron::Octahedron => octahedron(),
            BasePolyhedron::Icosahedron => icosahedron(),
            BasePolyhedron::Triangle => triangle(),
        };
        let mut edges = BTreeSet::new();
        for face in &faces {
            for k in 0..3 {
                let a = face[k];
                let b = face[(k + 1) % 3];
                edges.insert((a.min(b), a.max(b)));
            }
        }
        Self { verts, faces, edges }
    }
}

fn tetrahedron() -> (Vec<Vec3>, Vec<[usize; 3]>) {
    let x = 1.0 / 3.0_f64.sqrt();
    let verts = vec![
        Vec3::new(-x, x, -x),
        Vec3::new(-x, -x, x),
        Vec3::new(x, x, x),
        Vec3::new(x, -x, -x),
    ];
    let faces = vec![[0, 1, 2], [0, 3, 1], [0, 2, 3], [2, 1, 3]];
    (verts, faces)
}

fn octahedron() -> (Vec<Vec3>, Vec<[usize; 3]>) {
    let x = 0.25 * 2.0_f64.sqrt();
    let verts = vec![
        Vec3::new(0.0, 0.5, 0.0),
        Vec3::new(x, 0.0, -x),
        Vec3::new(x, 0.0, x),
        Vec3::new(-x, 0.0, x),
        Vec3::new(-x, 0.0, -x),
        Vec3::new(0.0, -0.5, 0.0),
    ];
    let faces = vec![
        [0, 1, 2],
        [0, 2, 3],
        [0, 3, 4],
        [0, 4, 1],
        [5, 2, 1],
        [2, 5, 3],
        [3, 5, 4],
        [4, 5, 1],
    ];
    (verts, faces)
}

fn icosahedron() -> (Vec<Vec3>, Vec<[usize; 3]>) {
    // Golden-ratio coordinates scaled so every vertex is unit length.
    let phi = (5.0_f64.sqrt() + 1.0) / 2.0;
    let rad = (phi + 2.0).sqrt();
    let (x, z) = (1.0 / rad, phi / rad);
    let verts = vec![
        Vec3::new(-x, 0.0, z),
        Vec3::new(x, 0.0, z),
        Vec3::new(-x, 0.0, -z),
        Vec3::new(x, 0.0, -z),
        Vec3::new(0.0, z, x),
        Vec3::new(0.0, z, -x),
        Vec3::new(0.0, -z, x),
        Vec3::new(0.0, -z, -x),
        Vec3::new(z, x, 0.0),
        Vec3::new(-z, x, 0.0),
        Vec3::new(z, -x, 0.0),
        Vec3::new(-z, -x, 0.0),
    ];
    let faces = vec![
        [0, 4, 1],
        [0, 9, 4],
        [9, 5, 4],
        [4, 5, 8],
        [4, 8, 1],
        [8, 10, 1],
        [8, 3, 10],
        [5, 3, 8],
        [5, 2, 3],
        [2, 7, 3],
        [7, 10, 3],
        [7, 6, 10],
        [7, 11, 6],
        [11, 0, 6],
        [0, 1, 6],
        [6, 1, 10],
        [9, 0, 11],
        [9, 11, 2],
        [9, 2, 5],
        [7, 2, 11],
    ];
    (verts, faces)
}

fn triangle() -> (Vec<Vec3>, Vec<[usize; 3]>) {
    let y = 3.0_f64.sqrt() / 12.0;
    let z = -0.8;
    let verts = vec![
        Vec3::new(-0.25, -y, z),
        Vec3::new(0.25, -y, z),
        Vec3::new(0.0, 2.0 * y, z),
    ];
    (verts, vec![[0, 1, 2]])
}

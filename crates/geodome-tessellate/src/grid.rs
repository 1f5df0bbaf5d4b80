//! Class-pattern subdivision lattice.

use crate::error::{Result, TessellateError};

/// Face-division class pattern `(m, n)` with a whole-pattern repeat
/// count.
///
/// `(1, 0)` is Class I and `(1, 1)` is Class II; a general `(m, n)` is
/// Class III. All three are handled by the same sheared-lattice
/// selection in [`Grid::new`]. The subdivision frequency per original
/// edge is `repeats · (m² + m·n + n²)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassPattern {
    m: u32,
    n: u32,
    repeats: u32,
}

impl ClassPattern {
    /// Create a pattern, rejecting the degenerate cases `m = n = 0` and
    /// `repeats = 0`.
    pub fn new(m: u32, n: u32, repeats: u32) -> Result<Self> {
        if m == 0 && n == 0 {
            return Err(TessellateError::InvalidClassPattern(
                "m and n cannot both be zero".into(),
            ));
        }
        if repeats == 0 {
            return Err(TessellateError::InvalidClassPattern(
                "repeats must be at least 1".into(),
            ));
        }
        Ok(Self { m, n, repeats })
    }

    /// Class I pattern `(1, 0, repeats)` — the common case.
    pub fn class_i(repeats: u32) -> Result<Self> {
        Self::new(1, 0, repeats)
    }

    /// Pattern numerator `m`.
    pub fn m(&self) -> u32 {
        self.m
    }

    /// Pattern denominator `n`.
    pub fn n(&self) -> u32 {
        self.n
    }

    /// Whole-pattern repeat count.
    pub fn repeats(&self) -> u32 {
        self.repeats
    }

    /// Subdivision frequency per original edge, scaled by
    /// `extra_repeats`.
    pub fn frequency(&self, extra_repeats: u32) -> u32 {
        extra_repeats * self.repeats * (self.m * self.m + self.m * self.n + self.n * self.n)
    }
}

impl Default for ClassPattern {
    /// Class I, one repeat.
    fn default() -> Self {
        Self { m: 1, n: 0, repeats: 1 }
    }
}

/// One accepted lattice site: the scan index `(i, j)` and the sheared
/// triangle coordinate `(x, y)` (third coordinate `freq − x − y`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridEntry {
    /// Scan row.
    pub i: u32,
    /// Scan column.
    pub j: u32,
    /// First triangle coordinate, `x ≥ 0`.
    pub x: u32,
    /// Second triangle coordinate, `y ≥ 0` and `x + y ≤ freq`.
    pub y: u32,
}

/// The face-local subdivision lattice.
///
/// Built once per subdivision call and reused for every face; the
/// coordinates are face-local, not global.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    freq: u32,
    entries: Vec<GridEntry>,
}

impl Grid {
    /// Scan the bounded `(i, j)` square and keep the lattice sites whose
    /// sheared image lands inside the triangle `x ≥ 0, y ≥ 0,
    /// x + y ≤ freq`.
    pub fn new(freq: u32, pattern: &ClassPattern) -> Self {
        let m = i64::from(pattern.m());
        let n = i64::from(pattern.n());
        let rng = 2 * i64::from(freq) / (m + n);
        let mut entries = Vec::new();
        for i in 0..rng {
            for j in 0..rng {
                let x = i * (-n) + j * (m + n);
                let y = i * (m + n) + j * (-m);
                if x >= 0 && y >= 0 && x + y <= i64::from(freq) {
                    entries.push(GridEntry {
                        i: i as u32,
                        j: j as u32,
                        x: x as u32,
                        y: y as u32,
                    });
                }
            }
        }
        Self { freq, entries }
    }

    /// Subdivision frequency this grid was built for.
    pub fn freq(&self) -> u32 {
        self.freq
    }

    /// Accepted lattice sites in scan order.
    pub fn entries(&self) -> &[GridEntry] {
        &self.entries
    }

    /// Number of accepted lattice sites.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the grid holds no sites.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_degenerate_patterns() {
        assert!(ClassPattern::new(0, 0, 1).is_err());
        assert!(ClassPattern::new(1, 0, 0).is_err());
        assert!(ClassPattern::new(0, 2, 1).is_ok());
    }

    #[test]
    fn frequency_follows_triangle_number_form() {
        assert_eq!(ClassPattern::new(1, 0, 1).unwrap().frequency(1), 1);
        assert_eq!(ClassPattern::new(1, 0, 3).unwrap().frequency(1), 3);
        assert_eq!(ClassPattern::new(1, 1, 1).unwrap().frequency(1), 3);
        assert_eq!(ClassPattern::new(2, 1, 1).unwrap().frequency(1), 7);
        assert_eq!(ClassPattern::new(1, 0, 2).unwrap().frequency(3), 6);
    }

    #[test]
    fn class_i_grid_is_the_full_triangle() {
        // For (1, 0) the shear is the identity up to axis swap, so the
        // grid holds every site of the triangular lattice.
        for freq in 1..=6u32 {
            let pattern = ClassPattern::class_i(freq).unwrap();
            let grid = Grid::new(freq, &pattern);
            let expect = ((freq + 1) * (freq + 2) / 2) as usize;
            assert_eq!(grid.len(), expect, "freq {freq}");
        }
    }

    #[test]
    fn class_ii_grid_freq_three() {
        // (1, 1) at freq 3: the three corners plus one interior site.
        let pattern = ClassPattern::new(1, 1, 1).unwrap();
        let grid = Grid::new(3, &pattern);
        let coords: Vec<(u32, u32)> = grid.entries().iter().map(|e| (e.x, e.y)).collect();
        assert_eq!(coords, vec![(0, 0), (1, 1), (3, 0), (0, 3)]);
    }

    #[test]
    fn grid_sites_satisfy_triangle_bounds() {
        let pattern = ClassPattern::new(2, 1, 1).unwrap();
        let freq = pattern.frequency(1);
        let grid = Grid::new(freq, &pattern);
        assert!(!grid.is_empty());
        for e in grid.entries() {
            assert!(e.x + e.y <= freq);
        }
    }
}

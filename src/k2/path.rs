//! Quadrant paths: where an edge lives at every level of the recursion.
//!
//! An edge `(row, col)` in a `size × size` matrix (size a power of two,
//! at least 2) maps to exactly one root-to-leaf sequence of quadrant
//! choices, one per halving of the block, `log2(size)` steps in total.
//! Construction and query must derive the identical path — both go
//! through [`QuadrantPath::derive`].

use super::CHILDREN;

/// One of the four sub-blocks of a square matrix region.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Quadrant {
    /// Top-left: `row < half, col < half`.
    TopLeft = 0,
    /// Top-right: `row < half, col ≥ half`.
    TopRight = 1,
    /// Bottom-left: `row ≥ half, col < half`.
    BottomLeft = 2,
    /// Bottom-right: `row ≥ half, col ≥ half`.
    BottomRight = 3,
}

impl Quadrant {
    /// All quadrants in child order.
    pub const ALL: [Quadrant; CHILDREN] = [
        Quadrant::TopLeft,
        Quadrant::TopRight,
        Quadrant::BottomLeft,
        Quadrant::BottomRight,
    ];

    /// Child slot index (0..=3).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// From a child slot index. `None` for anything past 3.
    pub fn from_index(i: usize) -> Option<Self> {
        Self::ALL.get(i).copied()
    }

    /// One subdivision step: which quadrant of a block with half-width
    /// `half` holds `(row, col)`, and the cell's coordinates within it.
    #[inline]
    pub fn of(row: usize, col: usize, half: usize) -> (Quadrant, usize, usize) {
        match (row < half, col < half) {
            (true, true) => (Quadrant::TopLeft, row, col),
            (true, false) => (Quadrant::TopRight, row, col - half),
            (false, true) => (Quadrant::BottomLeft, row - half, col),
            (false, false) => (Quadrant::BottomRight, row - half, col - half),
        }
    }
}

/// A full root-to-leaf quadrant sequence for one matrix cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuadrantPath {
    steps: Vec<Quadrant>,
}

impl QuadrantPath {
    /// Derive the path of `(row, col)` in a `size × size` matrix.
    ///
    /// `size` must be a power of two ≥ 2 and both coordinates must be
    /// inside it; the builder guarantees both.
    pub fn derive(row: usize, col: usize, size: usize) -> Self {
        debug_assert!(size.is_power_of_two() && size >= 2);
        debug_assert!(row < size && col < size);
        let mut steps = Vec::with_capacity(size.trailing_zeros() as usize);
        let (mut row, mut col) = (row, col);
        let mut half = size / 2;
        while half >= 1 {
            let (q, r, c) = Quadrant::of(row, col, half);
            steps.push(q);
            row = r;
            col = c;
            half /= 2;
        }
        Self { steps }
    }

    /// Quadrant choices from root to leaf.
    #[inline]
    pub fn steps(&self) -> &[Quadrant] {
        &self.steps
    }

    /// Path length = tree depth = `log2(size)`.
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Paths are never empty (`size ≥ 2` forces at least one split).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

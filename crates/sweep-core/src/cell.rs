//! Grid coordinate type.
//!
//! `Cell` uses signed `i32` components so that neighbor arithmetic near the
//! grid edge never underflows — out-of-range coordinates are legal values
//! that simply fail the grid's bounds check.
//!
//! The derived `Ord` is row-major (row first, then column).  This ordering is
//! load-bearing: the allocator uses it as the pinned tie-break key when two
//! candidate targets score equally, and `BTreeSet<Cell>` iteration relies on
//! it for deterministic scans.

use std::fmt;

/// A grid coordinate pair `(row, col)`.
///
/// Equality and hashing are by value; `Cell` is used as a map/set key
/// throughout the engine.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    #[inline]
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Manhattan distance to `other` — the A* heuristic.  Admissible and
    /// consistent on a 4-connected unit-cost grid.
    #[inline]
    pub fn manhattan(self, other: Cell) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// The cell displaced by `(d_row, d_col)`.  May be out of bounds; the
    /// grid's `is_free` check filters such cells.
    #[inline]
    pub fn offset(self, d_row: i32, d_col: i32) -> Cell {
        Cell {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }
}

impl From<(i32, i32)> for Cell {
    #[inline]
    fn from((row, col): (i32, i32)) -> Self {
        Cell { row, col }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

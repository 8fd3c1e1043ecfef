//! Obstacle map and bounds checking.
//!
//! # Data layout
//!
//! `GridModel` stores cell states in a single row-major `Vec<CellState>`;
//! `cell (r, c)` lives at index `r * width + c`.  The model is immutable
//! after construction — build one with [`GridBuilder`], then share it by
//! reference with the planner, allocator, and route builder.
//!
//! # Failure modes
//!
//! None.  Queries against out-of-bounds cells return `false`/`None`; nothing
//! here panics or errors.

use sweep_core::Cell;

/// Traversability state of one grid cell.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    #[default]
    Free,
    Obstacle,
}

/// Cardinal neighbor offsets in the fixed scan order: down, up, right, left.
///
/// The order is part of the engine's determinism contract — A* expands
/// neighbors in exactly this sequence, so identical inputs always produce
/// identical paths.
const NEIGHBOR_DELTAS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

// ── GridModel ─────────────────────────────────────────────────────────────────

/// An immutable H×W obstacle map.
///
/// Construct via [`GridBuilder`] (or [`GridModel::open`] for an
/// obstacle-free grid).
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridModel {
    height: u32,
    width:  u32,
    cells:  Vec<CellState>,
}

impl GridModel {
    /// An obstacle-free grid of the given dimensions.
    pub fn open(height: u32, width: u32) -> Self {
        GridBuilder::new(height, width).build()
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// `true` if `cell` lies inside the grid rectangle.
    #[inline]
    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.row >= 0
            && cell.col >= 0
            && (cell.row as u32) < self.height
            && (cell.col as u32) < self.width
    }

    /// The state of `cell`, or `None` if out of bounds.
    #[inline]
    pub fn state(&self, cell: Cell) -> Option<CellState> {
        if self.in_bounds(cell) {
            Some(self.cells[self.index(cell)])
        } else {
            None
        }
    }

    /// `true` if `cell` is in bounds and not an obstacle.
    #[inline]
    pub fn is_free(&self, cell: Cell) -> bool {
        matches!(self.state(cell), Some(CellState::Free))
    }

    /// The in-bounds Free cardinal neighbors of `cell`, in the fixed order
    /// down, up, right, left.
    #[inline]
    pub fn neighbors(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        NEIGHBOR_DELTAS
            .iter()
            .map(move |&(dr, dc)| cell.offset(dr, dc))
            .filter(|&c| self.is_free(c))
    }

    /// Iterator over every Free cell, in row-major order.
    pub fn free_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().enumerate().filter_map(|(i, &state)| {
            if state == CellState::Free {
                Some(Cell::new(
                    (i / self.width as usize) as i32,
                    (i % self.width as usize) as i32,
                ))
            } else {
                None
            }
        })
    }

    #[inline]
    fn index(&self, cell: Cell) -> usize {
        cell.row as usize * self.width as usize + cell.col as usize
    }
}

// ── GridBuilder ───────────────────────────────────────────────────────────────

/// Construct a [`GridModel`] incrementally, then call [`build`](Self::build).
///
/// All cells start `Free`.  `obstacle`/`clear` calls against out-of-bounds
/// cells are ignored, matching the model's never-fails query contract.
pub struct GridBuilder {
    height: u32,
    width:  u32,
    cells:  Vec<CellState>,
}

impl GridBuilder {
    pub fn new(height: u32, width: u32) -> Self {
        Self {
            height,
            width,
            cells: vec![CellState::Free; height as usize * width as usize],
        }
    }

    /// Mark `cell` as an obstacle.  Out-of-bounds cells are ignored.
    pub fn obstacle(&mut self, cell: Cell) -> &mut Self {
        self.set(cell, CellState::Obstacle)
    }

    /// Mark `cell` as free.  Used to guarantee agent starts are traversable
    /// after random obstacle placement.
    pub fn clear(&mut self, cell: Cell) -> &mut Self {
        self.set(cell, CellState::Free)
    }

    fn set(&mut self, cell: Cell, state: CellState) -> &mut Self {
        if cell.row >= 0
            && cell.col >= 0
            && (cell.row as u32) < self.height
            && (cell.col as u32) < self.width
        {
            let idx = cell.row as usize * self.width as usize + cell.col as usize;
            self.cells[idx] = state;
        }
        self
    }

    /// Consume the builder and produce an immutable [`GridModel`].
    pub fn build(self) -> GridModel {
        GridModel {
            height: self.height,
            width:  self.width,
            cells:  self.cells,
        }
    }
}

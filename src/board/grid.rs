//! Grid: a fixed rows x cols matrix of cells.
//!
//! Dimensions are immutable after construction. All signed-coordinate
//! access goes through [`Grid::stone_at`], which treats out-of-bounds
//! as "no cell" rather than indexing past the matrix.

use super::{Pos, Stone};

/// Cell matrix with fixed dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Stone>,
}

impl Grid {
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Stone::Empty; rows * cols],
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether signed coordinates fall inside the grid.
    #[inline]
    pub fn is_inside(&self, row: i32, col: i32) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.rows && (col as usize) < self.cols
    }

    /// Cell at signed coordinates; `None` when out of bounds.
    #[inline]
    pub fn stone_at(&self, row: i32, col: i32) -> Option<Stone> {
        if self.is_inside(row, col) {
            Some(self.cells[row as usize * self.cols + col as usize])
        } else {
            None
        }
    }

    /// Cell at a position known to be in bounds.
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        debug_assert!(pos.row < self.rows && pos.col < self.cols);
        self.cells[pos.row * self.cols + pos.col]
    }

    #[inline]
    pub fn set(&mut self, pos: Pos, stone: Stone) {
        debug_assert!(pos.row < self.rows && pos.col < self.cols);
        self.cells[pos.row * self.cols + pos.col] = stone;
    }

    /// Total stones on the board.
    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|&&s| s != Stone::Empty).count()
    }

    #[inline]
    pub fn is_empty_board(&self) -> bool {
        self.cells.iter().all(|&s| s == Stone::Empty)
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&s| s != Stone::Empty)
    }

    /// Occupied cells in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (Pos, Stone)> + '_ {
        self.cells.iter().enumerate().filter_map(move |(i, &s)| {
            (s != Stone::Empty).then(|| (Pos::new(i / self.cols, i % self.cols), s))
        })
    }
}

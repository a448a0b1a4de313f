//! Game configuration
//!
//! A plain value object fixed at construction. Every state and engine
//! holds its own copy; nothing mutates a config after a game starts.

use crate::board::Pos;

/// Board dimensions and the capture-win threshold (counted in stones).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    pub capture_win: u16,
}

impl GameConfig {
    /// The standard 19x19 game, first to 10 captured stones.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            rows: 19,
            cols: 19,
            capture_win: 10,
        }
    }

    #[must_use]
    pub fn new(rows: usize, cols: usize, capture_win: u16) -> Self {
        Self {
            rows,
            cols,
            capture_win,
        }
    }

    /// Board center, the reference point for move ordering and the
    /// center-control heuristic.
    #[inline]
    #[must_use]
    pub fn center(&self) -> Pos {
        Pos::new(self.rows / 2, self.cols / 2)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::standard()
    }
}

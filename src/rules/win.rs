//! Five-in-a-row detection
//!
//! A line win can only be created by the stone just placed, so detection
//! runs through that stone: along each axis, count the contiguous run by
//! walking up to four steps in each signed direction.

use crate::board::{Grid, Pos, Stone};
use crate::rules::DIRECTIONS;

/// Whether `stone` at `pos` sits inside a contiguous run of five or more.
///
/// The stone is expected to already be on the grid.
#[must_use]
pub fn has_five_through(grid: &Grid, pos: Pos, stone: Stone) -> bool {
    for &(dr, dc) in &DIRECTIONS {
        let mut run = 1;
        for sign in [1, -1] {
            for step in 1..5 {
                let r = pos.row as i32 + dr * sign * step;
                let c = pos.col as i32 + dc * sign * step;
                if grid.stone_at(r, c) == Some(stone) {
                    run += 1;
                } else {
                    break;
                }
            }
        }
        if run >= 5 {
            return true;
        }
    }
    false
}

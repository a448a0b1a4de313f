//! Pair-capture rule
//!
//! Placing a stone captures every adjacent opponent pair that is flanked
//! on the far side by another friendly stone: the pattern `X O O X` read
//! outward from the placed stone. All 8 signed directions are checked
//! independently and their captures stack.

use crate::board::{Grid, Pos, Stone};
use crate::rules::DIRECTIONS;

/// Opponent positions that would be captured by `stone` placed at `pos`.
///
/// Does not modify the grid. The placed stone itself need not be on the
/// grid yet; only the three cells beyond it in each direction matter.
#[must_use]
pub fn captured_positions(grid: &Grid, pos: Pos, stone: Stone) -> Vec<Pos> {
    let opponent = stone.opponent();
    let mut captured = Vec::new();

    for &(dr, dc) in &DIRECTIONS {
        for sign in [1, -1] {
            let dr = dr * sign;
            let dc = dc * sign;
            let r = pos.row as i32;
            let c = pos.col as i32;

            let first = grid.stone_at(r + dr, c + dc);
            let second = grid.stone_at(r + 2 * dr, c + 2 * dc);
            let flank = grid.stone_at(r + 3 * dr, c + 3 * dc);

            if first == Some(opponent) && second == Some(opponent) && flank == Some(stone) {
                captured.push(Pos::new((r + dr) as usize, (c + dc) as usize));
                captured.push(Pos::new((r + 2 * dr) as usize, (c + 2 * dc) as usize));
            }
        }
    }

    captured
}

/// Removes every pair captured by `stone` placed at `pos` and returns the
/// cleared positions. Two positions per firing direction.
pub fn execute_captures(grid: &mut Grid, pos: Pos, stone: Stone) -> Vec<Pos> {
    let captured = captured_positions(grid, pos, stone);
    for &p in &captured {
        grid.set(p, Stone::Empty);
    }
    captured
}

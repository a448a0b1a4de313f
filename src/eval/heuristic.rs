//! Position evaluation
//!
//! Scores a state from one player's perspective: capture material, a
//! center-control term per stone, and line-shape scores scanned from run
//! starts only so each run is counted once per direction. Opponent terms
//! carry a heavier weight (12/10 for captures, 11/10 for shapes), so the
//! engine values preventing a loss over forcing an equal gain.

use crate::board::{Grid, Pos, Stone};
use crate::eval::PatternScore;
use crate::game::GameState;
use crate::rules::DIRECTIONS;

/// Scores `state` for `perspective`. Decided games collapse to
/// `±TERMINAL` (0 when drawn) regardless of board content.
#[must_use]
pub fn evaluate(state: &GameState, perspective: Stone) -> i64 {
    if state.is_game_over() {
        return match state.winner() {
            Some(w) if w == perspective => PatternScore::TERMINAL,
            Some(_) => -PatternScore::TERMINAL,
            None => 0,
        };
    }

    let opponent = perspective.opponent();
    let grid = state.grid();
    let center = state.config().center();

    let my_captures = i64::from(state.captures(perspective));
    let opp_captures = i64::from(state.captures(opponent));

    let mut score = my_captures * PatternScore::CAPTURE_STONE;
    score -= opp_captures * PatternScore::CAPTURE_STONE * 12 / 10;
    score += line_scan(grid, perspective, center);
    score -= line_scan(grid, opponent, center) * 11 / 10;
    score
}

/// Sum of center-control and shape scores over every `color` stone.
fn line_scan(grid: &Grid, color: Stone, center: Pos) -> i64 {
    let mut total = 0;
    for (pos, stone) in grid.occupied() {
        if stone != color {
            continue;
        }
        let dist = pos.manhattan(center) as i64;
        total += (20 - dist).max(0) * PatternScore::CENTER_UNIT;

        for &(dr, dc) in &DIRECTIONS {
            let behind = grid.stone_at(pos.row as i32 - dr, pos.col as i32 - dc);
            // Only score from the start of a run; stones continuing a run
            // are covered by the window opened at its first stone.
            if behind != Some(color) {
                total += score_run(grid, pos, dr, dc, color);
            }
        }
    }
    total
}

/// Scores the run starting at `pos` along `(dr, dc)` from a six-cell
/// forward window, tolerating a single internal gap.
fn score_run(grid: &Grid, pos: Pos, dr: i32, dc: i32, color: Stone) -> i64 {
    let r = pos.row as i32;
    let c = pos.col as i32;
    let cell = |offset: i32| grid.stone_at(r + dr * offset, c + dc * offset);
    let is_open = |offset: i32| cell(offset) == Some(Stone::Empty);

    let mut count = 0i32;
    let mut last_stone = 0i32;
    let mut gap = false;
    for offset in 0..6 {
        match cell(offset) {
            Some(s) if s == color => {
                count += 1;
                last_stone = offset;
            }
            Some(Stone::Empty) if !gap => gap = true,
            _ => break,
        }
    }

    let open_start = is_open(-1);
    match count {
        n if n >= 5 => PatternScore::FIVE,
        4 => {
            if open_start || is_open(last_stone + 1) {
                PatternScore::OPEN_FOUR
            } else {
                PatternScore::CLOSED_FOUR
            }
        }
        3 => {
            let w = [cell(0), cell(1), cell(2), cell(3)];
            let s = Some(color);
            let e = Some(Stone::Empty);
            let split = w == [s, e, s, s] || w == [s, s, e, s];
            if split {
                if open_start || is_open(4) {
                    PatternScore::SPLIT_THREE
                } else {
                    0
                }
            } else {
                match u8::from(open_start) + u8::from(is_open(3)) {
                    2 => PatternScore::OPEN_THREE,
                    1 => PatternScore::CLOSED_THREE,
                    _ => 0,
                }
            }
        }
        2 if open_start && is_open(2) => PatternScore::OPEN_TWO,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    fn grid_with(cells: &[(usize, usize, Stone)]) -> Grid {
        let mut grid = Grid::new(19, 19);
        for &(r, c, s) in cells {
            grid.set(Pos::new(r, c), s);
        }
        grid
    }

    #[test]
    fn test_open_two() {
        let grid = grid_with(&[(9, 9, Stone::Black), (9, 10, Stone::Black)]);
        assert_eq!(
            score_run(&grid, Pos::new(9, 9), 0, 1, Stone::Black),
            PatternScore::OPEN_TWO
        );
    }

    #[test]
    fn test_blocked_two_scores_zero() {
        let grid = grid_with(&[
            (9, 8, Stone::White),
            (9, 9, Stone::Black),
            (9, 10, Stone::Black),
        ]);
        assert_eq!(score_run(&grid, Pos::new(9, 9), 0, 1, Stone::Black), 0);
    }

    #[test]
    fn test_gapped_two_scores_zero() {
        // Only a contiguous pair counts as a two; the probe one past the
        // pair lands on the second stone here.
        let grid = grid_with(&[(9, 9, Stone::Black), (9, 11, Stone::Black)]);
        assert_eq!(score_run(&grid, Pos::new(9, 9), 0, 1, Stone::Black), 0);
    }

    #[test]
    fn test_open_and_closed_three() {
        let grid = grid_with(&[
            (9, 9, Stone::Black),
            (9, 10, Stone::Black),
            (9, 11, Stone::Black),
        ]);
        assert_eq!(
            score_run(&grid, Pos::new(9, 9), 0, 1, Stone::Black),
            PatternScore::OPEN_THREE
        );

        let grid = grid_with(&[
            (9, 8, Stone::White),
            (9, 9, Stone::Black),
            (9, 10, Stone::Black),
            (9, 11, Stone::Black),
        ]);
        assert_eq!(
            score_run(&grid, Pos::new(9, 9), 0, 1, Stone::Black),
            PatternScore::CLOSED_THREE
        );

        let grid = grid_with(&[
            (9, 8, Stone::White),
            (9, 9, Stone::Black),
            (9, 10, Stone::Black),
            (9, 11, Stone::Black),
            (9, 12, Stone::White),
        ]);
        assert_eq!(score_run(&grid, Pos::new(9, 9), 0, 1, Stone::Black), 0);
    }

    #[test]
    fn test_split_three() {
        let grid = grid_with(&[
            (9, 9, Stone::Black),
            (9, 11, Stone::Black),
            (9, 12, Stone::Black),
        ]);
        assert_eq!(
            score_run(&grid, Pos::new(9, 9), 0, 1, Stone::Black),
            PatternScore::SPLIT_THREE
        );

        let grid = grid_with(&[
            (9, 9, Stone::Black),
            (9, 10, Stone::Black),
            (9, 12, Stone::Black),
        ]);
        assert_eq!(
            score_run(&grid, Pos::new(9, 9), 0, 1, Stone::Black),
            PatternScore::SPLIT_THREE
        );
    }

    #[test]
    fn test_open_and_closed_four() {
        let grid = grid_with(&[
            (9, 9, Stone::Black),
            (9, 10, Stone::Black),
            (9, 11, Stone::Black),
            (9, 12, Stone::Black),
        ]);
        assert_eq!(
            score_run(&grid, Pos::new(9, 9), 0, 1, Stone::Black),
            PatternScore::OPEN_FOUR
        );

        let grid = grid_with(&[
            (9, 8, Stone::White),
            (9, 9, Stone::Black),
            (9, 10, Stone::Black),
            (9, 11, Stone::Black),
            (9, 12, Stone::Black),
            (9, 13, Stone::White),
        ]);
        assert_eq!(
            score_run(&grid, Pos::new(9, 9), 0, 1, Stone::Black),
            PatternScore::CLOSED_FOUR
        );
    }

    #[test]
    fn test_five() {
        let grid = grid_with(&[
            (9, 5, Stone::Black),
            (9, 6, Stone::Black),
            (9, 7, Stone::Black),
            (9, 8, Stone::Black),
            (9, 9, Stone::Black),
        ]);
        assert_eq!(
            score_run(&grid, Pos::new(9, 5), 0, 1, Stone::Black),
            PatternScore::FIVE
        );
    }

    #[test]
    fn test_terminal_scores() {
        let mut game = GameState::new(GameConfig::standard());
        for i in 0..4 {
            game.make_move(9, 5 + i);
            game.make_move(10, 5 + i);
        }
        game.make_move(9, 9);
        assert!(game.is_game_over());
        assert_eq!(evaluate(&game, Stone::Black), PatternScore::TERMINAL);
        assert_eq!(evaluate(&game, Stone::White), -PatternScore::TERMINAL);
    }

    #[test]
    fn test_drawn_terminal_scores_zero() {
        let mut game = GameState::new(GameConfig::new(3, 3, 10));
        for r in 0..3 {
            for c in 0..3 {
                game.make_move(r, c);
            }
        }
        assert!(game.is_game_over());
        assert_eq!(evaluate(&game, Stone::Black), 0);
        assert_eq!(evaluate(&game, Stone::White), 0);
    }

    #[test]
    fn test_open_four_beats_open_three() {
        let mut four = GameState::new(GameConfig::standard());
        four.make_move(9, 6);
        four.make_move(0, 0);
        four.make_move(9, 7);
        four.make_move(0, 1);
        four.make_move(9, 8);
        four.make_move(0, 2);
        four.make_move(9, 9);

        let mut three = GameState::new(GameConfig::standard());
        three.make_move(9, 7);
        three.make_move(0, 0);
        three.make_move(9, 8);
        three.make_move(0, 1);
        three.make_move(9, 9);

        assert!(evaluate(&four, Stone::Black) > evaluate(&three, Stone::Black));
    }

    #[test]
    fn test_symmetric_position_reads_negative() {
        // Both sides hold a mirrored open two; the 11/10 opponent weight
        // tips either perspective below zero.
        let mut game = GameState::new(GameConfig::standard());
        game.make_move(8, 9); // B
        game.make_move(10, 9); // W
        game.make_move(8, 10); // B
        game.make_move(10, 8); // W

        assert!(evaluate(&game, Stone::Black) < 0);
        assert!(evaluate(&game, Stone::White) < 0);
    }

    #[test]
    fn test_capture_loss_outweighs_capture_gain() {
        let mut game = GameState::new(GameConfig::standard());
        game.make_move(9, 12); // B
        game.make_move(9, 10); // W
        game.make_move(5, 5); // B
        game.make_move(9, 11); // W
        game.make_move(9, 9); // B captures the pair

        let black = evaluate(&game, Stone::Black);
        let white = evaluate(&game, Stone::White);
        assert!(black > 0);
        assert!(white < 0);
        assert!(black < -white);
    }

    #[test]
    fn test_center_beats_corner() {
        let mut center = GameState::new(GameConfig::standard());
        center.make_move(9, 9);
        let mut corner = GameState::new(GameConfig::standard());
        corner.make_move(0, 0);

        assert!(evaluate(&center, Stone::Black) > evaluate(&corner, Stone::Black));
    }
}

//! Bounded minimax with alpha-beta pruning
//!
//! The engine searches a fixed depth over a scratch copy of the game.
//! Candidate moves are the empty cells within a small Chebyshev radius of
//! existing stones, ordered by closeness to the center; on an empty board
//! the center is the sole candidate. Ties keep the earliest candidate in
//! that ordering.
//!
//! The root loop raises alpha as results come in but keeps beta at the
//! upper sentinel, so the root cutoff never fires; inner nodes prune
//! normally. This mirrors the engine's long-standing root shape and is
//! kept as is.
//!
//! Child positions are visited through a [`MoveSimulator`], either by
//! cloning the state per node or by applying and undoing the move on one
//! owned state. Both backends produce identical results; apply/undo is
//! the default.

use std::marker::PhantomData;

use crate::board::{Move, Pos, Stone};
use crate::config::GameConfig;
use crate::eval::{evaluate, PatternScore};
use crate::game::GameState;
use crate::search::tracker::{NullTracker, SearchTracker};

/// Alpha-beta sentinel, strictly outside every reachable score.
const INF: i64 = PatternScore::TERMINAL + 1;

/// Strategy for visiting the position after a candidate move.
pub trait MoveSimulator {
    /// Plays `pos` for the side to move, runs `visit` on the resulting
    /// state, and leaves `state` as it was found. `None` when the move
    /// is illegal.
    fn simulate<F>(state: &mut GameState, pos: Pos, visit: F) -> Option<i64>
    where
        F: FnOnce(&mut GameState) -> i64;
}

/// Clone-per-node simulation.
pub struct CloneSim;

impl MoveSimulator for CloneSim {
    fn simulate<F>(state: &mut GameState, pos: Pos, visit: F) -> Option<i64>
    where
        F: FnOnce(&mut GameState) -> i64,
    {
        let mut child = state.clone();
        child.apply_move(pos.row, pos.col)?;
        Some(visit(&mut child))
    }
}

/// Apply/undo simulation on a single owned state.
pub struct UndoSim;

impl MoveSimulator for UndoSim {
    fn simulate<F>(state: &mut GameState, pos: Pos, visit: F) -> Option<i64>
    where
        F: FnOnce(&mut GameState) -> i64,
    {
        let record = state.apply_move(pos.row, pos.col)?;
        let score = visit(state);
        state.undo_move(&record);
        Some(score)
    }
}

/// Fixed-depth adversarial search for one assigned color.
pub struct SearchEngine<S: MoveSimulator = UndoSim> {
    config: GameConfig,
    color: Stone,
    depth: u32,
    _simulator: PhantomData<S>,
}

impl SearchEngine {
    /// Engine with the default apply/undo backend. Depth is clamped to
    /// at least 1.
    #[must_use]
    pub fn new(config: GameConfig, color: Stone, depth: u32) -> Self {
        Self::with_simulator(config, color, depth)
    }
}

impl<S: MoveSimulator> SearchEngine<S> {
    #[must_use]
    pub fn with_simulator(config: GameConfig, color: Stone, depth: u32) -> Self {
        Self {
            config,
            color,
            depth: depth.max(1),
            _simulator: PhantomData,
        }
    }

    /// Best move for the side to move, without instrumentation.
    #[must_use]
    pub fn best_move(&self, game: &GameState) -> Option<Move> {
        self.get_best_move(game, &mut NullTracker)
    }

    /// Best move for the side to move in `game`.
    ///
    /// Returns `None` when the game is already over or no candidate
    /// cell exists. The tracker sees `start` once, `record_node` per
    /// visited node, and is left running for the caller to `stop`.
    pub fn get_best_move<T: SearchTracker>(
        &self,
        game: &GameState,
        tracker: &mut T,
    ) -> Option<Move> {
        tracker.start();
        if game.is_game_over() {
            return None;
        }

        let mut root = game.scratch();
        let candidates = self.relevant_moves(&root);
        if candidates.is_empty() {
            return None;
        }

        let mover = root.turn();
        let mut best = candidates[0];
        let mut best_score = -INF;
        let mut alpha = -INF;
        let beta = INF;

        for &pos in &candidates {
            let result = S::simulate(&mut root, pos, |child| {
                self.minimax(child, self.depth - 1, alpha, beta, false, tracker)
            });
            let Some(score) = result else {
                continue;
            };
            if score > best_score {
                best_score = score;
                best = pos;
            }
            alpha = alpha.max(best_score);
            if beta <= alpha {
                break;
            }
        }

        log::debug!(
            "search depth {} examined {} candidates, chose {} (score {})",
            self.depth,
            candidates.len(),
            best,
            best_score
        );
        Some(Move { pos: best, stone: mover })
    }

    fn minimax<T: SearchTracker>(
        &self,
        state: &mut GameState,
        depth: u32,
        mut alpha: i64,
        mut beta: i64,
        maximizing: bool,
        tracker: &mut T,
    ) -> i64 {
        tracker.record_node();
        if depth == 0 || state.is_game_over() {
            return evaluate(state, self.color);
        }
        let candidates = self.relevant_moves(state);
        if candidates.is_empty() {
            return evaluate(state, self.color);
        }

        if maximizing {
            let mut best = -INF;
            for &pos in &candidates {
                let result = S::simulate(state, pos, |child| {
                    self.minimax(child, depth - 1, alpha, beta, false, tracker)
                });
                let Some(score) = result else {
                    continue;
                };
                best = best.max(score);
                alpha = alpha.max(best);
                if beta <= alpha {
                    break;
                }
            }
            best
        } else {
            let mut best = INF;
            for &pos in &candidates {
                let result = S::simulate(state, pos, |child| {
                    self.minimax(child, depth - 1, alpha, beta, true, tracker)
                });
                let Some(score) = result else {
                    continue;
                };
                best = best.min(score);
                beta = beta.min(best);
                if beta <= alpha {
                    break;
                }
            }
            best
        }
    }

    /// Empty cells within a Chebyshev radius of any stone, nearest to
    /// the center first (row-major on ties). The radius shrinks to 1 for
    /// deep searches and widens back to 2 while the board holds fewer
    /// than four stones. An empty board yields only the center.
    fn relevant_moves(&self, state: &GameState) -> Vec<Pos> {
        let grid = state.grid();
        let center = self.config.center();
        if grid.is_empty_board() {
            return vec![center];
        }

        let mut radius: i32 = if self.depth >= 4 { 1 } else { 2 };
        if grid.stone_count() < 4 {
            radius = radius.max(2);
        }

        let mut seen = vec![false; grid.rows() * grid.cols()];
        let mut moves = Vec::new();
        for (pos, _) in grid.occupied() {
            for dr in -radius..=radius {
                for dc in -radius..=radius {
                    let r = pos.row as i32 + dr;
                    let c = pos.col as i32 + dc;
                    if grid.stone_at(r, c) == Some(Stone::Empty) {
                        let idx = r as usize * grid.cols() + c as usize;
                        if !seen[idx] {
                            seen[idx] = true;
                            moves.push(Pos::new(r as usize, c as usize));
                        }
                    }
                }
            }
        }
        moves.sort_by_key(|p| (p.manhattan(center), p.row, p.col));
        moves
    }
}

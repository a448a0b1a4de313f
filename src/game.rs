//! Game state and move transitions
//!
//! [`GameState`] owns the grid, the side to move, capture counts, and the
//! terminal flags. Moves go through one of two paths:
//!
//! - `make_move`: the live-game entry point, which also maintains
//!   `last_move` and the move history.
//! - `apply_move` / `undo_move`: the search path. `apply_move` returns a
//!   [`MoveRecord`] describing exactly what changed so `undo_move` can
//!   roll the state back without cloning.
//!
//! Win checks happen on the move that causes them: capture count first,
//! then five-in-a-row through the placed stone. The turn does not advance
//! on a game-ending move.

use crate::board::{Grid, Move, Pos, Stone};
use crate::config::GameConfig;
use crate::rules::{execute_captures, has_five_through};

/// Everything a single move changed, sufficient to reverse it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    pub mv: Move,
    pub captured: Vec<Pos>,
}

/// Full game state for one Pente game.
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    grid: Grid,
    turn: Stone,
    black_captures: u16,
    white_captures: u16,
    game_over: bool,
    winner: Option<Stone>,
    resigned: bool,
    last_move: Option<Move>,
    move_history: Vec<Move>,
}

impl GameState {
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            grid: Grid::new(config.rows, config.cols),
            turn: Stone::Black,
            black_captures: 0,
            white_captures: 0,
            game_over: false,
            winner: None,
            resigned: false,
            last_move: None,
            move_history: Vec::new(),
        }
    }

    #[inline]
    pub fn config(&self) -> GameConfig {
        self.config
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn turn(&self) -> Stone {
        self.turn
    }

    /// Captured opponent stones credited to `stone` (counted in stones).
    #[inline]
    pub fn captures(&self, stone: Stone) -> u16 {
        match stone {
            Stone::Black => self.black_captures,
            Stone::White => self.white_captures,
            Stone::Empty => 0,
        }
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    #[inline]
    pub fn winner(&self) -> Option<Stone> {
        self.winner
    }

    #[inline]
    pub fn is_resigned(&self) -> bool {
        self.resigned
    }

    #[inline]
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    #[inline]
    pub fn move_history(&self) -> &[Move] {
        &self.move_history
    }

    fn add_captures(&mut self, stone: Stone, count: u16) {
        match stone {
            Stone::Black => self.black_captures += count,
            Stone::White => self.white_captures += count,
            Stone::Empty => {}
        }
    }

    fn sub_captures(&mut self, stone: Stone, count: u16) {
        match stone {
            Stone::Black => self.black_captures -= count,
            Stone::White => self.white_captures -= count,
            Stone::Empty => {}
        }
    }

    /// Plays the current side's stone at `(row, col)`.
    ///
    /// Returns `None` without touching the state when the game is over,
    /// the coordinates are out of bounds, or the cell is occupied.
    /// Otherwise returns the record needed to undo the move.
    pub fn apply_move(&mut self, row: usize, col: usize) -> Option<MoveRecord> {
        if self.game_over || row >= self.config.rows || col >= self.config.cols {
            return None;
        }
        let pos = Pos::new(row, col);
        if self.grid.get(pos) != Stone::Empty {
            return None;
        }

        let mover = self.turn;
        self.grid.set(pos, mover);
        let captured = execute_captures(&mut self.grid, pos, mover);
        self.add_captures(mover, captured.len() as u16);

        if self.captures(mover) >= self.config.capture_win
            || has_five_through(&self.grid, pos, mover)
        {
            self.game_over = true;
            self.winner = Some(mover);
        } else if self.grid.is_full() {
            self.game_over = true;
        } else {
            self.turn = mover.opponent();
        }

        Some(MoveRecord {
            mv: Move { pos, stone: mover },
            captured,
        })
    }

    /// Reverses a move produced by `apply_move` on this state.
    ///
    /// Records must be undone in reverse order of application.
    pub fn undo_move(&mut self, record: &MoveRecord) {
        let mover = record.mv.stone;
        self.grid.set(record.mv.pos, Stone::Empty);
        let opponent = mover.opponent();
        for &p in &record.captured {
            self.grid.set(p, opponent);
        }
        self.sub_captures(mover, record.captured.len() as u16);
        self.turn = mover;
        self.game_over = false;
        self.winner = None;
    }

    /// Live-game move: `apply_move` plus last-move and history tracking.
    pub fn make_move(&mut self, row: usize, col: usize) -> bool {
        match self.apply_move(row, col) {
            Some(record) => {
                self.last_move = Some(record.mv);
                self.move_history.push(record.mv);
                true
            }
            None => false,
        }
    }

    /// Concedes the game for `stone` (the side to move when `None`).
    pub fn resign(&mut self, stone: Option<Stone>) {
        let loser = stone.unwrap_or(self.turn);
        self.resigned = true;
        self.game_over = true;
        self.winner = Some(loser.opponent());
    }

    /// Back to an empty board with Black to move.
    pub fn reset(&mut self) {
        *self = Self::new(self.config);
    }

    /// A throwaway copy for search: grid, captures, and turn carry over;
    /// terminal flags and history do not.
    #[must_use]
    pub fn scratch(&self) -> GameState {
        GameState {
            config: self.config,
            grid: self.grid.clone(),
            turn: self.turn,
            black_captures: self.black_captures,
            white_captures: self.white_captures,
            game_over: false,
            winner: None,
            resigned: false,
            last_move: None,
            move_history: Vec::new(),
        }
    }
}

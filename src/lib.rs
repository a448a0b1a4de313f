//! Pente rules engine and adversarial-search AI
//!
//! Pente is played on a 19x19 grid: five in a row wins, and flanking an
//! adjacent opponent pair captures it. Ten captured stones also win.
//!
//! - `board`: stones, positions, moves, and the cell grid
//! - `rules`: pair-capture and five-in-a-row detection
//! - `game`: [`GameState`] with live moves, resignation, and apply/undo
//! - `eval`: heuristic scoring of positions
//! - `search`: fixed-depth minimax with alpha-beta and instrumentation
//!
//! ```
//! use pente::{GameConfig, GameState, SearchEngine, Stone};
//!
//! let config = GameConfig::standard();
//! let mut game = GameState::new(config);
//! assert!(game.make_move(9, 9));
//!
//! let engine = SearchEngine::new(config, Stone::White, 2);
//! let reply = engine.best_move(&game).unwrap();
//! assert!(game.make_move(reply.pos.row, reply.pos.col));
//! ```

pub mod board;
pub mod config;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;

pub use board::{Grid, Move, Pos, Stone};
pub use config::GameConfig;
pub use eval::{evaluate, PatternScore};
pub use game::{GameState, MoveRecord};
pub use search::{
    CloneSim, MoveSimulator, NullTracker, PerfTracker, SearchEngine, SearchReport, SearchTracker,
    UndoSim,
};

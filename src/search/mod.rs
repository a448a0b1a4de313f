//! Adversarial search

pub mod minimax;
pub mod tracker;

pub use minimax::{CloneSim, MoveSimulator, SearchEngine, UndoSim};
pub use tracker::{NullTracker, PerfTracker, SearchReport, SearchTracker};

//! Heuristic evaluation for Pente positions

pub mod heuristic;
pub mod patterns;

pub use heuristic::evaluate;
pub use patterns::PatternScore;

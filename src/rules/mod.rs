//! Game rules for Pente
//!
//! Capture detection, capture execution, and win detection as free
//! functions over [`Grid`](crate::board::Grid). The four axis directions
//! are shared with the evaluator and the search; each is scanned in both
//! signs where the rule calls for it.

pub mod capture;
pub mod win;

pub use capture::{captured_positions, execute_captures};
pub use win::has_five_through;

/// The four line axes: horizontal, vertical, both diagonals.
pub const DIRECTIONS: [(i32, i32); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

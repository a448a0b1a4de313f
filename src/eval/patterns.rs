//! Shape and term weights for the evaluator
//!
//! The hierarchy matters more than the absolute numbers: a five dominates
//! everything positional, an open four dominates every three, and the
//! terminal score dominates even a five so that a decided game always
//! outranks any live position.

/// Score constants used by [`evaluate`](crate::eval::evaluate).
pub struct PatternScore;

impl PatternScore {
    /// Five or more in a row.
    pub const FIVE: i64 = 1_000_000;
    /// Four with at least one open end.
    pub const OPEN_FOUR: i64 = 100_000;
    /// Three open on both ends.
    pub const OPEN_THREE: i64 = 10_000;
    /// Three with one internal gap and an open end.
    pub const SPLIT_THREE: i64 = 8_000;
    /// Four with both ends blocked.
    pub const CLOSED_FOUR: i64 = 5_000;
    /// Three open on exactly one end.
    pub const CLOSED_THREE: i64 = 1_000;
    /// Two open on both ends.
    pub const OPEN_TWO: i64 = 500;

    /// Per captured stone.
    pub const CAPTURE_STONE: i64 = 50_000;
    /// Per unit of center proximity.
    pub const CENTER_UNIT: i64 = 50;

    /// Decided-game score, outranking any combination of live shapes.
    pub const TERMINAL: i64 = Self::FIVE * 10;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_hierarchy() {
        assert!(PatternScore::TERMINAL > PatternScore::FIVE);
        assert!(PatternScore::FIVE > PatternScore::OPEN_FOUR);
        assert!(PatternScore::OPEN_FOUR > PatternScore::OPEN_THREE);
        assert!(PatternScore::OPEN_THREE > PatternScore::SPLIT_THREE);
        assert!(PatternScore::SPLIT_THREE > PatternScore::CLOSED_FOUR);
        assert!(PatternScore::CLOSED_FOUR > PatternScore::CLOSED_THREE);
        assert!(PatternScore::CLOSED_THREE > PatternScore::OPEN_TWO);
        assert!(PatternScore::OPEN_TWO > 0);
    }

    #[test]
    fn test_capture_outweighs_open_three() {
        assert!(PatternScore::CAPTURE_STONE > PatternScore::OPEN_THREE);
    }
}

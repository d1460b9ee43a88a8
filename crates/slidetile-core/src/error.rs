//! Error types for board construction and slide application.

use crate::Direction;

/// Errors produced when a tile sequence does not describe a valid board.
#[derive(
    Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::IsVariant,
)]
pub enum BoardError {
    /// The requested grid dimension is outside the supported range.
    #[display("unsupported board dimension {dimension} (expected 2..=255)")]
    UnsupportedDimension {
        /// The rejected dimension.
        dimension: usize,
    },
    /// The number of tiles is not `dimension²`.
    #[display("expected {expected} tiles, got {actual}")]
    WrongLength {
        /// Required tile count.
        expected: usize,
        /// Supplied tile count.
        actual: usize,
    },
    /// The tile count is not a perfect square, so no dimension can be inferred.
    #[display("{len} tiles do not form a square board")]
    NotSquare {
        /// Supplied tile count.
        len: usize,
    },
    /// A tile value is larger than `dimension² - 1`.
    #[display("tile value {value} at index {index} is out of range 0..={max}")]
    ValueOutOfRange {
        /// Linear index of the offending tile.
        index: usize,
        /// The offending value.
        value: u16,
        /// The largest permitted value.
        max: u16,
    },
    /// A tile value appears more than once (and therefore another is missing).
    #[display("tile value {value} appears more than once")]
    DuplicateValue {
        /// The repeated value.
        value: u16,
    },
    /// A token in a textual board could not be parsed as a tile value.
    #[display("invalid tile value {token:?}")]
    ParseValue {
        /// The token that failed to parse.
        token: String,
    },
}

/// Errors produced when a slide cannot be applied to a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SlideError {
    /// No tile is positioned to move in the requested direction.
    #[display("no tile can slide {direction}")]
    IllegalSlide {
        /// The requested direction.
        direction: Direction,
    },
    /// The tile exists but is not the one next to the blank in that direction.
    #[display("tile {tile} is not adjacent to the blank in that direction")]
    NotAdjacent {
        /// The requested tile.
        tile: u16,
    },
}

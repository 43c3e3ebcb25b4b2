//! Error types for the checkers engine
//!
//! Fatal conditions (bad configuration, out-of-bounds queries, caller bugs)
//! are surfaced as [`CheckersError`]. Expected game outcomes — a disallowed
//! move, an empty move menu, the AI having no move — are ordinary return
//! values, never errors.

use thiserror::Error;

/// Errors raised by board construction and board queries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckersError {
    /// Board size below the playable minimum of 3.
    #[error("board size {0} is below the minimum of 3")]
    BoardTooSmall(usize),

    /// Board size not representable by the cell coordinate type.
    #[error("board size {0} exceeds the maximum of 255")]
    BoardTooLarge(usize),

    /// Player rows must leave at least two neutral rows between the sides.
    #[error("{player_rows} player rows leave fewer than 2 neutral rows on a board of size {size}")]
    NotEnoughNeutralRows { size: usize, player_rows: usize },

    /// Coordinate query outside `[0, size)`.
    #[error("coordinates ({x}, {y}) out of bounds for board of size {size}")]
    OutOfBounds { x: usize, y: usize, size: usize },

    /// Pieces may only occupy legal (dark) cells.
    #[error("cell ({x}, {y}) is not a legal piece cell")]
    IllegalCell { x: u8, y: u8 },

    /// Move queries require an actual player, not the neutral owner.
    #[error("move query for the neutral player")]
    NeutralPlayer,
}

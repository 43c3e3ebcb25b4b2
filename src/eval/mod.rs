//! Position evaluation
//!
//! Static evaluation used at the leaves of the game-tree search.

pub mod heuristic;

pub use heuristic::{evaluate, KING_BONUS, PIECE_VALUE};

//! Game-tree search for the checkers AI
//!
//! Depth-limited minimax with alpha-beta pruning over cloned board
//! snapshots. Every expanded node owns an independent copy of the board,
//! so sibling branches can never alias each other's state.

pub mod minimax;

pub use minimax::{SearchOutcome, Searcher};

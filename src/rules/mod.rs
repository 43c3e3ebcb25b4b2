//! Game rules for checkers
//!
//! This module implements the rule set driven by the five configuration
//! toggles:
//! - Plain movement (men forward, kings stepping or flying)
//! - Capture chains (multi-jump enumeration, mandatory longest capture)
//! - Game-end conditions (wins, draws, the 25-king-move rule)

pub mod capture;
pub mod game_end;
pub mod moves;

// Re-exports for convenient access
pub use capture::{capture_tree, CaptureNodeId, CaptureTree};
pub use game_end::{game_end, GameEnd, GameEndReason, KING_MOVE_DRAW_LIMIT};
pub use moves::plain_destinations;

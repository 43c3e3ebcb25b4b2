//! # Checkers Engine
//!
//! A configurable checkers (draughts) rules engine with an alpha-beta
//! minimax AI.
//!
//! ## Features
//!
//! - **Configurable rules**: board size, starting rows, flying kings,
//!   backward moves and captures, mandatory captures
//! - **Full capture logic**: multi-jump chains enumerated as a tree,
//!   longest-chain enforcement when captures are mandatory
//! - **Game-end detection**: wins by elimination or immobilization,
//!   draws by king-vs-king or prolonged king shuffling
//! - **Alpha-beta search**: fixed-depth minimax with a material and
//!   positional evaluation
//! - **Serializable state**: board and configuration round-trip through
//!   serde for saved games
//!
//! ## Quick Start
//!
//! ```
//! use checkers::{AiPlayer, Board, GameConfig, Player};
//!
//! // Standard 8x8 board, three rows of men per side.
//! let mut board = Board::new(&GameConfig::default()).unwrap();
//!
//! // Let the AI pick a move for White and play it.
//! let ai = AiPlayer::new(Player::White, 4).unwrap();
//! let chosen = ai.get_move(&board).unwrap();
//! assert!(board.attempt_move(chosen.src, chosen.destination.pos).unwrap());
//!
//! // Nobody has won after a single opening move.
//! assert!(board.game_end().unwrap().is_none());
//! ```
//!
//! ## Architecture
//!
//! - [`board`]: cells, pieces, move application, and the movable-piece
//!   cache
//! - [`rules`]: plain-move and capture-chain generation, end-of-game
//!   detection
//! - [`eval`]: static position evaluation
//! - [`search`]: alpha-beta minimax
//! - [`engine`]: the [`AiPlayer`] facade with search statistics

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;

pub use board::{Board, Cell, Destination, MovableEntries, PieceType, Player, Pos};
pub use config::GameConfig;
pub use engine::{AiMove, AiPlayer};
pub use error::CheckersError;
pub use eval::evaluate;
pub use rules::{GameEnd, GameEndReason, KING_MOVE_DRAW_LIMIT};
pub use search::{SearchOutcome, Searcher};

//! AI player: the move-selection entry point
//!
//! Thin orchestration over [`Searcher`](crate::search::Searcher): runs the
//! alpha-beta search for one side and reports the chosen move together
//! with timing and node statistics. The caller drives the game loop and
//! is expected to check `Board::game_end()` before asking for a move.
//!
//! # Example
//!
//! ```
//! use checkers::{AiPlayer, Board, Player};
//!
//! let board = Board::with_size(8, 3).unwrap();
//! let ai = AiPlayer::new(Player::Black, 4).unwrap();
//!
//! if let Some(chosen) = ai.get_move(&board) {
//!     println!(
//!         "play {:?} -> {:?} (score {}, {} nodes, {}ms)",
//!         chosen.src, chosen.destination.pos, chosen.score, chosen.nodes, chosen.time_ms
//!     );
//! }
//! ```

use std::time::Instant;

use tracing::{debug, warn};

use crate::board::{Board, Destination, Player, Pos};
use crate::error::CheckersError;
use crate::search::Searcher;

/// A move chosen by the AI, with search statistics.
#[derive(Debug, Clone)]
pub struct AiMove {
    /// Cell the chosen piece moves from.
    pub src: Pos,
    /// Chosen destination, including any captures.
    pub destination: Destination,
    /// Backed-up score of the move from the AI's point of view.
    pub score: i32,
    /// Nodes expanded by the search.
    pub nodes: u64,
    /// Wall-clock time spent searching, in milliseconds.
    pub time_ms: u64,
}

/// AI player for one side of the board.
#[derive(Debug, Clone)]
pub struct AiPlayer {
    searcher: Searcher,
}

impl AiPlayer {
    /// Create an AI playing `player` with a fixed search depth in plies.
    pub fn new(player: Player, depth: u32) -> Result<Self, CheckersError> {
        Ok(Self {
            searcher: Searcher::new(player, depth)?,
        })
    }

    /// The side this AI plays.
    #[inline]
    pub fn player(&self) -> Player {
        self.searcher.player()
    }

    /// Choose a move for the current board.
    ///
    /// `None` means the AI has no legal move; callers should already know
    /// the game is over from `Board::game_end()`.
    pub fn get_move(&self, board: &Board) -> Option<AiMove> {
        let start = Instant::now();
        let outcome = self.searcher.choose_move(board);
        let time_ms = start.elapsed().as_millis() as u64;

        match outcome {
            Some(outcome) => {
                debug!(
                    player = ?self.player(),
                    src = ?outcome.src,
                    dst = ?outcome.destination.pos,
                    captures = outcome.destination.capture_len(),
                    score = outcome.score,
                    nodes = outcome.nodes,
                    time_ms,
                    "move selected"
                );
                Some(AiMove {
                    src: outcome.src,
                    destination: outcome.destination,
                    score: outcome.score,
                    nodes: outcome.nodes,
                    time_ms,
                })
            }
            None => {
                warn!(player = ?self.player(), "no legal move available");
                None
            }
        }
    }
}

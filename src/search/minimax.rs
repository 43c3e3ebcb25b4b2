//! Depth-limited alpha-beta minimax
//!
//! The search alternates AI and opponent plies, maximizing on the AI's
//! turns and minimizing on the opponent's, with an `alpha >= beta` cutoff
//! skipping the remaining siblings of a refuted node. Expansion stops at
//! the depth limit, at terminal boards (a finished game is never expanded
//! further) and at nodes where the active side has no legal move; all
//! three are scored by the static evaluation.
//!
//! Each child node applies its move to a fresh clone of the parent board.
//! This keeps branches fully isolated — the dominant cost of the search is
//! that cloning, which is a flat `Vec<Cell>` copy per node.
//!
//! # Example
//!
//! ```
//! use checkers::{Board, Player, Searcher};
//!
//! let board = Board::with_size(8, 3).unwrap();
//! let searcher = Searcher::new(Player::Black, 4).unwrap();
//!
//! let outcome = searcher.choose_move(&board).expect("opening position");
//! println!("best: {:?} -> {:?}", outcome.src, outcome.destination.pos);
//! ```

use tracing::trace;

use crate::board::{Board, Destination, Player, Pos};
use crate::error::CheckersError;
use crate::eval::evaluate;

/// Scores outside any reachable static evaluation.
const INF: i32 = i32::MAX / 2;

/// The move the search settled on, with its backed-up score.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Cell the chosen piece moves from.
    pub src: Pos,
    /// Chosen destination, including captures along the way.
    pub destination: Destination,
    /// Backed-up minimax score of the move.
    pub score: i32,
    /// Number of nodes expanded, including the root's children.
    pub nodes: u64,
}

/// Depth-limited alpha-beta searcher for one AI side.
#[derive(Debug, Clone)]
pub struct Searcher {
    ai: Player,
    opponent: Player,
    depth: u32,
}

impl Searcher {
    /// Create a searcher playing for `ai` with a fixed ply depth.
    pub fn new(ai: Player, depth: u32) -> Result<Self, CheckersError> {
        if ai == Player::None {
            return Err(CheckersError::NeutralPlayer);
        }
        Ok(Self {
            ai,
            opponent: ai.opponent(),
            depth,
        })
    }

    #[inline]
    pub fn player(&self) -> Player {
        self.ai
    }

    #[inline]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Pick the AI's move for `board`.
    ///
    /// Returns `None` when the AI has no legal move — callers are expected
    /// to have consulted `game_end()` first, so this is not an error.
    /// Children are expanded in sorted `(src, dst)` order and ties keep
    /// the first-evaluated child, making the choice deterministic.
    pub fn choose_move(&self, board: &Board) -> Option<SearchOutcome> {
        let mut root = board.clone();
        let moves = sorted_moves(&mut root, self.ai)?;

        let mut nodes = 0u64;
        let mut alpha = -INF;
        let mut best: Option<SearchOutcome> = None;

        for (src, destination) in moves {
            let mut child = board.clone();
            child.apply_destination(src, &destination);
            nodes += 1;

            let score = self.alpha_beta(child, self.depth.saturating_sub(1), false, alpha, INF, &mut nodes);
            trace!(?src, dst = ?destination.pos, score, "root move evaluated");

            if best.as_ref().map_or(true, |b| score > b.score) {
                best = Some(SearchOutcome {
                    src,
                    destination: destination.clone(),
                    score,
                    nodes: 0,
                });
            }
            alpha = alpha.max(score);
        }

        best.map(|mut outcome| {
            outcome.nodes = nodes;
            outcome
        })
    }

    fn alpha_beta(
        &self,
        mut board: Board,
        depth: u32,
        ai_turn: bool,
        mut alpha: i32,
        mut beta: i32,
        nodes: &mut u64,
    ) -> i32 {
        if depth == 0 || matches!(board.game_end(), Ok(Some(_))) {
            return evaluate(&board, self.ai);
        }

        let active = if ai_turn { self.ai } else { self.opponent };
        let Some(moves) = sorted_moves(&mut board, active) else {
            // The active side is stuck; score the position as it stands.
            return evaluate(&board, self.ai);
        };

        let mut best = if ai_turn { -INF } else { INF };

        for (src, destination) in moves {
            let mut child = board.clone();
            child.apply_destination(src, &destination);
            *nodes += 1;

            let score = self.alpha_beta(child, depth - 1, !ai_turn, alpha, beta, nodes);

            if ai_turn {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }
            if alpha >= beta {
                break;
            }
        }

        best
    }
}

/// Flatten the movable-entries map into a deterministically ordered list
/// of `(src, destination)` pairs. `None` when the player cannot act.
fn sorted_moves(board: &mut Board, player: Player) -> Option<Vec<(Pos, Destination)>> {
    let entries = board.movable_entries(player).ok()?;
    if entries.is_empty() {
        return None;
    }

    let mut moves: Vec<(Pos, Destination)> = entries
        .iter()
        .flat_map(|(src, destinations)| {
            destinations.iter().map(move |dest| (*src, dest.clone()))
        })
        .collect();
    moves.sort_by_key(|(src, dest)| (*src, dest.pos));
    Some(moves)
}

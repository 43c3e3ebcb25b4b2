//! Terminal-state detection
//!
//! A game ends in a win when one side has no pieces or no movable pieces
//! left, and in a draw on the 25-king-move rule, a bare king-versus-king
//! ending, or when neither side can move.

use serde::{Deserialize, Serialize};

use crate::board::{Board, PieceType, Player};
use crate::error::CheckersError;

/// Consecutive king-only, non-capturing plies that force a draw.
pub const KING_MOVE_DRAW_LIMIT: u32 = 25;

/// Why the game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEndReason {
    // Draws
    /// 25 king-only plies without a man move or a capture.
    TooManyKingMoves,
    /// Neither side has a movable piece.
    NoMovablePieces,
    /// Each side is down to a single king.
    KingVsKing,

    // Wins
    /// The opponent has no pieces remaining.
    OpponentNoPieces,
    /// The opponent has pieces but none of them can move.
    OpponentNotMovable,
}

/// How the game ended: the winner (or [`Player::None`] for a draw) and the
/// reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEnd {
    pub winner: Player,
    pub reason: GameEndReason,
}

impl GameEnd {
    fn draw(reason: GameEndReason) -> Self {
        Self {
            winner: Player::None,
            reason,
        }
    }

    fn win(winner: Player, reason: GameEndReason) -> Self {
        Self { winner, reason }
    }

    #[inline]
    pub fn is_draw(&self) -> bool {
        self.winner == Player::None
    }
}

#[derive(Default)]
struct SideCount {
    men: u32,
    kings: u32,
}

impl SideCount {
    fn total(&self) -> u32 {
        self.men + self.kings
    }

    fn bare_king(&self) -> bool {
        self.men == 0 && self.kings == 1
    }
}

/// Check whether the game on `board` is over. `None` while play continues.
pub fn game_end(board: &mut Board) -> Result<Option<GameEnd>, CheckersError> {
    if board.king_only_plies() >= KING_MOVE_DRAW_LIMIT {
        return Ok(Some(GameEnd::draw(GameEndReason::TooManyKingMoves)));
    }

    let mut white = SideCount::default();
    let mut black = SideCount::default();
    for cell in board.cells() {
        let side = match cell.player() {
            Player::White => &mut white,
            Player::Black => &mut black,
            Player::None => continue,
        };
        match cell.piece() {
            PieceType::King => side.kings += 1,
            _ => side.men += 1,
        }
    }

    if white.bare_king() && black.bare_king() {
        return Ok(Some(GameEnd::draw(GameEndReason::KingVsKing)));
    }

    if white.total() == 0 {
        return Ok(Some(GameEnd::win(
            Player::Black,
            GameEndReason::OpponentNoPieces,
        )));
    }
    if black.total() == 0 {
        return Ok(Some(GameEnd::win(
            Player::White,
            GameEndReason::OpponentNoPieces,
        )));
    }

    let white_movable = !board.movable_entries(Player::White)?.is_empty();
    let black_movable = !board.movable_entries(Player::Black)?.is_empty();

    Ok(match (white_movable, black_movable) {
        (false, false) => Some(GameEnd::draw(GameEndReason::NoMovablePieces)),
        (false, true) => Some(GameEnd::win(
            Player::Black,
            GameEndReason::OpponentNotMovable,
        )),
        (true, false) => Some(GameEnd::win(
            Player::White,
            GameEndReason::OpponentNotMovable,
        )),
        (true, true) => None,
    })
}

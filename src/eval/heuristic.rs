//! Static board evaluation
//!
//! A decomposable sum over occupied cells, scored from the AI's point of
//! view: material dominates, with small positional terms nudging pieces
//! toward the central files and toward the promotion row. No global board
//! features are used, so the function stays cheap at every search leaf.

use crate::board::{Board, PieceType, Player};

/// Material value of a single piece.
pub const PIECE_VALUE: i32 = 20;
/// Additional value of a promoted piece.
pub const KING_BONUS: i32 = 80;

/// Evaluate `board` from the point of view of `ai`.
///
/// Positive scores favor the AI. For each occupied cell the piece
/// contributes its material value, the king bonus where promoted, a
/// centrality term peaking on the middle files, and an advancement term
/// equal to the rows already covered toward the promotion row.
pub fn evaluate(board: &Board, ai: Player) -> i32 {
    let size = board.size() as i32;
    let half = size / 2;
    let mut value = 0;

    for cell in board.cells() {
        let owner = cell.player();
        if owner == Player::None {
            continue;
        }

        let mut piece_value = PIECE_VALUE;
        if cell.piece() == PieceType::King {
            piece_value += KING_BONUS;
        }

        // Central files are worth more than edge files.
        piece_value += half - (cell.x() as i32 + 1 - half).abs();

        // Rows already covered toward the promotion row.
        piece_value += match owner {
            Player::White => cell.y() as i32,
            _ => size - 1 - cell.y() as i32,
        };

        if owner == ai {
            value += piece_value;
        } else {
            value -= piece_value;
        }
    }

    value
}

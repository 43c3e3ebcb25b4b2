//! Plain (non-capturing) move generation
//!
//! Men step one diagonal cell, forward only unless backwards movement is
//! enabled. Kings step one cell in any direction, or slide along free
//! diagonals when the flying-king rule is on.

use crate::board::{Board, PieceType, Player, Pos, DIAGONALS};

/// Every free cell the piece at `pos` can step to without capturing.
///
/// Returns an empty list for an empty cell.
pub fn plain_destinations(board: &Board, pos: Pos) -> Vec<Pos> {
    let cell = board.cell(pos);
    match cell.piece() {
        PieceType::Man => man_destinations(board, pos, cell.player()),
        PieceType::King => king_destinations(board, pos),
        PieceType::None => Vec::new(),
    }
}

fn man_destinations(board: &Board, pos: Pos, player: Player) -> Vec<Pos> {
    let size = board.size();
    let mut destinations = Vec::new();

    for (dx, dy) in DIAGONALS {
        if !board.can_move_backwards() && dy != player.forward_dy() {
            continue;
        }
        if let Some(adjacent) = pos.offset(dx, dy, size) {
            if board.cell(adjacent).is_empty() {
                destinations.push(adjacent);
            }
        }
    }

    destinations
}

fn king_destinations(board: &Board, pos: Pos) -> Vec<Pos> {
    let size = board.size();
    let reach = if board.flying_king() { size as i32 } else { 1 };
    let mut destinations = Vec::new();

    for (dx, dy) in DIAGONALS {
        let mut step = 1i32;
        while step <= reach {
            let Some(target) = pos.offset(dx * step, dy * step, size) else {
                break;
            };
            if !board.cell(target).is_empty() {
                break;
            }
            destinations.push(target);
            step += 1;
        }
    }

    destinations
}

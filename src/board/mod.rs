//! Board representation for checkers
//!
//! The board is a square grid of [`Cell`]s. Pieces live only on the legal
//! (dark) cells, where `(x + y)` is odd. White starts on the low rows and
//! advances toward `y = size - 1`; Black starts on the high rows and
//! advances toward `y = 0`.

pub mod board;
pub mod cell;
pub mod destination;

use serde::{Deserialize, Serialize};

// Re-exports
pub use board::{Board, MovableEntries};
pub use cell::Cell;
pub use destination::Destination;

/// Piece owner. `None` marks an empty cell and is also used as the
/// "no winner" marker in draw results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    None,
    /// First player, starts on rows `0..player_rows`.
    White,
    /// Second player, starts on rows `size - player_rows..size`.
    Black,
}

impl Player {
    /// Get the opposing player.
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
            Player::None => Player::None,
        }
    }

    /// Forward direction along the y axis: White advances down the grid
    /// (increasing y), Black up (decreasing y).
    #[inline]
    pub fn forward_dy(self) -> i32 {
        match self {
            Player::White => 1,
            Player::Black => -1,
            Player::None => 0,
        }
    }
}

/// Kind of piece occupying a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceType {
    None,
    /// Unpromoted piece, steps one diagonal cell at a time.
    Man,
    /// Promoted piece, may slide along free diagonals (flying king rule).
    King,
}

/// Position on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Pos {
    pub x: u8,
    pub y: u8,
}

impl Pos {
    #[inline]
    pub fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Row-major index into a board of the given size.
    #[inline]
    pub fn to_index(self, size: usize) -> usize {
        self.y as usize * size + self.x as usize
    }

    /// Playable cells are the dark ones, where `x + y` is odd.
    #[inline]
    pub fn is_legal(self) -> bool {
        (self.x as u32 + self.y as u32) % 2 == 1
    }

    /// Offset by a signed delta, `None` when the result leaves the board.
    #[inline]
    pub fn offset(self, dx: i32, dy: i32, size: usize) -> Option<Pos> {
        let x = self.x as i32 + dx;
        let y = self.y as i32 + dy;
        if x >= 0 && y >= 0 && x < size as i32 && y < size as i32 {
            Some(Pos::new(x as u8, y as u8))
        } else {
            None
        }
    }
}

/// The four diagonal step directions as `(dx, dy)`.
pub(crate) const DIAGONALS: [(i32, i32); 4] = [(-1, -1), (1, -1), (-1, 1), (1, 1)];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Player::White.opponent(), Player::Black);
        assert_eq!(Player::Black.opponent(), Player::White);
        assert_eq!(Player::None.opponent(), Player::None);
    }

    #[test]
    fn test_legal_cells_are_dark() {
        assert!(!Pos::new(0, 0).is_legal());
        assert!(Pos::new(1, 0).is_legal());
        assert!(Pos::new(0, 1).is_legal());
        assert!(!Pos::new(1, 1).is_legal());
        assert!(Pos::new(2, 5).is_legal());
    }

    #[test]
    fn test_offset_stays_in_bounds() {
        let pos = Pos::new(0, 0);
        assert_eq!(pos.offset(-1, -1, 8), None);
        assert_eq!(pos.offset(1, 1, 8), Some(Pos::new(1, 1)));
        assert_eq!(Pos::new(7, 7).offset(1, 0, 8), None);
        assert_eq!(Pos::new(7, 7).offset(-1, -1, 8), Some(Pos::new(6, 6)));
    }

    #[test]
    fn test_to_index_row_major() {
        assert_eq!(Pos::new(0, 0).to_index(8), 0);
        assert_eq!(Pos::new(3, 2).to_index(8), 19);
        assert_eq!(Pos::new(7, 7).to_index(8), 63);
    }
}

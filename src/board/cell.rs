//! A single board cell: fixed coordinate, mutable occupant

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use super::{PieceType, Player, Pos};

/// One cell of the board.
///
/// The coordinate is fixed at construction; the occupant changes as moves
/// are applied. Equality and hashing use the coordinate only, so a cell
/// can be looked up across board clones regardless of what sits on it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Cell {
    x: u8,
    y: u8,
    pub(crate) player: Player,
    pub(crate) piece: PieceType,
}

impl Cell {
    pub(crate) fn new(x: u8, y: u8) -> Self {
        Self {
            x,
            y,
            player: Player::None,
            piece: PieceType::None,
        }
    }

    #[inline]
    pub fn x(&self) -> u8 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> u8 {
        self.y
    }

    #[inline]
    pub fn pos(&self) -> Pos {
        Pos::new(self.x, self.y)
    }

    /// Owner of the piece on this cell, `Player::None` when empty.
    #[inline]
    pub fn player(&self) -> Player {
        self.player
    }

    /// Kind of piece on this cell, `PieceType::None` when empty.
    #[inline]
    pub fn piece(&self) -> PieceType {
        self.piece
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.player == Player::None
    }

    /// Whether pieces may ever occupy this cell (dark cells only).
    #[inline]
    pub fn is_legal(&self) -> bool {
        self.pos().is_legal()
    }

    pub(crate) fn clear(&mut self) {
        self.player = Player::None;
        self.piece = PieceType::None;
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl Eq for Cell {}

impl Hash for Cell {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.hash(state);
        self.y.hash(state);
    }
}

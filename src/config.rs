//! Game configuration: board geometry and rule-variant flags
//!
//! The settings collaborator (preferences screen, config file, test setup)
//! produces one [`GameConfig`]; the engine reads it exactly once when a
//! [`Board`](crate::Board) is constructed. All five rule toggles of the
//! engine are here:
//!
//! - `can_move_backwards`: men may step diagonally backwards
//! - `can_capture_backwards`: men may jump diagonally backwards
//! - `flying_king`: kings slide any number of free cells
//! - `mandatory_capture`: the longest available capture must be played

use serde::{Deserialize, Serialize};

use crate::error::CheckersError;

/// Board geometry and rule flags, read once at board construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side length of the square board.
    pub grid_size: usize,
    /// Number of rows filled with each player's men.
    pub player_rows: usize,
    /// Men may move (not just capture) one step backwards.
    pub can_move_backwards: bool,
    /// Men may capture backwards.
    pub can_capture_backwards: bool,
    /// Kings slide along free diagonals instead of stepping one cell.
    pub flying_king: bool,
    /// A player with any capture must play a longest capture chain.
    pub mandatory_capture: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: 8,
            player_rows: 3,
            can_move_backwards: false,
            can_capture_backwards: true,
            flying_king: true,
            mandatory_capture: true,
        }
    }
}

impl GameConfig {
    /// Validate the geometry constraints raised at board construction.
    ///
    /// The board must be at least 3x3, fit the `u8` coordinate space, and
    /// keep at least two neutral rows between the two sides.
    pub fn validate(&self) -> Result<(), CheckersError> {
        if self.grid_size < 3 {
            return Err(CheckersError::BoardTooSmall(self.grid_size));
        }
        if self.grid_size > u8::MAX as usize {
            return Err(CheckersError::BoardTooLarge(self.grid_size));
        }
        if self.grid_size < self.player_rows * 2 + 2 {
            return Err(CheckersError::NotEnoughNeutralRows {
                size: self.grid_size,
                player_rows: self.player_rows,
            });
        }
        Ok(())
    }

    /// Backwards movement only makes sense together with flying kings;
    /// the flag is forced off otherwise.
    #[inline]
    pub fn effective_can_move_backwards(&self) -> bool {
        self.flying_king && self.can_move_backwards
    }
}

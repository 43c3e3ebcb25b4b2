//! Board state: grid ownership, move menus, move application
//!
//! The board owns one [`Cell`] per coordinate and answers the questions the
//! UI and the search both ask: "what can this player do" and "apply this
//! move". The full move/capture menu is computed at most once per position
//! per player — it is cached on the board and invalidated by every
//! committed mutation.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{Cell, Destination, PieceType, Player, Pos};
use crate::config::GameConfig;
use crate::error::CheckersError;
use crate::rules::capture::capture_tree;
use crate::rules::game_end::{self, GameEnd};
use crate::rules::moves::plain_destinations;

/// Move/capture menu for one player: each cell that can act, mapped to the
/// list of outcomes it can reach.
pub type MovableEntries = HashMap<Pos, Vec<Destination>>;

#[derive(Debug, Clone)]
struct MovableCache {
    player: Player,
    entries: MovableEntries,
}

/// The checkers board.
///
/// Construction places each side's men on the legal cells of its
/// `player_rows` starting rows. Rule flags are read once from the
/// [`GameConfig`] and fixed for the lifetime of the board.
///
/// Serialization captures the full game state (cells, flags, draw
/// counter); the move cache is rebuilt on demand and not serialized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    config: GameConfig,
    cells: Vec<Cell>,
    /// Consecutive king-only, non-capturing plies (forced-draw rule).
    king_only_plies: u32,
    #[serde(skip)]
    cache: Option<MovableCache>,
}

impl Board {
    /// Build a board from a validated configuration.
    ///
    /// Fails when the board is smaller than 3, larger than the coordinate
    /// space, or the player rows leave fewer than two neutral rows.
    pub fn new(config: &GameConfig) -> Result<Self, CheckersError> {
        config.validate()?;

        let mut config = *config;
        // Backwards movement is only meaningful with flying kings.
        config.can_move_backwards = config.effective_can_move_backwards();

        let size = config.grid_size;
        let mut cells = Vec::with_capacity(size * size);
        for i in 0..size * size {
            let x = (i % size) as u8;
            let y = (i / size) as u8;
            let mut cell = Cell::new(x, y);

            if cell.is_legal() {
                if (y as usize) < config.player_rows {
                    cell.player = Player::White;
                    cell.piece = PieceType::Man;
                } else if y as usize >= size - config.player_rows {
                    cell.player = Player::Black;
                    cell.piece = PieceType::Man;
                }
            }

            cells.push(cell);
        }

        Ok(Self {
            config,
            cells,
            king_only_plies: 0,
            cache: None,
        })
    }

    /// Build a board with custom geometry and the default rule flags.
    pub fn with_size(size: usize, player_rows: usize) -> Result<Self, CheckersError> {
        Self::new(&GameConfig {
            grid_size: size,
            player_rows,
            ..GameConfig::default()
        })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.config.grid_size
    }

    #[inline]
    pub fn player_rows(&self) -> usize {
        self.config.player_rows
    }

    #[inline]
    pub fn can_move_backwards(&self) -> bool {
        self.config.can_move_backwards
    }

    #[inline]
    pub fn can_capture_backwards(&self) -> bool {
        self.config.can_capture_backwards
    }

    #[inline]
    pub fn flying_king(&self) -> bool {
        self.config.flying_king
    }

    #[inline]
    pub fn mandatory_capture(&self) -> bool {
        self.config.mandatory_capture
    }

    /// The configuration this board was built from.
    #[inline]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Consecutive king-only, non-capturing plies played so far.
    #[inline]
    pub fn king_only_plies(&self) -> u32 {
        self.king_only_plies
    }

    /// Cell lookup for a position already known to be on the board.
    #[inline]
    pub(crate) fn cell(&self, pos: Pos) -> &Cell {
        &self.cells[pos.to_index(self.size())]
    }

    /// Bounds-checked cell lookup.
    pub fn entry(&self, pos: Pos) -> Result<&Cell, CheckersError> {
        self.entry_at(pos.x as usize, pos.y as usize)
    }

    /// Bounds-checked cell lookup by raw coordinates.
    pub fn entry_at(&self, x: usize, y: usize) -> Result<&Cell, CheckersError> {
        let size = self.size();
        if x >= size || y >= size {
            return Err(CheckersError::OutOfBounds { x, y, size });
        }
        Ok(&self.cells[y * size + x])
    }

    /// Iterate over all cells in row-major order (for rendering).
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Place, replace or remove a piece, bypassing the movement rules.
    ///
    /// Intended for position setup (tests, editors, resuming a saved
    /// game). Pieces may only be placed on legal cells; passing
    /// `Player::None` clears the cell. Invalidates the move cache.
    pub fn place_piece(
        &mut self,
        pos: Pos,
        player: Player,
        piece: PieceType,
    ) -> Result<(), CheckersError> {
        self.entry(pos)?;
        if player != Player::None && !pos.is_legal() {
            return Err(CheckersError::IllegalCell { x: pos.x, y: pos.y });
        }

        let idx = pos.to_index(self.size());
        if player == Player::None {
            self.cells[idx].clear();
        } else {
            self.cells[idx].player = player;
            self.cells[idx].piece = piece;
        }
        self.cache = None;
        Ok(())
    }

    /// The full move/capture menu for `player`.
    ///
    /// Captures are enumerated first across all pieces; when captures are
    /// mandatory, only the chains tied for the globally longest length
    /// survive and plain moves are suppressed. Otherwise plain moves and
    /// every capture prefix are all offered. The result is cached until
    /// the next committed mutation.
    pub fn movable_entries(&mut self, player: Player) -> Result<&MovableEntries, CheckersError> {
        if player == Player::None {
            return Err(CheckersError::NeutralPlayer);
        }

        let cache = match self.cache.take() {
            Some(cached) if cached.player == player => self.cache.insert(cached),
            _ => {
                let entries = self.compute_movable_entries(player);
                self.cache.insert(MovableCache { player, entries })
            }
        };

        Ok(&cache.entries)
    }

    fn compute_movable_entries(&self, player: Player) -> MovableEntries {
        let own_pieces: Vec<Pos> = self
            .cells
            .iter()
            .filter(|cell| cell.player() == player)
            .map(Cell::pos)
            .collect();

        // Enumerate captures first: the globally longest chain length
        // decides what is allowed when captures are mandatory.
        let mut capture_menus = Vec::new();
        let mut longest = 1u32;
        for &pos in &own_pieces {
            let tree = capture_tree(self, pos);
            if tree.is_empty() {
                continue;
            }
            let candidates = if self.mandatory_capture() {
                tree.longest_captures()
            } else {
                tree.all_captures()
            };
            for &id in &candidates {
                longest = longest.max(tree.length(id));
            }
            capture_menus.push((pos, tree, candidates));
        }

        let mut entries = MovableEntries::new();

        // Plain moves are only on the menu when captures are optional or
        // nobody can capture.
        if !self.mandatory_capture() || capture_menus.is_empty() {
            for &pos in &own_pieces {
                let steps = plain_destinations(self, pos);
                if !steps.is_empty() {
                    entries.insert(pos, steps.into_iter().map(Destination::step).collect());
                }
            }
        }

        for (pos, tree, candidates) in capture_menus {
            let destinations: Vec<Destination> = candidates
                .into_iter()
                .filter(|&id| !self.mandatory_capture() || tree.length(id) == longest)
                .map(|id| tree.destination(id))
                .collect();
            if !destinations.is_empty() {
                entries.entry(pos).or_default().extend(destinations);
            }
        }

        entries
    }

    /// Find the destination describing a move from `src` to `dst`, if the
    /// move is currently legal. `src == dst` is a legal no-op.
    pub fn destination(&mut self, src: Pos, dst: Pos) -> Result<Option<Destination>, CheckersError> {
        self.entry(dst)?;
        if src == dst {
            return Ok(Some(Destination::step(src)));
        }

        let player = self.entry(src)?.player();
        let entries = self.movable_entries(player)?;
        Ok(entries
            .get(&src)
            .and_then(|list| list.iter().find(|dest| dest.pos == dst))
            .cloned())
    }

    /// Whether moving from `src` to `dst` is currently legal.
    pub fn destination_allowed(&mut self, src: Pos, dst: Pos) -> Result<bool, CheckersError> {
        Ok(self.destination(src, dst)?.is_some())
    }

    /// Try to play the move from `src` to `dst`.
    ///
    /// Returns `Ok(false)` and leaves the board untouched when the move is
    /// not on the menu. On success the piece moves, captured pieces are
    /// removed, a man reaching its farthest row is promoted atomically
    /// with the move, the draw counter is updated and the move cache is
    /// invalidated.
    pub fn attempt_move(&mut self, src: Pos, dst: Pos) -> Result<bool, CheckersError> {
        if src == dst {
            // No-op, accepted as legal without touching the board.
            self.entry(src)?;
            return Ok(true);
        }

        let Some(destination) = self.destination(src, dst)? else {
            return Ok(false);
        };

        self.apply_destination(src, &destination);
        Ok(true)
    }

    /// Try to play one exact destination from the menu.
    ///
    /// `attempt_move` matches a menu entry by its landing cell alone,
    /// which is ambiguous when two optional capture chains from the same
    /// source end on the same cell with different victims. Callers that
    /// already hold the full [`Destination`] (the AI does) use this to
    /// play precisely that chain. Returns `Ok(false)` when it is not on
    /// the menu.
    pub fn apply(&mut self, src: Pos, destination: &Destination) -> Result<bool, CheckersError> {
        self.entry(destination.pos)?;
        let player = self.entry(src)?.player();
        let entries = self.movable_entries(player)?;
        if !entries
            .get(&src)
            .map_or(false, |list| list.contains(destination))
        {
            return Ok(false);
        }

        self.apply_destination(src, destination);
        Ok(true)
    }

    /// Apply an already-validated destination. Used by `attempt_move` and
    /// by the search when expanding pre-validated `(src, destination)`
    /// pairs on cloned boards.
    pub(crate) fn apply_destination(&mut self, src: Pos, destination: &Destination) {
        let size = self.size();
        let src_idx = src.to_index(size);
        let player = self.cells[src_idx].player();
        let piece = self.cells[src_idx].piece();

        self.cells[src_idx].clear();
        for captured in &destination.captured {
            self.cells[captured.to_index(size)].clear();
        }

        let promoted =
            piece == PieceType::Man && destination.pos.y == self.promotion_row(player);
        let dst_idx = destination.pos.to_index(size);
        self.cells[dst_idx].player = player;
        self.cells[dst_idx].piece = if promoted { PieceType::King } else { piece };

        // The forced-draw counter survives only sequences of quiet king
        // moves; any capture or man move resets it.
        if destination.is_capture() || piece == PieceType::Man {
            self.king_only_plies = 0;
        } else {
            self.king_only_plies += 1;
        }

        self.cache = None;
    }

    /// The row on which `player`'s men promote to kings.
    #[inline]
    pub fn promotion_row(&self, player: Player) -> u8 {
        match player {
            Player::White => (self.size() - 1) as u8,
            _ => 0,
        }
    }

    /// Check whether the game has ended. `None` while play continues.
    pub fn game_end(&mut self) -> Result<Option<GameEnd>, CheckersError> {
        game_end::game_end(self)
    }
}

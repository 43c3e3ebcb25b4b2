//! Multi-jump capture enumeration
//!
//! Builds, for one piece, the full tree of capture sequences available in
//! a single turn. Each node is a partial sequence: the cell the piece
//! lands on, the enemy piece it just jumped, and a link to the previous
//! jump. Every prefix of a longer chain is itself a valid (shorter)
//! capture, which matters when captures are optional and the player may
//! stop early.
//!
//! The board is never mutated while the tree is built: captured pieces
//! stay on the board, block further jumps over the same cell, and are
//! tracked per-path so no piece is captured twice in one turn.

use crate::board::{Board, Destination, Player, Pos, DIAGONALS};

/// Index of a node inside a [`CaptureTree`].
pub type CaptureNodeId = usize;

/// One partial capture sequence.
#[derive(Debug, Clone)]
struct CaptureNode {
    /// Cell the piece occupies after this jump (the origin at the root).
    landing: Pos,
    /// Enemy piece removed by this jump, `None` at the root.
    captured: Option<Pos>,
    parent: Option<CaptureNodeId>,
    /// Number of jumps from the root, 0 at the root.
    length: u32,
    children: Vec<CaptureNodeId>,
}

/// Tree of every capture sequence one piece can play this turn.
#[derive(Debug, Clone)]
pub struct CaptureTree {
    nodes: Vec<CaptureNode>,
}

impl CaptureTree {
    fn new(origin: Pos) -> Self {
        Self {
            nodes: vec![CaptureNode {
                landing: origin,
                captured: None,
                parent: None,
                length: 0,
                children: Vec::new(),
            }],
        }
    }

    fn add(&mut self, parent: CaptureNodeId, landing: Pos, captured: Pos) -> CaptureNodeId {
        let id = self.nodes.len();
        let length = self.nodes[parent].length + 1;
        self.nodes.push(CaptureNode {
            landing,
            captured: Some(captured),
            parent: Some(parent),
            length,
            children: Vec::new(),
        });
        self.nodes[parent].children.push(id);
        id
    }

    /// Whether `pos` was already captured on the path from the root to
    /// `node`. A piece cannot be captured twice in the same turn.
    fn captured_on_path(&self, node: CaptureNodeId, pos: Pos) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if self.nodes[id].captured == Some(pos) {
                return true;
            }
            current = self.nodes[id].parent;
        }
        false
    }

    /// True when the piece has no capture at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Length of the longest capture sequence in this tree.
    pub fn max_length(&self) -> u32 {
        self.nodes.iter().map(|n| n.length).max().unwrap_or(0)
    }

    /// Every non-root node: each prefix of a full sequence is a valid
    /// capture the player may choose when captures are optional.
    pub fn all_captures(&self) -> Vec<CaptureNodeId> {
        (1..self.nodes.len()).collect()
    }

    /// Endpoints (non-root nodes with no further jump) tied for the
    /// longest sequence, used to enforce mandatory capture.
    pub fn longest_captures(&self) -> Vec<CaptureNodeId> {
        let max = self.max_length();
        if max == 0 {
            return Vec::new();
        }
        (1..self.nodes.len())
            .filter(|&id| self.nodes[id].children.is_empty() && self.nodes[id].length == max)
            .collect()
    }

    /// Number of jumps in the sequence ending at `node`.
    #[inline]
    pub fn length(&self, node: CaptureNodeId) -> u32 {
        self.nodes[node].length
    }

    /// Rebuild the ordered capture information for `node` by walking the
    /// parent links back to the root.
    pub fn destination(&self, node: CaptureNodeId) -> Destination {
        let mut captured = Vec::new();
        let mut intermediate = Vec::new();

        let mut current = Some(node);
        while let Some(id) = current {
            let n = &self.nodes[id];
            if let Some(piece) = n.captured {
                captured.push(piece);
                if id != node {
                    intermediate.push(n.landing);
                }
            }
            current = n.parent;
        }

        // Parent walk yields newest-first; destinations are oldest-first.
        captured.reverse();
        intermediate.reverse();

        Destination {
            pos: self.nodes[node].landing,
            captured,
            intermediate,
        }
    }
}

/// Enumerate every capture sequence available to the piece at `origin`.
///
/// Returns a tree with only the root when the cell is empty or the piece
/// has no capture.
pub fn capture_tree(board: &Board, origin: Pos) -> CaptureTree {
    let mut tree = CaptureTree::new(origin);
    let cell = board.cell(origin);

    match cell.piece() {
        crate::board::PieceType::Man => extend_man(board, &mut tree, 0, cell.player()),
        crate::board::PieceType::King => extend_king(board, &mut tree, 0, cell.player()),
        crate::board::PieceType::None => {}
    }

    tree
}

/// Extend a man's capture sequence from the node's landing cell: jump an
/// adjacent enemy onto the free cell immediately beyond it.
fn extend_man(board: &Board, tree: &mut CaptureTree, node: CaptureNodeId, player: Player) {
    let from = tree.nodes[node].landing;
    let size = board.size();

    for (dx, dy) in DIAGONALS {
        if !board.can_capture_backwards() && dy != player.forward_dy() {
            continue;
        }

        let Some(adjacent) = from.offset(dx, dy, size) else {
            continue;
        };
        let victim = board.cell(adjacent);
        if victim.is_empty() || victim.player() == player {
            continue;
        }
        if tree.captured_on_path(node, adjacent) {
            continue;
        }

        let Some(beyond) = adjacent.offset(dx, dy, size) else {
            continue;
        };
        if !board.cell(beyond).is_empty() {
            continue;
        }

        let child = tree.add(node, beyond, adjacent);
        extend_man(board, tree, child, player);
    }
}

/// Extend a king's capture sequence. With the flying rule the king slides
/// over free cells to the first blocker; an enemy blocker not yet captured
/// this turn can be jumped, and every free cell beyond it is a landing.
/// Without the flying rule the blocker must be adjacent and the landing is
/// the single cell beyond it.
fn extend_king(board: &Board, tree: &mut CaptureTree, node: CaptureNodeId, player: Player) {
    let from = tree.nodes[node].landing;
    let size = board.size();
    let reach = if board.flying_king() { size as i32 } else { 1 };

    for (dx, dy) in DIAGONALS {
        // Slide to the first occupied cell in this direction.
        let mut blocker = None;
        let mut step = 1i32;
        while step <= reach {
            let Some(pos) = from.offset(dx * step, dy * step, size) else {
                break;
            };
            if !board.cell(pos).is_empty() {
                blocker = Some(pos);
                break;
            }
            step += 1;
        }

        let Some(victim) = blocker else { continue };
        if board.cell(victim).player() == player {
            continue;
        }
        // An already-captured piece stays on the board until the turn ends
        // and cannot be jumped a second time.
        if tree.captured_on_path(node, victim) {
            continue;
        }

        let mut landing_step = 1i32;
        while landing_step <= reach {
            let Some(landing) = victim.offset(dx * landing_step, dy * landing_step, size) else {
                break;
            };
            if !board.cell(landing).is_empty() {
                break;
            }
            let child = tree.add(node, landing, victim);
            extend_king(board, tree, child, player);
            landing_step += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::PieceType;
    use crate::config::GameConfig;

    fn empty_board(size: usize) -> Board {
        let config = GameConfig {
            grid_size: size,
            player_rows: 0,
            ..GameConfig::default()
        };
        Board::new(&config).unwrap()
    }

    #[test]
    fn test_no_capture_for_lone_piece() {
        let mut board = empty_board(8);
        board
            .place_piece(Pos::new(2, 1), Player::White, PieceType::Man)
            .unwrap();

        let tree = capture_tree(&board, Pos::new(2, 1));
        assert!(tree.is_empty());
        assert_eq!(tree.max_length(), 0);
        assert!(tree.longest_captures().is_empty());
    }

    #[test]
    fn test_single_man_capture() {
        let mut board = empty_board(8);
        board
            .place_piece(Pos::new(2, 1), Player::White, PieceType::Man)
            .unwrap();
        board
            .place_piece(Pos::new(3, 2), Player::Black, PieceType::Man)
            .unwrap();

        let tree = capture_tree(&board, Pos::new(2, 1));
        let endpoints = tree.longest_captures();
        assert_eq!(endpoints.len(), 1);

        let dest = tree.destination(endpoints[0]);
        assert_eq!(dest.pos, Pos::new(4, 3));
        assert_eq!(dest.captured, vec![Pos::new(3, 2)]);
        assert!(dest.intermediate.is_empty());
    }

    #[test]
    fn test_double_jump_chain() {
        // White man at (2,1) jumps (3,2) to (4,3), then (5,4) to (6,5).
        let mut board = empty_board(8);
        board
            .place_piece(Pos::new(2, 1), Player::White, PieceType::Man)
            .unwrap();
        board
            .place_piece(Pos::new(3, 2), Player::Black, PieceType::Man)
            .unwrap();
        board
            .place_piece(Pos::new(5, 4), Player::Black, PieceType::Man)
            .unwrap();

        let tree = capture_tree(&board, Pos::new(2, 1));
        assert_eq!(tree.max_length(), 2);

        let endpoints = tree.longest_captures();
        assert_eq!(endpoints.len(), 1);
        let dest = tree.destination(endpoints[0]);
        assert_eq!(dest.pos, Pos::new(6, 5));
        assert_eq!(dest.captured, vec![Pos::new(3, 2), Pos::new(5, 4)]);
        assert_eq!(dest.intermediate, vec![Pos::new(4, 3)]);

        // The one-jump prefix is still an available (shorter) capture.
        assert_eq!(tree.all_captures().len(), 2);
    }

    #[test]
    fn test_capture_paths_never_repeat_a_victim() {
        // Ring of black men around a white man so chains could loop back.
        let mut board = empty_board(8);
        board
            .place_piece(Pos::new(3, 2), Player::White, PieceType::Man)
            .unwrap();
        for pos in [
            Pos::new(4, 3),
            Pos::new(2, 3),
            Pos::new(4, 5),
            Pos::new(2, 5),
        ] {
            board.place_piece(pos, Player::Black, PieceType::Man).unwrap();
        }

        let tree = capture_tree(&board, Pos::new(3, 2));
        for id in tree.all_captures() {
            let dest = tree.destination(id);
            let mut seen = dest.captured.clone();
            seen.sort();
            seen.dedup();
            assert_eq!(seen.len(), dest.captured.len());
        }
    }

    #[test]
    fn test_backwards_capture_disabled() {
        let config = GameConfig {
            player_rows: 0,
            can_capture_backwards: false,
            ..GameConfig::default()
        };
        let mut board = Board::new(&config).unwrap();
        // The only capture would be backwards (toward y = 0 for White).
        board
            .place_piece(Pos::new(4, 5), Player::White, PieceType::Man)
            .unwrap();
        board
            .place_piece(Pos::new(3, 4), Player::Black, PieceType::Man)
            .unwrap();

        let tree = capture_tree(&board, Pos::new(4, 5));
        assert!(tree.is_empty());
    }

    #[test]
    fn test_flying_king_captures_at_distance() {
        // King at (1,0), enemy at (5,4), free cells beyond at (6,5), (7,6).
        let mut board = empty_board(8);
        board
            .place_piece(Pos::new(1, 0), Player::White, PieceType::King)
            .unwrap();
        board
            .place_piece(Pos::new(5, 4), Player::Black, PieceType::Man)
            .unwrap();

        let tree = capture_tree(&board, Pos::new(1, 0));
        let destinations: Vec<Pos> = tree
            .all_captures()
            .iter()
            .map(|&id| tree.destination(id).pos)
            .collect();
        assert!(destinations.contains(&Pos::new(6, 5)));
        assert!(destinations.contains(&Pos::new(7, 6)));
        assert_eq!(destinations.len(), 2);
    }

    #[test]
    fn test_short_king_must_be_adjacent() {
        let config = GameConfig {
            player_rows: 0,
            flying_king: false,
            ..GameConfig::default()
        };
        let mut board = Board::new(&config).unwrap();
        board
            .place_piece(Pos::new(1, 0), Player::White, PieceType::King)
            .unwrap();
        board
            .place_piece(Pos::new(5, 4), Player::Black, PieceType::Man)
            .unwrap();

        // Distant enemy is out of reach without the flying rule.
        assert!(capture_tree(&board, Pos::new(1, 0)).is_empty());

        // Adjacent enemy is jumped onto the single cell beyond.
        board
            .place_piece(Pos::new(2, 1), Player::Black, PieceType::Man)
            .unwrap();
        let tree = capture_tree(&board, Pos::new(1, 0));
        let endpoints = tree.longest_captures();
        assert_eq!(endpoints.len(), 1);
        assert_eq!(tree.destination(endpoints[0]).pos, Pos::new(3, 2));
    }

    #[test]
    fn test_own_piece_blocks_king_ray() {
        let mut board = empty_board(8);
        board
            .place_piece(Pos::new(1, 0), Player::White, PieceType::King)
            .unwrap();
        board
            .place_piece(Pos::new(3, 2), Player::White, PieceType::Man)
            .unwrap();
        board
            .place_piece(Pos::new(5, 4), Player::Black, PieceType::Man)
            .unwrap();

        assert!(capture_tree(&board, Pos::new(1, 0)).is_empty());
    }
}

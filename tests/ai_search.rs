//! AI search tests
//!
//! End-to-end behavior of the alpha-beta player: legal output,
//! determinism, tactical preferences, and self-play invariants.

use checkers::{AiPlayer, Board, GameConfig, PieceType, Player, Pos, Searcher};

fn place(board: &mut Board, pos: Pos, player: Player, piece: PieceType) {
    board.place_piece(pos, player, piece).unwrap();
}

// =============================================================================
// Basic contract
// =============================================================================

/// The chosen move is always on the board's own menu.
#[test]
fn chosen_move_is_legal() {
    let mut board = Board::with_size(8, 3).unwrap();
    let ai = AiPlayer::new(Player::Black, 3).unwrap();

    let chosen = ai.get_move(&board).unwrap();
    assert!(board
        .attempt_move(chosen.src, chosen.destination.pos)
        .unwrap());
}

/// The same position always yields the same move.
#[test]
fn search_is_deterministic() {
    let board = Board::with_size(8, 3).unwrap();
    let searcher = Searcher::new(Player::White, 4).unwrap();

    let first = searcher.choose_move(&board).unwrap();
    for _ in 0..3 {
        let again = searcher.choose_move(&board).unwrap();
        assert_eq!(again.src, first.src);
        assert_eq!(again.destination, first.destination);
        assert_eq!(again.score, first.score);
    }
}

/// Searching does not disturb the caller's board.
#[test]
fn search_leaves_the_board_untouched() {
    let board = Board::with_size(8, 3).unwrap();
    let before: Vec<_> = board.cells().copied().collect();

    let searcher = Searcher::new(Player::White, 4).unwrap();
    searcher.choose_move(&board).unwrap();

    for (a, b) in before.iter().zip(board.cells()) {
        assert_eq!(a.player(), b.player());
        assert_eq!(a.piece(), b.piece());
    }
    assert_eq!(board.king_only_plies(), 0);
}

/// A side with no moves gets no move.
#[test]
fn stuck_side_gets_none() {
    let mut board = Board::with_size(8, 0).unwrap();
    place(&mut board, Pos::new(0, 7), Player::Black, PieceType::Man);
    place(&mut board, Pos::new(1, 6), Player::White, PieceType::Man);
    place(&mut board, Pos::new(2, 5), Player::White, PieceType::Man);

    let ai = AiPlayer::new(Player::Black, 3).unwrap();
    assert!(ai.get_move(&board).is_none());
}

// =============================================================================
// Tactics
// =============================================================================

/// Even at depth 1 the AI takes a free piece when captures are optional.
#[test]
fn depth_one_takes_the_free_piece() {
    let config = GameConfig {
        player_rows: 0,
        mandatory_capture: false,
        ..GameConfig::default()
    };
    let mut board = Board::new(&config).unwrap();
    place(&mut board, Pos::new(2, 1), Player::White, PieceType::Man);
    place(&mut board, Pos::new(3, 2), Player::Black, PieceType::Man);
    // A second black piece keeps the game going after the capture.
    place(&mut board, Pos::new(6, 5), Player::Black, PieceType::Man);

    let searcher = Searcher::new(Player::White, 1).unwrap();
    let chosen = searcher.choose_move(&board).unwrap();
    assert!(chosen.destination.is_capture());
}

/// At depth 2 the AI declines a step that would hand its only man to the
/// opponent.
#[test]
fn depth_two_avoids_hanging_a_piece() {
    let mut board = Board::with_size(8, 0).unwrap();
    place(&mut board, Pos::new(2, 3), Player::White, PieceType::Man);
    place(&mut board, Pos::new(4, 5), Player::Black, PieceType::Man);

    // Stepping to (3,4) lets the black man jump it; (1,4) is safe.
    let searcher = Searcher::new(Player::White, 2).unwrap();
    let chosen = searcher.choose_move(&board).unwrap();
    assert_eq!(chosen.destination.pos, Pos::new(1, 4));
}

// =============================================================================
// Self-play
// =============================================================================

/// Two shallow AIs can trade moves for a while with every chosen move
/// accepted by the rules and the game state staying consistent.
#[test]
fn short_self_play_stays_consistent() {
    let mut board = Board::with_size(8, 3).unwrap();
    let white = AiPlayer::new(Player::White, 2).unwrap();
    let black = AiPlayer::new(Player::Black, 2).unwrap();

    for ply in 0..40 {
        if board.game_end().unwrap().is_some() {
            break;
        }
        let side = if ply % 2 == 0 { &white } else { &black };
        let Some(chosen) = side.get_move(&board) else {
            break;
        };
        // Replay the exact chain the AI scored, not just its endpoint.
        assert!(
            board.apply(chosen.src, &chosen.destination).unwrap(),
            "AI produced an illegal move at ply {ply}"
        );

        // Pieces never leave the dark cells.
        for cell in board.cells() {
            if !cell.is_empty() {
                assert!(cell.is_legal());
            }
        }
    }
}

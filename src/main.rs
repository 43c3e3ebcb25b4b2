//! Self-play demo: two AI players on a standard board.

use anyhow::Result;

use checkers::{AiPlayer, Board, GameConfig, Player};

const SEARCH_DEPTH: u32 = 4;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = GameConfig::default();
    let mut board = Board::new(&config)?;

    let white = AiPlayer::new(Player::White, SEARCH_DEPTH)?;
    let black = AiPlayer::new(Player::Black, SEARCH_DEPTH)?;

    println!("checkers self-play, {0}x{0}, depth {1}", board.size(), SEARCH_DEPTH);
    print_board(&board);

    let mut ply = 0u32;
    let end = loop {
        if let Some(end) = board.game_end()? {
            break end;
        }

        let side = if ply % 2 == 0 { &white } else { &black };
        let Some(chosen) = side.get_move(&board) else {
            anyhow::bail!("{:?} has no legal move", side.player());
        };

        println!(
            "ply {:3}: {:?} {:?} -> {:?} ({} captured, {} nodes, {}ms)",
            ply + 1,
            side.player(),
            chosen.src,
            chosen.destination.pos,
            chosen.destination.capture_len(),
            chosen.nodes,
            chosen.time_ms,
        );
        if !board.apply(chosen.src, &chosen.destination)? {
            anyhow::bail!("search produced an off-menu move");
        }
        ply += 1;
    };

    print_board(&board);
    if end.is_draw() {
        println!("draw after {} plies ({:?})", ply, end.reason);
    } else {
        println!("{:?} wins after {} plies ({:?})", end.winner, ply, end.reason);
    }
    Ok(())
}

fn print_board(board: &Board) {
    use checkers::{PieceType, Pos};

    let size = board.size() as u8;
    for y in (0..size).rev() {
        print!("{:2} ", y);
        for x in 0..size {
            let cell = match board.entry(Pos::new(x, y)) {
                Ok(cell) => cell,
                Err(_) => continue,
            };
            let glyph = match (cell.player(), cell.piece()) {
                (Player::White, PieceType::King) => 'W',
                (Player::White, _) => 'w',
                (Player::Black, PieceType::King) => 'B',
                (Player::Black, _) => 'b',
                _ if cell.is_legal() => '.',
                _ => ' ',
            };
            print!(" {glyph}");
        }
        println!();
    }
    print!("   ");
    for x in 0..size {
        print!(" {x}");
    }
    println!();
}

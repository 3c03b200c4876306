//! optio demo: a random-move chess game driven by [`Optional`].
//!
//! ```text
//! main() -> init_tracing() -> OptioConfig::load() -> DemoSettings -> run_game()
//!                                                                      |
//!                                                                      v
//!                                      best_move(): Present(move) -> print, loop
//!                                                   Empty         -> "Game over"
//! ```

pub mod chess;

use std::io::{self, Write};

use optio_types::Optional;

pub use chess::{ChessBoard, ChessMove, ChessPiece, Color, Dice, PieceType, Square, ThreadDice};

/// Play until `best_move` comes back empty, writing one line per move and a final
/// `Game over`. Returns the number of moves played.
pub fn run_game<W: Write>(
    board: &mut ChessBoard,
    dice: &mut impl Dice,
    out: &mut W,
) -> io::Result<u32> {
    loop {
        let next: Optional<ChessMove> = board.best_move(dice);
        next.try_if_present(|played| writeln!(out, "{played}"))?;
        if next.is_empty() {
            break;
        }
    }
    writeln!(out, "Game over")?;

    tracing::info!(
        moves = board.moves_played(),
        white = board.count_pieces(Color::White),
        black = board.count_pieces(Color::Black),
        "Game over"
    );
    Ok(board.moves_played())
}

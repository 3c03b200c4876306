//! Toy chess board that plays random moves.
//!
//! No move legality: a move picks one of the side's pieces and drops it on any square
//! not held by that side. The game ends on a random "checkmate" roll, when the move
//! cap is reached, or when the side to move has no pieces left.

use std::fmt;
use std::mem;

use optio_config::DemoSettings;
use optio_types::Optional;

const BOARD_SIZE: u8 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[must_use]
    pub const fn switch_turn(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceType {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            PieceType::Pawn => "pawn",
            PieceType::Knight => "knight",
            PieceType::Bishop => "bishop",
            PieceType::Rook => "rook",
            PieceType::Queen => "queen",
            PieceType::King => "king",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChessPiece {
    pub kind: PieceType,
    pub color: Color,
}

impl ChessPiece {
    #[must_use]
    pub const fn new(kind: PieceType, color: Color) -> Self {
        Self { kind, color }
    }
}

impl fmt::Display for ChessPiece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color.as_str(), self.kind.as_str())
    }
}

/// A board coordinate. `file` and `rank` are zero-based (`a1` is `(0, 0)`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    file: u8,
    rank: u8,
}

impl Square {
    /// `Empty` when either coordinate is off the board.
    #[must_use]
    pub fn new(file: u8, rank: u8) -> Optional<Self> {
        Optional::present(Self { file, rank })
            .filter(|sq| sq.file < BOARD_SIZE && sq.rank < BOARD_SIZE)
    }

    #[must_use]
    pub const fn file(self) -> u8 {
        self.file
    }

    #[must_use]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|rank| (0..BOARD_SIZE).map(move |file| Square { file, rank }))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", char::from(b'a' + self.file), self.rank + 1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChessMove {
    pub piece: ChessPiece,
    pub from: Square,
    pub to: Square,
    pub captured: Optional<ChessPiece>,
}

impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}-{}", self.piece, self.from, self.to)?;
        self.captured
            .try_if_present(|captured| write!(f, " takes {captured}"))
    }
}

/// Source of randomness for the board.
pub trait Dice {
    /// A value in `[0, 1)`.
    fn roll(&mut self) -> f64;

    /// An index in `0..len`. `len` must be non-zero.
    fn pick(&mut self, len: usize) -> usize {
        let scaled = (self.roll() * len as f64) as usize;
        scaled.min(len - 1)
    }
}

/// Dice backed by the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadDice;

impl Dice for ThreadDice {
    fn roll(&mut self) -> f64 {
        rand::random::<f64>()
    }
}

#[derive(Debug, Clone)]
pub struct ChessBoard {
    squares: [[Optional<ChessPiece>; BOARD_SIZE as usize]; BOARD_SIZE as usize],
    turn: Color,
    moves_played: u32,
    checkmate_probability: f64,
    max_moves: Option<u32>,
}

impl ChessBoard {
    /// A board in the standard starting position, white to move.
    #[must_use]
    pub fn new(settings: DemoSettings) -> Self {
        const BACK_RANK: [PieceType; BOARD_SIZE as usize] = [
            PieceType::Rook,
            PieceType::Knight,
            PieceType::Bishop,
            PieceType::Queen,
            PieceType::King,
            PieceType::Bishop,
            PieceType::Knight,
            PieceType::Rook,
        ];

        let mut squares = [[Optional::empty(); BOARD_SIZE as usize]; BOARD_SIZE as usize];
        for (file, kind) in BACK_RANK.into_iter().enumerate() {
            squares[0][file] = Optional::present(ChessPiece::new(kind, Color::White));
            squares[1][file] = Optional::present(ChessPiece::new(PieceType::Pawn, Color::White));
            squares[6][file] = Optional::present(ChessPiece::new(PieceType::Pawn, Color::Black));
            squares[7][file] = Optional::present(ChessPiece::new(kind, Color::Black));
        }

        Self {
            squares,
            turn: Color::White,
            moves_played: 0,
            checkmate_probability: settings.checkmate_probability,
            max_moves: settings.max_moves,
        }
    }

    #[must_use]
    pub fn piece_at(&self, square: Square) -> Optional<ChessPiece> {
        self.squares[usize::from(square.rank)][usize::from(square.file)]
    }

    #[must_use]
    pub const fn turn(&self) -> Color {
        self.turn
    }

    #[must_use]
    pub const fn moves_played(&self) -> u32 {
        self.moves_played
    }

    /// Number of pieces of `color` still on the board.
    #[must_use]
    pub fn count_pieces(&self, color: Color) -> usize {
        Square::all()
            .filter(|sq| self.owned_by(*sq, color))
            .count()
    }

    /// Play the next move, or `Empty` once the game is over.
    pub fn best_move(&mut self, dice: &mut impl Dice) -> Optional<ChessMove> {
        if self.max_moves.is_some_and(|max| self.moves_played >= max) {
            tracing::debug!(moves = self.moves_played, "Move cap reached");
            return Optional::empty();
        }
        if dice.roll() < self.checkmate_probability {
            tracing::debug!(
                moves = self.moves_played,
                winner = self.turn.switch_turn().as_str(),
                "Checkmate"
            );
            return Optional::empty();
        }

        let chosen = self
            .pick_square(dice, |sq| self.owned_by(sq, self.turn))
            .flat_map(|from| {
                self.pick_square(dice, |sq| !self.owned_by(sq, self.turn))
                    .map(|to| (from, to))
            });

        chosen.flat_map(|(from, to)| self.play(from, to))
    }

    fn owned_by(&self, square: Square, color: Color) -> bool {
        self.piece_at(square)
            .filter(|piece| piece.color == color)
            .is_present()
    }

    fn pick_square(
        &self,
        dice: &mut impl Dice,
        accept: impl Fn(Square) -> bool,
    ) -> Optional<Square> {
        let candidates: Vec<Square> = Square::all().filter(|sq| accept(*sq)).collect();
        if candidates.is_empty() {
            return Optional::empty();
        }
        Optional::present(candidates[dice.pick(candidates.len())])
    }

    fn play(&mut self, from: Square, to: Square) -> Optional<ChessMove> {
        let moving = mem::take(self.square_mut(from));
        moving.map(|piece| {
            let captured = mem::replace(self.square_mut(to), Optional::present(piece));
            self.turn = self.turn.switch_turn();
            self.moves_played += 1;
            ChessMove {
                piece,
                from,
                to,
                captured,
            }
        })
    }

    fn square_mut(&mut self, square: Square) -> &mut Optional<ChessPiece> {
        &mut self.squares[usize::from(square.rank)][usize::from(square.file)]
    }
}

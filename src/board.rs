use std::{
    fmt::{self, Debug, Display, Formatter},
    ops::Index,
    sync::OnceLock,
};

use log::trace;
use rand::Rng;
use sha2::{Digest as _, Sha256};

use crate::{
    color::Color,
    error::MoveError,
    flags::{Flag, Flags},
    location::Location,
    piece::{Piece, PieceKind},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub start: Location,
    pub end: Location,
}
impl Move {
    pub fn new(start: Location, end: Location) -> Self {
        Move { start, end }
    }
}
impl Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.start, self.end)?;
        Ok(())
    }
}

/// SHA-256 of a board's placement and flags.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digest([u8; 32]);

impl Digest {
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
    pub(crate) fn shard_key(&self) -> u16 {
        u16::from_be_bytes([self.0[0], self.0[1]])
    }
}
impl From<[u8; 32]> for Digest {
    fn from(value: [u8; 32]) -> Self {
        Digest(value)
    }
}
impl Display for Digest {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}
impl Debug for Digest {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({self})")?;
        Ok(())
    }
}

const ENCODED_LEN: usize = 64 + 2;

/// A position: piece placement and per-side flags.
///
/// Cloning is the deep copy used to explore hypothetical moves. The digest is
/// computed on first request and dropped by every mutation.
#[derive(Debug, Clone, Default)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
    flags: Flags,
    digest: OnceLock<Digest>,
}
impl Board {
    pub fn new() -> Self {
        Board::default()
    }
    pub fn starting_position() -> Self {
        let mut board = Board::new();
        board.reset_default();
        board
    }
    pub fn reset_default(&mut self) {
        self.clear();
        for (col, kind) in (0..).zip(PieceKind::STARTING_CONFIGURATION) {
            for color in Color::ALL {
                self.place(kind, color, color.home_row(), col);
                self.place(PieceKind::Pawn, color, color.pawn_row(), col);
            }
        }
        trace!("board reset to starting position");
    }
    pub fn clear(&mut self) {
        self.squares = Default::default();
        self.flags.clear();
        self.invalidate();
    }
    fn place(&mut self, kind: PieceKind, color: Color, row: u8, col: u8) {
        let location = Location::new(row, col);
        self.set_piece(location, Piece::new(kind, color, location));
    }
    fn invalidate(&mut self) {
        self.digest.take();
    }
    fn slot_mut(&mut self, location: Location) -> &mut Option<Piece> {
        &mut self.squares[location.row() as usize][location.col() as usize]
    }
    pub fn get_piece(&self, location: Location) -> Option<Piece> {
        self[location]
    }
    /// Places `piece` on `location`, returning whatever stood there.
    pub fn set_piece(&mut self, location: Location, mut piece: Piece) -> Option<Piece> {
        piece.set_position(location);
        self.invalidate();
        self.slot_mut(location).replace(piece)
    }
    pub fn remove_piece(&mut self, location: Location) -> Option<Piece> {
        self.invalidate();
        self.slot_mut(location).take()
    }
    pub fn flags(&self) -> Flags {
        self.flags
    }
    pub fn get_flag(&self, flag: Flag, color: Color) -> bool {
        self.flags.get(flag, color)
    }
    pub fn set_flag(&mut self, flag: Flag, color: Color, value: bool) {
        self.flags.set(flag, color, value);
        self.invalidate();
    }
    pub fn pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        self.squares.iter().flatten().flatten().copied()
    }
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = Piece> + '_ {
        self.pieces().filter(move |piece| piece.color() == color)
    }
    pub fn king_location(&self, color: Color) -> Option<Location> {
        self.pieces_of(color)
            .find(|piece| piece.kind() == PieceKind::King)
            .map(Piece::position)
    }
    /// Applies `movement`, returning the captured piece if any.
    ///
    /// The move is not checked for legality. An empty start square is a fault
    /// of whoever produced the move and leaves the board untouched.
    pub fn make_move(&mut self, movement: Move) -> Result<Option<Piece>, MoveError> {
        let Some(mut piece) = self.get_piece(movement.start) else {
            return Err(MoveError::EmptyStart(movement.start));
        };
        self.remove_piece(movement.start);
        let captured = self.remove_piece(movement.end);
        if let Some(captured) = captured {
            self.remove_castling_for_rook_capture(captured);
        }
        piece.set_position(movement.end);
        piece.after_move(movement, self);
        self.set_piece(movement.end, piece);
        trace!("{movement}: {piece}");
        Ok(captured)
    }
    fn remove_castling_for_rook_capture(&mut self, captured: Piece) {
        let position = captured.position();
        if captured.kind() == PieceKind::Rook && position.row() == captured.color().home_row() {
            match position.col() {
                0 => self.set_flag(Flag::LeftRookMoved, captured.color(), true),
                7 => self.set_flag(Flag::RightRookMoved, captured.color(), true),
                _ => (),
            }
        }
    }
    pub fn equals(&self, other: &Board) -> bool {
        self == other
    }
    fn encode(&self) -> [u8; ENCODED_LEN] {
        let mut bytes = [0; ENCODED_LEN];
        for (byte, square) in bytes.iter_mut().zip(self.squares.iter().flatten()) {
            *byte = square.map_or(0, Piece::code);
        }
        bytes[64..].copy_from_slice(&self.flags.to_bytes());
        bytes
    }
    pub fn hash(&self) -> Digest {
        *self
            .digest
            .get_or_init(|| Digest(Sha256::digest(self.encode()).into()))
    }
    /// Fills the board with random pieces and flags. The result is usually not
    /// a reachable position.
    pub fn randomize_illegal(&mut self, rng: &mut impl Rng) {
        self.clear();
        for location in Location::all() {
            if rng.random_bool(0.5) {
                let kind = PieceKind::ALL[rng.random_range(0..PieceKind::ALL.len())];
                let color = if rng.random_bool(0.5) {
                    Color::White
                } else {
                    Color::Black
                };
                self.set_piece(location, Piece::new(kind, color, location));
            }
        }
        for flag in Flag::ALL {
            for color in Color::ALL {
                self.set_flag(flag, color, rng.random_bool(0.5));
            }
        }
    }
}
impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.squares == other.squares && self.flags == other.flags
    }
}
impl Eq for Board {}

impl Index<Location> for Board {
    type Output = Option<Piece>;

    fn index(&self, index: Location) -> &Self::Output {
        &self.squares[index.row() as usize][index.col() as usize]
    }
}
impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (rank, row) in (1..=8).rev().zip(&self.squares) {
            for square in row {
                write!(f, "{}", square.map_or('.', Piece::symbol))?;
            }
            writeln!(f, " {rank}")?;
        }
        writeln!(f, "abcdefgh")?;
        Ok(())
    }
}

use std::fmt::{self, Display, Formatter};

use crate::{
    bitboard::BitBoard,
    board::{Board, Move},
    check::would_leave_king_in_check,
    color::Color,
    location::{Location, Offset},
};

mod bishop;
mod king;
mod knight;
mod pawn;
mod queen;
mod rook;

pub use king::CastleSide;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    // the digest relies on `PieceKind` being non-zero
    Pawn = 1,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}
impl PieceKind {
    pub const ALL: [Self; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];
    pub const STARTING_CONFIGURATION: [Self; 8] = [
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Rook,
    ];
    pub fn uppercase(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }
    pub fn lowercase(self) -> char {
        self.uppercase().to_ascii_lowercase()
    }
    pub fn is_sliding(self) -> bool {
        matches!(
            self,
            PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen
        )
    }
}
impl Display for PieceKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            PieceKind::Pawn => write!(f, "pawn")?,
            PieceKind::Knight => write!(f, "knight")?,
            PieceKind::Bishop => write!(f, "bishop")?,
            PieceKind::Rook => write!(f, "rook")?,
            PieceKind::Queen => write!(f, "queen")?,
            PieceKind::King => write!(f, "king")?,
        }
        Ok(())
    }
}
impl From<PieceKind> for u8 {
    fn from(value: PieceKind) -> Self {
        value as u8
    }
}

/// Outcome of looking at one square while exploring from a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Probe {
    /// The square is a destination (or attacked square).
    pub valid: bool,
    /// Exploration may continue past the square.
    pub resume: bool,
}

type Prober = fn(Color, Location, &Board) -> Probe;

/// Legal-move predicate: slide over empty squares, capture enemies, stop at
/// own pieces.
pub fn probe_move(color: Color, location: Location, board: &Board) -> Probe {
    match board[location] {
        None => Probe {
            valid: true,
            resume: true,
        },
        Some(piece) if piece.color() != color => Probe {
            valid: true,
            resume: false,
        },
        Some(_) => Probe {
            valid: false,
            resume: false,
        },
    }
}
/// Attackability predicate: any occupied square is attacked, including ones
/// held by the attacker's own side, and ends the line.
pub fn probe_attack(_color: Color, location: Location, board: &Board) -> Probe {
    Probe {
        valid: true,
        resume: board[location].is_none(),
    }
}

fn slide<'a>(
    piece: Piece,
    board: &'a Board,
    directions: &'static [Offset],
    probe: Prober,
) -> impl Iterator<Item = Location> + 'a {
    directions.iter().copied().flat_map(move |direction| {
        let mut resume = true;
        piece
            .position
            .line(direction)
            .map_while(move |location| {
                if resume {
                    let outcome = probe(piece.color, location, board);
                    resume = outcome.resume;
                    Some(outcome.valid.then_some(location))
                } else {
                    None
                }
            })
            .flatten()
    })
}
fn step<'a>(
    piece: Piece,
    board: &'a Board,
    offsets: &'static [Offset],
    probe: Prober,
) -> impl Iterator<Item = Location> + 'a {
    offsets
        .iter()
        .copied()
        .filter_map(move |offset| piece.position.add_relative(offset))
        .filter(move |location| probe(piece.color, *location, board).valid)
}

/// Movement rules of a single piece kind.
trait Rules {
    /// Pseudo-legal destinations, before the king safety filter.
    fn destinations(piece: Piece, board: &Board) -> Box<dyn Iterator<Item = Location> + '_>;
    fn attackable(piece: Piece, board: &Board) -> BitBoard;
    /// Runs after `piece` has been lifted from `movement.start` and its
    /// position set to `movement.end`, before it is placed there.
    fn after_move(_piece: &mut Piece, _movement: Move, _board: &mut Board) {}
}

/// A piece standing on a board.
///
/// `position` mirrors the board square holding the piece and is kept in sync
/// by [`Board::set_piece`]; the board is the source of truth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    color: Color,
    position: Location,
}
impl Piece {
    pub fn new(kind: PieceKind, color: Color, position: Location) -> Self {
        Piece {
            kind,
            color,
            position,
        }
    }
    pub fn kind(self) -> PieceKind {
        self.kind
    }
    pub fn color(self) -> Color {
        self.color
    }
    pub fn position(self) -> Location {
        self.position
    }
    pub fn set_position(&mut self, position: Location) {
        self.position = position;
    }
    pub fn destinations(self, board: &Board) -> Box<dyn Iterator<Item = Location> + '_> {
        match self.kind {
            PieceKind::Pawn => pawn::Pawn::destinations(self, board),
            PieceKind::Knight => knight::Knight::destinations(self, board),
            PieceKind::Bishop => bishop::Bishop::destinations(self, board),
            PieceKind::Rook => rook::Rook::destinations(self, board),
            PieceKind::Queen => queen::Queen::destinations(self, board),
            PieceKind::King => king::King::destinations(self, board),
        }
    }
    /// Lazily filtered legal moves; stop pulling once the caller has enough.
    pub fn legal_moves(self, board: &Board) -> impl Iterator<Item = Move> + '_ {
        self.destinations(board)
            .map(move |end| Move::new(self.position, end))
            .filter(move |movement| {
                matches!(
                    would_leave_king_in_check(self.color, *movement, board),
                    Ok(false)
                )
            })
    }
    pub fn moves(self, board: &Board) -> Vec<Move> {
        self.legal_moves(board).collect()
    }
    pub fn attackable_moves(self, board: &Board) -> BitBoard {
        match self.kind {
            PieceKind::Pawn => pawn::Pawn::attackable(self, board),
            PieceKind::Knight => knight::Knight::attackable(self, board),
            PieceKind::Bishop => bishop::Bishop::attackable(self, board),
            PieceKind::Rook => rook::Rook::attackable(self, board),
            PieceKind::Queen => queen::Queen::attackable(self, board),
            PieceKind::King => king::King::attackable(self, board),
        }
    }
    pub(crate) fn after_move(&mut self, movement: Move, board: &mut Board) {
        match self.kind {
            PieceKind::Pawn => pawn::Pawn::after_move(self, movement, board),
            PieceKind::Knight => knight::Knight::after_move(self, movement, board),
            PieceKind::Bishop => bishop::Bishop::after_move(self, movement, board),
            PieceKind::Rook => rook::Rook::after_move(self, movement, board),
            PieceKind::Queen => queen::Queen::after_move(self, movement, board),
            PieceKind::King => king::King::after_move(self, movement, board),
        }
    }
    // Bit structure: 0000CPPP
    // C - Color
    // P - Piece kind
    pub(crate) fn code(self) -> u8 {
        (u8::from(self.color) << 3) | u8::from(self.kind)
    }
    pub fn symbol(self) -> char {
        match self.color {
            Color::White => self.kind.uppercase(),
            Color::Black => self.kind.lowercase(),
        }
    }
}
impl Display for Piece {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} on {}", self.color, self.kind, self.position)?;
        Ok(())
    }
}
#[cfg(test)]
mod test {
    use crate::{
        bitboard::BitBoard,
        board::{Board, Move},
        color::Color,
        location::Location,
        piece::{Piece, PieceKind},
    };

    fn place(board: &mut Board, kind: PieceKind, color: Color, row: u8, col: u8) -> Piece {
        let location = Location::new(row, col);
        board.set_piece(location, Piece::new(kind, color, location));
        board.get_piece(location).unwrap()
    }

    #[test]
    fn rook_attacks_stop_at_first_occupied_square() {
        let mut board = Board::new();
        let rook = place(&mut board, PieceKind::Rook, Color::White, 4, 3);
        place(&mut board, PieceKind::Pawn, Color::White, 4, 6);
        place(&mut board, PieceKind::Knight, Color::Black, 1, 3);
        let attacked = rook.attackable_moves(&board);
        let expected: BitBoard = [
            (3, 3),
            (2, 3),
            (1, 3),
            (5, 3),
            (6, 3),
            (7, 3),
            (4, 4),
            (4, 5),
            (4, 6),
            (4, 2),
            (4, 1),
            (4, 0),
        ]
        .into_iter()
        .map(|(row, col)| Location::new(row, col))
        .collect();
        assert_eq!(attacked, expected);
    }
    #[test]
    fn rook_on_empty_board_attacks_rank_and_file() {
        let mut board = Board::new();
        let rook = place(&mut board, PieceKind::Rook, Color::Black, 2, 5);
        let attacked = rook.attackable_moves(&board);
        assert_eq!(attacked.len(), 14);
        assert!(
            attacked
                .iter()
                .all(|location| (location.row() == 2) != (location.col() == 5))
        );
    }
    #[test]
    fn sliding_moves_capture_enemies_but_not_friends() {
        let mut board = Board::new();
        let bishop = place(&mut board, PieceKind::Bishop, Color::White, 4, 4);
        place(&mut board, PieceKind::Pawn, Color::White, 3, 5);
        place(&mut board, PieceKind::Pawn, Color::Black, 2, 2);
        let destinations: BitBoard = bishop.moves(&board).iter().map(|m| m.end).collect();
        assert!(!destinations.contains(Location::new(3, 5)));
        assert!(destinations.contains(Location::new(3, 3)));
        assert!(destinations.contains(Location::new(2, 2)));
        assert!(!destinations.contains(Location::new(1, 1)));
        assert_eq!(destinations.len(), 2 + 3 + 3);
    }
    #[test]
    fn attackable_includes_own_king() {
        let mut board = Board::new();
        let queen = place(&mut board, PieceKind::Queen, Color::White, 4, 4);
        place(&mut board, PieceKind::King, Color::White, 4, 6);
        assert!(queen.attackable_moves(&board).contains(Location::new(4, 6)));
        assert!(!queen.attackable_moves(&board).contains(Location::new(4, 7)));
    }
    #[test]
    fn knight_jumps_over_pieces() {
        let board = Board::starting_position();
        let knight = board.get_piece(Location::new(7, 1)).unwrap();
        let mut ends: Vec<_> = knight.moves(&board).into_iter().map(|m| m.end).collect();
        ends.sort();
        assert_eq!(ends, [Location::new(5, 0), Location::new(5, 2)]);
    }
    #[test]
    fn pawn_pushes_and_captures() {
        let mut board = Board::new();
        let pawn = place(&mut board, PieceKind::Pawn, Color::White, 6, 4);
        place(&mut board, PieceKind::Knight, Color::Black, 5, 3);
        place(&mut board, PieceKind::Knight, Color::White, 5, 5);
        let mut ends: Vec<_> = pawn.moves(&board).into_iter().map(|m| m.end).collect();
        ends.sort();
        assert_eq!(
            ends,
            [Location::new(4, 4), Location::new(5, 3), Location::new(5, 4)]
        );
        let attacked = pawn.attackable_moves(&board);
        assert_eq!(attacked.len(), 2);
        assert!(attacked.contains(Location::new(5, 5)));
    }
    #[test]
    fn blocked_pawn_cannot_jump() {
        let mut board = Board::new();
        let pawn = place(&mut board, PieceKind::Pawn, Color::Black, 1, 0);
        place(&mut board, PieceKind::Rook, Color::White, 2, 0);
        assert!(pawn.moves(&board).is_empty());
    }
    #[test]
    fn pawn_promotes_to_queen() {
        let mut board = Board::new();
        place(&mut board, PieceKind::Pawn, Color::White, 1, 2);
        board
            .make_move(Move::new(Location::new(1, 2), Location::new(0, 2)))
            .unwrap();
        let piece = board.get_piece(Location::new(0, 2)).unwrap();
        assert_eq!(piece.kind(), PieceKind::Queen);
        assert_eq!(piece.color(), Color::White);
    }
    #[test]
    fn pinned_piece_has_no_moves() {
        let mut board = Board::new();
        place(&mut board, PieceKind::King, Color::White, 7, 4);
        let knight = place(&mut board, PieceKind::Knight, Color::White, 6, 4);
        place(&mut board, PieceKind::Rook, Color::Black, 1, 4);
        place(&mut board, PieceKind::King, Color::Black, 0, 0);
        assert!(knight.moves(&board).is_empty());
        assert!(knight.legal_moves(&board).next().is_none());
    }
    #[test]
    fn king_cannot_capture_protected_piece() {
        let mut board = Board::new();
        let king = place(&mut board, PieceKind::King, Color::White, 7, 4);
        place(&mut board, PieceKind::Pawn, Color::Black, 6, 4);
        place(&mut board, PieceKind::Bishop, Color::Black, 4, 6);
        place(&mut board, PieceKind::King, Color::Black, 0, 0);
        assert!(
            king.moves(&board)
                .iter()
                .all(|movement| movement.end != Location::new(6, 4))
        );
    }
}

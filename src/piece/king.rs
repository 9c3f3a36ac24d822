use crate::{
    bitboard::BitBoard,
    board::{Board, Move},
    color::Color,
    flags::Flag,
    location::{Location, Offset},
    piece::{Piece, PieceKind, Rules, probe_attack, probe_move, step},
};

const KING_COL: u8 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    /// Towards column 0.
    Left,
    /// Towards column 7.
    Right,
}
impl CastleSide {
    pub const ALL: [Self; 2] = [CastleSide::Left, CastleSide::Right];

    pub fn rook_col(self) -> u8 {
        match self {
            CastleSide::Left => 0,
            CastleSide::Right => 7,
        }
    }
    pub fn king_destination_col(self) -> u8 {
        match self {
            CastleSide::Left => 2,
            CastleSide::Right => 6,
        }
    }
    pub fn rook_destination_col(self) -> u8 {
        match self {
            CastleSide::Left => 3,
            CastleSide::Right => 5,
        }
    }
    pub fn rook_flag(self) -> Flag {
        match self {
            CastleSide::Left => Flag::LeftRookMoved,
            CastleSide::Right => Flag::RightRookMoved,
        }
    }
    fn from_king_destination_col(col: u8) -> Option<Self> {
        match col {
            2 => Some(CastleSide::Left),
            6 => Some(CastleSide::Right),
            _ => None,
        }
    }
    fn direction(self) -> Offset {
        match self {
            CastleSide::Left => Offset::LEFT,
            CastleSide::Right => Offset::RIGHT,
        }
    }
}
impl Board {
    /// Whether `color` still holds the right to castle towards `side`.
    ///
    /// This only looks at the flags and at the king and rook being on their
    /// home squares; free and safe passage is checked during move generation.
    pub fn may_castle(&self, color: Color, side: CastleSide) -> bool {
        let home = color.home_row();
        let holds = |col: u8, kind: PieceKind| {
            self.get_piece(Location::new(home, col))
                .is_some_and(|piece| piece.kind() == kind && piece.color() == color)
        };
        !self.get_flag(Flag::Castled, color)
            && !self.get_flag(Flag::KingMoved, color)
            && !self.get_flag(side.rook_flag(), color)
            && holds(KING_COL, PieceKind::King)
            && holds(side.rook_col(), PieceKind::Rook)
    }
}
fn castling_destinations(piece: Piece, board: &Board) -> Vec<Location> {
    let color = piece.color();
    let home = color.home_row();
    if piece.position() != Location::new(home, KING_COL) {
        return Vec::new();
    }
    let sides: Vec<_> = CastleSide::ALL
        .into_iter()
        .filter(|side| board.may_castle(color, *side))
        .filter(|side| {
            piece
                .position()
                .line(side.direction())
                .take_while(|location| location.col() != side.rook_col())
                .all(|location| board[location].is_none())
        })
        .collect();
    if sides.is_empty() {
        return Vec::new();
    }
    let attacked = board.attackable_by(!color);
    if attacked.contains(piece.position()) {
        return Vec::new();
    }
    sides
        .into_iter()
        .filter(|side| {
            piece
                .position()
                .line(side.direction())
                .take(2)
                .all(|location| !attacked.contains(location))
        })
        .map(|side| Location::new(home, side.king_destination_col()))
        .collect()
}

pub struct King;

impl Rules for King {
    fn destinations(piece: Piece, board: &Board) -> Box<dyn Iterator<Item = Location> + '_> {
        Box::new(
            step(piece, board, &Offset::KING_MOVES, probe_move)
                .chain(castling_destinations(piece, board)),
        )
    }
    fn attackable(piece: Piece, board: &Board) -> BitBoard {
        step(piece, board, &Offset::KING_MOVES, probe_attack).collect()
    }
    fn after_move(piece: &mut Piece, movement: Move, board: &mut Board) {
        let color = piece.color();
        board.set_flag(Flag::KingMoved, color, true);
        if movement.start.col().abs_diff(movement.end.col()) != 2 {
            return;
        }
        let Some(side) = CastleSide::from_king_destination_col(movement.end.col()) else {
            return;
        };
        let row = movement.start.row();
        if let Some(rook) = board.remove_piece(Location::new(row, side.rook_col())) {
            board.set_piece(Location::new(row, side.rook_destination_col()), rook);
        }
        board.set_flag(Flag::Castled, color, true);
    }
}

use crate::{
    bitboard::BitBoard,
    board::Board,
    location::{Location, Offset},
    piece::{Piece, Rules, probe_attack, probe_move, step},
};

pub struct Knight;

impl Rules for Knight {
    fn destinations(piece: Piece, board: &Board) -> Box<dyn Iterator<Item = Location> + '_> {
        Box::new(step(piece, board, &Offset::KNIGHT_MOVES, probe_move))
    }
    fn attackable(piece: Piece, board: &Board) -> BitBoard {
        step(piece, board, &Offset::KNIGHT_MOVES, probe_attack).collect()
    }
}

use crate::{
    bitboard::BitBoard,
    board::Board,
    location::{Location, Offset},
    piece::{Piece, Rules, probe_attack, probe_move, slide},
};

pub struct Queen;

impl Rules for Queen {
    fn destinations(piece: Piece, board: &Board) -> Box<dyn Iterator<Item = Location> + '_> {
        Box::new(slide(piece, board, &Offset::QUEEN_DIRECTIONS, probe_move))
    }
    fn attackable(piece: Piece, board: &Board) -> BitBoard {
        slide(piece, board, &Offset::QUEEN_DIRECTIONS, probe_attack).collect()
    }
}

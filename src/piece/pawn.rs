use crate::{
    bitboard::BitBoard,
    board::{Board, Move},
    location::{Location, Offset},
    piece::{Piece, PieceKind, Probe, Rules, probe_move},
};

pub struct Pawn;

impl Rules for Pawn {
    fn destinations(piece: Piece, board: &Board) -> Box<dyn Iterator<Item = Location> + '_> {
        let color = piece.color();
        let forward_jumps = if piece.position().row() == color.pawn_row() {
            2
        } else {
            1
        };
        let pushes = piece
            .position()
            .line(Offset::pawn_forward(color))
            .take(forward_jumps)
            .take_while(move |location| probe_move(color, *location, board).resume);
        let captures = Offset::pawn_attacks(color)
            .into_iter()
            .filter_map(move |offset| piece.position().add_relative(offset))
            .filter(move |location| {
                probe_move(color, *location, board)
                    == Probe {
                        valid: true,
                        resume: false,
                    }
            });
        Box::new(pushes.chain(captures))
    }
    fn attackable(piece: Piece, _board: &Board) -> BitBoard {
        Offset::pawn_attacks(piece.color())
            .into_iter()
            .filter_map(|offset| piece.position().add_relative(offset))
            .collect()
    }
    fn after_move(piece: &mut Piece, movement: Move, _board: &mut Board) {
        if movement.end.row() == piece.color().promotion_row() {
            *piece = Piece::new(PieceKind::Queen, piece.color(), movement.end);
        }
    }
}

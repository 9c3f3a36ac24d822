use crate::{
    bitboard::BitBoard,
    board::{Board, Move},
    flags::Flag,
    location::{Location, Offset},
    piece::{Piece, Rules, probe_attack, probe_move, slide},
};

pub struct Rook;

impl Rules for Rook {
    fn destinations(piece: Piece, board: &Board) -> Box<dyn Iterator<Item = Location> + '_> {
        Box::new(slide(piece, board, &Offset::ROOK_DIRECTIONS, probe_move))
    }
    fn attackable(piece: Piece, board: &Board) -> BitBoard {
        slide(piece, board, &Offset::ROOK_DIRECTIONS, probe_attack).collect()
    }
    fn after_move(piece: &mut Piece, movement: Move, board: &mut Board) {
        // the column it left decides which side loses castling
        match movement.start.col() {
            0 => board.set_flag(Flag::LeftRookMoved, piece.color(), true),
            7 => board.set_flag(Flag::RightRookMoved, piece.color(), true),
            _ => (),
        }
    }
}
#[cfg(test)]
mod test {
    use crate::{
        board::{Board, Move},
        color::Color,
        flags::Flag,
        location::Location,
        piece::{Piece, PieceKind},
    };

    #[test]
    fn moving_sets_flag_by_origin_column() {
        let mut board = Board::new();
        for col in [0, 7] {
            let location = Location::new(0, col);
            board.set_piece(location, Piece::new(PieceKind::Rook, Color::Black, location));
        }
        board
            .make_move(Move::new(Location::new(0, 7), Location::new(3, 7)))
            .unwrap();
        assert!(board.get_flag(Flag::RightRookMoved, Color::Black));
        assert!(!board.get_flag(Flag::LeftRookMoved, Color::Black));
        assert!(!board.get_flag(Flag::RightRookMoved, Color::White));

        board
            .make_move(Move::new(Location::new(0, 0), Location::new(0, 3)))
            .unwrap();
        assert!(board.get_flag(Flag::LeftRookMoved, Color::Black));

        // a rook leaving a middle column has no castling rook to speak for
        let mut board = Board::new();
        let location = Location::new(7, 3);
        board.set_piece(location, Piece::new(PieceKind::Rook, Color::White, location));
        board
            .make_move(Move::new(location, Location::new(7, 0)))
            .unwrap();
        assert!(!board.get_flag(Flag::LeftRookMoved, Color::White));
        assert!(!board.get_flag(Flag::RightRookMoved, Color::White));
    }
    #[test]
    fn rook_move_scenario() {
        let mut board = Board::new();
        let start = Location::new(2, 5);
        let end = Location::new(4, 5);
        board.set_piece(start, Piece::new(PieceKind::Rook, Color::White, start));
        let rook = board.get_piece(start).unwrap();
        assert!(rook.moves(&board).contains(&Move::new(start, end)));

        assert_eq!(board.make_move(Move::new(start, end)), Ok(None));
        assert_eq!(board.get_piece(start), None);
        assert_eq!(board.get_piece(end).unwrap().position(), end);
    }
}

use std::{fmt::Write, str::FromStr};

use chessai::{Board, CastleSide, Color, GameStatus, Location, Piece, PieceKind};
use rand::{Rng, SeedableRng, rngs::SmallRng};
use rustc_hash::FxHashSet;

const ATTEMPTS: usize = 1500;

fn fen(board: &Board, to_move: Color) -> String {
    let mut fen = String::new();
    for row in 0..8 {
        let mut empty = 0;
        for col in 0..8 {
            match board.get_piece(Location::new(row, col)) {
                Some(piece) => {
                    if empty > 0 {
                        write!(fen, "{empty}").unwrap();
                        empty = 0;
                    }
                    fen.push(piece.symbol());
                }
                None => empty += 1,
            }
        }
        if empty > 0 {
            write!(fen, "{empty}").unwrap();
        }
        if row < 7 {
            fen.push('/');
        }
    }
    fen.push(' ');
    fen.push(match to_move {
        Color::White => 'w',
        Color::Black => 'b',
    });
    fen.push(' ');
    let mut castling = String::new();
    for (color, side, c) in [
        (Color::White, CastleSide::Right, 'K'),
        (Color::White, CastleSide::Left, 'Q'),
        (Color::Black, CastleSide::Right, 'k'),
        (Color::Black, CastleSide::Left, 'q'),
    ] {
        if board.may_castle(color, side) {
            castling.push(c);
        }
    }
    if castling.is_empty() {
        castling.push('-');
    }
    fen.push_str(&castling);
    fen.push_str(" - 0 1");
    fen
}
fn random_empty_square(board: &Board, rng: &mut SmallRng) -> Location {
    loop {
        let location = Location::new(rng.random_range(0..8), rng.random_range(0..8));
        if board.get_piece(location).is_none() {
            return location;
        }
    }
}
fn put(board: &mut Board, kind: PieceKind, color: Color, location: Location) {
    board.set_piece(location, Piece::new(kind, color, location));
}
fn random_position(rng: &mut SmallRng) -> (Board, Color) {
    let mut board = Board::new();
    if rng.random_bool(0.3) {
        for color in Color::ALL {
            let home = color.home_row();
            put(&mut board, PieceKind::King, color, Location::new(home, 4));
            for col in [0, 7] {
                if rng.random_bool(0.7) {
                    put(&mut board, PieceKind::Rook, color, Location::new(home, col));
                }
            }
        }
    } else {
        for color in Color::ALL {
            let location = random_empty_square(&board, rng);
            put(&mut board, PieceKind::King, color, location);
        }
    }
    for _ in 0..rng.random_range(0..10) {
        let kind = [
            PieceKind::Pawn,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Rook,
            PieceKind::Queen,
        ][rng.random_range(0..5)];
        let color = if rng.random_bool(0.5) {
            Color::White
        } else {
            Color::Black
        };
        let location = random_empty_square(&board, rng);
        if kind == PieceKind::Pawn && matches!(location.row(), 0 | 7) {
            continue;
        }
        put(&mut board, kind, color, location);
    }
    let to_move = if rng.random_bool(0.5) {
        Color::White
    } else {
        Color::Black
    };
    (board, to_move)
}
fn to_location(square: chess::Square) -> Location {
    Location::new(
        u8::try_from(7 - square.get_rank().to_index()).unwrap(),
        u8::try_from(square.get_file().to_index()).unwrap(),
    )
}

#[test]
fn legal_moves_match_reference() {
    let mut rng = SmallRng::seed_from_u64(0xfeed);
    let mut checked = 0;
    for _ in 0..ATTEMPTS {
        let (board, to_move) = random_position(&mut rng);
        let fen = fen(&board, to_move);
        // positions where the side not to move is in check are rejected
        let Ok(reference) = chess::Board::from_str(&fen) else {
            continue;
        };
        checked += 1;

        let moves: FxHashSet<_> = board
            .legal_moves(to_move)
            .into_iter()
            .map(|movement| (movement.start, movement.end))
            .collect();
        let expected: FxHashSet<_> = chess::MoveGen::new_legal(&reference)
            .map(|movement| {
                (
                    to_location(movement.get_source()),
                    to_location(movement.get_dest()),
                )
            })
            .collect();
        if let Some((start, end)) = moves.difference(&expected).next() {
            panic!("found {start}{end} but it's not a legal move\n{board}\n{fen}");
        }
        if let Some((start, end)) = expected.difference(&moves).next() {
            panic!("{start}{end} not found\n{board}\n{fen}");
        }

        assert_eq!(
            board.in_check(to_move),
            reference.checkers().popcnt() > 0,
            "{fen}"
        );
        let status = match reference.status() {
            chess::BoardStatus::Ongoing => GameStatus::Active,
            chess::BoardStatus::Stalemate => GameStatus::Stalemate,
            chess::BoardStatus::Checkmate => GameStatus::win(!to_move),
        };
        assert_eq!(board.status(to_move), status, "{fen}");
    }
    assert!(checked > ATTEMPTS / 4, "only {checked} positions were checked");
}

#[test]
fn starting_position_matches_reference() {
    let board = Board::starting_position();
    let parsed = chess::Board::from_str(&fen(&board, Color::White)).unwrap();
    assert_eq!(parsed, chess::Board::default());
    assert_eq!(board.legal_moves(Color::White).len(), 20);
}

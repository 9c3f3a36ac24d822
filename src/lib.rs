#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]

pub mod bitboard;
pub mod board;
pub mod check;
pub mod color;
pub mod error;
pub mod flags;
pub mod location;
pub mod piece;
pub mod player;
pub mod score_map;
pub mod status;

pub use crate::{
    bitboard::BitBoard,
    board::{Board, Digest, Move},
    check::would_leave_king_in_check,
    color::Color,
    error::MoveError,
    flags::{Flag, Flags},
    location::{Location, Offset},
    piece::{CastleSide, Piece, PieceKind, Probe},
    player::{Player, RandomPlayer},
    score_map::{ConcurrentScoreMap, Score},
    status::GameStatus,
};

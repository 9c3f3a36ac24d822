use crate::{
    bitboard::BitBoard,
    board::{Board, Move},
    color::Color,
    error::MoveError,
    status::GameStatus,
};

/// Whether making `movement` would leave `color`'s king attacked.
///
/// The move is played on a scratch copy; `board` itself is untouched. A side
/// with no king on the board is never in check.
///
/// # Errors
///
/// Returns [`MoveError::EmptyStart`] when no piece stands on the start square.
pub fn would_leave_king_in_check(
    color: Color,
    movement: Move,
    board: &Board,
) -> Result<bool, MoveError> {
    let mut scratch = board.clone();
    scratch.make_move(movement)?;
    Ok(scratch.in_check(color))
}

impl Board {
    /// Union of every square `color`'s pieces attack.
    pub fn attackable_by(&self, color: Color) -> BitBoard {
        self.pieces_of(color)
            .map(|piece| piece.attackable_moves(self))
            .fold(BitBoard::EMPTY, |attacked, squares| attacked | squares)
    }
    pub fn in_check(&self, color: Color) -> bool {
        self.king_location(color)
            .is_some_and(|king| self.attackable_by(!color).contains(king))
    }
    pub fn legal_moves(&self, color: Color) -> Vec<Move> {
        self.pieces_of(color)
            .flat_map(|piece| piece.legal_moves(self))
            .collect()
    }
    /// Stops at the first legal move found.
    pub fn has_legal_move(&self, color: Color) -> bool {
        self.pieces_of(color)
            .any(|piece| piece.legal_moves(self).next().is_some())
    }
    pub fn status(&self, to_move: Color) -> GameStatus {
        if self.has_legal_move(to_move) {
            GameStatus::Active
        } else if self.in_check(to_move) {
            GameStatus::win(!to_move)
        } else {
            GameStatus::Stalemate
        }
    }
}

use log::debug;
use rand::{Rng, seq::IndexedRandom};

use crate::{
    board::{Board, Move},
    color::Color,
};

/// Something that picks moves, e.g. a search.
///
/// Returns `None` when it has no move to offer, which for a legal position
/// means the game is over.
pub trait Player {
    fn make_move(&mut self, board: &Board, previous: Option<Move>) -> Option<Move>;
}

/// Plays a uniformly random legal move.
pub struct RandomPlayer<R> {
    color: Color,
    rng: R,
}
impl<R: Rng> RandomPlayer<R> {
    pub fn new(color: Color, rng: R) -> Self {
        RandomPlayer { color, rng }
    }
    pub fn color(&self) -> Color {
        self.color
    }
}
impl<R: Rng> Player for RandomPlayer<R> {
    fn make_move(&mut self, board: &Board, _previous: Option<Move>) -> Option<Move> {
        let moves = board.legal_moves(self.color);
        let movement = moves.choose(&mut self.rng).copied();
        debug!(
            "{} picked {movement:?} out of {} moves",
            self.color,
            moves.len()
        );
        movement
    }
}

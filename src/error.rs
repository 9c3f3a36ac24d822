use thiserror::Error;

use crate::location::Location;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum MoveError {
    /// The move generation layer produced a move without a piece to make it.
    #[error("no piece on {0} to move")]
    EmptyStart(Location),
}

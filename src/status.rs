use std::fmt::{self, Display, Formatter};

use crate::color::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Active,
    WhiteWin,
    BlackWin,
    Stalemate,
}
impl GameStatus {
    pub fn win(color: Color) -> Self {
        match color {
            Color::White => GameStatus::WhiteWin,
            Color::Black => GameStatus::BlackWin,
        }
    }
    pub fn is_over(self) -> bool {
        self != GameStatus::Active
    }
}
impl Display for GameStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Active => write!(f, "Active")?,
            GameStatus::WhiteWin => write!(f, "White Win")?,
            GameStatus::BlackWin => write!(f, "Black Win")?,
            GameStatus::Stalemate => write!(f, "Stalemate")?,
        }
        Ok(())
    }
}

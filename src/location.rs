use std::{
    fmt::{self, Display, Formatter},
    ops::{Add, Mul, Neg},
};

use crate::color::Color;

/// A square on the board.
///
/// Row 0 is black's back rank and column 0 is the `a` file. A `Location` is
/// always on the board; stepping off of it yields `None` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Location {
    row: u8,
    col: u8,
}
impl Location {
    pub const fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < 8);
        debug_assert!(col < 8);
        Location { row, col }
    }
    pub fn new_checked(row: u8, col: u8) -> Option<Self> {
        if row >= 8 || col >= 8 {
            None
        } else {
            Some(Location { row, col })
        }
    }
    pub fn from_index(index: usize) -> Option<Self> {
        let row = u8::try_from(index / 8).ok()?;
        let col = u8::try_from(index % 8).ok()?;
        Location::new_checked(row, col)
    }
    pub fn row(self) -> u8 {
        self.row
    }
    pub fn col(self) -> u8 {
        self.col
    }
    pub fn index(self) -> usize {
        self.row as usize * 8 + self.col as usize
    }
    pub fn add_relative(self, offset: Offset) -> Option<Self> {
        Location::new_checked(
            self.row.checked_add_signed(offset.row)?,
            self.col.checked_add_signed(offset.col)?,
        )
    }
    /// Squares along `direction`, excluding `self`, until the edge of the board.
    pub fn line(self, direction: Offset) -> impl Iterator<Item = Self> {
        debug_assert_ne!(direction, Offset::ZERO);
        (1..).map_while(move |distance| self.add_relative(direction * distance))
    }
    pub fn all() -> impl Iterator<Item = Self> {
        (0..8).flat_map(|row| (0..8).map(move |col| Location { row, col }))
    }
}
impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let file = (self.col + b'a') as char;
        let rank = 8 - self.row;
        write!(f, "{file}{rank}")?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Offset {
    pub row: i8,
    pub col: i8,
}
impl Offset {
    pub const ZERO: Self = Offset { row: 0, col: 0 };

    pub const UP: Self = Offset { row: -1, col: 0 };
    pub const RIGHT: Self = Offset { row: 0, col: 1 };
    pub const DOWN: Self = Offset { row: 1, col: 0 };
    pub const LEFT: Self = Offset { row: 0, col: -1 };

    pub const ROOK_DIRECTIONS: [Self; 4] = [Offset::UP, Offset::RIGHT, Offset::DOWN, Offset::LEFT];
    pub const BISHOP_DIRECTIONS: [Self; 4] = [
        Offset { row: -1, col: 1 },
        Offset { row: 1, col: 1 },
        Offset { row: -1, col: -1 },
        Offset { row: 1, col: -1 },
    ];
    pub const KING_MOVES: [Self; 8] = [
        Offset { row: -1, col: -1 },
        Offset { row: -1, col: 0 },
        Offset { row: -1, col: 1 },
        Offset { row: 0, col: -1 },
        Offset { row: 0, col: 1 },
        Offset { row: 1, col: -1 },
        Offset { row: 1, col: 0 },
        Offset { row: 1, col: 1 },
    ];
    pub const QUEEN_DIRECTIONS: [Self; 8] = Offset::KING_MOVES;
    pub const KNIGHT_MOVES: [Self; 8] = [
        Offset { row: -2, col: -1 },
        Offset { row: -2, col: 1 },
        Offset { row: 2, col: -1 },
        Offset { row: 2, col: 1 },
        Offset { row: -1, col: -2 },
        Offset { row: -1, col: 2 },
        Offset { row: 1, col: -2 },
        Offset { row: 1, col: 2 },
    ];

    pub fn pawn_forward(color: Color) -> Self {
        Offset {
            row: color.forward(),
            col: 0,
        }
    }
    pub fn pawn_attacks(color: Color) -> [Self; 2] {
        [-1, 1].map(|col| Offset {
            row: color.forward(),
            col,
        })
    }
}
impl Neg for Offset {
    type Output = Offset;

    fn neg(self) -> Self::Output {
        Offset {
            row: -self.row,
            col: -self.col,
        }
    }
}
impl Add<Self> for Offset {
    type Output = Offset;

    fn add(self, rhs: Self) -> Self::Output {
        Offset {
            row: self.row + rhs.row,
            col: self.col + rhs.col,
        }
    }
}
impl Mul<i8> for Offset {
    type Output = Offset;

    fn mul(self, rhs: i8) -> Self::Output {
        Offset {
            row: self.row * rhs,
            col: self.col * rhs,
        }
    }
}

use std::ops::{BitOr, BitOrAssign};

use crate::location::Location;

/// A set of squares, one bit per [`Location::index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BitBoard(u64);

impl BitBoard {
    pub const EMPTY: Self = BitBoard(0);

    pub fn set(&mut self, location: Location) {
        self.0 |= 1 << location.index();
    }
    pub fn contains(self, location: Location) -> bool {
        (self.0 >> location.index()) & 0b_1 == 1
    }
    pub fn len(self) -> u32 {
        self.0.count_ones()
    }
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
    pub fn iter(self) -> impl Iterator<Item = Location> {
        let mut bits = self.0;
        std::iter::from_fn(move || {
            if bits == 0 {
                None
            } else {
                let index = bits.trailing_zeros() as usize;
                bits &= bits - 1;
                Location::from_index(index)
            }
        })
    }
}
impl BitOr for BitBoard {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        BitBoard(self.0 | rhs.0)
    }
}
impl BitOrAssign for BitBoard {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}
impl FromIterator<Location> for BitBoard {
    fn from_iter<T: IntoIterator<Item = Location>>(iter: T) -> Self {
        let mut board = BitBoard::EMPTY;
        for location in iter {
            board.set(location);
        }
        board
    }
}

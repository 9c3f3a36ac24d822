use crate::color::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Flag {
    Castled = 0,
    KingMoved,
    LeftRookMoved,
    RightRookMoved,
}
impl Flag {
    pub const ALL: [Self; 4] = [
        Flag::Castled,
        Flag::KingMoved,
        Flag::LeftRookMoved,
        Flag::RightRookMoved,
    ];

    fn bit(self) -> u8 {
        0b_1 << (self as u8)
    }
}

// Bit structure per color: 0000RLKC
// R - right rook moved, L - left rook moved, K - king moved, C - castled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Flags {
    white: u8,
    black: u8,
}
impl Flags {
    pub fn none() -> Self {
        Flags { white: 0, black: 0 }
    }
    fn byte(self, color: Color) -> u8 {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }
    fn byte_mut(&mut self, color: Color) -> &mut u8 {
        match color {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        }
    }
    pub fn get(self, flag: Flag, color: Color) -> bool {
        self.byte(color) & flag.bit() != 0
    }
    pub fn set(&mut self, flag: Flag, color: Color, value: bool) {
        let byte = self.byte_mut(color);
        if value {
            *byte |= flag.bit();
        } else {
            *byte &= !flag.bit();
        }
    }
    pub fn clear(&mut self) {
        *self = Flags::none();
    }
    pub fn to_bytes(self) -> [u8; 2] {
        [self.white, self.black]
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

pub const SYMBOL_COUNT: usize = 4;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Symbol {
    A,
    B,
    C,
    D,
}

impl Symbol {
    pub const ALL: [Symbol; SYMBOL_COUNT] = [Symbol::A, Symbol::B, Symbol::C, Symbol::D];

    pub fn from_index(i: u8) -> Self {
        match i % 4 {
            0 => Symbol::A,
            1 => Symbol::B,
            2 => Symbol::C,
            _ => Symbol::D,
        }
    }

    pub fn to_index(self) -> u8 {
        match self {
            Symbol::A => 0,
            Symbol::B => 1,
            Symbol::C => 2,
            Symbol::D => 3,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Symbol::A => 'A',
            Symbol::B => 'B',
            Symbol::C => 'C',
            Symbol::D => 'D',
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

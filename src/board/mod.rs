//! Board representation for Othello

pub mod bitboard;
pub mod board;

#[cfg(test)]
mod tests;

use std::fmt;
use std::str::FromStr;

use crate::error::ParseMoveError;

// Re-exports
pub use bitboard::Bitboard;
pub use board::Board;

/// Board size (8x8)
pub const BOARD_SIZE: usize = 8;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 64

/// The two competing sides. Black moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Black,
    White,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Side {
    /// Get the opposing side
    #[inline]
    pub fn opponent(self) -> Side {
        match self {
            Side::Black => Side::White,
            Side::White => Side::Black,
        }
    }

    /// Human readable name
    pub fn name(self) -> &'static str {
        match self {
            Side::Black => "Black",
            Side::White => "White",
        }
    }
}

/// Cell contents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stone {
    Empty,
    Black,
    White,
}

impl Stone {
    /// Side owning this stone, `None` for an empty cell
    #[inline]
    pub fn side(self) -> Option<Side> {
        match self {
            Stone::Black => Some(Side::Black),
            Stone::White => Some(Side::White),
            Stone::Empty => None,
        }
    }
}

impl From<Side> for Stone {
    #[inline]
    fn from(side: Side) -> Self {
        match side {
            Side::Black => Stone::Black,
            Side::White => Stone::White,
        }
    }
}

/// Position on the board.
///
/// Fields are private so every `Pos` is on the board; bitboard shifts rely on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    row: u8,
    col: u8,
}

impl Pos {
    /// # Panics
    /// If `row` or `col` is off the board.
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        assert!(
            row < BOARD_SIZE as u8 && col < BOARD_SIZE as u8,
            "position ({}, {}) is off the board",
            row,
            col
        );
        Self { row, col }
    }

    /// Checked constructor
    #[inline]
    pub fn try_new(row: u8, col: u8) -> Option<Self> {
        (row < BOARD_SIZE as u8 && col < BOARD_SIZE as u8).then_some(Self { row, col })
    }

    #[inline]
    pub fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub fn col(self) -> u8 {
        self.col
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        debug_assert!(idx < TOTAL_CELLS);
        Self {
            row: (idx / BOARD_SIZE) as u8,
            col: (idx % BOARD_SIZE) as u8,
        }
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32) -> bool {
        row >= 0 && row < BOARD_SIZE as i32 && col >= 0 && col < BOARD_SIZE as i32
    }

    /// Neighbouring position one step along `(dr, dc)`, if still on the board
    #[inline]
    pub fn offset(self, dr: i32, dc: i32) -> Option<Pos> {
        let r = self.row as i32 + dr;
        let c = self.col as i32 + dc;
        if Pos::is_valid(r, c) {
            Pos::try_new(r as u8, c as u8)
        } else {
            None
        }
    }

    /// The four corner cells
    pub const CORNERS: [Pos; 4] = [
        Pos { row: 0, col: 0 },
        Pos { row: 0, col: 7 },
        Pos { row: 7, col: 0 },
        Pos { row: 7, col: 7 },
    ];
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_index().cmp(&other.to_index())
    }
}

/// Notation: column letter `a`-`h`, then row digit `1`-`8` counted from the top.
impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.col) as char, self.row + 1)
    }
}

impl FromStr for Pos {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim().to_ascii_lowercase();
        let bytes = text.as_bytes();
        if bytes.len() != 2 {
            return Err(ParseMoveError::Length(s.trim().to_string()));
        }

        let (letter, digit) = (bytes[0], bytes[1]);
        if !(b'a'..=b'h').contains(&letter) {
            return Err(ParseMoveError::Column(letter as char));
        }
        if !(b'1'..=b'8').contains(&digit) {
            return Err(ParseMoveError::Row(digit as char));
        }

        Ok(Pos::new(digit - b'1', letter - b'a'))
    }
}

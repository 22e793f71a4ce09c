//! Board structure: two disjoint bitboards, one per side

use super::bitboard::Bitboard;
use super::{Pos, Side, Stone, BOARD_SIZE};

/// Game board.
///
/// `Copy` on purpose: applying a move yields a new board, so a search branch
/// can never observe a sibling's mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    /// Black stones bitboard
    pub black: Bitboard,
    /// White stones bitboard
    pub white: Bitboard,
}

impl Board {
    /// Standard starting position: d4/e5 White, e4/d5 Black.
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.place_stone(Pos::new(3, 3), Side::White);
        board.place_stone(Pos::new(3, 4), Side::Black);
        board.place_stone(Pos::new(4, 3), Side::Black);
        board.place_stone(Pos::new(4, 4), Side::White);
        board
    }

    /// Board with no stones at all
    pub const fn empty() -> Self {
        Self {
            black: Bitboard::new(),
            white: Bitboard::new(),
        }
    }

    /// Build a board from eight text rows.
    ///
    /// `B`/`X`/`@` is Black, `W`/`O` is White, `.` or `-` is empty; spaces are
    /// ignored. Returns `None` if a row does not hold exactly eight cells or
    /// contains an unknown character.
    pub fn from_rows(rows: [&str; BOARD_SIZE]) -> Option<Self> {
        let mut board = Self::empty();
        for (r, line) in rows.iter().enumerate() {
            let cells: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if cells.len() != BOARD_SIZE {
                return None;
            }
            for (c, ch) in cells.into_iter().enumerate() {
                let pos = Pos::new(r as u8, c as u8);
                match ch {
                    'B' | 'b' | 'X' | 'x' | '@' => board.place_stone(pos, Side::Black),
                    'W' | 'w' | 'O' | 'o' => board.place_stone(pos, Side::White),
                    '.' | '-' => {}
                    _ => return None,
                }
            }
        }
        Some(board)
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        if self.black.get(pos) {
            Stone::Black
        } else if self.white.get(pos) {
            Stone::White
        } else {
            Stone::Empty
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.black.get(pos) && !self.white.get(pos)
    }

    /// Put a stone of `side` on `pos`, replacing whatever was there.
    /// No flipping; use `rules::apply_and_flip` for game moves.
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, side: Side) {
        self.stones_mut(side.opponent()).clear(pos);
        self.stones_mut(side).set(pos);
    }

    /// Remove a stone
    #[inline]
    pub fn remove_stone(&mut self, pos: Pos) {
        self.black.clear(pos);
        self.white.clear(pos);
    }

    /// Get bitboard for a side
    #[inline]
    pub fn stones(&self, side: Side) -> Bitboard {
        match side {
            Side::Black => self.black,
            Side::White => self.white,
        }
    }

    /// Get mutable bitboard for a side
    #[inline]
    pub fn stones_mut(&mut self, side: Side) -> &mut Bitboard {
        match side {
            Side::Black => &mut self.black,
            Side::White => &mut self.white,
        }
    }

    /// All occupied cells
    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.black.union(self.white)
    }

    /// All empty cells
    #[inline]
    pub fn empty_cells(&self) -> Bitboard {
        Bitboard::from_bits(!self.occupied().bits())
    }

    /// Number of stones held by `side`
    #[inline]
    pub fn count(&self, side: Side) -> u32 {
        self.stones(side).count()
    }

    /// (Black, White) stone counts
    #[inline]
    pub fn stone_counts(&self) -> (u32, u32) {
        (self.black.count(), self.white.count())
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.black.count() + self.white.count()
    }

    /// Every cell is occupied
    #[inline]
    pub fn is_full(&self) -> bool {
        self.empty_cells().is_empty()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

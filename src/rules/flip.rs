//! Move legality and stone flipping
//!
//! A move at `pos` is legal when, in at least one of the eight compass
//! directions, the adjacent cells hold a run of one or more opponent stones
//! closed by a stone of the mover. Every such closed run is flipped; a run
//! that reaches an empty cell or the board edge first flips nothing.

use crate::board::{Bitboard, Board, Pos, Side};
use crate::error::RuleError;

/// Direction vectors for the eight compass directions
pub const DIRECTIONS: [(i32, i32); 8] = [
    (0, 1),   // E
    (0, -1),  // W
    (1, 0),   // S
    (-1, 0),  // N
    (1, 1),   // SE
    (1, -1),  // SW
    (-1, 1),  // NE
    (-1, -1), // NW
];

/// Record of an in-place move, enough to reverse it exactly.
///
/// The placed cell was empty before the move and every flipped cell belonged
/// to the opponent, so `pos` and `flipped` are the full set of touched cells
/// and their previous states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlipRecord {
    pub pos: Pos,
    pub side: Side,
    pub flipped: Bitboard,
}

impl FlipRecord {
    /// Number of opponent stones converted by this move
    #[inline]
    pub fn flipped_count(&self) -> u32 {
        self.flipped.count()
    }
}

/// Opponent stones that would be flipped along one direction.
///
/// Empty when the run is not closed by a stone of `side`.
fn flips_in_direction(board: &Board, pos: Pos, side: Side, dr: i32, dc: i32) -> Bitboard {
    let opponent = side.opponent();
    let mut run = Bitboard::new();
    let mut cursor = pos.offset(dr, dc);

    while let Some(p) = cursor {
        match board.get(p).side() {
            Some(owner) if owner == opponent => {
                run.set(p);
                cursor = p.offset(dr, dc);
            }
            // Own stone closes the run (an empty run means an adjacent own stone)
            Some(_) => return run,
            None => return Bitboard::new(),
        }
    }

    // Ran off the edge
    Bitboard::new()
}

/// All stones a move would flip. Empty if the cell is occupied or the move is illegal.
pub fn flips(board: &Board, pos: Pos, side: Side) -> Bitboard {
    if !board.is_empty(pos) {
        return Bitboard::new();
    }

    DIRECTIONS
        .iter()
        .fold(Bitboard::new(), |acc, &(dr, dc)| {
            acc.union(flips_in_direction(board, pos, side, dr, dc))
        })
}

/// Check whether `side` may place a stone at `pos`.
///
/// # Arguments
/// * `board` - Current board state
/// * `pos` - Target cell
/// * `side` - Side to move
///
/// # Returns
/// `true` if the cell is empty and at least one direction flips.
#[inline]
pub fn is_legal(board: &Board, pos: Pos, side: Side) -> bool {
    board.is_empty(pos)
        && DIRECTIONS
            .iter()
            .any(|&(dr, dc)| !flips_in_direction(board, pos, side, dr, dc).is_empty())
}

/// Apply a move in place and return the record needed to undo it.
///
/// Caller must have checked `is_legal`.
pub fn make_move(board: &mut Board, pos: Pos, side: Side) -> FlipRecord {
    debug_assert!(is_legal(board, pos, side), "illegal move {} for {}", pos, side);

    let flipped = flips(board, pos, side);
    board.place_stone(pos, side);

    let own = board.stones(side).union(flipped);
    let theirs = board.stones(side.opponent()).difference(flipped);
    *board.stones_mut(side) = own;
    *board.stones_mut(side.opponent()) = theirs;

    FlipRecord { pos, side, flipped }
}

/// Reverse a move applied by `make_move`.
pub fn unmake_move(board: &mut Board, record: &FlipRecord) {
    let own = board.stones(record.side).difference(record.flipped);
    let theirs = board.stones(record.side.opponent()).union(record.flipped);
    *board.stones_mut(record.side) = own;
    *board.stones_mut(record.side.opponent()) = theirs;
    board.remove_stone(record.pos);
}

/// Place `side`'s stone at `pos` and flip every closed run, returning the new board.
///
/// The input board is left untouched. Only call this with a legal move.
#[must_use]
pub fn apply_and_flip(board: &Board, pos: Pos, side: Side) -> Board {
    let mut next = *board;
    make_move(&mut next, pos, side);
    next
}

/// Checked variant of `apply_and_flip`.
pub fn try_apply(board: &Board, pos: Pos, side: Side) -> Result<Board, RuleError> {
    if !board.is_empty(pos) {
        return Err(RuleError::Occupied(pos));
    }
    if !is_legal(board, pos, side) {
        return Err(RuleError::IllegalMove { pos, side });
    }
    Ok(apply_and_flip(board, pos, side))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Stone;

    #[test]
    fn test_opening_moves_are_legal() {
        let board = Board::new();
        // The four standard openings for Black
        for pos in [Pos::new(2, 3), Pos::new(3, 2), Pos::new(4, 5), Pos::new(5, 4)] {
            assert!(is_legal(&board, pos, Side::Black), "{} should be legal", pos);
        }
        assert!(!is_legal(&board, Pos::new(2, 2), Side::Black));
        assert!(!is_legal(&board, Pos::new(0, 0), Side::Black));
    }

    #[test]
    fn test_occupied_is_illegal() {
        let board = Board::new();
        assert!(!is_legal(&board, Pos::new(3, 3), Side::White));
        assert!(flips(&board, Pos::new(3, 3), Side::White).is_empty());
    }

    #[test]
    fn test_opening_flip() {
        let board = Board::new();
        let next = apply_and_flip(&board, Pos::new(2, 3), Side::Black);

        assert_eq!(next.get(Pos::new(2, 3)), Stone::Black);
        // d4 was White and flips
        assert_eq!(next.get(Pos::new(3, 3)), Stone::Black);
        assert_eq!(next.get(Pos::new(4, 4)), Stone::White);
        assert_eq!(next.stone_counts(), (4, 1));
        // Input untouched
        assert_eq!(board.stone_counts(), (2, 2));
    }

    #[test]
    fn test_run_must_be_closed() {
        // White run on row 0 is open at both ends
        let board = Board::from_rows([
            ".WW.....",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
        ])
        .unwrap();
        assert!(!is_legal(&board, Pos::new(0, 0), Side::Black));
        assert!(!is_legal(&board, Pos::new(0, 3), Side::Black));
    }

    #[test]
    fn test_run_reaching_edge_flips_nothing() {
        let board = Board::from_rows([
            "........",
            "........",
            "........",
            "....BWWW",
            "........",
            "........",
            "........",
            "........",
        ])
        .unwrap();
        // Playing west of the black stone does not touch the white run
        assert!(!is_legal(&board, Pos::new(3, 3), Side::Black));
        // White can capture the black stone from the west
        assert!(is_legal(&board, Pos::new(3, 3), Side::White));
    }

    #[test]
    fn test_adjacent_own_stone_is_not_a_run() {
        let board = Board::from_rows([
            "........",
            "........",
            "........",
            "...B....",
            "........",
            "........",
            "........",
            "........",
        ])
        .unwrap();
        assert!(!is_legal(&board, Pos::new(3, 4), Side::Black));
    }

    #[test]
    fn test_only_closed_direction_flips() {
        // Closed run to the south, open run to the north
        let board = Board::from_rows([
            "........",
            "...W....",
            "...W....",
            "........",
            "...W.WB.",
            "...W....",
            "...B....",
            "........",
        ])
        .unwrap();
        let pos = Pos::new(3, 3);
        let flipped = flips(&board, pos, Side::Black);
        assert_eq!(
            flipped.iter_ones().collect::<Vec<_>>(),
            vec![Pos::new(4, 3), Pos::new(5, 3)]
        );

        let next = apply_and_flip(&board, pos, Side::Black);
        // North run is open at the top and stays White
        assert_eq!(next.get(Pos::new(1, 3)), Stone::White);
        assert_eq!(next.get(Pos::new(2, 3)), Stone::White);
        assert_eq!(next.get(Pos::new(4, 3)), Stone::Black);
        assert_eq!(next.get(Pos::new(5, 3)), Stone::Black);
        // Not on any line through the placed stone
        assert_eq!(next.get(Pos::new(4, 5)), Stone::White);
    }

    #[test]
    fn test_diagonal_flip() {
        let board = Board::from_rows([
            "B.......",
            ".W......",
            "..W.....",
            "........",
            "........",
            "........",
            "........",
            "........",
        ])
        .unwrap();
        let next = apply_and_flip(&board, Pos::new(3, 3), Side::Black);
        assert_eq!(next.stone_counts(), (4, 0));
    }

    #[test]
    fn test_make_unmake_roundtrip() {
        let mut board = Board::new();
        let original = board;

        let record = make_move(&mut board, Pos::new(2, 3), Side::Black);
        assert_eq!(record.flipped_count(), 1);
        assert_ne!(board, original);

        unmake_move(&mut board, &record);
        assert_eq!(board, original);
    }

    #[test]
    fn test_try_apply_errors() {
        let board = Board::new();
        assert_eq!(
            try_apply(&board, Pos::new(3, 3), Side::Black),
            Err(RuleError::Occupied(Pos::new(3, 3)))
        );
        assert_eq!(
            try_apply(&board, Pos::new(0, 0), Side::Black),
            Err(RuleError::IllegalMove {
                pos: Pos::new(0, 0),
                side: Side::Black
            })
        );
        assert!(try_apply(&board, Pos::new(2, 3), Side::Black).is_ok());
    }
}

//! Legal move enumeration

use crate::board::{Bitboard, Board, Pos, Side};

use super::flip::is_legal;

/// Bitboard of every cell where `side` may play.
pub fn legal_move_mask(board: &Board, side: Side) -> Bitboard {
    board
        .empty_cells()
        .iter_ones()
        .filter(|&pos| is_legal(board, pos, side))
        .collect()
}

/// All legal moves for `side`, top-to-bottom then left-to-right.
///
/// The order is stable so that search tie-breaks are reproducible.
/// An empty list means `side` must pass.
pub fn legal_moves(board: &Board, side: Side) -> Vec<Pos> {
    legal_move_mask(board, side).iter_ones().collect()
}

/// Number of legal moves for `side`
#[inline]
pub fn mobility(board: &Board, side: Side) -> u32 {
    legal_move_mask(board, side).count()
}

/// Whether `side` has at least one legal move
#[inline]
pub fn has_legal_move(board: &Board, side: Side) -> bool {
    board
        .empty_cells()
        .iter_ones()
        .any(|pos| is_legal(board, pos, side))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_moves_black() {
        let board = Board::new();
        assert_eq!(
            legal_moves(&board, Side::Black),
            vec![Pos::new(2, 3), Pos::new(3, 2), Pos::new(4, 5), Pos::new(5, 4)]
        );
    }

    #[test]
    fn test_initial_moves_white() {
        let board = Board::new();
        assert_eq!(
            legal_moves(&board, Side::White),
            vec![Pos::new(2, 4), Pos::new(3, 5), Pos::new(4, 2), Pos::new(5, 3)]
        );
        assert_eq!(mobility(&board, Side::White), 4);
    }

    #[test]
    fn test_moves_are_row_major() {
        let board = Board::new();
        let moves = legal_moves(&board, Side::Black);
        let mut sorted = moves.clone();
        sorted.sort();
        assert_eq!(moves, sorted);
    }

    #[test]
    fn test_no_moves_on_lone_side() {
        let board = Board::from_rows([
            "........",
            "........",
            "........",
            "...BB...",
            "...BB...",
            "........",
            "........",
            "........",
        ])
        .unwrap();
        assert!(legal_moves(&board, Side::Black).is_empty());
        assert!(legal_moves(&board, Side::White).is_empty());
        assert!(!has_legal_move(&board, Side::White));
    }

    #[test]
    fn test_full_board_has_no_moves() {
        let board = Board::from_rows(["BWBWBWBW"; 8]).unwrap();
        assert!(legal_moves(&board, Side::Black).is_empty());
        assert!(legal_moves(&board, Side::White).is_empty());
    }

    #[test]
    fn test_legality_symmetry_on_initial_board() {
        let board = Board::new();
        for side in [Side::Black, Side::White] {
            let moves = legal_moves(&board, side);
            for idx in 0..64 {
                let pos = Pos::from_index(idx);
                assert_eq!(is_legal(&board, pos, side), moves.contains(&pos));
            }
        }
    }
}

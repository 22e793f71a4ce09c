//! Game rules for Othello
//!
//! This module implements the rule set:
//! - Move legality and flipping (closed runs in eight directions)
//! - Legal move enumeration
//! - Game end (no moves for either side, or two consecutive passes)

pub mod end;
pub mod flip;
pub mod moves;

// Re-exports for convenient access
pub use end::{is_game_over, is_terminal, outcome, GameOutcome};
pub use flip::{
    apply_and_flip, flips, is_legal, make_move, try_apply, unmake_move, FlipRecord, DIRECTIONS,
};
pub use moves::{has_legal_move, legal_move_mask, legal_moves, mobility};

#[cfg(test)]
mod property_tests {
    use super::*;
    use crate::board::{Board, Pos, Side};
    use proptest::prelude::*;

    /// Play out a sequence of move choices from the initial position,
    /// passing whenever the side to move is stuck.
    fn playout(choices: &[usize]) -> (Board, Side) {
        let mut board = Board::new();
        let mut side = Side::Black;
        for &choice in choices {
            let moves = legal_moves(&board, side);
            if moves.is_empty() {
                if !has_legal_move(&board, side.opponent()) {
                    break;
                }
            } else {
                board = apply_and_flip(&board, moves[choice % moves.len()], side);
            }
            side = side.opponent();
        }
        (board, side)
    }

    proptest! {
        /// For any reachable board, `is_legal` agrees with `legal_moves` on every cell.
        #[test]
        fn prop_legality_symmetry(choices in prop::collection::vec(0usize..64, 0..40)) {
            let (board, _) = playout(&choices);
            for side in [Side::Black, Side::White] {
                let moves = legal_moves(&board, side);
                for idx in 0..64 {
                    let pos = Pos::from_index(idx);
                    prop_assert_eq!(is_legal(&board, pos, side), moves.contains(&pos));
                }
            }
        }

        /// A move adds exactly one stone and only touches the placed and flipped cells.
        #[test]
        fn prop_flip_conservation(choices in prop::collection::vec(0usize..64, 0..40), pick in 0usize..64) {
            let (board, side) = playout(&choices);
            let moves = legal_moves(&board, side);
            prop_assume!(!moves.is_empty());

            let pos = moves[pick % moves.len()];
            let flipped = flips(&board, pos, side);
            let next = apply_and_flip(&board, pos, side);

            prop_assert_eq!(next.stone_count(), board.stone_count() + 1);
            prop_assert_eq!(next.count(side), board.count(side) + 1 + flipped.count());
            prop_assert!(!flipped.is_empty());

            for idx in 0..64 {
                let cell = Pos::from_index(idx);
                if cell != pos && !flipped.get(cell) {
                    prop_assert_eq!(next.get(cell), board.get(cell));
                }
            }
        }

        /// make_move followed by unmake_move restores the exact board.
        #[test]
        fn prop_make_unmake_restores(choices in prop::collection::vec(0usize..64, 0..40), pick in 0usize..64) {
            let (board, side) = playout(&choices);
            let moves = legal_moves(&board, side);
            prop_assume!(!moves.is_empty());

            let mut work = board;
            let record = make_move(&mut work, moves[pick % moves.len()], side);
            prop_assert_eq!(work, apply_and_flip(&board, record.pos, side));
            unmake_move(&mut work, &record);
            prop_assert_eq!(work, board);
        }
    }
}

//! Game end detection and final result

use crate::board::{Board, Pos, Side};

use super::moves::has_legal_move;

/// Final result of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Side),
    Draw,
}

/// Decide whether the game has ended.
///
/// The game is over when neither side has a legal move, or after two
/// consecutive passes. The caller threads `consecutive_passes`: reset to 0
/// whenever a stone is placed, incremented on every pass.
#[inline]
pub fn is_game_over(moves_black: &[Pos], moves_white: &[Pos], consecutive_passes: u32) -> bool {
    (moves_black.is_empty() && moves_white.is_empty()) || consecutive_passes >= 2
}

/// Neither side can move on `board`
#[inline]
pub fn is_terminal(board: &Board) -> bool {
    !has_legal_move(board, Side::Black) && !has_legal_move(board, Side::White)
}

/// Winner by stone count, or a draw on equal counts
pub fn outcome(board: &Board) -> GameOutcome {
    let (black, white) = board.stone_counts();
    match black.cmp(&white) {
        std::cmp::Ordering::Greater => GameOutcome::Winner(Side::Black),
        std::cmp::Ordering::Less => GameOutcome::Winner(Side::White),
        std::cmp::Ordering::Equal => GameOutcome::Draw,
    }
}

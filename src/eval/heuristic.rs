//! Heuristic evaluation function for Othello positions
//!
//! Evaluated only at search cutoff or at a terminal position. The score is
//! the sum of:
//! - Corner control (±weight per corner)
//! - Mobility differential (legal move counts)
//! - Material differential (stone counts)

use crate::board::{Board, Pos, Side};
use crate::rules::mobility;

use super::weights::EvalWeights;

/// Evaluate the board from the perspective of `side` with default weights.
///
/// Positive values favour `side`. Antisymmetric:
/// `evaluate(b, s) == -evaluate(b, s.opponent())`.
#[must_use]
#[inline]
pub fn evaluate(board: &Board, side: Side) -> i32 {
    evaluate_with(board, side, &EvalWeights::default())
}

/// Evaluate the board from the perspective of `side` with explicit weights.
#[must_use]
pub fn evaluate_with(board: &Board, side: Side, weights: &EvalWeights) -> i32 {
    let opponent = side.opponent();

    let corners = corner_balance(board, side) * weights.corner;

    let mobility_diff = mobility(board, side) as i32 - mobility(board, opponent) as i32;
    let mobility_score = mobility_diff * weights.mobility;

    let material = (board.count(side) as i32 - board.count(opponent) as i32) * weights.material;

    corners + mobility_score + material
}

/// Corners held by `side` minus corners held by the opponent
fn corner_balance(board: &Board, side: Side) -> i32 {
    Pos::CORNERS
        .iter()
        .map(|&pos| match board.get(pos).side() {
            Some(owner) if owner == side => 1,
            Some(_) => -1,
            None => 0,
        })
        .sum()
}

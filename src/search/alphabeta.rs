//! Minimax search with alpha-beta pruning
//!
//! This module implements the opponent's move selection: a depth-bounded
//! minimax over the legal move tree, scored by the static evaluator from the
//! perspective of the searching side.
//!
//! # Features
//!
//! - Alpha-beta pruning (value-preserving; can be disabled for verification)
//! - Forced passes inside the tree consume one ply without moving
//! - Make/unmake on a private work board, no allocation per node beyond the move list
//! - Deterministic: moves are tried in row-major order, first best move wins ties
//!
//! # Example
//!
//! ```
//! use othello::board::{Board, Side};
//! use othello::search::Searcher;
//!
//! let mut searcher = Searcher::new();
//! let board = Board::new();
//!
//! let result = searcher.search(&board, Side::Black, 3);
//! if let Some(best_move) = result.best_move {
//!     println!("Best move: {}", best_move);
//! }
//! ```

use crate::board::{Board, Pos, Side};
use crate::eval::{evaluate_with, EvalWeights};
use crate::rules::{has_legal_move, legal_moves, make_move, unmake_move};

/// Infinity score for alpha-beta bounds
pub const INF: i32 = 1_000_000;

/// Search depth used when nothing else is configured
pub const DEFAULT_DEPTH: u8 = 5;

/// Search statistics for diagnostics and tuning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes visited, root children included
    pub nodes: u64,
    /// Static evaluations at cutoff depth or terminal positions
    pub leaf_evals: u64,
    /// Sibling loops abandoned because `beta <= alpha`
    pub cutoffs: u64,
    /// Forced passes taken inside the tree
    pub passes: u64,
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found, `None` when the side must pass
    pub best_move: Option<Pos>,
    /// Minimax score of the best move, from the searching side's perspective
    pub score: i32,
    /// Depth searched in plies
    pub depth: u8,
    /// Total nodes searched
    pub nodes: u64,
    /// Search diagnostics
    pub stats: SearchStats,
}

/// Alpha-beta searcher.
///
/// Holds only configuration and per-search counters; no positions are cached
/// between searches.
#[derive(Debug, Clone)]
pub struct Searcher {
    weights: EvalWeights,
    pruning: bool,
    stats: SearchStats,
}

impl Searcher {
    /// Create a searcher with default weights and pruning enabled.
    #[must_use]
    pub fn new() -> Self {
        Self::with_weights(EvalWeights::default())
    }

    /// Create a searcher with explicit evaluation weights.
    #[must_use]
    pub fn with_weights(weights: EvalWeights) -> Self {
        Self {
            weights,
            pruning: true,
            stats: SearchStats::default(),
        }
    }

    /// Enable or disable the `beta <= alpha` cutoff.
    ///
    /// Disabling it yields a plain minimax over the same tree; scores and
    /// chosen moves are identical, only slower.
    #[must_use]
    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }

    #[must_use]
    pub fn pruning(&self) -> bool {
        self.pruning
    }

    /// Counters from the most recent search
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Pick the best move for `side`, searching `depth` plies (at least 1).
    ///
    /// Every legal move is tried in row-major order; the child is searched
    /// with the opponent to move and a running alpha. A later move replaces
    /// the current best only with a strictly greater score.
    #[must_use]
    pub fn search(&mut self, board: &Board, side: Side, depth: u8) -> SearchResult {
        self.stats = SearchStats::default();
        let depth = depth.max(1);

        let moves = legal_moves(board, side);
        if moves.is_empty() {
            return SearchResult {
                best_move: None,
                score: evaluate_with(board, side, &self.weights),
                depth,
                nodes: 0,
                stats: self.stats.clone(),
            };
        }

        let mut work_board = *board;
        let mut best_move = None;
        let mut best_score = -INF;
        let mut alpha = -INF;
        let beta = INF;

        for &mov in &moves {
            let record = make_move(&mut work_board, mov, side);
            let score = self.alpha_beta(&mut work_board, side, depth - 1, false, alpha, beta);
            unmake_move(&mut work_board, &record);

            log::trace!("root {} -> {}", mov, score);

            if score > best_score {
                best_score = score;
                best_move = Some(mov);
            }
            alpha = alpha.max(best_score);
        }

        debug_assert_eq!(&work_board, board);

        SearchResult {
            best_move,
            score: best_score,
            depth,
            nodes: self.stats.nodes,
            stats: self.stats.clone(),
        }
    }

    /// Minimax value of `board` for `root`, with `depth` plies remaining.
    ///
    /// `maximizing` selects whether `root` or its opponent is to move.
    #[must_use]
    pub fn minimax(
        &mut self,
        board: &Board,
        root: Side,
        depth: u8,
        maximizing: bool,
        alpha: i32,
        beta: i32,
    ) -> i32 {
        let mut work_board = *board;
        self.alpha_beta(&mut work_board, root, depth, maximizing, alpha, beta)
    }

    fn alpha_beta(
        &mut self,
        board: &mut Board,
        root: Side,
        depth: u8,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.stats.nodes += 1;

        if depth == 0 {
            self.stats.leaf_evals += 1;
            return evaluate_with(board, root, &self.weights);
        }

        let to_move = if maximizing { root } else { root.opponent() };
        let moves = legal_moves(board, to_move);

        if moves.is_empty() {
            if !has_legal_move(board, to_move.opponent()) {
                // Game over: neither side can move
                self.stats.leaf_evals += 1;
                return evaluate_with(board, root, &self.weights);
            }
            // Forced pass: same board, other side, one ply used
            self.stats.passes += 1;
            return self.alpha_beta(board, root, depth - 1, !maximizing, alpha, beta);
        }

        if maximizing {
            let mut best = -INF;
            for &mov in &moves {
                let record = make_move(board, mov, to_move);
                let score = self.alpha_beta(board, root, depth - 1, false, alpha, beta);
                unmake_move(board, &record);

                best = best.max(score);
                alpha = alpha.max(best);
                if self.pruning && beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            best
        } else {
            let mut best = INF;
            for &mov in &moves {
                let record = make_move(board, mov, to_move);
                let score = self.alpha_beta(board, root, depth - 1, true, alpha, beta);
                unmake_move(board, &record);

                best = best.min(score);
                beta = beta.min(best);
                if self.pruning && beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            best
        }
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Best move for `side` at `depth` plies with default settings.
///
/// `None` means `side` has no legal move and must pass.
#[must_use]
pub fn find_best_move(board: &Board, side: Side, depth: u8) -> Option<Pos> {
    Searcher::new().search(board, side, depth).best_move
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use crate::rules::apply_and_flip;
    use proptest::prelude::*;

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
        #![proptest_config(ProptestConfig::with_cases(48))]

        /// Alpha-beta returns exactly the plain minimax value and the same move.
        #[test]
        fn prop_alpha_beta_equivalence(
            choices in prop::collection::vec(0usize..64, 0..50),
            depth in 1u8..=3,
            maximizing in any::<bool>(),
        ) {
            let (board, side) = playout(&choices);

            let mut pruned = Searcher::new();
            let mut plain = Searcher::new().with_pruning(false);

            let a = pruned.minimax(&board, side, depth, maximizing, -INF, INF);
            let b = plain.minimax(&board, side, depth, maximizing, -INF, INF);
            prop_assert_eq!(a, b);

            let ra = pruned.search(&board, side, depth);
            let rb = plain.search(&board, side, depth);
            prop_assert_eq!(ra.best_move, rb.best_move);
            prop_assert_eq!(ra.score, rb.score);
        }

        /// The chosen move is always legal, and absent exactly when none exists.
        #[test]
        fn prop_best_move_is_legal(choices in prop::collection::vec(0usize..64, 0..50)) {
            let (board, side) = playout(&choices);
            let moves = legal_moves(&board, side);
            match find_best_move(&board, side, 2) {
                Some(mov) => prop_assert!(moves.contains(&mov)),
                None => prop_assert!(moves.is_empty()),
            }
        }
    }
}

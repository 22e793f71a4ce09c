//! Main AI engine
//!
//! Wraps the alpha-beta searcher with a configured depth and reports the
//! chosen move together with timing and node statistics.
//!
//! # Example
//!
//! ```
//! use othello::{AIEngine, Board, Side};
//!
//! // Shallow depth keeps the doc test fast
//! let mut engine = AIEngine::with_depth(3);
//! let board = Board::new();
//!
//! let result = engine.get_move_with_stats(&board, Side::White);
//! println!("Best move: {:?}", result.best_move);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::time::Instant;

use crate::board::{Board, Pos, Side};
use crate::config::EngineConfig;
use crate::search::{SearchResult, SearchStats, Searcher, DEFAULT_DEPTH};

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Best move found, `None` when the side to move must pass
    pub best_move: Option<Pos>,
    /// Minimax score of the best move for the side that searched
    pub score: i32,
    /// Plies searched
    pub depth: u8,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
    /// Search diagnostics
    pub stats: SearchStats,
}

impl MoveResult {
    #[inline]
    fn from_search(result: SearchResult, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            depth: result.depth,
            time_ms,
            nodes: result.nodes,
            stats: result.stats,
        }
    }
}

/// Main AI engine for Othello.
///
/// Symmetric: it can pick a move for either side.
///
/// # Example
///
/// ```
/// use othello::{AIEngine, Board, Side};
///
/// let mut engine = AIEngine::with_depth(2);
/// let board = Board::new();
/// if let Some(best_move) = engine.get_move(&board, Side::Black) {
///     println!("Play at {}", best_move);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AIEngine {
    searcher: Searcher,
    depth: u8,
}

impl AIEngine {
    /// Create a new AI engine with default settings (depth 5, pruning on).
    #[must_use]
    pub fn new() -> Self {
        Self::with_depth(DEFAULT_DEPTH)
    }

    /// Create an engine searching `depth` plies (clamped to at least 1).
    #[must_use]
    pub fn with_depth(depth: u8) -> Self {
        Self {
            searcher: Searcher::new(),
            depth: depth.max(1),
        }
    }

    /// Create an engine from loaded configuration.
    #[must_use]
    pub fn from_config(config: &EngineConfig) -> Self {
        Self {
            searcher: Searcher::with_weights(config.weights).with_pruning(config.pruning),
            depth: config.depth.max(1),
        }
    }

    /// Get the best move for `side`, or `None` if it has to pass.
    #[must_use]
    pub fn get_move(&mut self, board: &Board, side: Side) -> Option<Pos> {
        self.get_move_with_stats(board, side).best_move
    }

    /// Get the best move with detailed search statistics.
    #[must_use]
    pub fn get_move_with_stats(&mut self, board: &Board, side: Side) -> MoveResult {
        let start = Instant::now();
        let result = self.searcher.search(board, side, self.depth);
        let time_ms = start.elapsed().as_millis() as u64;

        match result.best_move {
            Some(pos) => log::debug!(
                "{} plays {} (score {}, depth {}, {} nodes, {} cutoffs, {}ms)",
                side,
                pos,
                result.score,
                result.depth,
                result.nodes,
                result.stats.cutoffs,
                time_ms
            ),
            None => log::debug!("{} has no legal move", side),
        }

        MoveResult::from_search(result, time_ms)
    }

    /// Set the search depth in plies (clamped to at least 1).
    pub fn set_depth(&mut self, depth: u8) {
        self.depth = depth.max(1);
    }

    /// Get the current search depth.
    #[must_use]
    pub fn depth(&self) -> u8 {
        self.depth
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}

//! Search module for the Othello AI
//!
//! Contains:
//! - Minimax with alpha-beta pruning
//! - Best-move selection at a fixed depth

pub mod alphabeta;

pub use alphabeta::{find_best_move, SearchResult, SearchStats, Searcher, DEFAULT_DEPTH, INF};

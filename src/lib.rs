//! Othello engine with a minimax / alpha-beta opponent
//!
//! Standard Othello (Reversi) rules:
//! - 8x8 board, Black moves first from the usual four-stone centre
//! - A move must flip at least one straight closed run of opponent stones
//! - A side without a legal move passes; the game ends when neither side can move
//! - Most stones wins, equal counts draw
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation with bitboards and move notation
//! - [`rules`]: Flipping, legal move enumeration, game end
//! - [`eval`]: Static evaluation (corners, mobility, material)
//! - [`search`]: Depth-bounded minimax with alpha-beta pruning
//! - [`engine`]: AI engine facade with timing
//! - [`game`]: Turn and pass bookkeeping shared by the front ends
//! - [`config`]: TOML configuration
//!
//! # Quick Start
//!
//! ```
//! use othello::{AIEngine, Game, Pos};
//!
//! let mut game = Game::new();
//! let mut engine = AIEngine::with_depth(3);
//!
//! // Human plays Black
//! game.play(Pos::new(2, 3)).unwrap();
//!
//! // AI responds as White
//! if let Some(pos) = engine.get_move(game.board(), game.to_move()) {
//!     game.play(pos).unwrap();
//!     println!("AI plays at {}", pos);
//! }
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Side, Stone, BOARD_SIZE};
pub use config::{AppConfig, EngineConfig};
pub use engine::{AIEngine, MoveResult};
pub use error::{ConfigError, ParseMoveError, RuleError};
pub use game::{Game, TurnReport};
pub use rules::GameOutcome;

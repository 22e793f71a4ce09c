//! Error types

use std::path::PathBuf;

use crate::board::{Pos, Side};

/// Errors raised when a move is rejected by the rules or by the session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    #[error("{0} is already occupied")]
    Occupied(Pos),

    #[error("{side} cannot play {pos}: no stones would be flipped")]
    IllegalMove { pos: Pos, side: Side },

    #[error("{0} has a legal move and cannot pass")]
    PassNotAllowed(Side),

    #[error("the game is over")]
    GameOver,
}

/// Errors raised when parsing move notation such as `d3`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseMoveError {
    #[error("expected a column letter and a row digit (e.g. d3), got {0:?}")]
    Length(String),

    #[error("column must be a-h, got {0:?}")]
    Column(char),

    #[error("row must be 1-8, got {0:?}")]
    Row(char),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

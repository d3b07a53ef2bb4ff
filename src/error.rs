use std::path::PathBuf;

use crate::game::Piece;

/// Errors reported by the engine when a caller breaks a move precondition.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("board size {rows}x{cols} is outside the supported 4..=8 range")]
    BoardSize { rows: usize, cols: usize },

    #[error("column {column} is out of range (1..={cols})")]
    ColumnOutOfRange { column: usize, cols: usize },

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("no legal move available")]
    NoMoveAvailable,

    #[error("automated opponent cannot move while it is {0}'s turn")]
    NotAutomatedTurn(Piece),
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

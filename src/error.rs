use std::path::PathBuf;

/// Errors raised by the board model: illegal moves and malformed positions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("column {column} is out of range (board has {cols} columns)")]
    InvalidColumn { column: usize, cols: usize },

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error(
        "invalid board {rows}x{cols} with win length {win_length} \
         (dimensions must be > 0 and win length must fit the board)"
    )]
    InvalidDimensions {
        rows: usize,
        cols: usize,
        win_length: usize,
    },

    #[error("expected {expected} cells in row {row}, got {got}")]
    RaggedRow {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("invalid character '{character}' at row {row}, column {col}")]
    InvalidCellCharacter {
        character: char,
        row: usize,
        col: usize,
    },

    #[error("invalid piece counts: player 1 = {one}, player 2 = {two} (must be equal or player 1 ahead by 1)")]
    InvalidPieceCounts { one: usize, two: usize },

    #[error("piece at row {row}, column {col} has an empty cell beneath it")]
    FloatingPiece { row: usize, col: usize },
}

/// Errors that can occur while an agent picks a move or a game is driven.
#[derive(Debug, thiserror::Error)]
pub enum AgentError {
    #[error("no legal moves available")]
    NoLegalMoves,

    #[error("input closed before a move was entered")]
    InputClosed,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("agent selected illegal column {column} (legal: {legal:?})")]
    IllegalMove { column: usize, legal: Vec<usize> },

    #[error("agent reported column {column} but returned a different position")]
    StateMismatch { column: usize },

    #[error(transparent)]
    Game(#[from] GameError),
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

    #[error("unknown agent '{0}' (expected r, h, c, p or random, human, computer, prune)")]
    UnknownAgent(String),
}

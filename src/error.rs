use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("fact database not found at {}", .0.display())]
    Missing(PathBuf),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}")]
    InvalidValue { key: &'static str, value: String },
    #[error("could not load .env file: {0}")]
    DotEnv(#[from] dotenv::Error),
}

#[derive(Debug, Error)]
pub enum QuizError {
    /// The topic has too few distinct facts to fill every wrong-answer slot.
    #[error(
        "topic {topic:?} cannot supply {needed} incorrect choices, only {available} eligible facts"
    )]
    InsufficientPool {
        topic: String,
        needed: usize,
        available: usize,
    },

    #[error("number of choices must be between 1 and 26, got {0}")]
    InvalidChoiceCount(usize),

    #[error("input closed before an answer was given")]
    InputClosed,

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}

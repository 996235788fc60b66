use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VecqlError {
    #[error("No values provided")]
    NoValuesProvided,

    #[error("No rows provided")]
    NoRowsProvided,

    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Non-finite value at index {index}")]
    NonFiniteValue { index: usize },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Extension error: {0}")]
    Extension(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, VecqlError>;

impl From<serde_json::Error> for VecqlError {
    fn from(err: serde_json::Error) -> Self {
        VecqlError::Serialization(err.to_string())
    }
}

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("Please enter valid numbers in both fields.")]
    InvalidNumber,
    #[error("You tried to divide by zero")]
    DivideByZero,
}

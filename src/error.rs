use std::path::PathBuf;
use thiserror::Error;

/// Reasons a transaction file could not be turned into records.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum QueryError {
    #[error("Failed to load transactions from {}: {source}", path.display())]
    LoadFailure {
        path: PathBuf,
        #[source]
        source: LoadError,
    },
    #[error("No result for {0}: no matching transactions")]
    EmptyResult(&'static str),
    #[error("Amount overflow in {0}: total exceeds the decimal range")]
    AmountOverflow(&'static str),
    #[error("Output error: {0}")]
    OutputError(Box<dyn std::error::Error + Send + Sync>),
}

impl From<csv::Error> for QueryError {
    fn from(err: csv::Error) -> Self {
        QueryError::OutputError(Box::new(err))
    }
}

impl From<serde_json::Error> for QueryError {
    fn from(err: serde_json::Error) -> Self {
        QueryError::OutputError(Box::new(err))
    }
}

impl From<std::io::Error> for QueryError {
    fn from(err: std::io::Error) -> Self {
        QueryError::OutputError(Box::new(err))
    }
}

pub type Result<T> = std::result::Result<T, QueryError>;

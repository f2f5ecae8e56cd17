use crate::domain::ports::TransactionSource;
use crate::domain::transaction::Transaction;
use crate::error::{LoadError, QueryError, Result};
use crate::interfaces::json::transaction_reader::TransactionReader;
use std::fs::File;
use std::path::{Path, PathBuf};

/// File name read when no explicit input path is given.
pub const DEFAULT_INPUT: &str = "transactions.json";

/// Loads transactions from a JSON file on disk.
///
/// The file is opened and fully parsed on every `load` call.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> std::result::Result<Vec<Transaction>, LoadError> {
        let file = File::open(&self.path)?;
        TransactionReader::new(file).transactions()
    }
}

impl Default for JsonFileSource {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT)
    }
}

impl TransactionSource for JsonFileSource {
    fn load(&self) -> Result<Vec<Transaction>> {
        let transactions = self.read().map_err(|source| QueryError::LoadFailure {
            path: self.path.clone(),
            source,
        })?;
        log::debug!(
            "Loaded {} transactions from {}",
            transactions.len(),
            self.path.display()
        );
        Ok(transactions)
    }
}

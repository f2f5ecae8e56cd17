use crate::domain::transaction::Transaction;
use crate::error::LoadError;
use std::io::{BufReader, Read};

/// Reads a JSON array of transactions from any `Read` source (e.g. File, Stdin).
pub struct TransactionReader<R: Read> {
    reader: BufReader<R>,
}

impl<R: Read> TransactionReader<R> {
    pub fn new(source: R) -> Self {
        Self {
            reader: BufReader::new(source),
        }
    }

    /// Parses the whole source into an owned collection.
    ///
    /// Any malformed record fails the entire read; no partial result is returned.
    pub fn transactions(self) -> Result<Vec<Transaction>, LoadError> {
        let transactions = serde_json::from_reader(self.reader)?;
        Ok(transactions)
    }
}

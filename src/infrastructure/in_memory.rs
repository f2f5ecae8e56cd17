use crate::domain::ports::TransactionSource;
use crate::domain::transaction::Transaction;
use crate::error::Result;

/// A source backed by records already held in memory.
///
/// Each `load` hands out a fresh copy, so callers never share records.
/// Ideal for testing or for embedding the engine without touching disk.
#[derive(Debug, Default, Clone)]
pub struct InMemorySource {
    transactions: Vec<Transaction>,
}

impl InMemorySource {
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }
}

impl TransactionSource for InMemorySource {
    fn load(&self) -> Result<Vec<Transaction>> {
        Ok(self.transactions.clone())
    }
}

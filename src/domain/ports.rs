use super::transaction::Transaction;
use crate::error::Result;

/// Something that can produce a fresh, owned collection of transactions.
///
/// Every call performs a full load; nothing is cached between calls.
pub trait TransactionSource {
    fn load(&self) -> Result<Vec<Transaction>>;
}

pub type TransactionSourceBox = Box<dyn TransactionSource>;

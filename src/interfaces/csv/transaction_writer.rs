use crate::domain::amount::Amount;
use crate::domain::transaction::Transaction;
use crate::error::Result;
use std::fmt::Display;
use std::io::Write;

/// Writes query results to a CSV destination.
///
/// Transactions are written as full records under a camelCase header; scalar
/// and list results go into a single `value` column.
pub struct TransactionWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> TransactionWriter<W> {
    pub fn new(destination: W) -> Self {
        let writer = csv::WriterBuilder::new().from_writer(destination);
        Self { writer }
    }

    pub fn write_transactions<'a, I>(&mut self, transactions: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        for tx in transactions {
            self.writer.serialize(tx)?;
        }
        self.writer.flush()?;
        Ok(())
    }

    pub fn write_sender_totals<'a, I>(&mut self, totals: I) -> Result<()>
    where
        I: IntoIterator<Item = (&'a str, Amount)>,
    {
        self.writer.write_record(["sender", "total"])?;
        for (sender, total) in totals {
            self.writer.write_record([sender, total.to_string().as_str()])?;
        }
        self.writer.flush()?;
        Ok(())
    }

    pub fn write_values<I, T>(&mut self, values: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Display,
    {
        self.writer.write_record(["value"])?;
        for value in values {
            self.writer.write_record([value.to_string()])?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

//! Application layer containing the query logic.
//!
//! This module defines the `QueryEngine`, which answers every analytical query
//! over a collection of transactions produced by a `TransactionSource`.

pub mod query;

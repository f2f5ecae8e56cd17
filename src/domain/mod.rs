//! Domain types: the transaction record, its monetary amount, and the port
//! through which records are loaded.

pub mod amount;
pub mod ports;
pub mod transaction;

#![allow(dead_code)]

use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;
use txinsight::domain::amount::Amount;
use txinsight::domain::transaction::Transaction;

pub const FIXTURE: &str = "tests/fixtures/transactions.json";

pub fn fixture_path() -> PathBuf {
    PathBuf::from(FIXTURE)
}

pub fn write_json_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    write!(file, "{contents}").expect("Failed to write temp file");
    file.flush().expect("Failed to flush temp file");
    file
}

pub fn transaction(
    mt_id: u64,
    amount: Amount,
    sender: &str,
    beneficiary: Option<&str>,
    issue_id: Option<u64>,
    issue_solved: bool,
) -> Transaction {
    Transaction {
        mt_id,
        amount,
        sender_full_name: sender.to_string(),
        sender_age: None,
        beneficiary_full_name: beneficiary.map(str::to_string),
        beneficiary_age: None,
        issue_id,
        issue_solved,
        issue_message: None,
    }
}

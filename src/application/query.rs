use crate::domain::amount::Amount;
use crate::domain::transaction::Transaction;
use crate::error::{QueryError, Result};
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap, HashSet};

/// Answers analytical queries over a loaded collection of transactions.
///
/// The engine only borrows the records; every query is a pure function of the
/// slice it was built with. Each query applies its own filter: most look only at
/// transactions whose issue is solved, while `count_unique_clients`,
/// `has_open_compliance_issue`, `transactions_by_beneficiary`, the top-N ranking
/// and `top_sender` consider every record.
pub struct QueryEngine<'a> {
    transactions: &'a [Transaction],
}

impl<'a> QueryEngine<'a> {
    pub fn new(transactions: &'a [Transaction]) -> Self {
        Self { transactions }
    }

    fn solved(&self) -> impl Iterator<Item = &'a Transaction> + use<'a> {
        self.transactions.iter().filter(|tx| tx.issue_solved)
    }

    /// Sum of the amounts of all transactions with a solved issue.
    pub fn total_amount(&self) -> Result<Amount> {
        sum_amounts("total_amount", self.solved())
    }

    /// Sum of the amounts of solved transactions sent by `sender`.
    pub fn total_amount_sent_by(&self, sender: &str) -> Result<Amount> {
        sum_amounts(
            "total_amount_sent_by",
            self.solved().filter(|tx| tx.sender_full_name == sender),
        )
    }

    /// Highest amount among solved transactions.
    pub fn max_amount(&self) -> Result<Amount> {
        self.solved().map(|tx| tx.amount).max().ok_or_else(|| {
            log::warn!("max_amount: no solved transactions");
            QueryError::EmptyResult("max_amount")
        })
    }

    /// Number of distinct names appearing as sender or beneficiary.
    pub fn count_unique_clients(&self) -> usize {
        let clients: HashSet<&str> = self
            .transactions
            .iter()
            .flat_map(|tx| {
                std::iter::once(tx.sender_full_name.as_str())
                    .chain(tx.beneficiary_full_name.as_deref())
            })
            .collect();
        clients.len()
    }

    /// Whether `client`, as sender or beneficiary, has an issue that is still open.
    pub fn has_open_compliance_issue(&self, client: &str) -> bool {
        self.transactions
            .iter()
            .any(|tx| tx.involves(client) && tx.has_open_issue())
    }

    /// Transactions indexed by beneficiary name; the last one in input order wins.
    pub fn transactions_by_beneficiary(&self) -> HashMap<&'a str, &'a Transaction> {
        let mut by_beneficiary = HashMap::new();
        for tx in self.transactions {
            if let Some(name) = tx.beneficiary_full_name.as_deref() {
                by_beneficiary.insert(name, tx);
            }
        }
        log::debug!(
            "transactions_by_beneficiary: {} beneficiaries",
            by_beneficiary.len()
        );
        by_beneficiary
    }

    /// Identifiers of all issues attached to unsolved transactions.
    pub fn unsolved_issue_ids(&self) -> HashSet<u64> {
        self.transactions
            .iter()
            .filter(|tx| !tx.issue_solved)
            .filter_map(|tx| tx.issue_id)
            .collect()
    }

    /// Messages of solved issues in input order, duplicates kept.
    pub fn solved_issue_messages(&self) -> Vec<&'a str> {
        self.solved()
            .filter_map(|tx| tx.issue_message.as_deref())
            .collect()
    }

    /// The `n` transactions with the highest amount, largest first.
    ///
    /// Equal amounts are ordered by sender name descending, then by input order.
    pub fn top_by_amount(&self, n: usize) -> Vec<&'a Transaction> {
        let mut ranked: Vec<&'a Transaction> = self.transactions.iter().collect();
        ranked.sort_by(|a, b| by_amount_desc(a, b));
        ranked.truncate(n);
        log::debug!("top_by_amount({n}): {} transactions", ranked.len());
        ranked
    }

    /// The 3 transactions with the highest amount, ranked as in `top_by_amount`.
    pub fn top3_by_amount(&self) -> Vec<&'a Transaction> {
        self.top_by_amount(3)
    }

    /// Sender of the single largest transaction across all records.
    ///
    /// When several transactions share the maximum amount, the first one wins.
    pub fn top_sender(&self) -> Result<&'a str> {
        self.transactions
            .iter()
            .reduce(|best, tx| if tx.amount > best.amount { tx } else { best })
            .map(|tx| tx.sender_full_name.as_str())
            .ok_or_else(|| {
                log::warn!("top_sender: no transactions");
                QueryError::EmptyResult("top_sender")
            })
    }

    /// Solved amounts summed per sender, keyed in name order.
    pub fn totals_by_sender(&self) -> Result<BTreeMap<&'a str, Amount>> {
        let mut totals: BTreeMap<&'a str, Amount> = BTreeMap::new();
        for tx in self.solved() {
            let total = totals.entry(tx.sender_full_name.as_str()).or_default();
            *total = total
                .checked_add(tx.amount)
                .ok_or_else(|| overflow("totals_by_sender"))?;
        }
        Ok(totals)
    }
}

fn sum_amounts<'t>(
    query: &'static str,
    transactions: impl Iterator<Item = &'t Transaction>,
) -> Result<Amount> {
    Amount::checked_sum(transactions.map(|tx| tx.amount)).ok_or_else(|| overflow(query))
}

fn overflow(query: &'static str) -> QueryError {
    log::warn!("{query}: amount overflow");
    QueryError::AmountOverflow(query)
}

fn by_amount_desc(a: &Transaction, b: &Transaction) -> Ordering {
    b.amount
        .cmp(&a.amount)
        .then_with(|| b.sender_full_name.cmp(&a.sender_full_name))
}

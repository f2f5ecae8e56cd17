use proptest::prelude::*;
use rust_decimal::Decimal;
use std::collections::HashSet;
use txinsight::application::query::QueryEngine;
use txinsight::domain::amount::Amount;
use txinsight::domain::transaction::Transaction;

mod common;

const NAMES: [&str; 5] = [
    "Tom Shelby",
    "Grace Burgess",
    "Arthur Shelby",
    "Aunt Polly",
    "Billy Kimber",
];

fn name() -> impl Strategy<Value = String> {
    prop::sample::select(NAMES.to_vec()).prop_map(str::to_string)
}

fn transaction() -> impl Strategy<Value = Transaction> {
    (
        any::<u32>(),
        0i64..1_000_000,
        name(),
        prop::option::of(name()),
        prop::option::of(0u64..20),
        any::<bool>(),
    )
        .prop_map(|(mt_id, cents, sender, beneficiary, issue_id, issue_solved)| {
            common::transaction(
                u64::from(mt_id),
                Amount::new(Decimal::new(cents, 2)),
                &sender,
                beneficiary.as_deref(),
                issue_id,
                issue_solved,
            )
        })
}

fn transactions() -> impl Strategy<Value = Vec<Transaction>> {
    prop::collection::vec(transaction(), 0..40)
}

proptest! {
    #[test]
    fn prop_total_amount_is_additive_over_senders(txs in transactions()) {
        let engine = QueryEngine::new(&txs);
        let senders: HashSet<&str> = txs
            .iter()
            .filter(|tx| tx.issue_solved)
            .map(|tx| tx.sender_full_name.as_str())
            .collect();

        let total = engine.total_amount().unwrap();
        let by_sender = Amount::checked_sum(
            senders
                .iter()
                .map(|sender| engine.total_amount_sent_by(sender).unwrap()),
        );
        prop_assert_eq!(by_sender, Some(total));

        let totals = engine.totals_by_sender().unwrap();
        prop_assert_eq!(Amount::checked_sum(totals.values().copied()), Some(total));
    }

    #[test]
    fn prop_top3_is_sorted_subset(txs in transactions()) {
        let engine = QueryEngine::new(&txs);
        let top = engine.top3_by_amount();

        prop_assert!(top.len() <= 3);
        prop_assert_eq!(top.len(), txs.len().min(3));
        prop_assert!(top.windows(2).all(|pair| pair[0].amount >= pair[1].amount));
        for tx in &top {
            prop_assert!(txs.iter().any(|candidate| std::ptr::eq(candidate, *tx)));
        }
        if let Some(first) = top.first() {
            prop_assert!(txs.iter().all(|tx| tx.amount <= first.amount));
        }
    }

    #[test]
    fn prop_unique_clients_is_union_of_names(txs in transactions()) {
        let mut names: HashSet<&str> = HashSet::new();
        for tx in &txs {
            names.insert(tx.sender_full_name.as_str());
            if let Some(beneficiary) = tx.beneficiary_full_name.as_deref() {
                names.insert(beneficiary);
            }
        }
        prop_assert_eq!(QueryEngine::new(&txs).count_unique_clients(), names.len());
    }

    #[test]
    fn prop_unsolved_issue_ids_come_from_unsolved_records(txs in transactions()) {
        let ids = QueryEngine::new(&txs).unsolved_issue_ids();
        for id in ids {
            prop_assert!(txs.iter().any(|tx| !tx.issue_solved && tx.issue_id == Some(id)));
        }
    }

    #[test]
    fn prop_by_beneficiary_has_no_key_for_missing_name(txs in transactions()) {
        let engine = QueryEngine::new(&txs);
        let by_beneficiary = engine.transactions_by_beneficiary();
        for (name, tx) in &by_beneficiary {
            prop_assert_eq!(tx.beneficiary_full_name.as_deref(), Some(*name));
        }
        let expected: HashSet<&str> = txs
            .iter()
            .filter_map(|tx| tx.beneficiary_full_name.as_deref())
            .collect();
        prop_assert_eq!(by_beneficiary.len(), expected.len());
    }

    #[test]
    fn prop_max_amount_fails_only_without_solved(txs in transactions()) {
        let engine = QueryEngine::new(&txs);
        let has_solved = txs.iter().any(|tx| tx.issue_solved);
        prop_assert_eq!(engine.max_amount().is_ok(), has_solved);
        prop_assert_eq!(engine.top_sender().is_ok(), !txs.is_empty());
    }
}

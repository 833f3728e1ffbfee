//! Pull-based read view over the ledger: filter predicates plus a fixed sort
//! order. Never mutates the store.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::transaction::Transaction;

/// Filters for listing transactions. All predicates are conjunctive; an
/// unset field is unrestricted.
///
/// The date range is inclusive on both ends, each end independently optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransactionFilter {
    /// Case-insensitive substring match on the category label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Case-insensitive substring match on the notes text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<NaiveDate>,
}

impl TransactionFilter {
    pub fn matches(&self, txn: &Transaction) -> bool {
        contains_ci(&txn.category, self.category.as_deref())
            && contains_ci(&txn.notes, self.notes.as_deref())
            && self.from.map_or(true, |from| txn.date >= from)
            && self.to.map_or(true, |to| txn.date <= to)
    }
}

fn contains_ci(haystack: &str, needle: Option<&str>) -> bool {
    match needle {
        None => true,
        Some(needle) if needle.is_empty() => true,
        Some(needle) => haystack
            .to_lowercase()
            .contains(&needle.to_lowercase()),
    }
}

/// Applies the filter and sorts by date descending; ties keep the store's
/// insertion order (the sort is stable over the insertion-ordered input).
pub fn run<'a>(
    transactions: &'a [Transaction],
    filter: &TransactionFilter,
) -> Vec<&'a Transaction> {
    let mut matched: Vec<&Transaction> = transactions
        .iter()
        .filter(|txn| filter.matches(txn))
        .collect();
    matched.sort_by(|a, b| b.date.cmp(&a.date));
    matched
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::transaction::TransactionKind;
    use chrono::Utc;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn fixtures() -> Vec<Transaction> {
        vec![
            Transaction::new(10.0, "Food", date(2024, 1, 5), TransactionKind::Expense, Utc::now())
                .with_notes("weekly groceries"),
            Transaction::new(20.0, "Transport", date(2024, 2, 1), TransactionKind::Expense, Utc::now())
                .with_notes("Bus pass"),
            Transaction::new(30.0, "Fast Food", date(2024, 2, 1), TransactionKind::Expense, Utc::now()),
            Transaction::new(40.0, "Salary", date(2024, 3, 1), TransactionKind::Income, Utc::now()),
        ]
    }

    #[test]
    fn empty_filter_matches_all_sorted_by_date_desc() {
        let transactions = fixtures();
        let results = run(&transactions, &TransactionFilter::default());

        let amounts: Vec<f64> = results.iter().map(|txn| txn.amount).collect();
        // Date descending; the two 2024-02-01 entries keep insertion order.
        assert_eq!(amounts, vec![40.0, 20.0, 30.0, 10.0]);
    }

    #[test]
    fn category_match_is_case_insensitive_substring() {
        let transactions = fixtures();
        let filter = TransactionFilter {
            category: Some("food".into()),
            ..TransactionFilter::default()
        };
        let results = run(&transactions, &filter);
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn notes_match_is_case_insensitive() {
        let transactions = fixtures();
        let filter = TransactionFilter {
            notes: Some("BUS".into()),
            ..TransactionFilter::default()
        };
        let results = run(&transactions, &filter);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].amount, 20.0);
    }

    #[test]
    fn date_range_ends_are_inclusive_and_independent() {
        let transactions = fixtures();
        let filter = TransactionFilter {
            from: Some(date(2024, 2, 1)),
            ..TransactionFilter::default()
        };
        assert_eq!(run(&transactions, &filter).len(), 3);

        let filter = TransactionFilter {
            from: Some(date(2024, 1, 1)),
            to: Some(date(2024, 2, 1)),
            ..TransactionFilter::default()
        };
        assert_eq!(run(&transactions, &filter).len(), 3);
    }

    #[test]
    fn unmatched_filter_yields_empty_not_error() {
        let transactions = fixtures();
        let filter = TransactionFilter {
            category: Some("foo".into()),
            ..TransactionFilter::default()
        };
        assert!(run(&transactions, &filter).is_empty());
    }

    #[test]
    fn query_is_idempotent_on_unchanged_input() {
        let transactions = fixtures();
        let filter = TransactionFilter {
            category: Some("f".into()),
            ..TransactionFilter::default()
        };
        let first: Vec<uuid::Uuid> = run(&transactions, &filter).iter().map(|t| t.id).collect();
        let second: Vec<uuid::Uuid> = run(&transactions, &filter).iter().map(|t| t.id).collect();
        assert_eq!(first, second);
    }
}

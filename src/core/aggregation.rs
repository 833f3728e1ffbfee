//! Per-category and overall totals derived from the transaction set.

use std::collections::HashMap;

use crate::domain::category::BudgetCategory;
use crate::domain::transaction::Transaction;

/// Overall income/expense totals across the whole ledger.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NetTotals {
    pub income: f64,
    pub expense: f64,
}

impl NetTotals {
    pub fn net(&self) -> f64 {
        self.income - self.expense
    }

    pub fn is_loss(&self) -> bool {
        self.net() < 0.0
    }
}

/// Sums income and expense magnitudes over all transactions.
pub fn net_totals(transactions: &[Transaction]) -> NetTotals {
    transactions
        .iter()
        .fold(NetTotals::default(), |mut totals, txn| {
            if txn.is_income() {
                totals.income += txn.amount;
            } else {
                totals.expense += txn.amount;
            }
            totals
        })
}

/// Rebuilds every configured category's `spent` from the current transaction
/// set. One pass keyed by category name, then a merge; categories present in
/// transactions but not configured stay invisible to the budget view.
pub fn recompute_spent(transactions: &[Transaction], categories: &mut [BudgetCategory]) {
    let mut by_category: HashMap<&str, f64> = HashMap::new();
    for txn in transactions.iter().filter(|txn| txn.is_expense()) {
        *by_category.entry(txn.category.as_str()).or_insert(0.0) += txn.amount;
    }

    for category in categories.iter_mut() {
        category.spent = by_category
            .get(category.name.as_str())
            .copied()
            .unwrap_or(0.0);
    }
}

/// Transaction categories that have no configured budget counterpart, so a
/// caller can surface the gap instead of silently losing spend.
pub fn unbudgeted_categories(
    transactions: &[Transaction],
    categories: &[BudgetCategory],
) -> Vec<String> {
    let mut missing: Vec<String> = Vec::new();
    for txn in transactions {
        let configured = categories
            .iter()
            .any(|category| category.name == txn.category);
        if !configured && !missing.contains(&txn.category) {
            missing.push(txn.category.clone());
        }
    }
    missing
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::transaction::TransactionKind;
    use chrono::{NaiveDate, Utc};

    fn txn(amount: f64, category: &str, kind: TransactionKind) -> Transaction {
        let date = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        Transaction::new(amount, category, date, kind, Utc::now())
    }

    #[test]
    fn spent_matches_expense_sums_per_category() {
        let transactions = vec![
            txn(150.0, "Food", TransactionKind::Expense),
            txn(30.0, "Food", TransactionKind::Expense),
            txn(900.0, "Food", TransactionKind::Income),
            txn(80.0, "Transport", TransactionKind::Expense),
        ];
        let mut categories = vec![
            BudgetCategory::new("Food", 200.0),
            BudgetCategory::new("Transport", 50.0),
            BudgetCategory::new("Rent", 1000.0),
        ];

        recompute_spent(&transactions, &mut categories);

        assert_eq!(categories[0].spent, 180.0);
        assert_eq!(categories[1].spent, 80.0);
        assert!(categories[1].is_over_budget());
        assert_eq!(categories[2].spent, 0.0);
    }

    #[test]
    fn recompute_resets_stale_spent() {
        let mut categories = vec![BudgetCategory::new("Food", 200.0)];
        categories[0].spent = 999.0;

        recompute_spent(&[], &mut categories);

        assert_eq!(categories[0].spent, 0.0);
    }

    #[test]
    fn unconfigured_spend_is_not_auto_created_but_detectable() {
        let transactions = vec![txn(25.0, "Coffee", TransactionKind::Expense)];
        let mut categories = vec![BudgetCategory::new("Food", 200.0)];

        recompute_spent(&transactions, &mut categories);

        assert_eq!(categories.len(), 1);
        assert_eq!(
            unbudgeted_categories(&transactions, &categories),
            vec!["Coffee".to_string()]
        );
    }

    #[test]
    fn net_totals_split_by_kind() {
        let transactions = vec![
            txn(500.0, "Salary", TransactionKind::Income),
            txn(700.0, "Rent", TransactionKind::Expense),
        ];
        let totals = net_totals(&transactions);
        assert_eq!(totals.income, 500.0);
        assert_eq!(totals.expense, 700.0);
        assert_eq!(totals.net(), -200.0);
        assert!(totals.is_loss());
    }
}

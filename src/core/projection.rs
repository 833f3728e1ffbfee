//! Chart-facing projections: the fixed-window monthly series and the
//! per-category breakdown.

use crate::domain::category::BudgetCategory;
use crate::domain::summary::{CategorySlice, MonthBucket, SeriesWindow};
use crate::domain::transaction::Transaction;

/// Smallest amount a proportional chart can render as a visible slice.
/// Applied only in [`chart_slices`]; exact totals never carry it.
pub const MIN_SLICE_AMOUNT: f64 = 0.001;

/// Buckets transactions into the window's calendar months, one bucket per
/// month. Transactions dated outside the window are silently excluded.
pub fn monthly_series(transactions: &[Transaction], window: SeriesWindow) -> Vec<MonthBucket> {
    let mut buckets: Vec<MonthBucket> = (0..window.months)
        .map(|index| MonthBucket::empty(window.bucket_start(index)))
        .collect();

    for txn in transactions {
        let Some(index) = window.month_index(txn.date) else {
            continue;
        };
        if txn.is_income() {
            buckets[index].income += txn.amount;
        } else {
            buckets[index].expense += txn.amount;
        }
    }

    buckets
}

/// Exact per-category totals, one slice per configured category.
pub fn category_breakdown(categories: &[BudgetCategory]) -> Vec<CategorySlice> {
    categories
        .iter()
        .map(|category| CategorySlice {
            name: category.name.clone(),
            amount: category.spent,
        })
        .collect()
}

/// Presentation variant of [`category_breakdown`]: zero amounts become
/// [`MIN_SLICE_AMOUNT`] so every category still renders a slice. The
/// substitution stops here and never flows back into `spent`.
pub fn chart_slices(categories: &[BudgetCategory]) -> Vec<CategorySlice> {
    categories
        .iter()
        .map(|category| CategorySlice {
            name: category.name.clone(),
            amount: if category.spent == 0.0 {
                MIN_SLICE_AMOUNT
            } else {
                category.spent
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::transaction::TransactionKind;
    use chrono::{NaiveDate, Utc};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn txn(amount: f64, on: NaiveDate, kind: TransactionKind) -> Transaction {
        Transaction::new(amount, "Misc", on, kind, Utc::now())
    }

    #[test]
    fn series_buckets_by_month_and_kind() {
        let window = SeriesWindow::ending_at(date(2024, 6, 30), 6);
        let transactions = vec![
            txn(500.0, date(2024, 1, 10), TransactionKind::Income),
            txn(700.0, date(2024, 1, 20), TransactionKind::Expense),
            txn(150.0, date(2024, 3, 5), TransactionKind::Expense),
        ];

        let series = monthly_series(&transactions, window);

        assert_eq!(series.len(), 6);
        assert_eq!(series[0].income, 500.0);
        assert_eq!(series[0].expense, 700.0);
        assert_eq!(series[2].expense, 150.0);
        assert_eq!(series[5].income, 0.0);
    }

    #[test]
    fn out_of_window_transactions_are_excluded() {
        let window = SeriesWindow::ending_at(date(2024, 6, 30), 6);
        let transactions = vec![txn(999.0, date(2023, 10, 1), TransactionKind::Expense)];

        let series = monthly_series(&transactions, window);

        let projected: f64 = series.iter().map(|bucket| bucket.expense).sum();
        assert_eq!(projected, 0.0);
    }

    #[test]
    fn series_totals_match_in_window_sums() {
        let window = SeriesWindow::ending_at(date(2024, 6, 30), 6);
        let transactions = vec![
            txn(100.0, date(2024, 2, 1), TransactionKind::Income),
            txn(40.0, date(2024, 4, 1), TransactionKind::Income),
            txn(10.0, date(2023, 1, 1), TransactionKind::Income),
        ];

        let series = monthly_series(&transactions, window);

        let income: f64 = series.iter().map(|bucket| bucket.income).sum();
        assert_eq!(income, 140.0);
    }

    #[test]
    fn chart_slices_pad_zero_entries_only() {
        let mut categories = vec![
            BudgetCategory::new("Food", 200.0),
            BudgetCategory::new("Rent", 1000.0),
        ];
        categories[0].spent = 120.0;

        let exact = category_breakdown(&categories);
        assert_eq!(exact[1].amount, 0.0);

        let padded = chart_slices(&categories);
        assert_eq!(padded[0].amount, 120.0);
        assert_eq!(padded[1].amount, MIN_SLICE_AMOUNT);

        // The padding must not leak into derived state.
        assert_eq!(categories[1].spent, 0.0);
    }
}

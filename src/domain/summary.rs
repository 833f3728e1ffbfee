//! Derived view types: series buckets, breakdown slices, and loss alerts.
//!
//! Everything here is recomputed wholesale from the ledger's current contents;
//! none of it is authoritative state.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A fixed span of whole calendar months used to bucket transactions for the
/// income/expense series. Dates outside the window are excluded from the
/// projection, not an error.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeriesWindow {
    /// First day of the window's first month.
    pub start: NaiveDate,
    pub months: usize,
}

impl SeriesWindow {
    /// Builds the window whose last bucket is `reference`'s month.
    pub fn ending_at(reference: NaiveDate, months: usize) -> Self {
        let span = months.saturating_sub(1) as i32;
        Self {
            start: shift_month_start(first_of_month(reference), -span),
            months,
        }
    }

    /// Maps a date to its bucket index, or `None` when it falls outside the
    /// window.
    pub fn month_index(&self, date: NaiveDate) -> Option<usize> {
        let offset = month_ordinal(date) - month_ordinal(self.start);
        if offset >= 0 && (offset as usize) < self.months {
            Some(offset as usize)
        } else {
            None
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.month_index(date).is_some()
    }

    /// First day of the month backing bucket `index`.
    pub fn bucket_start(&self, index: usize) -> NaiveDate {
        shift_month_start(self.start, index as i32)
    }
}

fn month_ordinal(date: NaiveDate) -> i32 {
    date.year() * 12 + date.month() as i32 - 1
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

fn shift_month_start(start: NaiveDate, months: i32) -> NaiveDate {
    let ordinal = month_ordinal(start) + months;
    let year = ordinal.div_euclid(12);
    let month = ordinal.rem_euclid(12) as u32 + 1;
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(start)
}

/// One calendar month of the projected series.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthBucket {
    /// First day of the bucket's month.
    pub month: NaiveDate,
    pub income: f64,
    pub expense: f64,
}

impl MonthBucket {
    pub fn empty(month: NaiveDate) -> Self {
        Self {
            month,
            income: 0.0,
            expense: 0.0,
        }
    }

    pub fn net(&self) -> f64 {
        self.income - self.expense
    }
}

/// One proportional-breakdown entry, one per configured budget category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategorySlice {
    pub name: String,
    pub amount: f64,
}

/// Transient overspend notification, alive only while net savings are
/// negative and the time-to-live has not elapsed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LossAlert {
    /// Magnitude of the shortfall (`expense - income`) at last recompute.
    pub total_loss: f64,
    /// Category names over their limit, snapshotted when the alert was raised.
    pub over_budget: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub ttl_secs: i64,
}

impl LossAlert {
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.created_at + Duration::seconds(self.ttl_secs)
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at()
    }

    /// Human-readable cause line for toasts and logs.
    pub fn message(&self) -> String {
        if self.over_budget.is_empty() {
            format!("Spending exceeds income by {:.2}", self.total_loss)
        } else {
            format!(
                "Spending exceeds income by {:.2} (over budget: {})",
                self.total_loss,
                self.over_budget.join(", ")
            )
        }
    }
}

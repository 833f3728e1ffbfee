use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use expense_core::core::clock::Clock;
use expense_core::ledger::Ledger;

/// Clock pinned to a fixed instant so series windows and alert TTLs are
/// deterministic across the suite.
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Reference instant used by most scenarios: 2024-06-15 noon UTC, so the
/// default six-month window spans January through June 2024.
pub fn reference_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
}

pub fn fixed_ledger() -> Ledger {
    Ledger::with_clock(Box::new(FixedClock(reference_now())))
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

use chrono::{DateTime, NaiveDate, Utc};

/// Time source consumed by the ledger for default dates, series windows, and
/// alert expiry. Injectable so tests can pin the calendar.
pub trait Clock: Send {
    fn now(&self) -> DateTime<Utc>;

    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Real-time clock backed by the system UTC time source.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

//! Seam toward the persistence collaborator. The engine never persists
//! anything itself; it hands the current transaction set to whoever asked to
//! be told about changes.

use crate::domain::transaction::Transaction;

/// Receives the full transaction set after every successful mutation.
///
/// Notification is fire-and-forget: the callback returns nothing and any
/// failure handling is the observer's concern. Initial data travels the other
/// way through [`crate::ledger::Ledger::from_parts`].
pub trait ChangeObserver: Send {
    fn transactions_changed(&mut self, transactions: &[Transaction]);
}

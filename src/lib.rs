#![doc(test(attr(deny(warnings))))]

//! Expense Core keeps a mutable transaction ledger and its derived views
//! (per-category budgets, monthly income/expense series, category breakdowns,
//! loss alerts) consistent under arbitrary add/update/delete operations.

pub mod core;
pub mod domain;
pub mod errors;
pub mod ledger;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Expense Core tracing initialized.");
    });
}

//! The mutable transaction store and its recompute pipeline.

#[allow(clippy::module_inception)]
pub mod ledger;

pub use ledger::Ledger;

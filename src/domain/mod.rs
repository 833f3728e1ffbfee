pub mod category;
pub mod common;
pub mod summary;
pub mod transaction;

pub use category::BudgetCategory;
pub use common::{Displayable, Identifiable, NamedEntity};
pub use summary::{CategorySlice, LossAlert, MonthBucket, SeriesWindow};
pub use transaction::{Transaction, TransactionDraft, TransactionKind, TransactionPatch};

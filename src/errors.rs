use thiserror::Error;
use uuid::Uuid;

/// Error type that captures common ledger failures.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Transaction not found: {0}")]
    TransactionNotFound(Uuid),
    #[error("Budget category not found: {0}")]
    CategoryNotFound(String),
    #[error("Budget category `{0}` already exists")]
    DuplicateCategory(String),
}

pub type EngineResult<T> = Result<T, EngineError>;

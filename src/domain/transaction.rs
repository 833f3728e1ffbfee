use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{Displayable, Identifiable};

/// Direction of a ledger entry. The stored amount is always a non-negative
/// magnitude; the sign lives here.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TransactionKind {
    Income,
    Expense,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionKind::Income => "Income",
            TransactionKind::Expense => "Expense",
        };
        f.write_str(label)
    }
}

/// A single ledger entry. Updated only by full replacement through the
/// owning ledger, never field-by-field in place.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: Uuid,
    pub amount: f64,
    pub category: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub notes: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt_ref: Option<String>,
    pub kind: TransactionKind,
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    pub fn new(
        amount: f64,
        category: impl Into<String>,
        date: NaiveDate,
        kind: TransactionKind,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount,
            category: category.into(),
            date,
            notes: String::new(),
            receipt_ref: None,
            kind,
            created_at,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    pub fn with_receipt_ref(mut self, receipt_ref: impl Into<String>) -> Self {
        self.receipt_ref = Some(receipt_ref.into());
        self
    }

    pub fn is_expense(&self) -> bool {
        matches!(self.kind, TransactionKind::Expense)
    }

    pub fn is_income(&self) -> bool {
        matches!(self.kind, TransactionKind::Income)
    }
}

impl Identifiable for Transaction {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Displayable for Transaction {
    fn display_label(&self) -> String {
        format!("txn:{} {} {:.2} ({})", self.id, self.kind, self.amount, self.category)
    }
}

/// Raw transaction input as a caller supplies it, before normalization.
///
/// `amount` is free text on purpose: forms hand over whatever the user typed
/// and the validation layer coerces it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionDraft {
    pub amount: String,
    #[serde(default)]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub notes: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt_ref: Option<String>,
    pub kind: TransactionKind,
}

impl TransactionDraft {
    pub fn new(amount: impl Into<String>, kind: TransactionKind) -> Self {
        Self {
            amount: amount.into(),
            category: String::new(),
            date: None,
            notes: String::new(),
            receipt_ref: None,
            kind,
        }
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    pub fn receipt_ref(mut self, receipt_ref: impl Into<String>) -> Self {
        self.receipt_ref = Some(receipt_ref.into());
        self
    }
}

/// Field set merged over an existing transaction on update. Merged fields are
/// re-normalized exactly as on creation.
///
/// `receipt_ref` is doubly optional so a patch can clear the reference
/// (`Some(None)`) as well as leave it untouched (`None`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransactionPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt_ref: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<TransactionKind>,
}

impl TransactionPatch {
    pub fn has_effect(&self) -> bool {
        self.amount.is_some()
            || self.category.is_some()
            || self.date.is_some()
            || self.notes.is_some()
            || self.receipt_ref.is_some()
            || self.kind.is_some()
    }
}

//! Lenient normalization of raw transaction input.
//!
//! Malformed fields are substituted, not rejected: an unparsable or negative
//! amount becomes `0.0`, a blank category becomes [`FALLBACK_CATEGORY`], a
//! missing date becomes the ledger's current day. The rest of the engine can
//! therefore assume every stored record is well-formed.

use chrono::{DateTime, NaiveDate, Utc};

use crate::domain::transaction::{Transaction, TransactionDraft, TransactionPatch};

/// Category applied when the caller leaves the field blank.
pub const FALLBACK_CATEGORY: &str = "Others";

/// Outcome of parsing a raw amount. `coerced` tells a validation-minded
/// caller that the value is a fallback rather than an explicit zero; the
/// ledger itself stores only the value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParsedAmount {
    pub value: f64,
    pub coerced: bool,
}

/// Parses free-text input into a non-negative amount.
pub fn parse_amount(raw: &str) -> ParsedAmount {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => ParsedAmount {
            value,
            coerced: false,
        },
        _ => ParsedAmount {
            value: 0.0,
            coerced: true,
        },
    }
}

/// Trims the category label, substituting [`FALLBACK_CATEGORY`] when blank.
pub fn normalize_category(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        FALLBACK_CATEGORY.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Normalizes a draft into a storable transaction, stamping `created_at`.
pub fn normalize_draft(
    draft: TransactionDraft,
    today: NaiveDate,
    created_at: DateTime<Utc>,
) -> Transaction {
    let mut txn = Transaction::new(
        parse_amount(&draft.amount).value,
        normalize_category(&draft.category),
        draft.date.unwrap_or(today),
        draft.kind,
        created_at,
    );
    txn.notes = draft.notes;
    txn.receipt_ref = draft.receipt_ref;
    txn
}

/// Merges a patch over an existing record, re-normalizing every supplied
/// field exactly as on creation. Id and `created_at` are preserved.
pub fn apply_patch(existing: &Transaction, patch: TransactionPatch) -> Transaction {
    let mut merged = existing.clone();
    if let Some(raw) = patch.amount {
        merged.amount = parse_amount(&raw).value;
    }
    if let Some(raw) = patch.category {
        merged.category = normalize_category(&raw);
    }
    if let Some(date) = patch.date {
        merged.date = date;
    }
    if let Some(notes) = patch.notes {
        merged.notes = notes;
    }
    if let Some(receipt_ref) = patch.receipt_ref {
        merged.receipt_ref = receipt_ref;
    }
    if let Some(kind) = patch.kind {
        merged.kind = kind;
    }
    merged
}

//! Domain types representing budget categories.

use serde::{Deserialize, Serialize};

use crate::domain::common::{Displayable, NamedEntity};

/// A configured spending guardrail plus its derived spend total.
///
/// `spent` is recomputed from the ledger after every mutation and must never
/// be written by callers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BudgetCategory {
    pub name: String,
    pub limit: f64,
    #[serde(default)]
    pub spent: f64,
    #[serde(default = "BudgetCategory::notifications_default")]
    pub notifications_enabled: bool,
}

impl BudgetCategory {
    pub fn new(name: impl Into<String>, limit: f64) -> Self {
        Self {
            name: name.into(),
            limit,
            spent: 0.0,
            notifications_enabled: true,
        }
    }

    pub fn with_notifications(mut self, enabled: bool) -> Self {
        self.notifications_enabled = enabled;
        self
    }

    pub fn is_over_budget(&self) -> bool {
        self.spent > self.limit
    }

    pub fn remaining(&self) -> f64 {
        self.limit - self.spent
    }

    fn notifications_default() -> bool {
        true
    }
}

impl NamedEntity for BudgetCategory {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Displayable for BudgetCategory {
    fn display_label(&self) -> String {
        format!("{} ({:.2}/{:.2})", self.name, self.spent, self.limit)
    }
}

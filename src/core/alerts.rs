//! Loss detection: a two-state machine that raises a transient alert while
//! net savings are negative.

use chrono::{DateTime, Utc};

use crate::core::aggregation::NetTotals;
use crate::domain::category::BudgetCategory;
use crate::domain::summary::LossAlert;

/// Watches recomputed totals and maintains the current [`LossAlert`], if any.
///
/// The alert's over-budget cause list is snapshotted when the alert is
/// raised and not refreshed while it stays active; `total_loss` tracks the
/// latest recompute. The alert clears on TTL expiry or when a recompute
/// observes non-negative net, whichever comes first.
#[derive(Debug)]
pub struct LossDetector {
    alert: Option<LossAlert>,
    ttl_secs: i64,
}

impl LossDetector {
    pub const DEFAULT_TTL_SECS: i64 = 30;

    pub fn new() -> Self {
        Self {
            alert: None,
            ttl_secs: Self::DEFAULT_TTL_SECS,
        }
    }

    pub fn with_ttl(ttl_secs: i64) -> Self {
        Self {
            alert: None,
            ttl_secs,
        }
    }

    pub fn set_ttl(&mut self, ttl_secs: i64) {
        self.ttl_secs = ttl_secs;
    }

    /// Re-evaluates the state machine against freshly recomputed totals.
    pub fn evaluate(
        &mut self,
        totals: NetTotals,
        categories: &[BudgetCategory],
        now: DateTime<Utc>,
    ) {
        if let Some(alert) = &self.alert {
            if alert.is_expired(now) {
                self.alert = None;
            }
        }

        if !totals.is_loss() {
            if self.alert.take().is_some() {
                tracing::debug!("loss alert cleared, net savings non-negative");
            }
            return;
        }

        match &mut self.alert {
            Some(alert) => {
                // Still alerting: track the latest shortfall, keep the snapshot.
                alert.total_loss = -totals.net();
            }
            None => {
                let over_budget: Vec<String> = categories
                    .iter()
                    .filter(|category| category.is_over_budget())
                    .map(|category| category.name.clone())
                    .collect();
                let alert = LossAlert {
                    total_loss: -totals.net(),
                    over_budget,
                    created_at: now,
                    ttl_secs: self.ttl_secs,
                };
                tracing::info!(cause = %alert.message(), "loss alert raised");
                self.alert = Some(alert);
            }
        }
    }

    /// Current alert, applying read-time expiry for the span between
    /// recomputes.
    pub fn current(&self, now: DateTime<Utc>) -> Option<&LossAlert> {
        self.alert
            .as_ref()
            .filter(|alert| !alert.is_expired(now))
    }
}

impl Default for LossDetector {
    fn default() -> Self {
        Self::new()
    }
}

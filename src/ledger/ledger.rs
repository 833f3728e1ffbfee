use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::core::aggregation::{self, NetTotals};
use crate::core::alerts::LossDetector;
use crate::core::clock::{Clock, SystemClock};
use crate::core::projection;
use crate::core::query::{self, TransactionFilter};
use crate::core::validation;
use crate::domain::category::BudgetCategory;
use crate::domain::common::{find_by_id, name_exists, Displayable, Identifiable};
use crate::domain::summary::{CategorySlice, LossAlert, MonthBucket, SeriesWindow};
use crate::domain::transaction::{Transaction, TransactionDraft, TransactionPatch};
use crate::errors::{EngineError, EngineResult};
use crate::storage::ChangeObserver;

/// The authoritative, mutable transaction set plus every derived view.
///
/// All mutations pass through here; each successful one reruns the full
/// recompute pipeline (category spend, net totals, monthly series, breakdown,
/// loss evaluation) before control returns to the caller, so no partial
/// aggregate state is ever observable. Derived views are rebuilt wholesale
/// from the current transaction set, never patched incrementally.
pub struct Ledger {
    transactions: Vec<Transaction>,
    categories: Vec<BudgetCategory>,
    series_months: usize,
    series: Vec<MonthBucket>,
    breakdown: Vec<CategorySlice>,
    totals: NetTotals,
    detector: LossDetector,
    clock: Box<dyn Clock>,
    observers: Vec<Box<dyn ChangeObserver>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Ledger {
    pub const DEFAULT_SERIES_MONTHS: usize = 6;

    pub fn new() -> Self {
        Self::with_clock(Box::new(SystemClock))
    }

    pub fn with_clock(clock: Box<dyn Clock>) -> Self {
        let now = clock.now();
        let mut ledger = Self {
            transactions: Vec::new(),
            categories: Vec::new(),
            series_months: Self::DEFAULT_SERIES_MONTHS,
            series: Vec::new(),
            breakdown: Vec::new(),
            totals: NetTotals::default(),
            detector: LossDetector::new(),
            clock,
            observers: Vec::new(),
            created_at: now,
            updated_at: now,
        };
        ledger.recompute();
        ledger
    }

    /// Builds a ledger from data handed over by the persistence collaborator
    /// at startup, recomputing every derived view once.
    pub fn from_parts(transactions: Vec<Transaction>, categories: Vec<BudgetCategory>) -> Self {
        let mut ledger = Self::new();
        ledger.load(transactions, categories);
        ledger
    }

    /// Replaces the ledger contents wholesale, e.g. after a reload.
    pub fn load(&mut self, transactions: Vec<Transaction>, categories: Vec<BudgetCategory>) {
        self.transactions = transactions;
        self.categories = categories;
        self.touch();
        self.recompute();
    }

    /// Registers a fire-and-forget observer notified with the full
    /// transaction set after every transaction mutation.
    pub fn register_observer(&mut self, observer: Box<dyn ChangeObserver>) {
        self.observers.push(observer);
    }

    // --- transactions ---

    /// Normalizes and stores a new transaction. Never fails: malformed input
    /// is coerced by the validation layer.
    pub fn add_transaction(&mut self, draft: TransactionDraft) -> Transaction {
        let txn = validation::normalize_draft(draft, self.clock.today(), self.clock.now());
        tracing::debug!(txn = %txn.display_label(), "transaction added");
        self.transactions.push(txn.clone());
        self.after_mutation();
        txn
    }

    /// Replaces the record for `id` with a re-normalized merge of `patch`
    /// over its current fields. Unknown ids are an error, never an upsert.
    pub fn update_transaction(
        &mut self,
        id: Uuid,
        patch: TransactionPatch,
    ) -> EngineResult<Transaction> {
        let position = self
            .transactions
            .iter()
            .position(|txn| txn.id() == id)
            .ok_or(EngineError::TransactionNotFound(id))?;
        let merged = validation::apply_patch(&self.transactions[position], patch);
        tracing::debug!(txn = %merged.display_label(), "transaction replaced");
        self.transactions[position] = merged.clone();
        self.after_mutation();
        Ok(merged)
    }

    /// Removes the record if present. Removing an absent id is a no-op that
    /// leaves aggregates untouched and notifies nobody.
    pub fn remove_transaction(&mut self, id: Uuid) {
        let before = self.transactions.len();
        self.transactions.retain(|txn| txn.id() != id);
        if self.transactions.len() == before {
            return;
        }
        tracing::debug!(%id, "transaction removed");
        self.after_mutation();
    }

    /// All transactions in insertion order.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn transaction(&self, id: Uuid) -> Option<&Transaction> {
        find_by_id(&self.transactions, id)
    }

    /// Filtered, date-descending read view; does not mutate the store.
    pub fn query(&self, filter: &TransactionFilter) -> Vec<&Transaction> {
        query::run(&self.transactions, filter)
    }

    // --- budget category configuration ---

    pub fn add_category(&mut self, category: BudgetCategory) -> EngineResult<()> {
        if name_exists(&self.categories, &category.name) {
            return Err(EngineError::DuplicateCategory(category.name));
        }
        self.categories.push(category);
        self.after_config_change();
        Ok(())
    }

    pub fn update_category(
        &mut self,
        name: &str,
        limit: f64,
        notifications_enabled: bool,
    ) -> EngineResult<()> {
        let category = self
            .categories
            .iter_mut()
            .find(|category| category.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| EngineError::CategoryNotFound(name.to_string()))?;
        category.limit = limit;
        category.notifications_enabled = notifications_enabled;
        self.after_config_change();
        Ok(())
    }

    pub fn remove_category(&mut self, name: &str) -> EngineResult<()> {
        let before = self.categories.len();
        self.categories
            .retain(|category| !category.name.eq_ignore_ascii_case(name));
        if self.categories.len() == before {
            return Err(EngineError::CategoryNotFound(name.to_string()));
        }
        self.after_config_change();
        Ok(())
    }

    // --- derived views ---

    /// Configured categories with their recomputed `spent` totals.
    pub fn budget_overview(&self) -> &[BudgetCategory] {
        &self.categories
    }

    /// Transaction categories invisible to the budget view because no
    /// [`BudgetCategory`] is configured for them.
    pub fn unbudgeted_categories(&self) -> Vec<String> {
        aggregation::unbudgeted_categories(&self.transactions, &self.categories)
    }

    /// The cached series for the configured window, refreshed on every
    /// mutation.
    pub fn monthly_series(&self) -> &[MonthBucket] {
        &self.series
    }

    /// Ad-hoc projection for a caller-chosen window size, ending at the
    /// current month.
    pub fn project_series(&self, window_months: usize) -> Vec<MonthBucket> {
        let window = SeriesWindow::ending_at(self.clock.today(), window_months);
        projection::monthly_series(&self.transactions, window)
    }

    /// Reconfigures the cached series window and recomputes.
    pub fn set_series_months(&mut self, window_months: usize) {
        self.series_months = window_months;
        self.after_config_change();
    }

    /// Exact per-category totals; zero stays zero here.
    pub fn category_breakdown(&self) -> &[CategorySlice] {
        &self.breakdown
    }

    /// Presentation-side breakdown where zero entries carry the minimum
    /// renderable slice amount.
    pub fn chart_slices(&self) -> Vec<CategorySlice> {
        projection::chart_slices(&self.categories)
    }

    /// Current loss alert, if net savings were negative at the last
    /// recompute and the alert has not expired.
    pub fn loss_alert(&self) -> Option<&LossAlert> {
        self.detector.current(self.clock.now())
    }

    pub fn set_alert_ttl(&mut self, ttl_secs: i64) {
        self.detector.set_ttl(ttl_secs);
    }

    pub fn net_totals(&self) -> NetTotals {
        self.totals
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    // --- pipeline ---

    fn after_mutation(&mut self) {
        self.touch();
        self.recompute();
        self.notify_observers();
    }

    fn after_config_change(&mut self) {
        self.touch();
        self.recompute();
    }

    fn touch(&mut self) {
        self.updated_at = self.clock.now();
    }

    /// Rebuilds every derived view from the current transaction set. Runs to
    /// completion before the mutation that triggered it returns.
    fn recompute(&mut self) {
        aggregation::recompute_spent(&self.transactions, &mut self.categories);
        self.totals = aggregation::net_totals(&self.transactions);
        let window = SeriesWindow::ending_at(self.clock.today(), self.series_months);
        self.series = projection::monthly_series(&self.transactions, window);
        self.breakdown = projection::category_breakdown(&self.categories);
        self.detector
            .evaluate(self.totals, &self.categories, self.clock.now());
        tracing::debug!(
            transactions = self.transactions.len(),
            net = self.totals.net(),
            "derived views recomputed"
        );
    }

    fn notify_observers(&mut self) {
        let transactions = &self.transactions;
        for observer in &mut self.observers {
            observer.transactions_changed(transactions);
        }
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

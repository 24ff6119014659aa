//! Budget state, the values derived from it, and the controller that applies
//! user actions and mirrors every change into a [`KeyValueStore`].

use anyhow::Result;
use rust_decimal::Decimal;

use crate::models::amount::{format_fixed2, is_valid_input, numeric};
use crate::models::Currency;
use crate::store::{self, KeyValueStore};

/// Editable state. Amounts stay as typed so partial input like `"12."` survives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BudgetState {
    pub(crate) budget: String,
    pub(crate) total_spent: String,
    pub(crate) pending_expense: String,
    pub(crate) currency: &'static Currency,
}

impl Default for BudgetState {
    fn default() -> Self {
        Self {
            budget: String::new(),
            total_spent: String::new(),
            pending_expense: String::new(),
            currency: Currency::default_ref(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct DerivedView {
    pub(crate) remaining: Decimal,
    /// Always within 0..=100.
    pub(crate) percent_remaining: Decimal,
}

impl DerivedView {
    pub(crate) fn compute(state: &BudgetState) -> Self {
        let budget = numeric(&state.budget);
        let remaining = budget.saturating_sub(numeric(&state.total_spent));
        Self {
            remaining,
            percent_remaining: percent_of(remaining, budget),
        }
    }
}

fn percent_of(remaining: Decimal, budget: Decimal) -> Decimal {
    if budget <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    let pct = match remaining.checked_div(budget) {
        Some(ratio) => ratio.saturating_mul(Decimal::ONE_HUNDRED),
        None if remaining > Decimal::ZERO => Decimal::ONE_HUNDRED,
        None => Decimal::ZERO,
    };
    pct.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AmountField {
    Budget,
    PendingExpense,
}

/// Owns the state for one session. Constructing it through [`mount`](Self::mount)
/// is the only way in, so a controller is always loaded and ready.
pub(crate) struct BudgetController {
    state: BudgetState,
    view: DerivedView,
    store: Box<dyn KeyValueStore>,
}

impl BudgetController {
    pub(crate) fn mount(store: Box<dyn KeyValueStore>) -> Result<Self> {
        let state = store::load(&*store)?;
        let view = DerivedView::compute(&state);
        tracing::info!(
            budget = %state.budget,
            total_spent = %state.total_spent,
            currency = state.currency.code,
            "budget state loaded"
        );
        Ok(Self { state, view, store })
    }

    pub(crate) fn state(&self) -> &BudgetState {
        &self.state
    }

    pub(crate) fn view(&self) -> DerivedView {
        self.view
    }

    pub(crate) fn currency(&self) -> &'static Currency {
        self.state.currency
    }

    pub(crate) fn field(&self, field: AmountField) -> &str {
        match field {
            AmountField::Budget => &self.state.budget,
            AmountField::PendingExpense => &self.state.pending_expense,
        }
    }

    #[cfg(test)]
    pub(crate) fn store(&self) -> &dyn KeyValueStore {
        &*self.store
    }

    // ── Edits ─────────────────────────────────────────────────

    /// Returns `false` when `text` is rejected by the input gate; the state is
    /// then left untouched and nothing is written.
    pub(crate) fn set_budget(&mut self, text: &str) -> Result<bool> {
        self.set_field(AmountField::Budget, text)
    }

    pub(crate) fn set_pending_expense(&mut self, text: &str) -> Result<bool> {
        self.set_field(AmountField::PendingExpense, text)
    }

    pub(crate) fn set_field(&mut self, field: AmountField, text: &str) -> Result<bool> {
        if !is_valid_input(text) {
            tracing::debug!(?field, text, "input rejected");
            return Ok(false);
        }
        let slot = match field {
            AmountField::Budget => &mut self.state.budget,
            AmountField::PendingExpense => &mut self.state.pending_expense,
        };
        slot.clear();
        slot.push_str(text);
        self.after_change()?;
        Ok(true)
    }

    /// Keystroke entry: the field as it would read after typing `c`.
    pub(crate) fn push_char(&mut self, field: AmountField, c: char) -> Result<bool> {
        let mut next = self.field(field).to_string();
        next.push(c);
        self.set_field(field, &next)
    }

    pub(crate) fn pop_char(&mut self, field: AmountField) -> Result<bool> {
        let mut next = self.field(field).to_string();
        if next.pop().is_none() {
            return Ok(false);
        }
        self.set_field(field, &next)
    }

    // ── Actions ───────────────────────────────────────────────

    /// Add the pending expense to the running total. Returns `false` and does
    /// nothing when there is no pending expense.
    pub(crate) fn commit_expense(&mut self) -> Result<bool> {
        if self.state.pending_expense.is_empty() {
            return Ok(false);
        }
        let expense = numeric(&self.state.pending_expense);
        let total = numeric(&self.state.total_spent).saturating_add(expense);
        self.state.total_spent = format_fixed2(total);
        self.state.pending_expense.clear();
        tracing::info!(%expense, total_spent = %self.state.total_spent, "expense committed");
        self.after_change()?;
        Ok(true)
    }

    /// Clear the amounts and their stored entries. The currency stays selected.
    /// The usual post-change save then writes the cleared amounts back as `""`.
    pub(crate) fn reset(&mut self) -> Result<()> {
        self.state.budget.clear();
        self.state.total_spent.clear();
        self.state.pending_expense.clear();
        store::clear_amounts(&mut *self.store)?;
        tracing::info!("budget reset");
        self.after_change()
    }

    /// Unknown codes are ignored and reported as `false`.
    pub(crate) fn select_currency(&mut self, code: &str) -> Result<bool> {
        let Some(currency) = Currency::find(code) else {
            tracing::debug!(code, "unknown currency ignored");
            return Ok(false);
        };
        self.state.currency = currency;
        tracing::info!(code, "currency selected");
        self.after_change()?;
        Ok(true)
    }

    pub(crate) fn cycle_currency(&mut self, step: isize) -> Result<()> {
        let next = self.state.currency.cycle(step);
        self.select_currency(next.code)?;
        Ok(())
    }

    fn after_change(&mut self) -> Result<()> {
        self.view = DerivedView::compute(&self.state);
        store::save(&mut *self.store, &self.state)
    }
}

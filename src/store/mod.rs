mod schema;
mod sqlite;

use anyhow::Result;
use std::collections::HashMap;

use crate::budget::BudgetState;
use crate::models::{Currency, CurrencyRecord};

pub(crate) use sqlite::SqliteStore;

pub(crate) const KEY_BUDGET: &str = "budget";
pub(crate) const KEY_TOTAL_SPENT: &str = "totalSpent";
pub(crate) const KEY_PENDING: &str = "currentSpent";
pub(crate) const KEY_CURRENCY: &str = "currency";

/// String-valued key-value storage the budget state is mirrored into.
pub(crate) trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// Process-local store. Nothing survives the process.
#[derive(Debug, Default, Clone)]
pub(crate) struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

// ── Persistence ───────────────────────────────────────────────

/// Read the persisted state. Missing amounts load as empty strings; a missing,
/// unreadable or unknown currency record loads as the default currency.
pub(crate) fn load(store: &dyn KeyValueStore) -> Result<BudgetState> {
    let budget = store.get(KEY_BUDGET)?.unwrap_or_default();
    let total_spent = store.get(KEY_TOTAL_SPENT)?.unwrap_or_default();
    let pending_expense = store.get(KEY_PENDING)?.unwrap_or_default();
    let currency = match store.get(KEY_CURRENCY)? {
        Some(raw) => decode_currency(&raw),
        None => Currency::default_ref(),
    };

    Ok(BudgetState {
        budget,
        total_spent,
        pending_expense,
        currency,
    })
}

fn decode_currency(raw: &str) -> &'static Currency {
    match serde_json::from_str::<CurrencyRecord>(raw) {
        Ok(record) => record.resolve().unwrap_or_else(|| {
            tracing::warn!(code = %record.code, "stored currency not recognised, using default");
            Currency::default_ref()
        }),
        Err(e) => {
            tracing::warn!(error = %e, "stored currency record unreadable, using default");
            Currency::default_ref()
        }
    }
}

/// Write every field. Errors from the store are returned, not retried.
pub(crate) fn save(store: &mut dyn KeyValueStore, state: &BudgetState) -> Result<()> {
    store.set(KEY_BUDGET, &state.budget)?;
    store.set(KEY_TOTAL_SPENT, &state.total_spent)?;
    store.set(KEY_PENDING, &state.pending_expense)?;
    save_currency(store, state.currency)
}

pub(crate) fn save_currency(store: &mut dyn KeyValueStore, currency: &Currency) -> Result<()> {
    let record = serde_json::to_string(&currency.to_record())?;
    store.set(KEY_CURRENCY, &record)
}

/// Drop the amount entries. The currency entry is left in place.
pub(crate) fn clear_amounts(store: &mut dyn KeyValueStore) -> Result<()> {
    store.remove(KEY_BUDGET)?;
    store.remove(KEY_TOTAL_SPENT)?;
    store.remove(KEY_PENDING)?;
    Ok(())
}

//! State-value table for temporal difference learning

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::StateKey;

/// Value table mapping canonical board states to value estimates
///
/// Entries are created lazily by [`ValueTable::backup`]; a state that was
/// never updated reads as 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValueTable {
    values: HashMap<StateKey, f64>,
}

impl ValueTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value estimate for a state, 0 if unseen
    pub fn get(&self, state: &StateKey) -> f64 {
        self.values.get(state).copied().unwrap_or(0.0)
    }

    pub fn contains(&self, state: &StateKey) -> bool {
        self.values.contains_key(state)
    }

    /// Backward TD update of one state
    ///
    /// V(s) ← V(s) + α[γ·target − V(s)]
    ///
    /// The entry is created at 0 first if missing. Returns the updated value.
    pub fn backup(
        &mut self,
        state: StateKey,
        target: f64,
        learning_rate: f64,
        discount: f64,
    ) -> f64 {
        let value = self.values.entry(state).or_insert(0.0);
        *value += learning_rate * (discount * target - *value);
        *value
    }

    /// Number of states with an estimate
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&StateKey, f64)> {
        self.values.iter().map(|(state, &value)| (state, value))
    }

    /// Entries sorted by descending value, ties broken by key.
    pub fn ranked(&self) -> Vec<(&StateKey, f64)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|(ka, va), (kb, vb)| vb.total_cmp(va).then_with(|| ka.cmp(kb)));
        entries
    }
}

//! `EntryCondition` — the memory-status precondition a behavior declares.

use brain_core::{KeyId, Tick};
use rustc_hash::FxHashMap;

use crate::blackboard::Blackboard;
use crate::key::{MemoryKey, MemoryStatus};

/// A map from memory key to the status that key must have for the owning
/// behavior to start.
///
/// Attached to a behavior at construction and evaluated atomically against
/// the blackboard each time `try_start` runs.  An empty condition always
/// passes (used for "always eligible, gated only by custom predicate"
/// tasks).
#[derive(Default, Clone, Debug)]
pub struct EntryCondition {
    required: FxHashMap<KeyId, MemoryStatus>,
}

impl EntryCondition {
    /// An empty condition that always passes.
    pub fn none() -> Self {
        Self::default()
    }

    /// Builder-style: require `key` to have `status`.  A later requirement
    /// on the same key replaces the earlier one.
    pub fn require<T>(mut self, key: MemoryKey<T>, status: MemoryStatus) -> Self {
        self.required.insert(key.id(), status);
        self
    }

    /// Set-union with a delegate's condition, own entries winning on
    /// conflict.  Decorators merge their delegate's condition in at
    /// construction so wrapping never bypasses the delegate's gating.
    pub fn merged(mut self, delegate: &EntryCondition) -> Self {
        for (&key, &status) in &delegate.required {
            self.required.entry(key).or_insert(status);
        }
        self
    }

    /// `true` iff every required key has its declared status at `now`.
    pub fn is_met(&self, bb: &Blackboard, now: Tick) -> bool {
        self.required
            .iter()
            .all(|(&key, &status)| bb.check(key, status, now))
    }

    pub fn is_empty(&self) -> bool {
        self.required.is_empty()
    }

    pub fn len(&self) -> usize {
        self.required.len()
    }

    /// Iterate the (key, status) requirements in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (KeyId, MemoryStatus)> + '_ {
        self.required.iter().map(|(&k, &s)| (k, s))
    }
}

//! The `Blackboard` — one agent's typed, TTL-aware memory store.

use std::any::Any;

use brain_core::{KeyId, Tick};
use rustc_hash::FxHashMap;

use crate::error::{MemoryError, MemoryResult};
use crate::key::{MemoryKey, MemoryStatus};

/// Type-erased slot value.  `Send + Sync` so a whole agent (blackboard
/// included) can move between worker threads in the embedding application.
type Value = Box<dyn Any + Send + Sync>;

// ── MemorySlot ────────────────────────────────────────────────────────────────

/// One declared slot.  The "expired but not yet purged" state is explicit:
/// `PresentUntil` with a past expiry reads as absent everywhere but keeps
/// its storage until the next purge or overwrite.
pub enum MemorySlot {
    Absent,
    Present(Value),
    PresentUntil(Value, Tick),
}

impl MemorySlot {
    /// `true` if the slot holds a value that is live at `now`.
    ///
    /// A `PresentUntil` value written at tick T with TTL n is live for every
    /// tick in `[T, T+n]` and dead strictly after.
    #[inline]
    fn is_live(&self, now: Tick) -> bool {
        match self {
            MemorySlot::Absent => false,
            MemorySlot::Present(_) => true,
            MemorySlot::PresentUntil(_, expires_at) => now <= *expires_at,
        }
    }

    fn live_value(&self, now: Tick) -> Option<&Value> {
        match self {
            MemorySlot::Absent => None,
            MemorySlot::Present(v) => Some(v),
            MemorySlot::PresentUntil(v, expires_at) => (now <= *expires_at).then_some(v),
        }
    }
}

// ── Blackboard ────────────────────────────────────────────────────────────────

/// Per-agent associative memory store.
///
/// Every key a behavior set touches must be declared up front (or implicitly
/// by a first write).  Declared-but-empty slots are what the `Registered`
/// status matches; reading a key that was never declared is a caller
/// contract violation and trips a `debug_assert`.
#[derive(Default)]
pub struct Blackboard {
    slots: FxHashMap<KeyId, MemorySlot>,
}

impl Blackboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare `keys` for this agent.  Each starts `Absent`.
    pub fn with_keys(keys: &[KeyId]) -> Self {
        let mut bb = Self::new();
        for &k in keys {
            bb.declare(k);
        }
        bb
    }

    /// Declare a single key (idempotent; an existing value is untouched).
    pub fn declare(&mut self, key: KeyId) {
        self.slots.entry(key).or_insert(MemorySlot::Absent);
    }

    /// `true` if `key` was ever declared for this agent.
    #[inline]
    pub fn is_declared(&self, key: KeyId) -> bool {
        self.slots.contains_key(&key)
    }

    // ── Reads ─────────────────────────────────────────────────────────────

    /// The value stored under `key`, or `None` if absent or expired at `now`.
    pub fn get<T: Any + Send + Sync>(&self, key: MemoryKey<T>, now: Tick) -> Option<&T> {
        let slot = self.slots.get(&key.id());
        debug_assert!(slot.is_some(), "read of undeclared memory key {key:?}");
        let value = slot?.live_value(now)?;
        let typed = value.downcast_ref::<T>();
        debug_assert!(typed.is_some(), "type mismatch reading memory key {key:?}");
        typed
    }

    /// Checked accessor: the value must be declared, live, and well-typed.
    pub fn require<T: Any + Send + Sync>(
        &self,
        key: MemoryKey<T>,
        now: Tick,
    ) -> MemoryResult<&T> {
        let slot = self
            .slots
            .get(&key.id())
            .ok_or(MemoryError::Undeclared(key.id()))?;
        let value = slot.live_value(now).ok_or(MemoryError::Missing(key.id()))?;
        value
            .downcast_ref::<T>()
            .ok_or(MemoryError::TypeMismatch(key.id()))
    }

    /// Evaluate `status` for `key` at `now`.
    ///
    /// `Registered` is answerable for any key.  `ValuePresent`/`ValueAbsent`
    /// on an undeclared key is a contract violation; release builds answer
    /// as if the slot were declared-and-empty.
    pub fn check(&self, key: KeyId, status: MemoryStatus, now: Tick) -> bool {
        match status {
            MemoryStatus::Registered => self.is_declared(key),
            MemoryStatus::ValuePresent | MemoryStatus::ValueAbsent => {
                let slot = self.slots.get(&key);
                debug_assert!(slot.is_some(), "status check on undeclared memory key {key}");
                let live = slot.is_some_and(|s| s.is_live(now));
                (status == MemoryStatus::ValuePresent) == live
            }
        }
    }

    // ── Writes ────────────────────────────────────────────────────────────

    /// Store `value` under `key` with no expiry, clearing any prior TTL.
    /// A write declares the key if it was never declared.
    pub fn set<T: Any + Send + Sync>(&mut self, key: MemoryKey<T>, value: T) {
        self.slots
            .insert(key.id(), MemorySlot::Present(Box::new(value)));
    }

    /// Store `value` under `key`, live for every tick in `[now, now + ttl]`
    /// and absent strictly after.
    pub fn set_with_expiry<T: Any + Send + Sync>(
        &mut self,
        key: MemoryKey<T>,
        value: T,
        ttl: u64,
        now: Tick,
    ) {
        self.slots
            .insert(key.id(), MemorySlot::PresentUntil(Box::new(value), now + ttl));
    }

    /// Clear the slot (the key stays declared).
    pub fn remove<T>(&mut self, key: MemoryKey<T>) {
        self.remove_id(key.id());
    }

    /// Untyped form of [`remove`][Self::remove], for exit-erase sets that
    /// hold heterogeneous keys.
    pub fn remove_id(&mut self, key: KeyId) {
        if let Some(slot) = self.slots.get_mut(&key) {
            *slot = MemorySlot::Absent;
        }
    }

    /// Physically reset every slot whose TTL elapsed before `now`.
    ///
    /// Called by the behavior state machine before each entry-condition
    /// evaluation so expiry never depends on an explicit sweep.
    pub fn purge_expired(&mut self, now: Tick) {
        for slot in self.slots.values_mut() {
            if let MemorySlot::PresentUntil(_, expires_at) = slot {
                if now > *expires_at {
                    *slot = MemorySlot::Absent;
                }
            }
        }
    }
}

// ── MemoryHost ────────────────────────────────────────────────────────────────

/// Access to an agent's blackboard.
///
/// The behavior state machine is generic over the agent type; the only thing
/// it demands of an agent is a blackboard.  Implemented for `Blackboard`
/// itself so tests and minimal agents need no wrapper struct.
pub trait MemoryHost {
    fn memory(&self) -> &Blackboard;
    fn memory_mut(&mut self) -> &mut Blackboard;
}

impl MemoryHost for Blackboard {
    #[inline]
    fn memory(&self) -> &Blackboard {
        self
    }

    #[inline]
    fn memory_mut(&mut self) -> &mut Blackboard {
        self
    }
}

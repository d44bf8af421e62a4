//! Phantom-typed memory keys and the three-valued slot status.

use std::fmt;
use std::marker::PhantomData;

use brain_core::KeyId;

// ── MemoryKey ─────────────────────────────────────────────────────────────────

/// An identifier for one blackboard slot, carrying the slot's value type as
/// a phantom parameter.
///
/// Keys are declared once by the domain layer, typically as consts:
///
/// ```rust,ignore
/// pub const ATTACK_TARGET: MemoryKey<AgentId> = MemoryKey::new(KeyId(0), "attack_target");
/// pub const COOLDOWN:      MemoryKey<i32>     = MemoryKey::new(KeyId(1), "cooldown");
/// ```
///
/// Two keys are equal iff their `KeyId`s are equal; the name exists only for
/// diagnostics.  Declaring two keys with the same `KeyId` but different
/// value types is a programming error and trips the type-mismatch
/// `debug_assert` on first read.
pub struct MemoryKey<T> {
    id: KeyId,
    name: &'static str,
    // `fn() -> T` keeps the key `Send + Sync + Copy` regardless of `T`.
    _value: PhantomData<fn() -> T>,
}

impl<T> MemoryKey<T> {
    pub const fn new(id: KeyId, name: &'static str) -> Self {
        Self { id, name, _value: PhantomData }
    }

    #[inline]
    pub fn id(self) -> KeyId {
        self.id
    }

    #[inline]
    pub fn name(self) -> &'static str {
        self.name
    }
}

// Manual impls: derives would wrongly require `T: Copy` etc.
impl<T> Copy for MemoryKey<T> {}

impl<T> Clone for MemoryKey<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> PartialEq for MemoryKey<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<T> Eq for MemoryKey<T> {}

impl<T> fmt::Debug for MemoryKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MemoryKey({}, {:?})", self.id, self.name)
    }
}

impl<T> fmt::Display for MemoryKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

// ── MemoryStatus ──────────────────────────────────────────────────────────────

/// The status a behavior may require of a memory slot before it starts.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum MemoryStatus {
    /// The slot must hold no live value (absent or expired).
    ValueAbsent,
    /// The slot must hold a live (non-expired) value.
    ValuePresent,
    /// The key must merely be declared for this agent; whether a value is
    /// set is irrelevant.  Used when a behavior only needs the slot to be
    /// legal to touch.
    Registered,
}

impl fmt::Display for MemoryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MemoryStatus::ValueAbsent => "absent",
            MemoryStatus::ValuePresent => "present",
            MemoryStatus::Registered => "registered",
        };
        f.write_str(s)
    }
}

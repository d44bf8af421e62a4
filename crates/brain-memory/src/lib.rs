//! `brain-memory` — the per-agent associative memory blackboard.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`key`]       | `MemoryKey<T>` phantom-typed key, `MemoryStatus`          |
//! | [`blackboard`]| `Blackboard` slot store with TTL expiry, `MemoryHost`     |
//! | [`condition`] | `EntryCondition` — key→status preconditions for behaviors |
//! | [`error`]     | `MemoryError`, `MemoryResult<T>`                          |
//!
//! # Design notes
//!
//! The blackboard is the only shared mutable resource within one agent's
//! behavior set, and it is never shared across agents — each agent owns its
//! own.  Values are type-erased (`Box<dyn Any + Send + Sync>`) behind
//! phantom-typed keys, so reads and writes stay statically typed at the call
//! site while the store itself holds heterogeneous slots.
//!
//! Expiry is lazy: a value written with a TTL reads as absent once the TTL
//! elapses, but the slot is only physically reset when `purge_expired` runs
//! (behaviors call it before every entry-condition evaluation) or the slot
//! is overwritten.

pub mod blackboard;
pub mod condition;
pub mod error;
pub mod key;

#[cfg(test)]
mod tests;

pub use blackboard::{Blackboard, MemoryHost, MemorySlot};
pub use condition::EntryCondition;
pub use error::{MemoryError, MemoryResult};
pub use key::{MemoryKey, MemoryStatus};

//! `brain-core` — foundational types for the behavior-scheduler workspace.
//!
//! This crate is a dependency of every other `brain-*` crate.  It
//! intentionally has no `brain-*` dependencies and minimal external ones
//! (only `rand`).
//!
//! # What lives here
//!
//! | Module    | Contents                                    |
//! |-----------|---------------------------------------------|
//! | [`ids`]   | `AgentId`, `KeyId`, `ActivityId`            |
//! | [`time`]  | `Tick`, `TickRange`                         |
//! | [`rng`]   | `AgentRng` (per-agent), `SimRng` (global)   |

pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use ids::{ActivityId, AgentId, KeyId};
pub use rng::{AgentRng, SimRng};
pub use time::{Tick, TickRange};

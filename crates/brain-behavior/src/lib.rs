//! `brain-behavior` — the task state machine and its composition decorators.
//!
//! # Crate layout
//!
//! | Module           | Contents                                                   |
//! |------------------|------------------------------------------------------------|
//! | [`state`]        | `Status`, `TaskState` — per-task bookkeeping               |
//! | [`task`]         | the `Behavior<A>` trait: hooks + provided state machine    |
//! | [`run_if`]       | `RunIf` — predicate-gated wrapper                          |
//! | [`run_sometimes`]| `RunSometimes` — periodic restart throttle                 |
//! | [`expirable`]    | `ExpirableMemory` — copy a memory value with a TTL         |
//! | [`cooldown`]     | `CountDownCooldownTicks` — tick an integer memory to zero  |
//! | [`erase`]        | `RemoveMemory` — one-shot conditional cleanup              |
//! | [`idle`]         | `Idle` — placeholder leaf that just waits out its duration |
//!
//! # The lifecycle contract
//!
//! A behavior is constructed `Stopped`.  The owning scheduler calls
//! [`Behavior::try_start`] on stopped behaviors; a successful start samples
//! a run-duration and transitions to `Running`.  Every subsequent tick the
//! scheduler calls [`Behavior::tick_or_stop`], which either advances the
//! task or winds it down.  [`Behavior::do_stop`] force-stops from outside
//! (an enclosing gate shutting down) and always runs the `stop` hook, so
//! cleanup runs exactly once per start/stop pair on every exit path.
//!
//! Splitting "can I start" (one-shot precondition, possibly an expensive
//! lookup) from "can I continue" (cheap per-tick liveness) lets multi-tick
//! tasks re-validate cheaply without re-running target search, while
//! single-tick tasks simply never report themselves still usable.

pub mod cooldown;
pub mod erase;
pub mod expirable;
pub mod idle;
pub mod run_if;
pub mod run_sometimes;
pub mod state;
pub mod task;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cooldown::CountDownCooldownTicks;
pub use erase::RemoveMemory;
pub use expirable::ExpirableMemory;
pub use idle::Idle;
pub use run_if::RunIf;
pub use run_sometimes::RunSometimes;
pub use state::{Status, TaskState};
pub use task::Behavior;

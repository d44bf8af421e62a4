//! `brain-schedule` — the per-agent top-level drive loop.
//!
//! One [`Scheduler`] per agent owns that agent's top-level behaviors (which
//! are usually gates from `brain-gate`), each registered under an integer
//! priority and an activity category.  Each tick the scheduler offers a
//! start to every stopped behavior of an active activity in ascending
//! priority order, then advances every running behavior.
//!
//! The scheduler is deliberately dumb: mutual exclusion between alternative
//! actions comes from gate composition, not from the scheduler.

pub mod scheduler;


pub use scheduler::{ScheduledTask, Scheduler};

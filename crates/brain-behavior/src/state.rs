//! Per-task bookkeeping shared by every behavior implementation.

use std::fmt;

use brain_core::{Tick, TickRange};
use brain_memory::EntryCondition;

// ── Status ────────────────────────────────────────────────────────────────────

/// The two lifecycle states of a behavior.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum Status {
    /// Initial state, and the state after any `do_stop`.
    #[default]
    Stopped,
    /// Between a successful `try_start` and the next `do_stop`.
    Running,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Status::Stopped => "stopped",
            Status::Running => "running",
        })
    }
}

// ── TaskState ─────────────────────────────────────────────────────────────────

/// The state-machine fields every behavior embeds.
///
/// Implementors of [`Behavior`][crate::Behavior] hold one of these and hand
/// it back through `state()`/`state_mut()`; the provided state-machine
/// methods do all mutation.  Concrete behaviors never touch `status` or
/// `end_tick` directly.
pub struct TaskState {
    status: Status,
    duration: TickRange,
    end_tick: Tick,
    entry: EntryCondition,
}

impl TaskState {
    /// A task gated by `entry` that runs for a duration sampled from
    /// `duration` (inclusive bounds) on each start.
    pub fn new(entry: EntryCondition, duration: TickRange) -> Self {
        Self {
            status: Status::Stopped,
            duration,
            end_tick: Tick::ZERO,
            entry,
        }
    }

    /// For behaviors that override `timed_out` to always-false (decorators,
    /// gates): the sampled duration is never consulted.
    pub fn untimed(entry: EntryCondition) -> Self {
        Self::new(entry, TickRange::fixed(0))
    }

    #[inline]
    pub fn status(&self) -> Status {
        self.status
    }

    #[inline]
    pub fn duration(&self) -> TickRange {
        self.duration
    }

    /// Absolute tick at which the current run's duration elapses.
    /// Meaningful only while `Running`.
    #[inline]
    pub fn end_tick(&self) -> Tick {
        self.end_tick
    }

    #[inline]
    pub fn entry(&self) -> &EntryCondition {
        &self.entry
    }

    /// Transition to `Running` until `end_tick`.
    pub(crate) fn begin(&mut self, end_tick: Tick) {
        self.status = Status::Running;
        self.end_tick = end_tick;
    }

    /// Transition to `Stopped`.  Unconditional; see `Behavior::do_stop`.
    pub(crate) fn halt(&mut self) {
        self.status = Status::Stopped;
    }
}

//! `Idle` — placeholder leaf that waits out its sampled duration.

use brain_core::{Tick, TickRange};
use brain_memory::{EntryCondition, MemoryHost};

use crate::state::TaskState;
use crate::task::Behavior;

/// Does nothing for `duration` ticks, then stops.  Always eligible.
///
/// Useful as a low-weight "rest" alternative inside a gate, and as the
/// simplest behavior that exercises the full duration-bounded lifecycle.
pub struct Idle {
    state: TaskState,
}

impl Idle {
    pub fn new(duration: TickRange) -> Self {
        Self {
            state: TaskState::new(EntryCondition::none(), duration),
        }
    }
}

impl<A: MemoryHost> Behavior<A> for Idle {
    fn state(&self) -> &TaskState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut TaskState {
        &mut self.state
    }

    fn can_still_use(&mut self, _agent: &mut A, _now: Tick) -> bool {
        true
    }
}

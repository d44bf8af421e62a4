//! `CountDownCooldownTicks` — run down an integer cooldown memory.

use brain_core::{AgentRng, Tick};
use brain_memory::{EntryCondition, MemoryHost, MemoryKey, MemoryStatus};

use crate::state::TaskState;
use crate::task::Behavior;

/// While the integer under `key` is positive, decrement it once per tick;
/// when it reaches zero the task stops and removes the key entirely, so an
/// absent key means "cooldown over" to anything gating on it.
///
/// An external writer resets the cooldown simply by setting the key again.
pub struct CountDownCooldownTicks {
    state: TaskState,
    key: MemoryKey<i32>,
}

impl CountDownCooldownTicks {
    pub fn new(key: MemoryKey<i32>) -> Self {
        let entry = EntryCondition::none().require(key, MemoryStatus::ValuePresent);
        Self {
            state: TaskState::untimed(entry),
            key,
        }
    }
}

impl<A: MemoryHost> Behavior<A> for CountDownCooldownTicks {
    fn state(&self) -> &TaskState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut TaskState {
        &mut self.state
    }

    fn can_still_use(&mut self, agent: &mut A, now: Tick) -> bool {
        agent.memory().get(self.key, now).is_some_and(|v| *v > 0)
    }

    fn timed_out(&self, _now: Tick) -> bool {
        false
    }

    fn tick(&mut self, agent: &mut A, _rng: &mut AgentRng, now: Tick) {
        if let Some(&remaining) = agent.memory().get(self.key, now) {
            agent.memory_mut().set(self.key, remaining - 1);
        }
    }

    fn stop(&mut self, agent: &mut A, _rng: &mut AgentRng, _now: Tick) {
        agent.memory_mut().remove(self.key);
    }
}

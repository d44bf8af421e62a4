//! `RemoveMemory` — one-shot conditional cleanup of a memory slot.

use brain_core::{AgentRng, KeyId, Tick};
use brain_memory::{EntryCondition, MemoryHost, MemoryKey, MemoryStatus};

use crate::state::TaskState;
use crate::task::Behavior;

/// Erases `key` when it is present and `predicate(agent)` holds.
///
/// Purely a cleanup task: it starts, removes the key, and stops on the next
/// tick (default one-shot liveness).
pub struct RemoveMemory<A> {
    state: TaskState,
    predicate: Box<dyn Fn(&A) -> bool + Send + Sync>,
    key: KeyId,
}

impl<A: MemoryHost> RemoveMemory<A> {
    pub fn new<T>(
        predicate: impl Fn(&A) -> bool + Send + Sync + 'static,
        key: MemoryKey<T>,
    ) -> Self {
        let entry = EntryCondition::none().require(key, MemoryStatus::ValuePresent);
        Self {
            state: TaskState::untimed(entry),
            predicate: Box::new(predicate),
            key: key.id(),
        }
    }
}

impl<A: MemoryHost> Behavior<A> for RemoveMemory<A> {
    fn state(&self) -> &TaskState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut TaskState {
        &mut self.state
    }

    fn check_extra_start_conditions(
        &mut self,
        agent: &mut A,
        _rng: &mut AgentRng,
        _now: Tick,
    ) -> bool {
        (self.predicate)(agent)
    }

    fn start(&mut self, agent: &mut A, _rng: &mut AgentRng, _now: Tick) {
        agent.memory_mut().remove_id(self.key);
    }
}

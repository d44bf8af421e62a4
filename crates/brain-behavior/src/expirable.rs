//! `ExpirableMemory` — mirror a memory value into a second slot with a TTL.

use std::any::Any;

use brain_core::{AgentRng, Tick, TickRange};
use brain_memory::{EntryCondition, MemoryHost, MemoryKey, MemoryStatus};

use crate::state::TaskState;
use crate::task::Behavior;

/// One-shot task that copies the value under `source` into `target` with a
/// TTL sampled from `ttl`.
///
/// Other behaviors gate on the target slot; the mirror self-expires with no
/// explicit stop logic.  Entry condition: source present, target absent —
/// so the task re-arms automatically once the previous mirror expires.
pub struct ExpirableMemory<A, T> {
    state: TaskState,
    predicate: Box<dyn Fn(&A) -> bool + Send + Sync>,
    source: MemoryKey<T>,
    target: MemoryKey<T>,
    ttl: TickRange,
}

impl<A: MemoryHost, T: Any + Send + Sync + Clone> ExpirableMemory<A, T> {
    pub fn new(
        predicate: impl Fn(&A) -> bool + Send + Sync + 'static,
        source: MemoryKey<T>,
        target: MemoryKey<T>,
        ttl: TickRange,
    ) -> Self {
        let entry = EntryCondition::none()
            .require(source, MemoryStatus::ValuePresent)
            .require(target, MemoryStatus::ValueAbsent);
        Self {
            state: TaskState::new(entry, TickRange::fixed(0)),
            predicate: Box::new(predicate),
            source,
            target,
            ttl,
        }
    }

    /// Mirror unconditionally whenever the entry condition holds.
    pub fn always(source: MemoryKey<T>, target: MemoryKey<T>, ttl: TickRange) -> Self {
        Self::new(|_| true, source, target, ttl)
    }
}

impl<A: MemoryHost, T: Any + Send + Sync + Clone> Behavior<A> for ExpirableMemory<A, T> {
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

    fn start(&mut self, agent: &mut A, rng: &mut AgentRng, now: Tick) {
        // Entry condition guarantees the source is live; clone before the
        // mutable borrow of the blackboard.
        let value = agent.memory().get(self.source, now).cloned();
        if let Some(value) = value {
            let ttl = self.ttl.sample(rng);
            agent.memory_mut().set_with_expiry(self.target, value, ttl, now);
        }
    }
}

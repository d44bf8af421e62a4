//! `RunIf` — gate a behavior behind an arbitrary agent predicate.

use brain_core::{AgentRng, Tick};
use brain_memory::{EntryCondition, MemoryHost};

use crate::state::TaskState;
use crate::task::Behavior;

/// Wraps a behavior so it only starts when `predicate(agent)` holds, on top
/// of the delegate's own gating.
///
/// The delegate's entry condition is merged into this wrapper's at
/// construction, so wrapping never bypasses memory gating.  The delegate's
/// own state machine is *not* engaged: `start`/`tick`/`stop` pass straight
/// through to the delegate's hooks and this wrapper's state is
/// authoritative.  `timed_out` is always false — any duration bound comes
/// from the delegate's internal stop logic.
///
/// With `check_while_running = false` (the common case) the wrapper never
/// reports itself still usable, making it a gate for one-shot effects; with
/// `true`, the predicate and the delegate's liveness are re-checked every
/// tick.
pub struct RunIf<A: MemoryHost> {
    state: TaskState,
    predicate: Box<dyn Fn(&A) -> bool + Send + Sync>,
    delegate: Box<dyn Behavior<A>>,
    check_while_running: bool,
}

impl<A: MemoryHost> RunIf<A> {
    pub fn new(
        required: EntryCondition,
        predicate: impl Fn(&A) -> bool + Send + Sync + 'static,
        delegate: Box<dyn Behavior<A>>,
        check_while_running: bool,
    ) -> Self {
        let entry = required.merged(delegate.state().entry());
        Self {
            state: TaskState::untimed(entry),
            predicate: Box::new(predicate),
            delegate,
            check_while_running,
        }
    }

    /// Predicate-only gating, no memory requirements of its own.
    pub fn predicate_only(
        predicate: impl Fn(&A) -> bool + Send + Sync + 'static,
        delegate: Box<dyn Behavior<A>>,
    ) -> Self {
        Self::new(EntryCondition::none(), predicate, delegate, false)
    }
}

impl<A: MemoryHost> Behavior<A> for RunIf<A> {
    fn state(&self) -> &TaskState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut TaskState {
        &mut self.state
    }

    fn check_extra_start_conditions(
        &mut self,
        agent: &mut A,
        rng: &mut AgentRng,
        now: Tick,
    ) -> bool {
        (self.predicate)(agent) && self.delegate.check_extra_start_conditions(agent, rng, now)
    }

    fn can_still_use(&mut self, agent: &mut A, now: Tick) -> bool {
        self.check_while_running
            && (self.predicate)(agent)
            && self.delegate.can_still_use(agent, now)
    }

    fn timed_out(&self, _now: Tick) -> bool {
        false
    }

    fn start(&mut self, agent: &mut A, rng: &mut AgentRng, now: Tick) {
        self.delegate.start(agent, rng, now);
    }

    fn tick(&mut self, agent: &mut A, rng: &mut AgentRng, now: Tick) {
        self.delegate.tick(agent, rng, now);
    }

    fn stop(&mut self, agent: &mut A, rng: &mut AgentRng, now: Tick) {
        self.delegate.stop(agent, rng, now);
    }
}

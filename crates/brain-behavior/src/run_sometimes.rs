//! `RunSometimes` — throttle how often a behavior may restart.

use brain_core::{AgentRng, Tick, TickRange};
use brain_memory::{EntryCondition, MemoryHost};

use crate::state::{Status, TaskState};
use crate::task::Behavior;

/// Wraps a behavior with a restart countdown sampled from `interval`.
///
/// Unlike [`RunIf`][crate::RunIf], the delegate runs through its real state
/// machine here: this wrapper's `start` calls the delegate's `try_start`,
/// `tick` forwards `tick_or_stop`, and the wrapper stays alive exactly as
/// long as the delegate is `Running`.  The countdown is resampled every time
/// the wrapper (and with it the delegate) stops.
///
/// The countdown decrements once per eligibility check — i.e. once per
/// scheduler tick while the delegate would otherwise be ready to start.
/// With `reset_on_first_run = true` the very first eligibility check arms
/// the countdown and reports not-ready; with `false` the first start is not
/// throttled.
pub struct RunSometimes<A: MemoryHost> {
    state: TaskState,
    delegate: Box<dyn Behavior<A>>,
    interval: TickRange,
    reset_on_first_run: bool,
    /// `None` until the first eligibility check arms the throttle.
    ticks_until_next_start: Option<u64>,
}

impl<A: MemoryHost> RunSometimes<A> {
    pub fn new(delegate: Box<dyn Behavior<A>>, reset_on_first_run: bool, interval: TickRange) -> Self {
        let entry = EntryCondition::none().merged(delegate.state().entry());
        Self {
            state: TaskState::untimed(entry),
            delegate,
            interval,
            reset_on_first_run,
            ticks_until_next_start: None,
        }
    }
}

impl<A: MemoryHost> Behavior<A> for RunSometimes<A> {
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
        if !self.delegate.check_extra_start_conditions(agent, rng, now) {
            return false;
        }
        match self.ticks_until_next_start {
            None => {
                if self.reset_on_first_run {
                    self.ticks_until_next_start = Some(self.interval.sample(rng));
                    return false;
                }
                self.ticks_until_next_start = Some(0);
            }
            Some(remaining) if remaining > 0 => {
                self.ticks_until_next_start = Some(remaining - 1);
                if remaining > 1 {
                    return false;
                }
            }
            Some(_) => {}
        }
        // Never re-trigger a delegate that is already mid-run.
        self.delegate.status() == Status::Stopped
    }

    fn can_still_use(&mut self, _agent: &mut A, _now: Tick) -> bool {
        self.delegate.status() == Status::Running
    }

    fn timed_out(&self, _now: Tick) -> bool {
        false
    }

    fn start(&mut self, agent: &mut A, rng: &mut AgentRng, now: Tick) {
        // Eligibility was just verified; a false return here means the
        // delegate's extra conditions flipped between the two calls, and the
        // wrapper simply winds down on the next tick.
        let _ = self.delegate.try_start(agent, rng, now);
    }

    fn tick(&mut self, agent: &mut A, rng: &mut AgentRng, now: Tick) {
        if self.delegate.status() == Status::Running {
            self.delegate.tick_or_stop(agent, rng, now);
        }
    }

    fn stop(&mut self, agent: &mut A, rng: &mut AgentRng, now: Tick) {
        if self.delegate.status() == Status::Running {
            self.delegate.do_stop(agent, rng, now);
        }
        self.ticks_until_next_start = Some(self.interval.sample(rng));
    }
}

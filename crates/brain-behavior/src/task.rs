//! The `Behavior` trait — the main extension point for task authors.

use brain_core::{AgentRng, Tick};
use brain_memory::MemoryHost;

use crate::state::{Status, TaskState};

/// A single schedulable task for one agent.
///
/// Implementors embed a [`TaskState`] and expose it through
/// `state()`/`state_mut()`; everything else is overridable hooks with
/// defaults chosen so that a minimal implementation is a one-shot task
/// (`can_still_use` defaults to `false`) bounded by its sampled duration.
///
/// The provided methods `try_start`, `tick_or_stop`, and `do_stop` are the
/// state machine itself and must not be overridden — decorators and gates
/// compose by overriding the hooks and delegating.
///
/// # Hook reference
///
/// | Hook                          | Default            | Called when                      |
/// |-------------------------------|--------------------|----------------------------------|
/// | `check_extra_start_conditions`| `true`             | after the entry condition passes |
/// | `can_still_use`               | `false`            | each tick, before `tick`         |
/// | `timed_out`                   | `now > end_tick`   | each tick, before `can_still_use`|
/// | `start`                       | no-op              | on successful `try_start`        |
/// | `tick`                        | no-op              | each tick while alive            |
/// | `stop`                        | no-op              | exactly once per run, on any exit|
///
/// # Ownership
///
/// A behavior instance is owned by exactly one agent's schedule; it is never
/// shared.  Cross-tick continuation state (countdowns, cached targets) lives
/// in ordinary owned fields.
pub trait Behavior<A: MemoryHost>: Send {
    fn state(&self) -> &TaskState;
    fn state_mut(&mut self) -> &mut TaskState;

    // ── Overridable hooks ─────────────────────────────────────────────────

    /// Domain-specific start predicate, evaluated after the entry condition.
    /// May cache a computed target in `self` for reuse by `start`/`tick`;
    /// must leave the blackboard untouched when it returns `false`.
    fn check_extra_start_conditions(
        &mut self,
        _agent: &mut A,
        _rng: &mut AgentRng,
        _now: Tick,
    ) -> bool {
        true
    }

    /// Cheap per-tick liveness check.  Defaults to `false`: a behavior must
    /// opt in to running longer than one tick.
    fn can_still_use(&mut self, _agent: &mut A, _now: Tick) -> bool {
        false
    }

    /// Whether the sampled run-duration has elapsed.  Decorators and gates
    /// override this to always-false, delegating lifetime to the wrapped
    /// tasks; the duration bound is advisory, not uniformly enforced.
    fn timed_out(&self, now: Tick) -> bool {
        now > self.state().end_tick()
    }

    /// One-time setup on a successful start (claim resources, write the
    /// blackboard).  Must be infallible: validate availability in
    /// `check_extra_start_conditions` instead.
    fn start(&mut self, _agent: &mut A, _rng: &mut AgentRng, _now: Tick) {}

    /// Per-tick work while alive.
    fn tick(&mut self, _agent: &mut A, _rng: &mut AgentRng, _now: Tick) {}

    /// Cleanup, invoked exactly once per run on every exit path, including
    /// forced stops from an enclosing gate.
    fn stop(&mut self, _agent: &mut A, _rng: &mut AgentRng, _now: Tick) {}

    // ── Provided state machine (do not override) ──────────────────────────

    /// Attempt to start a stopped behavior.
    ///
    /// Evaluates the entry condition against the blackboard (purging expired
    /// values first), then `check_extra_start_conditions`.  If both pass the
    /// behavior transitions to `Running` with a freshly sampled duration and
    /// `start` runs.  A `false` return leaves no side effects on the
    /// blackboard.
    ///
    /// Calling this while `Running` is a caller error (`debug_assert`).
    fn try_start(&mut self, agent: &mut A, rng: &mut AgentRng, now: Tick) -> bool {
        debug_assert_eq!(
            self.state().status(),
            Status::Stopped,
            "try_start on a running behavior"
        );
        agent.memory_mut().purge_expired(now);
        if !self.state().entry().is_met(agent.memory(), now) {
            return false;
        }
        if !self.check_extra_start_conditions(agent, rng, now) {
            return false;
        }
        let run_for = self.state().duration().sample(rng);
        self.state_mut().begin(now + run_for);
        self.start(agent, rng, now);
        true
    }

    /// Advance or wind down a running behavior.
    ///
    /// Runs `tick` iff the behavior has not timed out *and* reports itself
    /// still usable; otherwise stops it.
    ///
    /// Calling this while `Stopped` is a caller error (`debug_assert`).
    fn tick_or_stop(&mut self, agent: &mut A, rng: &mut AgentRng, now: Tick) {
        debug_assert_eq!(
            self.state().status(),
            Status::Running,
            "tick_or_stop on a stopped behavior"
        );
        if !self.timed_out(now) && self.can_still_use(agent, now) {
            self.tick(agent, rng, now);
        } else {
            self.do_stop(agent, rng, now);
        }
    }

    /// Stop unconditionally and run the `stop` hook.
    ///
    /// Resets the status even if the behavior already intended to stop, so
    /// an enclosing gate can force-stop children without consulting their
    /// liveness.
    fn do_stop(&mut self, agent: &mut A, rng: &mut AgentRng, now: Tick) {
        self.state_mut().halt();
        self.stop(agent, rng, now);
    }

    /// Current lifecycle state.
    #[inline]
    fn status(&self) -> Status {
        self.state().status()
    }
}

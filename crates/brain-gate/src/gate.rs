//! `BehaviorGate` — a behavior composed of weighted sub-behaviors.

use brain_core::{AgentRng, KeyId, Tick};
use brain_behavior::{Behavior, Status, TaskState};
use brain_memory::{EntryCondition, MemoryHost};

use crate::shuffling::ShufflingList;

// ── Policies ──────────────────────────────────────────────────────────────────

/// How children are (re)ordered each time the gate starts.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum OrderPolicy {
    /// Keep insertion order.
    Ordered,
    /// Weighted random permutation (see [`ShufflingList::shuffle`]).
    Shuffled,
}

/// How many children the gate attempts to start per activation.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum RunPolicy {
    /// Scan stopped children in list order; the first successful `try_start`
    /// wins and the scan ends.
    RunOne,
    /// Attempt `try_start` on every stopped child independently.
    TryAll,
}

// ── BehaviorGate ──────────────────────────────────────────────────────────────

/// A composite behavior that picks which of its weighted children run.
///
/// The gate's own lifetime is governed entirely by its children: it has no
/// timeout (`timed_out` is always false) and reports itself usable exactly
/// while at least one running child does.  Children that stop mid-activation
/// are not restarted — the gate commits to its selection until it stops and
/// is started afresh by the owning scheduler.
///
/// Stopping the gate force-stops every running child (their `stop` hooks
/// run exactly once) and then erases the gate's exit-erase memory keys.
pub struct BehaviorGate<A: MemoryHost> {
    state: TaskState,
    order: OrderPolicy,
    run: RunPolicy,
    exit_erased: Vec<KeyId>,
    children: ShufflingList<Box<dyn Behavior<A>>>,
}

impl<A: MemoryHost> BehaviorGate<A> {
    pub fn new(
        entry: EntryCondition,
        exit_erased: Vec<KeyId>,
        order: OrderPolicy,
        run: RunPolicy,
    ) -> Self {
        Self {
            state: TaskState::untimed(entry),
            order,
            run,
            exit_erased,
            children: ShufflingList::new(),
        }
    }

    /// The dominant idiom: pick exactly one eligible child per activation,
    /// weighted-randomly.  No exit-erased keys.
    pub fn single(entry: EntryCondition) -> Self {
        Self::new(entry, Vec::new(), OrderPolicy::Shuffled, RunPolicy::RunOne)
    }

    /// Builder-style child registration.
    pub fn add_weighted(mut self, child: Box<dyn Behavior<A>>, weight: u32) -> Self {
        self.children.add(child, weight);
        self
    }

    /// Number of children currently `Running`.
    pub fn running_count(&self) -> usize {
        self.children
            .iter()
            .filter(|e| e.item.status() == Status::Running)
            .count()
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }
}

impl<A: MemoryHost> Behavior<A> for BehaviorGate<A> {
    fn state(&self) -> &TaskState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut TaskState {
        &mut self.state
    }

    // The gate has no gating beyond its declared entry condition; the
    // default `check_extra_start_conditions` (true) stands.

    fn timed_out(&self, _now: Tick) -> bool {
        false
    }

    /// Alive while any running child still reports itself usable, so the
    /// gate winds down the instant its last active child would.
    fn can_still_use(&mut self, agent: &mut A, now: Tick) -> bool {
        self.children
            .iter_mut()
            .filter(|e| e.item.status() == Status::Running)
            .any(|e| e.item.can_still_use(agent, now))
    }

    fn start(&mut self, agent: &mut A, rng: &mut AgentRng, now: Tick) {
        if self.order == OrderPolicy::Shuffled {
            self.children.shuffle(rng);
        }
        for entry in self.children.iter_mut() {
            let child = &mut entry.item;
            if child.status() != Status::Stopped {
                continue;
            }
            // Child ineligibility is the normal path, never an error.
            let started = child.try_start(agent, rng, now);
            if started && self.run == RunPolicy::RunOne {
                break;
            }
        }
    }

    /// Advance children already running; stopped children stay stopped until
    /// the gate itself restarts.
    fn tick(&mut self, agent: &mut A, rng: &mut AgentRng, now: Tick) {
        for entry in self.children.iter_mut() {
            if entry.item.status() == Status::Running {
                entry.item.tick_or_stop(agent, rng, now);
            }
        }
    }

    fn stop(&mut self, agent: &mut A, rng: &mut AgentRng, now: Tick) {
        for entry in self.children.iter_mut() {
            if entry.item.status() == Status::Running {
                entry.item.do_stop(agent, rng, now);
            }
        }
        for &key in &self.exit_erased {
            agent.memory_mut().remove_id(key);
        }
    }
}

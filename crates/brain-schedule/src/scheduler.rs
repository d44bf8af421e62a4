//! `Scheduler` — priority-sorted behavior list with activity gating.

use brain_core::{ActivityId, AgentRng, Tick};
use brain_behavior::{Behavior, Status};
use brain_memory::MemoryHost;
use rustc_hash::FxHashSet;

// ── ScheduledTask ─────────────────────────────────────────────────────────────

/// One top-level behavior with its scheduling metadata.
pub struct ScheduledTask<A: MemoryHost> {
    pub priority: u8,
    pub activity: ActivityId,
    pub behavior: Box<dyn Behavior<A>>,
}

// ── Scheduler ─────────────────────────────────────────────────────────────────

/// Per-agent top-level behavior scheduler.
///
/// Tasks are kept sorted ascending by priority; insertion order breaks ties,
/// so registration order is the tie-break between equal priorities.  Only
/// tasks whose activity is in the active set are offered starts; running
/// tasks keep ticking until they stop on their own or their activity is
/// deactivated.
pub struct Scheduler<A: MemoryHost> {
    tasks: Vec<ScheduledTask<A>>,
    active: FxHashSet<ActivityId>,
    default_activity: ActivityId,
}

impl<A: MemoryHost> Scheduler<A> {
    /// A scheduler whose `default_activity` is always active.
    pub fn new(default_activity: ActivityId) -> Self {
        let mut active = FxHashSet::default();
        active.insert(default_activity);
        Self {
            tasks: Vec::new(),
            active,
            default_activity,
        }
    }

    /// Register `behavior` under the default activity.
    pub fn add(&mut self, priority: u8, behavior: Box<dyn Behavior<A>>) {
        self.add_under(priority, self.default_activity, behavior);
    }

    /// Register `behavior` under an explicit activity category.
    pub fn add_under(
        &mut self,
        priority: u8,
        activity: ActivityId,
        behavior: Box<dyn Behavior<A>>,
    ) {
        let task = ScheduledTask { priority, activity, behavior };
        // Insert after any existing task of the same priority so ties keep
        // registration order (a stable insertion sort, one element at a time).
        let at = self.tasks.partition_point(|t| t.priority <= priority);
        self.tasks.insert(at, task);
    }

    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    pub fn running_count(&self) -> usize {
        self.tasks
            .iter()
            .filter(|t| t.behavior.status() == Status::Running)
            .count()
    }

    pub fn is_active(&self, activity: ActivityId) -> bool {
        self.active.contains(&activity)
    }

    // ── Per-tick drive loop ───────────────────────────────────────────────

    /// One scheduling tick for this agent.
    ///
    /// Phase 1: offer a start to every stopped task of an active activity,
    /// ascending priority.  Phase 2: `tick_or_stop` every running task —
    /// including those started in phase 1, so a task's first tick happens on
    /// its start tick, matching the single-behavior lifecycle.
    pub fn tick(&mut self, agent: &mut A, rng: &mut AgentRng, now: Tick) {
        for task in &mut self.tasks {
            if task.behavior.status() == Status::Stopped && self.active.contains(&task.activity) {
                let _ = task.behavior.try_start(agent, rng, now);
            }
        }
        for task in &mut self.tasks {
            if task.behavior.status() == Status::Running {
                task.behavior.tick_or_stop(agent, rng, now);
            }
        }
    }

    /// Replace the active-activity set.  The default activity stays active
    /// regardless.  Running tasks whose activity fell out of the set are
    /// force-stopped so their cleanup runs now, not at some later tick.
    pub fn set_active(
        &mut self,
        activities: impl IntoIterator<Item = ActivityId>,
        agent: &mut A,
        rng: &mut AgentRng,
        now: Tick,
    ) {
        self.active = activities.into_iter().collect();
        self.active.insert(self.default_activity);
        for task in &mut self.tasks {
            if task.behavior.status() == Status::Running && !self.active.contains(&task.activity) {
                task.behavior.do_stop(agent, rng, now);
            }
        }
    }

    /// Force-stop every running task (agent despawn, schedule teardown).
    pub fn stop_all(&mut self, agent: &mut A, rng: &mut AgentRng, now: Tick) {
        for task in &mut self.tasks {
            if task.behavior.status() == Status::Running {
                task.behavior.do_stop(agent, rng, now);
            }
        }
    }
}

//! Simulation time model.
//!
//! Time is a monotonically increasing `Tick` counter supplied by the caller
//! on every lifecycle call.  Using an integer tick as the canonical unit
//! means all duration arithmetic is exact and comparisons are O(1).  Nothing
//! in this workspace maps ticks to wall-clock time; that is the embedding
//! application's concern.

use std::fmt;

use crate::rng::AgentRng;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
///
/// Stored as `u64` to avoid overflow: at one tick per millisecond a u64
/// lasts ~585 million years.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// Ticks elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0 - earlier.0
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── TickRange ─────────────────────────────────────────────────────────────────

/// An inclusive `[min, max]` range of tick counts, sampled uniformly.
///
/// Used for behavior run-durations, decorator restart intervals, and memory
/// TTLs.  `min == max` yields a fixed value on every sample.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct TickRange {
    pub min: u64,
    pub max: u64,
}

impl TickRange {
    /// Construct a range.
    ///
    /// # Panics
    /// Panics in debug mode if `min > max`.
    #[inline]
    pub fn new(min: u64, max: u64) -> Self {
        debug_assert!(min <= max, "TickRange requires min <= max ({min} > {max})");
        Self { min, max }
    }

    /// A degenerate range that always samples `d`.
    #[inline]
    pub fn fixed(d: u64) -> Self {
        Self { min: d, max: d }
    }

    /// Draw a uniform value in `[min, max]` (both ends inclusive).
    #[inline]
    pub fn sample(&self, rng: &mut AgentRng) -> u64 {
        if self.min == self.max {
            self.min
        } else {
            rng.gen_range(self.min..=self.max)
        }
    }
}

impl fmt::Display for TickRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

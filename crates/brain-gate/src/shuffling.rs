//! `ShufflingList` — weighted random permutation with stable iteration.

use brain_core::AgentRng;

// ── WeightedEntry ─────────────────────────────────────────────────────────────

/// One list element with its selection weight.
///
/// Weight 0 is legal: the entry never wins a weighted draw but remains in
/// the list and is still reachable by plain iteration (a `RunOne` scan falls
/// through to it when every weighted sibling is ineligible).
pub struct WeightedEntry<T> {
    pub item: T,
    pub weight: u32,
    /// Score from the most recent shuffle; meaningless before the first one.
    score: f64,
}

impl<T> WeightedEntry<T> {
    fn new(item: T, weight: u32) -> Self {
        Self { item, weight, score: 0.0 }
    }

    /// Draw this entry's sort key for one shuffle.
    ///
    /// Efraimidis–Spirakis weighted random ordering: key = u^(1/w) for
    /// uniform u in (0, 1), sorted descending.  Selection frequency at each
    /// position is proportional to weight.  Weight 0 maps to a negative
    /// sentinel so it sorts after every weighted entry.
    fn reroll(&mut self, rng: &mut AgentRng) {
        self.score = if self.weight == 0 {
            -1.0
        } else {
            // Open interval: u = 0 would collapse every weight to key 0.
            let u: f64 = rng.gen_range(f64::MIN_POSITIVE..1.0);
            u.powf(1.0 / f64::from(self.weight))
        };
    }
}

// ── ShufflingList ─────────────────────────────────────────────────────────────

/// An ordered sequence of weighted entries.
///
/// Without shuffling, iteration follows insertion order (the `Ordered`
/// policy).  Each `shuffle` call draws a fresh weighted random permutation;
/// iteration order then stays fixed until the next shuffle.
#[derive(Default)]
pub struct ShufflingList<T> {
    entries: Vec<WeightedEntry<T>>,
}

impl<T> ShufflingList<T> {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Append `item` with `weight`, keeping current order.
    pub fn add(&mut self, item: T, weight: u32) {
        self.entries.push(WeightedEntry::new(item, weight));
    }

    /// Reorder so higher-weight entries tend to sort earlier.  A fresh
    /// random draw every call; two calls need not agree.
    pub fn shuffle(&mut self, rng: &mut AgentRng) {
        for entry in &mut self.entries {
            entry.reroll(rng);
        }
        self.entries
            .sort_unstable_by(|a, b| b.score.total_cmp(&a.score));
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WeightedEntry<T>> {
        self.entries.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, WeightedEntry<T>> {
        self.entries.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a, T> IntoIterator for &'a ShufflingList<T> {
    type Item = &'a WeightedEntry<T>;
    type IntoIter = std::slice::Iter<'a, WeightedEntry<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut ShufflingList<T> {
    type Item = &'a mut WeightedEntry<T>;
    type IntoIter = std::slice::IterMut<'a, WeightedEntry<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter_mut()
    }
}

use rustc_hash::FxHashMap;

use super::heuristic::Heuristic;
use crate::game::{GameState, History};

/// Hit/miss counters since the cache was created or last cleared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

/// Memoized leaf evaluations keyed by full move history.
///
/// One cache belongs to one game: it is passed by `&mut` into every search of
/// that game and cleared when the game restarts. Entries are never evicted
/// individually; with a `limit`, the whole map is dropped before an insert
/// would exceed it.
#[derive(Debug, Clone, Default)]
pub struct EvalCache {
    entries: FxHashMap<History, i64>,
    limit: Option<usize>,
    stats: CacheStats,
}

impl EvalCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(limit: Option<usize>) -> Self {
        EvalCache {
            limit,
            ..Self::default()
        }
    }

    pub fn get(&self, state: &GameState) -> Option<i64> {
        self.entries.get(state.history()).copied()
    }

    /// Return the cached value for `state`, computing and storing it on a miss.
    pub fn get_or_evaluate<H>(&mut self, state: &GameState, heuristic: &H) -> i64
    where
        H: Heuristic + ?Sized,
    {
        if let Some(&value) = self.entries.get(state.history()) {
            self.stats.hits += 1;
            return value;
        }

        self.stats.misses += 1;
        let value = heuristic.evaluate(&state.occupancy());
        if self.limit.is_some_and(|limit| self.entries.len() >= limit) {
            self.entries.clear();
        }
        self.entries.insert(History::from_slice(state.history()), value);
        value
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    /// Drop every entry and reset the counters.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.stats = CacheStats::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::heuristic::AlignmentHeuristic;
    use crate::game::Occupancy;
    use std::cell::Cell;

    /// Wraps the default heuristic and counts how often it actually runs.
    #[derive(Default)]
    struct CountingHeuristic {
        calls: Cell<usize>,
    }

    impl Heuristic for CountingHeuristic {
        fn evaluate(&self, occupancy: &Occupancy) -> i64 {
            self.calls.set(self.calls.get() + 1);
            AlignmentHeuristic.evaluate(occupancy)
        }
    }

    #[test]
    fn second_lookup_is_served_from_cache() {
        let heuristic = CountingHeuristic::default();
        let mut cache = EvalCache::new();
        let state: GameState = "3342".parse().unwrap();

        let first = cache.get_or_evaluate(&state, &heuristic);
        let second = cache.get_or_evaluate(&state, &heuristic);

        assert_eq!(first, second);
        assert_eq!(heuristic.calls.get(), 1);
        assert_eq!(cache.stats(), CacheStats { hits: 1, misses: 1 });
        assert_eq!(cache.get(&state), Some(first));
    }

    #[test]
    fn histories_with_same_discs_are_distinct_keys() {
        let heuristic = CountingHeuristic::default();
        let mut cache = EvalCache::new();
        let a: GameState = "0123".parse().unwrap();
        let b: GameState = "2103".parse().unwrap();
        assert_eq!(a.occupancy(), b.occupancy());

        cache.get_or_evaluate(&a, &heuristic);
        cache.get_or_evaluate(&b, &heuristic);

        assert_eq!(heuristic.calls.get(), 2);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn clear_empties_entries_and_stats() {
        let mut cache = EvalCache::new();
        cache.get_or_evaluate(&GameState::initial(), &AlignmentHeuristic);
        assert!(!cache.is_empty());

        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.stats(), CacheStats::default());
        assert_eq!(cache.get(&GameState::initial()), None);
    }

    #[test]
    fn limit_drops_everything_before_overflow() {
        let mut cache = EvalCache::with_limit(Some(2));
        for notation in ["0", "1", "2"] {
            let state: GameState = notation.parse().unwrap();
            cache.get_or_evaluate(&state, &AlignmentHeuristic);
        }

        let last: GameState = "2".parse().unwrap();
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(&last), Some(AlignmentHeuristic.evaluate_state(&last)));
        assert_eq!(cache.get(&"0".parse().unwrap()), None);
    }
}

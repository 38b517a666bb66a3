use super::agent::Agent;
use super::cache::EvalCache;
use super::heuristic::{AlignmentHeuristic, Heuristic};
use crate::game::GameState;

pub const DEFAULT_DEPTH: u32 = 5;

/// Candidate reported by a max/min node before any child improves on it.
const DEFAULT_MOVE: usize = 3;

/// Outcome of one minimax node: the chosen column (absent at terminal nodes)
/// and the node's value from Red's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Option<usize>,
    pub value: i64,
}

/// Counters collected over a single search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub leaves: u64,
    pub cutoffs: u64,
}

/// Everything a caller may want to know about one engine decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchReport {
    pub result: SearchResult,
    /// The move was found by the one-ply win check, without a tree search.
    pub immediate_win: bool,
    pub stats: SearchStats,
}

/// Fixed-depth minimax with alpha-beta pruning over immutable states.
///
/// Red maximizes, Yellow minimizes. Children are explored in ascending column
/// order with alpha and beta threaded through siblings, and a node only moves
/// off its current candidate on strict improvement, so ties resolve to the
/// leftmost column explored. Leaf values go through the caller's
/// [`EvalCache`].
pub struct MinimaxSearch {
    depth: u32,
    heuristic: Box<dyn Heuristic>,
}

impl MinimaxSearch {
    pub fn new(depth: u32) -> Self {
        MinimaxSearch {
            depth,
            heuristic: Box::new(AlignmentHeuristic),
        }
    }

    pub fn with_heuristic(depth: u32, heuristic: Box<dyn Heuristic>) -> Self {
        MinimaxSearch { depth, heuristic }
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn heuristic(&self) -> &dyn Heuristic {
        self.heuristic.as_ref()
    }

    /// Column the side to move should play, or `None` once the game is
    /// decided or the board is full.
    pub fn best_move(&self, state: &GameState, cache: &mut EvalCache) -> Option<usize> {
        self.analyze(state, cache).result.best_move
    }

    /// Pick a move and report how it was found.
    pub fn analyze(&self, state: &GameState, cache: &mut EvalCache) -> SearchReport {
        let mut stats = SearchStats::default();

        // A one-move win sits right at the depth horizon; take it directly.
        if !state.has_win() {
            for col in state.legal_moves() {
                let child = state.apply_move(col).expect("legal move applies");
                if child.has_win() {
                    return SearchReport {
                        result: SearchResult {
                            best_move: Some(col),
                            value: cache.get_or_evaluate(&child, self.heuristic.as_ref()),
                        },
                        immediate_win: true,
                        stats,
                    };
                }
            }
        }

        let maximizing = state.ply_count() % 2 == 0;
        let result = self.node(
            state,
            self.depth,
            i64::MIN,
            i64::MAX,
            maximizing,
            cache,
            &mut stats,
        );
        SearchReport {
            result,
            immediate_win: false,
            stats,
        }
    }

    /// Evaluate `state` to `depth` plies. `i64::MIN` and `i64::MAX` stand in
    /// for the open alpha/beta bounds.
    pub fn minimax(
        &self,
        state: &GameState,
        depth: u32,
        alpha: i64,
        beta: i64,
        maximizing: bool,
        cache: &mut EvalCache,
    ) -> SearchResult {
        let mut stats = SearchStats::default();
        self.node(state, depth, alpha, beta, maximizing, cache, &mut stats)
    }

    #[allow(clippy::too_many_arguments)]
    fn node(
        &self,
        state: &GameState,
        depth: u32,
        mut alpha: i64,
        mut beta: i64,
        maximizing: bool,
        cache: &mut EvalCache,
        stats: &mut SearchStats,
    ) -> SearchResult {
        stats.nodes += 1;

        let legal = state.legal_moves();
        if depth == 0 || legal.is_empty() || state.has_win() {
            stats.leaves += 1;
            return SearchResult {
                best_move: None,
                value: cache.get_or_evaluate(state, self.heuristic.as_ref()),
            };
        }

        let mut best_move = DEFAULT_MOVE;
        let mut best_value = if maximizing { i64::MIN } else { i64::MAX };

        for col in legal {
            let child = state.apply_move(col).expect("legal move applies");
            let value = self
                .node(&child, depth - 1, alpha, beta, !maximizing, cache, stats)
                .value;

            if maximizing {
                if value > best_value {
                    best_value = value;
                    best_move = col;
                }
                alpha = alpha.max(value);
            } else {
                if value < best_value {
                    best_value = value;
                    best_move = col;
                }
                beta = beta.min(value);
            }

            if beta <= alpha {
                stats.cutoffs += 1;
                break;
            }
        }

        SearchResult {
            best_move: Some(best_move),
            value: best_value,
        }
    }
}

impl Default for MinimaxSearch {
    fn default() -> Self {
        Self::new(DEFAULT_DEPTH)
    }
}

/// Minimax engine bundled with the evaluation cache of the game it plays.
pub struct MinimaxAgent {
    search: MinimaxSearch,
    cache: EvalCache,
    last_report: Option<SearchReport>,
}

impl MinimaxAgent {
    pub fn new(depth: u32) -> Self {
        Self::with_search(MinimaxSearch::new(depth), EvalCache::new())
    }

    pub fn with_search(search: MinimaxSearch, cache: EvalCache) -> Self {
        MinimaxAgent {
            search,
            cache,
            last_report: None,
        }
    }

    pub fn search(&self) -> &MinimaxSearch {
        &self.search
    }

    pub fn cache(&self) -> &EvalCache {
        &self.cache
    }

    /// Report of the most recent move selection.
    pub fn last_report(&self) -> Option<&SearchReport> {
        self.last_report.as_ref()
    }

    /// Heuristic value of `state`, memoized in this agent's cache.
    pub fn evaluate(&mut self, state: &GameState) -> i64 {
        self.cache.get_or_evaluate(state, self.search.heuristic())
    }
}

impl Agent for MinimaxAgent {
    fn select_move(&mut self, state: &GameState) -> Option<usize> {
        let report = self.search.analyze(state, &mut self.cache);
        self.last_report = Some(report);
        report.result.best_move
    }

    fn name(&self) -> &str {
        "Minimax"
    }

    fn reset(&mut self) {
        self.cache.clear();
        self.last_report = None;
    }
}

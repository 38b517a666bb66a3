mod agent;
pub mod cache;
pub mod heuristic;
pub mod minimax;
mod random;

pub use agent::Agent;
pub use cache::{CacheStats, EvalCache};
pub use heuristic::{AlignmentHeuristic, Heuristic};
pub use minimax::{
    MinimaxAgent, MinimaxSearch, SearchReport, SearchResult, SearchStats, DEFAULT_DEPTH,
};
pub use random::RandomAgent;

//! Core Connect Four game logic: history-backed immutable game state, derived
//! occupancy matrices, and kernel-based win detection.

mod board;
pub mod kernel;
mod player;
mod state;
pub mod win;

use smallvec::SmallVec;

pub use board::{Cell, Grid, Occupancy, COLS, MAX_PLIES, ROWS};
pub use kernel::Orientation;
pub use player::Player;
pub use state::{GameState, History};
pub use win::{Position, WinningLine};

/// Legal columns in ascending order; never more than seven.
pub type LegalActions = SmallVec<[usize; COLS]>;

use crate::game::kernel::{Orientation, WIN_LENGTH};
use crate::game::{GameState, Occupancy, Player};

/// Trait for scoring a position. Positive values favor Red, negative values
/// favor Yellow.
pub trait Heuristic: Send {
    fn evaluate(&self, occupancy: &Occupancy) -> i64;
}

/// Reward per window indexed by aligned-disc count, horizontal and vertical.
pub const LINE_REWARDS: [i64; 5] = [0, 1, 10, 200, 100_000];

/// Reward per window indexed by aligned-disc count, both diagonals.
pub const DIAGONAL_REWARDS: [i64; 5] = [0, 1, 15, 300, 100_000];

/// Default heuristic: every kernel window contributes a reward for the number
/// of a player's discs it contains. The 4-count reward dwarfs everything else
/// so a finished line always dominates.
///
/// Opponent discs inside a window do not cancel it; each side is scored on
/// its own matrix and the totals are subtracted.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlignmentHeuristic;

impl AlignmentHeuristic {
    fn rewards(orientation: Orientation) -> &'static [i64; 5] {
        if orientation.is_diagonal() {
            &DIAGONAL_REWARDS
        } else {
            &LINE_REWARDS
        }
    }

    /// Sum of window rewards across all kernels for one player.
    pub fn player_score(occupancy: &Occupancy, player: Player) -> i64 {
        let grid = occupancy.grid(player);
        Orientation::ALL
            .iter()
            .map(|&orientation| {
                let rewards = Self::rewards(orientation);
                orientation
                    .kernel()
                    .windows(grid)
                    .map(|window| {
                        debug_assert!(window.sum <= WIN_LENGTH);
                        rewards[window.sum as usize]
                    })
                    .sum::<i64>()
            })
            .sum()
    }

    /// Convenience wrapper scoring a state directly, without any cache.
    pub fn evaluate_state(&self, state: &GameState) -> i64 {
        self.evaluate(&state.occupancy())
    }
}

impl Heuristic for AlignmentHeuristic {
    fn evaluate(&self, occupancy: &Occupancy) -> i64 {
        Self::player_score(occupancy, Player::Red) - Self::player_score(occupancy, Player::Yellow)
    }
}

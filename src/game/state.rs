use std::fmt;
use std::str::FromStr;

use smallvec::SmallVec;

use super::board::{COLS, MAX_PLIES, ROWS};
use super::win::{self, WinningLine};
use super::{LegalActions, Occupancy, Player};
use crate::error::MoveError;

/// Move history stored inline; a full game never exceeds 42 plies.
pub type History = SmallVec<[u8; MAX_PLIES]>;

/// An immutable Connect Four position, identified by its move history.
///
/// Applying a move returns a new state and leaves the original untouched, so
/// search branches can share a parent freely. Per-player occupancy is derived
/// on demand by replaying the history.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct GameState {
    history: History,
}

impl GameState {
    /// Create initial game state
    pub fn initial() -> Self {
        GameState {
            history: History::new(),
        }
    }

    /// Build a state by applying `moves` in order from the empty board.
    pub fn from_history(moves: &[usize]) -> Result<Self, MoveError> {
        moves
            .iter()
            .try_fold(GameState::initial(), |state, &col| state.apply_move(col))
    }

    /// The column played at each ply, oldest first.
    pub fn history(&self) -> &[u8] {
        &self.history
    }

    pub fn ply_count(&self) -> usize {
        self.history.len()
    }

    /// Player whose turn it is
    pub fn current_player(&self) -> Player {
        Player::for_ply(self.history.len())
    }

    pub fn last_move(&self) -> Option<usize> {
        self.history.last().map(|&col| col as usize)
    }

    /// Number of discs already played into `col`.
    pub fn column_height(&self, col: usize) -> usize {
        self.history.iter().filter(|&&c| c as usize == col).count()
    }

    /// Columns that can still take a disc, in ascending order.
    pub fn legal_moves(&self) -> LegalActions {
        let mut heights = [0usize; COLS];
        for &col in &self.history {
            heights[col as usize] += 1;
        }
        (0..COLS).filter(|&col| heights[col] < ROWS).collect()
    }

    /// Apply a move and return new state (immutable)
    pub fn apply_move(&self, column: usize) -> Result<GameState, MoveError> {
        if column >= COLS {
            return Err(MoveError::InvalidColumn { column });
        }
        if self.column_height(column) >= ROWS {
            return Err(MoveError::ColumnFull { column });
        }

        let mut history = self.history.clone();
        history.push(column as u8);
        Ok(GameState { history })
    }

    /// Replay the history into per-player occupancy matrices.
    pub fn occupancy(&self) -> Occupancy {
        let mut occupancy = Occupancy::new();
        for (ply, &col) in self.history.iter().enumerate() {
            occupancy
                .place(col as usize, Player::for_ply(ply))
                .expect("history is validated when each move is applied");
        }
        occupancy
    }

    /// True if either player has four aligned discs.
    pub fn has_win(&self) -> bool {
        win::has_win(&self.occupancy())
    }

    pub fn winner(&self) -> Option<Player> {
        win::winner(&self.occupancy())
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        win::winning_line(&self.occupancy())
    }

    /// Check if game is over: somebody has won or the board is full.
    pub fn is_game_over(&self) -> bool {
        self.history.len() >= MAX_PLIES || self.has_win()
    }
}

/// Renders the history as its column digits, e.g. `"3343"`.
impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &col in &self.history {
            write!(f, "{col}")?;
        }
        Ok(())
    }
}

impl FromStr for GameState {
    type Err = MoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .enumerate()
            .try_fold(GameState::initial(), |state, (position, ch)| {
                let column = ch
                    .to_digit(10)
                    .ok_or(MoveError::Parse { position, found: ch })?;
                state.apply_move(column as usize)
            })
    }
}

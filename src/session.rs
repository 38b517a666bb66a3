//! One game between a caller and the engine: the current position plus the
//! evaluation cache that lives exactly as long as that game.

use crate::ai::{Agent, EvalCache, MinimaxAgent, MinimaxSearch, SearchReport};
use crate::config::SearchConfig;
use crate::error::MoveError;
use crate::game::{GameState, LegalActions, Player, WinningLine};

pub struct GameSession {
    state: GameState,
    engine: MinimaxAgent,
}

impl GameSession {
    pub fn new(config: &SearchConfig) -> Self {
        GameSession {
            state: GameState::initial(),
            engine: MinimaxAgent::with_search(
                MinimaxSearch::new(config.depth),
                EvalCache::with_limit(config.cache_limit),
            ),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Columns that are not yet full, ascending.
    pub fn legal_moves(&self) -> LegalActions {
        self.state.legal_moves()
    }

    /// Drop a disc for the side to move. Rejected once the game is over.
    pub fn apply_move(&mut self, column: usize) -> Result<&GameState, MoveError> {
        if self.state.is_game_over() {
            return Err(MoveError::GameOver);
        }
        self.state = self.state.apply_move(column)?;
        Ok(&self.state)
    }

    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    pub fn winner(&self) -> Option<Player> {
        self.state.winner()
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        self.state.winning_line()
    }

    /// The engine's choice for the side to move; `None` when the game is over.
    pub fn suggest_move(&mut self) -> Option<usize> {
        if self.state.is_game_over() {
            return None;
        }
        self.engine.select_move(&self.state)
    }

    /// Let the engine move for the side to move. Returns the column played.
    pub fn play_engine_move(&mut self) -> Result<Option<usize>, MoveError> {
        match self.suggest_move() {
            Some(column) => {
                self.apply_move(column)?;
                Ok(Some(column))
            }
            None => Ok(None),
        }
    }

    /// Heuristic value of the current position, positive when Red is ahead.
    pub fn evaluate(&mut self) -> i64 {
        self.engine.evaluate(&self.state)
    }

    pub fn last_report(&self) -> Option<&SearchReport> {
        self.engine.last_report()
    }

    pub fn cache(&self) -> &EvalCache {
        self.engine.cache()
    }

    /// Start a new game: empty board, empty cache.
    pub fn restart(&mut self) {
        self.state = GameState::initial();
        self.engine.reset();
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(&SearchConfig::default())
    }
}

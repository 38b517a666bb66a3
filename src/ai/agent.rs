use crate::game::GameState;

/// Universal interface for anything that picks columns.
pub trait Agent {
    /// Select a column for the side to move, or `None` when the game offers
    /// no move (decided or full board).
    fn select_move(&mut self, state: &GameState) -> Option<usize>;

    /// Return the agent's display name.
    fn name(&self) -> &str;

    /// Forget everything learned during the current game.
    fn reset(&mut self) {}
}

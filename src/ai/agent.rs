use crate::game::GameState;

/// Common interface for move-selecting opponents.
pub trait Agent {
    /// Select an action (column) given the current game state. Callers must
    /// only ask for a move while the game is in progress.
    fn select_action(&mut self, state: &GameState) -> usize;

    /// Return the agent's display name.
    fn name(&self) -> &str;

    /// Clone the agent into a boxed trait object.
    fn clone_agent(&self) -> Box<dyn Agent>;
}

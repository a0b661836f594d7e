//! Core Connect Four game logic: board representation, win detection, player
//! types, and the game state machine the UI and agents play through.

mod board;
mod player;
mod state;

pub use board::{Board, Cell, GameOutcome, COLS, LEVELS};
pub use player::Player;
pub use state::{GameState, MoveError};

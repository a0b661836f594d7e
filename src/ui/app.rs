use crate::ai::MonteCarloAgent;
use crate::config::AppConfig;
use crate::game::{GameOutcome, GameState, MoveError, Player};
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};
use std::io;

pub struct App {
    game_state: GameState,
    opponent: MonteCarloAgent,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        let opponent = match config.ai.seed {
            Some(seed) => MonteCarloAgent::with_seed(config.ai.rollouts_per_column, seed),
            None => MonteCarloAgent::new(config.ai.rollouts_per_column),
        };

        App {
            game_state: GameState::initial(),
            opponent,
            selected_column: 3, // Start in middle
            should_quit: false,
            message: None,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column < 6 {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.play_turn();
            }
            KeyCode::Char('r') => {
                // Reset game
                self.game_state = GameState::initial();
                self.selected_column = 3;
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Drop the human piece in the selected column, then let the computer
    /// answer.
    fn play_turn(&mut self) {
        if self.game_state.is_terminal() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }

        match self.game_state.apply_move_mut(self.selected_column) {
            Ok(()) => {
                if self.report_outcome() {
                    return;
                }
                self.computer_reply();
            }
            Err(MoveError::ColumnFull) => {
                self.message = Some("Column is full!".to_string());
            }
            Err(MoveError::InvalidColumn) => {
                self.message = Some("Invalid column!".to_string());
            }
            Err(MoveError::GameOver) => {
                self.message = Some("Game is over! Press 'r' to restart.".to_string());
            }
        }
    }

    /// Ask the Monte Carlo opponent for a column and apply it.
    fn computer_reply(&mut self) {
        let board = *self.game_state.board();
        let Some(col) = self
            .opponent
            .suggest_move(&board, self.game_state.current_player())
        else {
            // Board full with no winner; apply_move_mut already flagged the draw.
            return;
        };

        // suggest_move only returns playable columns.
        let _ = self.game_state.apply_move_mut(col);
        self.report_outcome();
    }

    /// Set the status message if the game just ended. Returns true if it did.
    fn report_outcome(&mut self) -> bool {
        match self.game_state.outcome() {
            Some(GameOutcome::Winner(Player::Red)) => {
                self.message = Some("You win!".to_string());
                true
            }
            Some(GameOutcome::Winner(Player::Yellow)) => {
                self.message = Some("The computer wins!".to_string());
                true
            }
            Some(GameOutcome::Draw) => {
                self.message = Some("It's a draw!".to_string());
                true
            }
            None => false,
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, &self.game_state, self.selected_column, &self.message);
    }
}

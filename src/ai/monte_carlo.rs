use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game::{Board, GameOutcome, GameState, Player, COLS};

use super::agent::Agent;

/// Rollouts simulated per candidate column. A tuning constant, not a rule of
/// the game.
pub const DEFAULT_ROLLOUTS: usize = 10_000;

/// An agent that scores each candidate column by random self-play.
///
/// For every non-full column, it drops a hypothetical piece and then plays the
/// rest of the game out with uniformly random moves on both sides, many times
/// over. Columns are ranked by `won / (lost + 1)`; draws count for neither
/// side, and the `+1` keeps small samples with zero losses from dominating.
///
/// Two-tier policy: if the candidate drop itself wins the game, that column is
/// returned immediately without simulating anything further. Columns are
/// scanned left to right and only a strictly better score replaces the
/// incumbent, so ties resolve to the lowest column.
pub struct MonteCarloAgent {
    rng: StdRng,
    rollouts_per_column: usize,
}

impl MonteCarloAgent {
    pub fn new(rollouts_per_column: usize) -> Self {
        MonteCarloAgent {
            rng: StdRng::from_os_rng(),
            rollouts_per_column,
        }
    }

    /// Seeded constructor for reproducible play.
    pub fn with_seed(rollouts_per_column: usize, seed: u64) -> Self {
        MonteCarloAgent {
            rng: StdRng::seed_from_u64(seed),
            rollouts_per_column,
        }
    }

    /// Pick the best column for `player` on `board`, or `None` when every
    /// column is full. A full board is a normal terminal condition, not an
    /// error; callers check [`Board::winner`] before asking for a move.
    pub fn suggest_move(&mut self, board: &Board, player: Player) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;

        for col in 0..COLS {
            if board.is_column_full(col) {
                continue;
            }

            let mut after = *board;
            after.drop_piece(col, player.to_cell());
            if after.winner() == Some(GameOutcome::Winner(player)) {
                // Immediate win: no simulation can beat it.
                return Some(col);
            }

            let mut won = 0u32;
            let mut lost = 0u32;
            for _ in 0..self.rollouts_per_column {
                match self.rollout(after, player.other()) {
                    GameOutcome::Winner(w) if w == player => won += 1,
                    GameOutcome::Winner(_) => lost += 1,
                    GameOutcome::Draw => {}
                }
            }

            let score = f64::from(won) / f64::from(lost + 1);
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((col, score));
            }
        }

        best.map(|(col, _)| col)
    }

    /// Play uniformly random moves from `board` until the game ends, with
    /// `mover` to act first. A draw into a full column is simply redrawn
    /// without advancing the turn.
    fn rollout(&mut self, mut board: Board, mut mover: Player) -> GameOutcome {
        loop {
            if let Some(outcome) = board.winner() {
                return outcome;
            }
            loop {
                let col = self.rng.random_range(0..COLS);
                if board.drop_piece(col, mover.to_cell()) {
                    break;
                }
            }
            mover = mover.other();
        }
    }
}

impl Default for MonteCarloAgent {
    fn default() -> Self {
        Self::new(DEFAULT_ROLLOUTS)
    }
}

impl Agent for MonteCarloAgent {
    fn select_action(&mut self, state: &GameState) -> usize {
        self.suggest_move(state.board(), state.current_player())
            .expect("no legal actions available")
    }

    fn name(&self) -> &str {
        "MonteCarlo"
    }

    fn clone_agent(&self) -> Box<dyn Agent> {
        Box::new(MonteCarloAgent::new(self.rollouts_per_column))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::RandomAgent;
    use crate::game::{Cell, LEVELS};

    #[test]
    fn takes_immediate_vertical_win() {
        // Yellow already has three stacked in column 3.
        let mut board = Board::new();
        for _ in 0..3 {
            board.drop_piece(3, Cell::Yellow);
        }

        let mut agent = MonteCarloAgent::with_seed(50, 7);
        assert_eq!(agent.suggest_move(&board, Player::Yellow), Some(3));
    }

    #[test]
    fn never_passes_up_an_immediate_win() {
        let mut board = Board::new();
        for col in 0..3 {
            board.drop_piece(col, Cell::Red);
        }

        // The short-circuit makes this independent of the random stream.
        for seed in 0..20 {
            let mut agent = MonteCarloAgent::with_seed(50, seed);
            assert_eq!(agent.suggest_move(&board, Player::Red), Some(3));
        }
    }

    #[test]
    fn full_board_has_no_move() {
        let mut board = Board::new();
        for col in 0..COLS {
            for _ in 0..LEVELS {
                let cell = if col % 2 == 0 { Cell::Red } else { Cell::Yellow };
                board.drop_piece(col, cell);
            }
        }

        let mut agent = MonteCarloAgent::with_seed(50, 1);
        assert_eq!(agent.suggest_move(&board, Player::Yellow), None);
        assert_eq!(agent.suggest_move(&board, Player::Red), None);
    }

    #[test]
    fn skips_full_columns() {
        let mut board = Board::new();
        for level in 0..LEVELS {
            let cell = if level % 2 == 0 { Cell::Red } else { Cell::Yellow };
            board.drop_piece(0, cell);
        }

        let mut agent = MonteCarloAgent::with_seed(20, 3);
        let col = agent.suggest_move(&board, Player::Yellow).unwrap();
        assert_ne!(col, 0);
        assert!(col < COLS);
    }

    #[test]
    fn selects_legal_action() {
        let mut agent = MonteCarloAgent::with_seed(20, 11);
        let state = GameState::initial();
        let action = agent.select_action(&state);
        assert!(state.legal_actions().contains(&action));
    }

    #[test]
    fn seeded_agents_agree() {
        let mut state = GameState::initial();
        state = state.apply_move(2).unwrap();
        state = state.apply_move(4).unwrap();

        let mut a = MonteCarloAgent::with_seed(100, 99);
        let mut b = MonteCarloAgent::with_seed(100, 99);
        assert_eq!(
            a.suggest_move(state.board(), state.current_player()),
            b.suggest_move(state.board(), state.current_player())
        );
    }

    #[test]
    fn rollout_terminates_from_nearly_full_board() {
        let mut board = Board::new();
        // Everything full except one slot at the top of column 6.
        for col in 0..COLS {
            let top = if col == 6 { LEVELS - 1 } else { LEVELS };
            for level in 0..top {
                let cell = if (col + level / 2) % 2 == 0 {
                    Cell::Yellow
                } else {
                    Cell::Red
                };
                board.drop_piece(col, cell);
            }
        }

        let mut agent = MonteCarloAgent::with_seed(10, 5);
        assert_eq!(agent.suggest_move(&board, Player::Yellow), Some(6));
    }

    #[test]
    fn beats_random_agent() {
        let games_per_color = 8;
        let mut mc_wins = 0;
        let total = games_per_color * 2;

        for seed in 0..games_per_color {
            // Monte Carlo plays as Red (first).
            let mut mc = MonteCarloAgent::with_seed(100, seed);
            let mut random = RandomAgent::new();
            let mut state = GameState::initial();
            let mut turn = 0;

            while !state.is_terminal() {
                let action = if turn % 2 == 0 {
                    mc.select_action(&state)
                } else {
                    random.select_action(&state)
                };
                state = state.apply_move(action).unwrap();
                turn += 1;
            }

            if state.outcome() == Some(GameOutcome::Winner(Player::Red)) {
                mc_wins += 1;
            }
        }

        for seed in 0..games_per_color {
            // Monte Carlo plays as Yellow (second).
            let mut random = RandomAgent::new();
            let mut mc = MonteCarloAgent::with_seed(100, 1000 + seed);
            let mut state = GameState::initial();
            let mut turn = 0;

            while !state.is_terminal() {
                let action = if turn % 2 == 0 {
                    random.select_action(&state)
                } else {
                    mc.select_action(&state)
                };
                state = state.apply_move(action).unwrap();
                turn += 1;
            }

            if state.outcome() == Some(GameOutcome::Winner(Player::Yellow)) {
                mc_wins += 1;
            }
        }

        let win_rate = mc_wins as f64 / total as f64;
        assert!(
            win_rate > 0.75,
            "Monte Carlo should beat random play most of the time, got {:.0}% ({mc_wins}/{total})",
            win_rate * 100.0
        );
    }

    #[test]
    fn name_is_monte_carlo() {
        let agent = MonteCarloAgent::new(10);
        assert_eq!(agent.name(), "MonteCarlo");
    }

    #[test]
    fn clone_agent_works() {
        let agent = MonteCarloAgent::new(10);
        let cloned = agent.clone_agent();
        assert_eq!(cloned.name(), "MonteCarlo");
    }
}

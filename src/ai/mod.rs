//! Move selection: the agent interface, the Monte Carlo rollout evaluator,
//! and a uniform-random baseline opponent.

mod agent;
mod monte_carlo;
mod random;

pub use agent::Agent;
pub use monte_carlo::{MonteCarloAgent, DEFAULT_ROLLOUTS};
pub use random::RandomAgent;

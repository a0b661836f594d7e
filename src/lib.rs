//! # Connect Four Rollout
//!
//! Play Connect Four in the terminal against a Monte Carlo opponent. The
//! computer scores each candidate column by simulating thousands of random
//! continuations and picks the column with the best win/loss ratio, taking
//! any immediate win outright.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, win detection, player, state machine
//! - [`ai`] — Agent trait, Monte Carlo evaluator, random baseline
//! - [`ui`] — Terminal UI built with Ratatui
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod ui;

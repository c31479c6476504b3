//! # Connect-N
//!
//! A two-player gravity connection game on a configurable board, with agents
//! that pick moves by minimax or alpha-beta search over immutable states.
//!
//! ## Modules
//!
//! - [`game`]: gravity grid, players and the immutable game state
//! - [`ai`]: Agent trait, random/human/computer agents, search engines, evaluator
//! - [`driver`]: Turn loop between two agents and series tallies
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod ai;
pub mod config;
pub mod driver;
pub mod error;
pub mod game;

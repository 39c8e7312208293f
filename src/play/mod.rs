//! Orchestration: producing moves and driving matches.
//!
//! ## Overview
//!
//! - **MoveProducer**: anything that turns a `MoveRequest` into a `Move`
//! - **SeatProducers**: routes requests to a producer per seat
//! - **GameRunner**: loops request, validate, apply until someone wins
//!
//! ## Usage
//!
//! ```rust,ignore
//! use rust_codenames::play::{GameRunner, RunnerConfig, ScriptedProducer};
//!
//! let mut runner = GameRunner::new(session, producer, RunnerConfig::default());
//! let result = runner.run()?;
//! ```

pub mod producer;
pub mod runner;

pub use producer::{MoveProducer, MoveRequest, ScriptedProducer, SeatProducers};
pub use runner::{GameRunner, MatchResult, RunnerConfig, StepOutcome};

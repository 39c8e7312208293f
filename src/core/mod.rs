//! Core engine types: teams, seats, RNG, configuration.
//!
//! This module contains the building blocks shared by the board, the
//! session and the rules engine.

pub mod team;
pub mod rng;
pub mod config;

pub use team::{Role, Seat, SeatMap, Team, TeamMap};
pub use rng::{GameRng, GameRngState};
pub use config::{BoardLayout, GameConfig};

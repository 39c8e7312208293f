//! Agent identities and seat assignment.
//!
//! ## Key Types
//!
//! - `AgentProfile`: An automated player identity (model id + names)
//! - `AgentPool`: The configurable table identities are drawn from
//! - `SeatConfig`: Human or AI for each of the four seats
//! - `SeatOccupant`: Human marker or a bound agent, fixed per session

pub mod profile;
pub mod pool;
pub mod seat;

pub use profile::{AgentId, AgentProfile};
pub use pool::AgentPool;
pub use seat::{assign_seats, SeatConfig, SeatKind, SeatOccupant, TeamSeats};

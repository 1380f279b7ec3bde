//! Match orchestration: seats, AI invocation, snapshots and records.

pub mod match_controller;

pub use match_controller::{MatchController, PlannedMove, Seat};

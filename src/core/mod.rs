//! Core match types: positions, roles, lanes, state, RNG, configuration.
//!
//! This module holds plain data. Rules live in `rules`, decisions in `ai`.

pub mod position;
pub mod role;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;

pub use position::Position;
pub use role::{Role, RoleMap};
pub use rng::{FirstTie, FixedTie, GameRng, GameRngState, TieBreak};
pub use config::{AiWeights, MatchConfig};
pub use action::{Command, Lane, LaneSet, LANE_COUNT};
pub use state::{MatchSnapshot, MatchState, Phase, PursuerView, SubState};

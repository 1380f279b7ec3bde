//! # shadow-pursuit
//!
//! A two-player, simultaneous-move pursuit-evasion game on a curved grid,
//! with a periodic sensor blackout for the Pursuer and a greedy AI for
//! both roles.
//!
//! ## Design Principles
//!
//! 1. **Pure transitions**: The engine is `step(config, state, command)`.
//!    Illegal commands return the state unchanged; nothing panics or errors.
//!
//! 2. **Blind planning by construction**: The Evader's committed move is
//!    private to the engine. The Pursuer AI and the snapshot read views
//!    that cannot carry it.
//!
//! 3. **Injected collaborators**: The Evader policy table (`PolicyLookup`)
//!    and the tie-break source (`TieBreak`) are passed in, so both the
//!    fallback heuristic and tie outcomes are testable in isolation.
//!
//! ## Modules
//!
//! - `core`: Positions, roles, lanes, state, RNG, configuration
//! - `rules`: Move validity, visibility cycle, turn resolution
//! - `ai`: Policy lookup and heuristic move selection
//! - `controller`: Seats, AI invocation, snapshots
//! - `training`: Match records and AI-vs-AI evaluation
//! - `error`: Setup-time error types

pub mod core;
pub mod rules;
pub mod ai;
pub mod controller;
pub mod training;
pub mod error;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Position, Role, RoleMap,
    GameRng, GameRngState, TieBreak, FirstTie, FixedTie,
    MatchConfig, AiWeights,
    Command, Lane, LaneSet, LANE_COUNT,
    MatchState, MatchSnapshot, Phase, PursuerView, SubState,
};

pub use crate::rules::{
    apply_move, is_legal, legal_lanes,
    visibility_for_turn, contact_alert, pursuer_view, snapshot,
    resolve, step, Rejection, Transition, TurnEvent,
};

pub use crate::ai::{
    choose_move, decide, Decision, DecisionSource,
    NoPolicy, PolicyKey, PolicyLookup, PolicyTable,
};

pub use crate::controller::{MatchController, PlannedMove, Seat};

pub use crate::training::{MatchRecord, TurnRecord, SelfPlayConfig, SelfPlayStats, SelfPlayWorker};

pub use crate::error::{ConfigError, ConfigLoadError, InvalidLane, PolicyError, RecordError};

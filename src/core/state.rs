//! Match state and the views derived from it.
//!
//! ## MatchState
//!
//! The aggregate mutated only by the turn-resolution engine. The Evader's
//! committed move is private: the sub-state (who is to move) is derived from
//! its presence, so "pending iff the Evader has committed" holds by
//! construction.
//!
//! ## PursuerView
//!
//! What the Pursuer side may know. It has no field that could carry the
//! pending Evader move, and exposes the Evader's true position only on
//! visible turns.
//!
//! ## MatchSnapshot
//!
//! Render-oriented read-only summary for the presentation layer.

use serde::{Deserialize, Serialize};

use super::config::MatchConfig;
use super::position::Position;
use super::role::Role;

/// Match phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Moves are being accepted.
    Playing,
    /// Terminal. Only a reset leaves this phase.
    GameOver(Role),
}

/// Which commit the engine expects next while playing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubState {
    AwaitingEvaderMove,
    AwaitingPursuerMove,
}

/// Complete match state.
///
/// Not serializable: it holds the Evader's pending move. Persist a
/// `MatchSnapshot` instead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchState {
    pub(crate) evader_pos: Position,
    pub(crate) pursuer_pos: Position,
    pub(crate) last_observed_evader_pos: Position,
    pub(crate) pending_evader_move: Option<Position>,
    pub(crate) turn_number: u32,
    pub(crate) lock_streak: u32,
    pub(crate) phase: Phase,
}

impl MatchState {
    /// The starting state for a configuration.
    #[must_use]
    pub fn new(config: &MatchConfig) -> Self {
        Self::from_position(config.evader_start, config.pursuer_start, 1, 0)
    }

    /// A mid-match state at the start of a turn, awaiting the Evader.
    ///
    /// The Pursuer's memory is set to the Evader's current position. Used to
    /// set up analysis positions and policy-table probes.
    #[must_use]
    pub fn from_position(evader: Position, pursuer: Position, turn_number: u32, lock_streak: u32) -> Self {
        Self {
            evader_pos: evader,
            pursuer_pos: pursuer,
            last_observed_evader_pos: evader,
            pending_evader_move: None,
            turn_number: turn_number.max(1),
            lock_streak,
            phase: Phase::Playing,
        }
    }

    /// Current Evader position.
    #[must_use]
    pub fn evader_pos(&self) -> Position {
        self.evader_pos
    }

    /// Current Pursuer position.
    #[must_use]
    pub fn pursuer_pos(&self) -> Position {
        self.pursuer_pos
    }

    /// Most recent Evader position the Pursuer actually perceived.
    #[must_use]
    pub fn last_observed_evader_pos(&self) -> Position {
        self.last_observed_evader_pos
    }

    /// True while the Evader has committed and the turn is unresolved.
    #[must_use]
    pub fn has_pending_evader_move(&self) -> bool {
        self.pending_evader_move.is_some()
    }

    /// Current turn, starting at 1.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Consecutive resolved turns ending in lock range.
    #[must_use]
    pub fn lock_streak(&self) -> u32 {
        self.lock_streak
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Winner, once the match is over.
    #[must_use]
    pub fn winner(&self) -> Option<Role> {
        match self.phase {
            Phase::GameOver(role) => Some(role),
            Phase::Playing => None,
        }
    }

    /// True once a win condition has fired.
    #[must_use]
    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver(_))
    }

    /// Expected next commit, or `None` once the match is over.
    #[must_use]
    pub fn sub_state(&self) -> Option<SubState> {
        match (self.phase, self.pending_evader_move) {
            (Phase::GameOver(_), _) => None,
            (Phase::Playing, None) => Some(SubState::AwaitingEvaderMove),
            (Phase::Playing, Some(_)) => Some(SubState::AwaitingPursuerMove),
        }
    }

    /// Role expected to move next, or `None` once the match is over.
    #[must_use]
    pub fn to_move(&self) -> Option<Role> {
        self.sub_state().map(|s| match s {
            SubState::AwaitingEvaderMove => Role::Evader,
            SubState::AwaitingPursuerMove => Role::Pursuer,
        })
    }

    /// Position of a role.
    #[must_use]
    pub fn position(&self, role: Role) -> Position {
        match role {
            Role::Evader => self.evader_pos,
            Role::Pursuer => self.pursuer_pos,
        }
    }

    /// Chebyshev distance between the two roles.
    #[must_use]
    pub fn separation(&self) -> i32 {
        self.evader_pos.chebyshev(self.pursuer_pos)
    }
}

/// The Pursuer's knowledge at decision time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PursuerView {
    /// Pursuer's own position.
    pub pursuer_pos: Position,
    /// Evader's true position, present only on visible turns.
    pub visible_evader_pos: Option<Position>,
    /// Last perceived Evader position.
    pub last_observed_evader_pos: Position,
    /// Degraded-sensor proximity signal. Never true on visible turns.
    pub contact_alert: bool,
    /// Current lock streak.
    pub lock_streak: u32,
    /// Current turn.
    pub turn_number: u32,
}

impl PursuerView {
    /// Where the Pursuer believes the Evader is.
    #[must_use]
    pub fn target(&self) -> Position {
        self.visible_evader_pos.unwrap_or(self.last_observed_evader_pos)
    }

    /// True if the Pursuer has direct vision this turn.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible_evader_pos.is_some()
    }
}

/// Read-only state summary for presentation.
///
/// The pending Evader move appears only as a presence flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    /// Resolved Evader position.
    pub evader_pos: Position,
    /// Resolved Pursuer position.
    pub pursuer_pos: Position,
    /// Pursuer's memory of the Evader.
    pub last_observed_evader_pos: Position,
    /// True once the Evader has committed this turn.
    pub has_pending_evader_move: bool,
    /// Current turn, 1-based.
    pub turn_number: u32,
    /// Consecutive locked turns.
    pub lock_streak: u32,
    /// Playing or over.
    pub phase: Phase,
    /// Winner once over.
    pub winner: Option<Role>,
    /// Whether the Pursuer sees the Evader this turn.
    pub visible: bool,
    /// Hidden-turn proximity signal.
    pub contact_alert: bool,
}

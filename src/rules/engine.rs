//! Turn-resolution engine.
//!
//! The engine is a pure transition function: `step(config, state, command)`
//! returns the next state plus an event describing what happened. The
//! controller holds the current state and feeds commands through it.
//!
//! ## Turn structure
//!
//! - `CommitEvader` stores the Evader's destination and hands the move to
//!   the Pursuer. Nothing the Pursuer can observe changes.
//! - `CommitPursuer` resolves both moves at once, updates the lock streak,
//!   then checks the Pursuer win before the turn limit.
//!
//! Commands that are illegal or out of turn leave the state untouched and
//! report `TurnEvent::Rejected`.

use serde::{Deserialize, Serialize};

use super::observability::visibility_for_turn;
use super::validity::{apply_move, is_legal};
use crate::core::{Command, Lane, MatchConfig, MatchState, Phase, Role, SubState};

/// Why a command was ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rejection {
    /// The match has ended.
    MatchOver,
    /// The other role is expected to move.
    OutOfTurn,
    /// The lane would leave the role's column range.
    IllegalLane,
}

/// Outcome of one command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnEvent {
    /// State unchanged.
    Rejected(Rejection),
    /// Evader move buffered; Pursuer to move.
    EvaderCommitted,
    /// Both moves applied and play continues.
    TurnResolved {
        /// The turn that was just played.
        turn: u32,
        /// Chebyshev distance after the moves.
        separation: i32,
        /// Lock streak after the moves.
        lock_streak: u32,
        /// Whether the Pursuer's memory was refreshed.
        observed: bool,
    },
    /// Both moves applied and a win condition fired.
    MatchOver {
        /// The turn that was just played.
        turn: u32,
        /// Winning role.
        winner: Role,
    },
    /// State returned to the start.
    Reset,
}

/// Next state and what produced it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub state: MatchState,
    pub event: TurnEvent,
}

/// Apply one command to `state`.
#[must_use]
pub fn step(config: &MatchConfig, state: &MatchState, command: Command) -> Transition {
    match command {
        Command::CommitEvader(lane) => commit_evader(config, state, lane),
        Command::CommitPursuer(lane) => commit_pursuer(config, state, lane),
        Command::Reset => Transition {
            state: MatchState::new(config),
            event: TurnEvent::Reset,
        },
    }
}

/// Apply one command and keep only the resulting state.
#[must_use]
pub fn resolve(config: &MatchConfig, state: &MatchState, command: Command) -> MatchState {
    step(config, state, command).state
}

fn reject(state: &MatchState, reason: Rejection) -> Transition {
    Transition {
        state: state.clone(),
        event: TurnEvent::Rejected(reason),
    }
}

fn commit_evader(config: &MatchConfig, state: &MatchState, lane: Lane) -> Transition {
    match state.sub_state() {
        None => return reject(state, Rejection::MatchOver),
        Some(SubState::AwaitingPursuerMove) => return reject(state, Rejection::OutOfTurn),
        Some(SubState::AwaitingEvaderMove) => {}
    }
    if !is_legal(config, Role::Evader, state.evader_pos.x, lane) {
        return reject(state, Rejection::IllegalLane);
    }

    let mut next = state.clone();
    next.pending_evader_move = Some(apply_move(state.evader_pos, lane));
    Transition {
        state: next,
        event: TurnEvent::EvaderCommitted,
    }
}

fn commit_pursuer(config: &MatchConfig, state: &MatchState, lane: Lane) -> Transition {
    let evader_to = match (state.sub_state(), state.pending_evader_move) {
        (None, _) => return reject(state, Rejection::MatchOver),
        (Some(SubState::AwaitingPursuerMove), Some(pending)) => pending,
        _ => return reject(state, Rejection::OutOfTurn),
    };
    if !is_legal(config, Role::Pursuer, state.pursuer_pos.x, lane) {
        return reject(state, Rejection::IllegalLane);
    }

    let turn = state.turn_number;
    let mut next = state.clone();
    next.evader_pos = evader_to;
    next.pursuer_pos = apply_move(state.pursuer_pos, lane);
    next.pending_evader_move = None;

    let separation = next.separation();
    next.lock_streak = if separation <= 1 { state.lock_streak + 1 } else { 0 };

    // Lock is checked before the turn limit so a lock on the last turn
    // goes to the Pursuer.
    if next.lock_streak >= config.win_streak {
        next.phase = Phase::GameOver(Role::Pursuer);
        return Transition {
            state: next,
            event: TurnEvent::MatchOver { turn, winner: Role::Pursuer },
        };
    }
    if turn >= config.max_turns {
        next.phase = Phase::GameOver(Role::Evader);
        return Transition {
            state: next,
            event: TurnEvent::MatchOver { turn, winner: Role::Evader },
        };
    }

    // Memory refresh uses the visibility of the turn just played.
    let observed = visibility_for_turn(config, turn);
    if observed {
        next.last_observed_evader_pos = next.evader_pos;
    }
    next.turn_number = turn + 1;

    let lock_streak = next.lock_streak;
    Transition {
        state: next,
        event: TurnEvent::TurnResolved {
            turn,
            separation,
            lock_streak,
            observed,
        },
    }
}

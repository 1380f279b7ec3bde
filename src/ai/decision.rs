//! Move selection for either role.
//!
//! The Evader tries the injected policy first and falls back to the
//! heuristic. The Pursuer always uses the heuristic, and only ever sees a
//! `PursuerView`, which cannot carry the Evader's pending move.

use serde::{Deserialize, Serialize};

use super::heuristic::{evader_scores, pick_best, pursuer_scores};
use super::policy::{PolicyKey, PolicyLookup};
use crate::core::{Lane, MatchConfig, MatchState, PursuerView, Role, TieBreak};
use crate::rules::{is_legal, pursuer_view};

/// Where a chosen lane came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecisionSource {
    /// Precomputed policy table hit.
    Policy,
    /// Greedy scorer.
    Heuristic,
}

/// A chosen move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    pub role: Role,
    pub lane: Lane,
    pub source: DecisionSource,
}

/// Choose a lane for `role` in `state`. Always legal, or neutral if nothing is.
pub fn choose_move(
    config: &MatchConfig,
    role: Role,
    state: &MatchState,
    policy: &dyn PolicyLookup,
    tie: &mut dyn TieBreak,
) -> Lane {
    decide(config, role, state, policy, tie).lane
}

/// Like `choose_move`, also reporting where the lane came from.
pub fn decide(
    config: &MatchConfig,
    role: Role,
    state: &MatchState,
    policy: &dyn PolicyLookup,
    tie: &mut dyn TieBreak,
) -> Decision {
    match role {
        Role::Evader => decide_evader(config, state, policy, tie),
        Role::Pursuer => Decision {
            role,
            lane: choose_pursuer_move(config, &pursuer_view(config, state), tie),
            source: DecisionSource::Heuristic,
        },
    }
}

fn decide_evader(
    config: &MatchConfig,
    state: &MatchState,
    policy: &dyn PolicyLookup,
    tie: &mut dyn TieBreak,
) -> Decision {
    let evader = state.evader_pos();
    let from_policy = policy
        .lookup(&PolicyKey::for_state(state))
        .and_then(Lane::new)
        .filter(|&lane| is_legal(config, Role::Evader, evader.x, lane));

    match from_policy {
        Some(lane) => Decision {
            role: Role::Evader,
            lane,
            source: DecisionSource::Policy,
        },
        None => Decision {
            role: Role::Evader,
            lane: pick_best(&evader_scores(config, evader, state.pursuer_pos()), tie),
            source: DecisionSource::Heuristic,
        },
    }
}

/// Evader choice: policy hit if legal, otherwise heuristic.
pub fn choose_evader_move(
    config: &MatchConfig,
    state: &MatchState,
    policy: &dyn PolicyLookup,
    tie: &mut dyn TieBreak,
) -> Lane {
    decide_evader(config, state, policy, tie).lane
}

/// Pursuer choice from what it can observe.
pub fn choose_pursuer_move(config: &MatchConfig, view: &PursuerView, tie: &mut dyn TieBreak) -> Lane {
    pick_best(&pursuer_scores(config, view), tie)
}

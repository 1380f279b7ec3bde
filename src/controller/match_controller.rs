//! Match orchestration for a presentation layer.
//!
//! `MatchController` holds the current `MatchState` and feeds commands
//! through the engine's transition function. It knows which seats are
//! human and which are AI, owns the tie-break stream and the injected
//! policy, and keeps a `MatchRecord` of resolved turns.
//!
//! ## Deferred AI moves
//!
//! A presentation layer may want to wait before showing an AI move.
//! `plan_ai_move` computes the move from the state at invocation time and
//! stamps it with the controller's generation, which every accepted command
//! (reset included) advances. `commit_planned` refuses a plan whose
//! generation is no longer current.

use std::sync::Arc;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::ai::{decide, DecisionSource, NoPolicy, PolicyLookup};
use crate::core::{
    Command, GameRng, Lane, LaneSet, MatchConfig, MatchSnapshot, MatchState, PursuerView, Role, RoleMap,
};
use crate::error::{ConfigError, PolicyError};
use crate::rules::{self, contact_alert, visibility_for_turn, Rejection, TurnEvent};
use crate::training::{MatchRecord, TurnRecord};

/// Who controls a role.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Seat {
    /// Moves arrive through `commit_*_move`.
    #[default]
    Human,
    /// Moves are computed by the bundled AI.
    Ai,
}

/// An AI move computed for a specific point in the match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedMove {
    /// Role the move is for.
    pub role: Role,
    /// Chosen lane.
    pub lane: Lane,
    /// Turn the move was planned on.
    pub turn_number: u32,
    /// Policy hit or heuristic.
    pub source: DecisionSource,
    /// Controller generation at planning time.
    pub generation: u64,
}

/// Single-match orchestrator.
pub struct MatchController {
    config: MatchConfig,
    state: MatchState,
    policy: Arc<dyn PolicyLookup>,
    rng: GameRng,
    seats: RoleMap<Seat>,
    record: MatchRecord,
    evader_lane: Option<Lane>,
    generation: u64,
}

impl MatchController {
    /// Create a controller for a validated configuration.
    ///
    /// Both seats start as `Human`, with no policy and seed 0.
    pub fn new(config: MatchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_validated(config))
    }

    pub(crate) fn from_validated(config: MatchConfig) -> Self {
        let state = MatchState::new(&config);
        Self {
            config,
            state,
            policy: Arc::new(NoPolicy),
            rng: GameRng::new(0),
            seats: RoleMap::with_value(Seat::Human),
            record: MatchRecord::new(0),
            evader_lane: None,
            generation: 0,
        }
    }

    /// Seed the tie-break stream.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = GameRng::new(seed);
        self.record.seed = seed;
        self
    }

    /// Install an Evader policy table.
    #[must_use]
    pub fn with_policy(self, policy: impl PolicyLookup + 'static) -> Self {
        self.with_shared_policy(Arc::new(policy))
    }

    /// Install a policy shared with other controllers.
    #[must_use]
    pub fn with_shared_policy(mut self, policy: Arc<dyn PolicyLookup>) -> Self {
        self.policy = policy;
        self
    }

    /// Install the outcome of loading a policy. A failed load means no policy.
    #[must_use]
    pub fn with_policy_result<P: PolicyLookup + 'static>(self, loaded: Result<P, PolicyError>) -> Self {
        match loaded {
            Ok(policy) => self.with_policy(policy),
            Err(err) => {
                warn!("evader policy unavailable, using heuristic: {err}");
                self.with_policy(NoPolicy)
            }
        }
    }

    /// Assign a role's seat.
    #[must_use]
    pub fn with_seat(mut self, role: Role, seat: Seat) -> Self {
        self.seats[role] = seat;
        self
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// The current state.
    #[must_use]
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// Who controls `role`.
    #[must_use]
    pub fn seat(&self, role: Role) -> Seat {
        self.seats[role]
    }

    /// Turns resolved since the last reset.
    #[must_use]
    pub fn record(&self) -> &MatchRecord {
        &self.record
    }

    /// Role expected to move, or `None` once the match is over.
    #[must_use]
    pub fn to_move(&self) -> Option<Role> {
        self.state.to_move()
    }

    /// Lanes `role` may take from `column`.
    #[must_use]
    pub fn legal_lanes(&self, role: Role, column: i32) -> LaneSet {
        rules::legal_lanes(&self.config, role, column)
    }

    /// Render-oriented summary of the current state.
    #[must_use]
    pub fn snapshot(&self) -> MatchSnapshot {
        rules::snapshot(&self.config, &self.state)
    }

    /// What the Pursuer side may display.
    #[must_use]
    pub fn pursuer_view(&self) -> PursuerView {
        rules::pursuer_view(&self.config, &self.state)
    }

    /// Commit the Evader's lane. Out-of-range or illegal lanes are ignored.
    pub fn commit_evader_move(&mut self, lane: u8) -> TurnEvent {
        match Lane::new(lane) {
            Some(lane) => self.apply(Command::CommitEvader(lane)),
            None => self.reject(Role::Evader, Rejection::IllegalLane),
        }
    }

    /// Commit the Pursuer's lane, resolving the turn. Out-of-range or illegal lanes are ignored.
    pub fn commit_pursuer_move(&mut self, lane: u8) -> TurnEvent {
        match Lane::new(lane) {
            Some(lane) => self.apply(Command::CommitPursuer(lane)),
            None => self.reject(Role::Pursuer, Rejection::IllegalLane),
        }
    }

    /// Return to the starting state. Seats, policy and RNG stream are kept.
    pub fn reset_match(&mut self) {
        self.apply(Command::Reset);
    }

    /// Compute the AI move for the role to move, if that role is AI-seated.
    pub fn plan_ai_move(&mut self) -> Option<PlannedMove> {
        let role = self.to_move()?;
        if self.seats[role] != Seat::Ai {
            return None;
        }
        let decision = decide(&self.config, role, &self.state, self.policy.as_ref(), &mut self.rng);
        Some(PlannedMove {
            role,
            lane: decision.lane,
            turn_number: self.state.turn_number(),
            source: decision.source,
            generation: self.generation,
        })
    }

    /// Commit a planned move if the match is still where it was planned.
    pub fn commit_planned(&mut self, planned: PlannedMove) -> TurnEvent {
        if self.state.is_over() {
            return self.reject(planned.role, Rejection::MatchOver);
        }
        if self.to_move() != Some(planned.role) || self.generation != planned.generation {
            return self.reject(planned.role, Rejection::OutOfTurn);
        }
        match planned.role {
            Role::Evader => self.apply(Command::CommitEvader(planned.lane)),
            Role::Pursuer => self.apply(Command::CommitPursuer(planned.lane)),
        }
    }

    /// Plan and immediately commit the AI move, if an AI is to move.
    pub fn play_ai_move(&mut self) -> Option<TurnEvent> {
        let planned = self.plan_ai_move()?;
        Some(self.commit_planned(planned))
    }

    /// Let AI seats play until a human is to move or the match ends.
    ///
    /// Returns the winner if the match is over.
    pub fn run_ai_match(&mut self) -> Option<Role> {
        while let Some(event) = self.play_ai_move() {
            if matches!(event, TurnEvent::Rejected(_)) {
                break;
            }
        }
        self.state.winner()
    }

    fn reject(&self, role: Role, reason: Rejection) -> TurnEvent {
        debug!("{role} move rejected on turn {}: {reason:?}", self.state.turn_number());
        TurnEvent::Rejected(reason)
    }

    fn apply(&mut self, command: Command) -> TurnEvent {
        let transition = rules::step(&self.config, &self.state, command);
        let event = transition.event;

        match (event, command) {
            (TurnEvent::Rejected(reason), Command::CommitEvader(_)) => {
                return self.reject(Role::Evader, reason);
            }
            (TurnEvent::Rejected(reason), _) => {
                return self.reject(Role::Pursuer, reason);
            }
            (TurnEvent::EvaderCommitted, Command::CommitEvader(lane)) => {
                debug!("evader committed on turn {}", self.state.turn_number());
                self.evader_lane = Some(lane);
            }
            (TurnEvent::TurnResolved { .. } | TurnEvent::MatchOver { .. }, Command::CommitPursuer(lane)) => {
                self.record_turn(lane, &transition.state);
            }
            (TurnEvent::Reset, _) => {
                info!("match reset");
                self.record = MatchRecord::new(self.record.seed);
                self.evader_lane = None;
            }
            _ => {}
        }

        match event {
            TurnEvent::TurnResolved { turn, separation, lock_streak, .. } => {
                debug!("turn {turn} resolved: separation {separation}, lock streak {lock_streak}");
            }
            TurnEvent::MatchOver { turn, winner } => {
                info!("{winner} wins on turn {turn}");
                self.record.finish(winner);
            }
            _ => {}
        }

        self.state = transition.state;
        self.generation += 1;
        event
    }

    fn record_turn(&mut self, pursuer_lane: Lane, resolved: &MatchState) {
        let turn = self.state.turn_number();
        let visible = visibility_for_turn(&self.config, turn);
        self.record.push(TurnRecord {
            turn,
            evader_lane: self.evader_lane.take().unwrap_or(Lane::NEUTRAL),
            pursuer_lane,
            evader_pos: resolved.evader_pos(),
            pursuer_pos: resolved.pursuer_pos(),
            lock_streak: resolved.lock_streak(),
            visible,
            contact_alert: contact_alert(self.state.evader_pos(), self.state.pursuer_pos(), visible),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::{PolicyKey, PolicyTable};
    use crate::core::{Phase, Position};

    fn controller() -> MatchController {
        MatchController::new(MatchConfig::default()).unwrap()
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let result = MatchController::new(MatchConfig::default().with_max_turns(0));
        assert!(matches!(result, Err(ConfigError::EmptyMatch)));
    }

    #[test]
    fn test_human_turn_flow() {
        let mut c = controller();
        assert_eq!(c.to_move(), Some(Role::Evader));

        assert_eq!(c.commit_evader_move(3), TurnEvent::EvaderCommitted);
        let snap = c.snapshot();
        assert!(snap.has_pending_evader_move);
        assert_eq!(snap.evader_pos, Position::new(7, 2));

        assert!(matches!(c.commit_pursuer_move(4), TurnEvent::TurnResolved { turn: 1, .. }));
        let snap = c.snapshot();
        assert_eq!(snap.evader_pos, Position::new(8, 3));
        assert_eq!(snap.pursuer_pos, Position::new(3, 4));
        assert_eq!(snap.turn_number, 2);
        assert_eq!(c.record().len(), 1);
        assert_eq!(c.record().turns[0].evader_lane, Lane::new(3).unwrap());
    }

    #[test]
    fn test_out_of_range_lane_is_ignored() {
        let mut c = controller();
        let before = c.state().clone();
        assert_eq!(c.commit_evader_move(7), TurnEvent::Rejected(Rejection::IllegalLane));
        assert_eq!(c.state(), &before);
    }

    #[test]
    fn test_human_seats_never_plan() {
        let mut c = controller();
        assert_eq!(c.plan_ai_move(), None);
        assert_eq!(c.play_ai_move(), None);
    }

    #[test]
    fn test_stale_plan_is_refused() {
        let mut c = controller().with_seat(Role::Evader, Seat::Ai);
        let planned = c.plan_ai_move().unwrap();
        assert_eq!(planned.role, Role::Evader);

        // A human override lands first.
        c.commit_evader_move(2);
        let before = c.state().clone();
        assert_eq!(c.commit_planned(planned), TurnEvent::Rejected(Rejection::OutOfTurn));
        assert_eq!(c.state(), &before);
    }

    #[test]
    fn test_plan_from_before_reset_is_refused() {
        let mut c = controller().with_seat(Role::Evader, Seat::Ai);
        c.commit_evader_move(2);
        c.commit_pursuer_move(2);
        let planned = c.plan_ai_move().unwrap();
        assert_eq!(planned.turn_number, 2);

        // Replay back to the same turn and role from a different position.
        c.reset_match();
        c.commit_evader_move(0);
        c.commit_pursuer_move(2);
        assert_eq!(c.state().turn_number(), 2);
        assert_eq!(c.to_move(), Some(Role::Evader));
        assert_eq!(c.state().evader_pos(), Position::new(5, 0));

        let before = c.state().clone();
        assert_eq!(c.commit_planned(planned), TurnEvent::Rejected(Rejection::OutOfTurn));
        assert_eq!(c.state(), &before);

        let fresh = c.plan_ai_move().unwrap();
        assert_eq!(c.commit_planned(fresh), TurnEvent::EvaderCommitted);
    }

    #[test]
    fn test_ai_vs_human_stops_for_human() {
        let mut c = controller().with_seat(Role::Evader, Seat::Ai).with_seed(5);
        assert_eq!(c.run_ai_match(), None);
        assert_eq!(c.to_move(), Some(Role::Pursuer));
        assert!(c.snapshot().has_pending_evader_move);
    }

    #[test]
    fn test_ai_vs_ai_finishes() {
        let mut c = controller()
            .with_seat(Role::Evader, Seat::Ai)
            .with_seat(Role::Pursuer, Seat::Ai)
            .with_seed(11);
        let winner = c.run_ai_match();

        assert!(winner.is_some());
        assert_eq!(c.state().winner(), winner);
        assert_eq!(c.record().winner, winner);
        assert!(c.record().len() <= 20);
    }

    #[test]
    fn test_policy_drives_evader() {
        let mut table = PolicyTable::new();
        let start = MatchState::new(&MatchConfig::default());
        table.insert(PolicyKey::for_state(&start), Lane::new(0).unwrap());

        let mut c = controller().with_seat(Role::Evader, Seat::Ai).with_policy(table);
        let planned = c.plan_ai_move().unwrap();
        assert_eq!(planned.lane, Lane::new(0).unwrap());
        assert_eq!(planned.source, DecisionSource::Policy);
    }

    #[test]
    fn test_failed_policy_load_degrades_to_heuristic() {
        let loaded = PolicyTable::from_json_str("not json");
        let mut c = controller().with_seat(Role::Evader, Seat::Ai).with_policy_result(loaded);
        let planned = c.plan_ai_move().unwrap();
        assert_eq!(planned.source, DecisionSource::Heuristic);
        assert_eq!(planned.lane, Lane::new(4).unwrap());
    }

    #[test]
    fn test_reset_clears_record() {
        let mut c = controller();
        c.commit_evader_move(2);
        c.commit_pursuer_move(2);
        c.commit_evader_move(1);
        c.reset_match();

        assert_eq!(c.state(), &MatchState::new(c.config()));
        assert!(c.record().is_empty());
        assert_eq!(c.snapshot().phase, Phase::Playing);
    }
}

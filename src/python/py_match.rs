//! Match bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::ai::PolicyTable;
use crate::controller::{MatchController, Seat};
use crate::core::{MatchConfig, Position, Role};
use crate::rules::TurnEvent;

pub(crate) fn parse_role(role: &str) -> PyResult<Role> {
    match role.to_ascii_lowercase().as_str() {
        "evader" => Ok(Role::Evader),
        "pursuer" => Ok(Role::Pursuer),
        other => Err(PyValueError::new_err(format!("unknown role {other:?}"))),
    }
}

fn role_name(role: Role) -> &'static str {
    match role {
        Role::Evader => "evader",
        Role::Pursuer => "pursuer",
    }
}

fn xy(pos: Position) -> (i32, i32) {
    (pos.x, pos.y)
}

/// Python wrapper for a single match.
///
/// Seats default to a human Evader against the AI Pursuer.
#[pyclass(name = "Match")]
pub struct PyMatch {
    controller: MatchController,
}

#[pymethods]
impl PyMatch {
    /// Create a new match.
    ///
    /// # Arguments
    /// - seed: tie-break RNG seed
    /// - evader_ai / pursuer_ai: put the bundled AI in that seat
    /// - policy_json: optional Evader policy table as a JSON string
    /// - config_json: optional `MatchConfig` as a JSON string
    #[new]
    #[pyo3(signature = (seed = 0, evader_ai = false, pursuer_ai = true, policy_json = None, config_json = None))]
    fn new(
        seed: u64,
        evader_ai: bool,
        pursuer_ai: bool,
        policy_json: Option<&str>,
        config_json: Option<&str>,
    ) -> PyResult<Self> {
        let config = match config_json {
            Some(json) => MatchConfig::from_json_str(json).map_err(|e| PyValueError::new_err(e.to_string()))?,
            None => MatchConfig::default(),
        };
        let seat = |ai: bool| if ai { Seat::Ai } else { Seat::Human };

        let mut controller = MatchController::new(config)
            .map_err(|e| PyValueError::new_err(e.to_string()))?
            .with_seed(seed)
            .with_seat(Role::Evader, seat(evader_ai))
            .with_seat(Role::Pursuer, seat(pursuer_ai));
        if let Some(json) = policy_json {
            controller = controller.with_policy_result(PolicyTable::from_json_str(json));
        }
        Ok(Self { controller })
    }

    /// Commit the Evader's lane. Returns False if the move was ignored.
    fn commit_evader_move(&mut self, lane: u8) -> bool {
        !matches!(self.controller.commit_evader_move(lane), TurnEvent::Rejected(_))
    }

    /// Commit the Pursuer's lane. Returns False if the move was ignored.
    fn commit_pursuer_move(&mut self, lane: u8) -> bool {
        !matches!(self.controller.commit_pursuer_move(lane), TurnEvent::Rejected(_))
    }

    /// Let the AI move if an AI seat is to move. Returns True if it moved.
    fn play_ai_move(&mut self) -> bool {
        matches!(self.controller.play_ai_move(), Some(event) if !matches!(event, TurnEvent::Rejected(_)))
    }

    /// Play AI seats until a human is to move or the match ends.
    fn run_ai_match(&mut self) -> Option<&'static str> {
        self.controller.run_ai_match().map(role_name)
    }

    /// Return to the starting state.
    fn reset_match(&mut self) {
        self.controller.reset_match();
    }

    /// Legal lane indices for a role ("evader" or "pursuer") from a column.
    fn legal_lanes(&self, role: &str, column: i32) -> PyResult<Vec<u8>> {
        let role = parse_role(role)?;
        Ok(self
            .controller
            .legal_lanes(role, column)
            .iter()
            .map(|lane| lane.index())
            .collect())
    }

    #[getter]
    fn evader_pos(&self) -> (i32, i32) {
        xy(self.controller.snapshot().evader_pos)
    }

    #[getter]
    fn pursuer_pos(&self) -> (i32, i32) {
        xy(self.controller.snapshot().pursuer_pos)
    }

    #[getter]
    fn last_observed_evader_pos(&self) -> (i32, i32) {
        xy(self.controller.snapshot().last_observed_evader_pos)
    }

    #[getter]
    fn has_pending_evader_move(&self) -> bool {
        self.controller.snapshot().has_pending_evader_move
    }

    #[getter]
    fn turn_number(&self) -> u32 {
        self.controller.snapshot().turn_number
    }

    #[getter]
    fn lock_streak(&self) -> u32 {
        self.controller.snapshot().lock_streak
    }

    #[getter]
    fn visible(&self) -> bool {
        self.controller.snapshot().visible
    }

    #[getter]
    fn contact_alert(&self) -> bool {
        self.controller.snapshot().contact_alert
    }

    /// "evader", "pursuer", or None while playing.
    #[getter]
    fn winner(&self) -> Option<&'static str> {
        self.controller.snapshot().winner.map(role_name)
    }

    /// Role expected to move, or None once the match is over.
    #[getter]
    fn to_move(&self) -> Option<&'static str> {
        self.controller.to_move().map(role_name)
    }

    /// The snapshot as a JSON string.
    fn snapshot_json(&self) -> PyResult<String> {
        serde_json::to_string(&self.controller.snapshot()).map_err(|e| PyValueError::new_err(e.to_string()))
    }

    fn __repr__(&self) -> String {
        let snap = self.controller.snapshot();
        let status = match snap.winner {
            Some(role) => role_name(role),
            None => "ongoing",
        };
        format!(
            "Match(turn={}, evader={}, pursuer={}, streak={}, status={})",
            snap.turn_number, snap.evader_pos, snap.pursuer_pos, snap.lock_streak, status
        )
    }
}

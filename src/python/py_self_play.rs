//! Self-play bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::ai::PolicyTable;
use crate::core::{MatchConfig, Role};
use crate::training::{SelfPlayConfig, SelfPlayStats, SelfPlayWorker};

/// Python wrapper for a batch of self-play results.
#[pyclass(name = "SelfPlayStats")]
#[derive(Clone, Debug)]
pub struct PySelfPlayStats(pub SelfPlayStats);

#[pymethods]
impl PySelfPlayStats {
    #[getter]
    fn games(&self) -> usize {
        self.0.games
    }

    #[getter]
    fn evader_wins(&self) -> usize {
        self.0.wins[Role::Evader]
    }

    #[getter]
    fn pursuer_wins(&self) -> usize {
        self.0.wins[Role::Pursuer]
    }

    #[getter]
    fn mean_length(&self) -> f64 {
        self.0.mean_length()
    }

    fn __repr__(&self) -> String {
        format!(
            "SelfPlayStats(games={}, evader_wins={}, pursuer_wins={}, mean_length={:.1})",
            self.0.games,
            self.0.wins[Role::Evader],
            self.0.wins[Role::Pursuer],
            self.0.mean_length()
        )
    }
}

/// Play a seeded batch of AI-vs-AI matches.
#[pyfunction]
#[pyo3(signature = (games = 100, seed = 0, policy_json = None, config_json = None))]
pub fn self_play(
    games: usize,
    seed: u64,
    policy_json: Option<&str>,
    config_json: Option<&str>,
) -> PyResult<PySelfPlayStats> {
    let to_py = |e: String| PyValueError::new_err(e);
    let match_config = match config_json {
        Some(json) => MatchConfig::from_json_str(json).map_err(|e| to_py(e.to_string()))?,
        None => MatchConfig::default(),
    };
    let config = SelfPlayConfig::new()
        .with_games(games)
        .with_seed(seed)
        .with_match_config(match_config);

    let mut worker = SelfPlayWorker::new(config).map_err(|e| to_py(e.to_string()))?;
    if let Some(json) = policy_json {
        let table = PolicyTable::from_json_str(json).map_err(|e| to_py(e.to_string()))?;
        worker = worker.with_policy(table);
    }
    Ok(PySelfPlayStats(worker.run()))
}

//! Python bindings for the shadow-pursuit engine.
//!
//! # Quick Start
//!
//! ```python
//! import shadow_pursuit as sp
//!
//! m = sp.Match(seed=7, pursuer_ai=True)
//! m.commit_evader_move(3)
//! m.play_ai_move()
//! print(m.evader_pos, m.pursuer_pos, m.lock_streak)
//!
//! stats = sp.self_play(games=500, seed=1)
//! print(stats.evader_wins, stats.pursuer_wins)
//! ```

use pyo3::prelude::*;

mod py_match;
mod py_self_play;

pub use py_match::*;
pub use py_self_play::*;

/// shadow_pursuit: pursuit-evasion engine with heuristic AI.
#[pymodule]
fn shadow_pursuit(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyMatch>()?;
    m.add_class::<PySelfPlayStats>()?;
    m.add_function(wrap_pyfunction!(self_play, m)?)?;
    Ok(())
}

//! Game rules: move validity, Pursuer sensing, and turn resolution.

pub mod validity;
pub mod observability;
pub mod engine;

pub use validity::{apply_move, is_legal, legal_lanes};
pub use observability::{contact_alert, pursuer_view, snapshot, visibility_for_turn};
pub use engine::{resolve, step, Rejection, Transition, TurnEvent};

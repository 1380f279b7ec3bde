//! AI opponents for both roles.
//!
//! - `policy`: injected Evader lookup table (`PolicyLookup`, `PolicyTable`)
//! - `heuristic`: one-ply greedy scorers
//! - `decision`: role dispatch, policy-then-heuristic for the Evader
//!
//! ## Usage
//!
//! ```
//! use shadow_pursuit::ai::{choose_move, NoPolicy};
//! use shadow_pursuit::core::{GameRng, MatchConfig, MatchState, Role};
//!
//! let config = MatchConfig::default();
//! let state = MatchState::new(&config);
//! let mut rng = GameRng::new(42);
//!
//! let lane = choose_move(&config, Role::Evader, &state, &NoPolicy, &mut rng);
//! assert_eq!(lane.index(), 4);
//! ```

pub mod policy;
pub mod heuristic;
pub mod decision;

pub use policy::{NoPolicy, PolicyKey, PolicyLookup, PolicyTable};
pub use heuristic::{evader_scores, pick_best, pursuer_scores, ScoredLanes};
pub use decision::{
    choose_evader_move, choose_move, choose_pursuer_move, decide, Decision, DecisionSource,
};

//! Match records and AI-vs-AI evaluation.
//!
//! ## Overview
//!
//! - **MatchRecord**: every resolved turn of a match plus its winner
//! - **SelfPlayWorker**: plays seeded AI-vs-AI batches
//! - **SelfPlayStats**: win rates and mean match length
//!
//! ## Usage
//!
//! ```
//! use shadow_pursuit::core::Role;
//! use shadow_pursuit::training::{SelfPlayConfig, SelfPlayWorker};
//!
//! let worker = SelfPlayWorker::new(SelfPlayConfig::new().with_games(4)).unwrap();
//! let stats = worker.run();
//! assert_eq!(stats.wins[Role::Evader] + stats.wins[Role::Pursuer], 4);
//! ```

pub mod self_play;
pub mod trajectory;

pub use self_play::{SelfPlayConfig, SelfPlayStats, SelfPlayWorker};
pub use trajectory::{MatchRecord, TurnRecord};

//! AI-vs-AI match runner.
//!
//! Plays batches of matches with both seats on the bundled AI to measure
//! how the heuristic (and any installed policy) balances out. Every match
//! gets its own seed derived from the batch seed, so batches replay
//! exactly.

use std::sync::Arc;

use log::info;
use serde::{Deserialize, Serialize};

use crate::ai::{NoPolicy, PolicyLookup};
use crate::controller::{MatchController, Seat};
use crate::core::{GameRng, MatchConfig, Role, RoleMap};
use crate::error::ConfigError;

use super::trajectory::MatchRecord;

/// Configuration for self-play.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SelfPlayConfig {
    /// Matches per batch.
    pub games: usize,

    /// Seed the per-match seeds are forked from.
    pub seed: u64,

    /// Rules every match is played under.
    pub match_config: MatchConfig,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        Self {
            games: 100,
            seed: 0,
            match_config: MatchConfig::default(),
        }
    }
}

impl SelfPlayConfig {
    /// Create a new self-play config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set matches per batch.
    pub fn with_games(mut self, games: usize) -> Self {
        self.games = games;
        self
    }

    /// Set the batch seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the match rules.
    pub fn with_match_config(mut self, config: MatchConfig) -> Self {
        self.match_config = config;
        self
    }
}

/// Aggregate outcome of a batch.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SelfPlayStats {
    /// Matches played.
    pub games: usize,
    /// Wins per role.
    pub wins: RoleMap<usize>,
    /// Resolved turns summed over all matches.
    pub total_turns: usize,
}

impl SelfPlayStats {
    /// Tally a set of records. Unfinished records count toward neither role.
    pub fn from_records(records: &[MatchRecord]) -> Self {
        let mut stats = Self::default();
        for record in records {
            stats.games += 1;
            stats.total_turns += record.len();
            if let Some(winner) = record.winner {
                stats.wins[winner] += 1;
            }
        }
        stats
    }

    /// Fraction of matches won by `role`.
    pub fn win_rate(&self, role: Role) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.wins[role] as f64 / self.games as f64
    }

    /// Mean resolved turns per match.
    pub fn mean_length(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.total_turns as f64 / self.games as f64
    }
}

/// Worker for running self-play matches.
pub struct SelfPlayWorker {
    config: SelfPlayConfig,
    policy: Arc<dyn PolicyLookup>,
}

impl SelfPlayWorker {
    /// Create a worker. Fails if the match rules are inconsistent.
    pub fn new(config: SelfPlayConfig) -> Result<Self, ConfigError> {
        config.match_config.validate()?;
        Ok(Self {
            config,
            policy: Arc::new(NoPolicy),
        })
    }

    /// Give the Evader a policy table.
    #[must_use]
    pub fn with_policy(mut self, policy: impl PolicyLookup + 'static) -> Self {
        self.policy = Arc::new(policy);
        self
    }

    /// The worker's configuration.
    pub fn config(&self) -> &SelfPlayConfig {
        &self.config
    }

    /// Play one match with the given tie-break seed.
    pub fn play_game(&self, seed: u64) -> MatchRecord {
        let mut controller = MatchController::from_validated(self.config.match_config.clone())
            .with_seed(seed)
            .with_shared_policy(Arc::clone(&self.policy))
            .with_seat(Role::Evader, Seat::Ai)
            .with_seat(Role::Pursuer, Seat::Ai);
        controller.run_ai_match();
        controller.record().clone()
    }

    /// Play a full batch.
    pub fn play_games(&self) -> Vec<MatchRecord> {
        let mut seeds = GameRng::new(self.config.seed);
        (0..self.config.games)
            .map(|_| self.play_game(seeds.fork().seed()))
            .collect()
    }

    /// Play a full batch and tally it.
    pub fn run(&self) -> SelfPlayStats {
        let stats = SelfPlayStats::from_records(&self.play_games());
        info!(
            "self-play: {} games, evader {:.2}, pursuer {:.2}, mean length {:.1}",
            stats.games,
            stats.win_rate(Role::Evader),
            stats.win_rate(Role::Pursuer),
            stats.mean_length()
        );
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = SelfPlayConfig::new().with_games(7).with_seed(3);
        assert_eq!(config.games, 7);
        assert_eq!(config.seed, 3);
        assert_eq!(config.match_config, MatchConfig::default());
    }

    #[test]
    fn test_worker_rejects_bad_rules() {
        let config = SelfPlayConfig::new().with_match_config(MatchConfig::default().with_win_streak(0));
        assert!(SelfPlayWorker::new(config).is_err());
    }

    #[test]
    fn test_play_game_completes() {
        let worker = SelfPlayWorker::new(SelfPlayConfig::new()).unwrap();
        let record = worker.play_game(42);

        assert!(record.is_complete());
        assert_eq!(record.seed, 42);
        assert!(!record.is_empty() && record.len() <= 20);
    }

    #[test]
    fn test_play_game_is_deterministic() {
        let worker = SelfPlayWorker::new(SelfPlayConfig::new()).unwrap();
        assert_eq!(worker.play_game(8), worker.play_game(8));
    }

    #[test]
    fn test_stats_tally() {
        let worker = SelfPlayWorker::new(SelfPlayConfig::new().with_games(6).with_seed(1)).unwrap();
        let stats = worker.run();

        assert_eq!(stats.games, 6);
        assert_eq!(stats.wins[Role::Evader] + stats.wins[Role::Pursuer], 6);
        let total = stats.win_rate(Role::Evader) + stats.win_rate(Role::Pursuer);
        assert!((total - 1.0).abs() < 1e-9);
        assert!(stats.mean_length() >= 1.0 && stats.mean_length() <= 20.0);
    }

    #[test]
    fn test_empty_stats() {
        let stats = SelfPlayStats::from_records(&[]);
        assert_eq!(stats.win_rate(Role::Evader), 0.0);
        assert_eq!(stats.mean_length(), 0.0);
    }
}

//! Match configuration.
//!
//! `MatchConfig::default()` is the standard match: a 12-column board, the
//! Evader confined to columns 5..=9, a lock streak of 2 to win, 20 turns,
//! and a visibility cycle of period 4 with the first 2 turns visible.
//!
//! Configs are plain serde data so they can be loaded from JSON.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use super::action::LANE_COUNT;
use super::position::Position;
use super::role::Role;
use crate::error::{ConfigError, ConfigLoadError};

/// Scoring constants of the bundled heuristic AI.
///
/// These values are the full definition of AI strength; the AI is one-ply
/// greedy and has no other tuning.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiWeights {
    /// Multiplier on Chebyshev distance (both roles).
    pub distance: i32,
    /// Multiplier on column offset (Evader from centre, Pursuer from target).
    pub column: i32,
    /// Pursuer bonus for ending in lock range of the target.
    pub lock_bonus: i32,
    /// Extra Pursuer bonus when that lock would reach the win streak.
    pub win_bonus: i32,
    /// Pursuer bonus for containment while hidden with a contact alert.
    pub contact_bonus: i32,
    /// Per-cell reduction of `contact_bonus` for drifting from the current spot.
    pub contact_drift_penalty: i32,
}

impl Default for AiWeights {
    fn default() -> Self {
        Self {
            distance: 10,
            column: 1,
            lock_bonus: 120,
            win_bonus: 100,
            contact_bonus: 25,
            contact_drift_penalty: 5,
        }
    }
}

/// Complete match configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Number of columns.
    pub board_width: i32,

    /// Leftmost column the Evader may occupy.
    pub evader_min_column: i32,

    /// Rightmost column the Evader may occupy.
    pub evader_max_column: i32,

    /// Evader position at the start of a match.
    pub evader_start: Position,

    /// Pursuer position at the start of a match.
    pub pursuer_start: Position,

    /// Consecutive locked turns needed for the Pursuer to win.
    pub win_streak: u32,

    /// Last playable turn. Surviving it wins for the Evader.
    pub max_turns: u32,

    /// Length of the visibility cycle in turns.
    pub visibility_period: u32,

    /// Leading turns of each cycle in which the Pursuer sees the Evader.
    pub visible_turns: u32,

    /// Column the Evader heuristic is drawn towards.
    pub center_column: i32,

    /// Heuristic AI weights.
    pub weights: AiWeights,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            board_width: 12,
            evader_min_column: 5,
            evader_max_column: 9,
            evader_start: Position::new(7, 2),
            pursuer_start: Position::new(1, 2),
            win_streak: 2,
            max_turns: 20,
            visibility_period: 4,
            visible_turns: 2,
            center_column: 7,
            weights: AiWeights::default(),
        }
    }
}

impl MatchConfig {
    /// Create the standard configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a configuration from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigLoadError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Disable the visibility cycle: every turn is visible.
    #[must_use]
    pub fn always_visible(mut self) -> Self {
        self.visible_turns = self.visibility_period;
        self
    }

    /// Set the starting positions.
    #[must_use]
    pub fn with_starts(mut self, evader: Position, pursuer: Position) -> Self {
        self.evader_start = evader;
        self.pursuer_start = pursuer;
        self
    }

    /// Set the match length.
    #[must_use]
    pub fn with_max_turns(mut self, turns: u32) -> Self {
        self.max_turns = turns;
        self
    }

    /// Set the lock streak needed to win.
    #[must_use]
    pub fn with_win_streak(mut self, streak: u32) -> Self {
        self.win_streak = streak;
        self
    }

    /// Set the visibility cycle.
    #[must_use]
    pub fn with_visibility(mut self, period: u32, visible_turns: u32) -> Self {
        self.visibility_period = period;
        self.visible_turns = visible_turns;
        self
    }

    /// Set the AI weights.
    #[must_use]
    pub fn with_weights(mut self, weights: AiWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Columns a role may occupy.
    #[must_use]
    pub fn column_range(&self, role: Role) -> RangeInclusive<i32> {
        match role {
            Role::Evader => self.evader_min_column..=self.evader_max_column,
            Role::Pursuer => 0..=self.board_width - 1,
        }
    }

    /// True if `pos` is a legal resting place for `role`.
    #[must_use]
    pub fn contains(&self, role: Role, pos: Position) -> bool {
        self.column_range(role).contains(&pos.x) && (0..LANE_COUNT as i32).contains(&pos.y)
    }

    /// Check internal consistency.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let span = LANE_COUNT as i32;
        if self.board_width < span {
            return Err(ConfigError::BoardTooNarrow { width: self.board_width, span });
        }
        if self.evader_min_column < 0
            || self.evader_min_column > self.evader_max_column
            || self.evader_max_column >= self.board_width
        {
            return Err(ConfigError::BandOutOfBoard {
                min: self.evader_min_column,
                max: self.evader_max_column,
                width: self.board_width,
            });
        }
        for (role, start) in [(Role::Evader, self.evader_start), (Role::Pursuer, self.pursuer_start)] {
            if !self.contains(role, start) {
                return Err(ConfigError::StartOutOfRange {
                    role: match role {
                        Role::Evader => "Evader",
                        Role::Pursuer => "Pursuer",
                    },
                    x: start.x,
                    y: start.y,
                });
            }
        }
        if self.max_turns == 0 {
            return Err(ConfigError::EmptyMatch);
        }
        if self.win_streak == 0 {
            return Err(ConfigError::ZeroWinStreak);
        }
        if self.visibility_period == 0 || self.visible_turns > self.visibility_period {
            return Err(ConfigError::InvalidVisibilityCycle {
                period: self.visibility_period,
                visible: self.visible_turns,
            });
        }
        Ok(())
    }
}

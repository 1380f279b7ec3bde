//! Match records for replay and AI evaluation.
//!
//! A record captures each resolved turn of a match: the lanes both roles
//! committed, where they ended up, and what the Pursuer could sense when it
//! moved. Records encode to a compact binary form with bincode.

use serde::{Deserialize, Serialize};

use crate::core::{Lane, Position, Role};
use crate::error::RecordError;

/// One resolved turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Turn number that was played.
    pub turn: u32,
    /// Lane the Evader committed.
    pub evader_lane: Lane,
    /// Lane the Pursuer committed.
    pub pursuer_lane: Lane,
    /// Evader position after resolution.
    pub evader_pos: Position,
    /// Pursuer position after resolution.
    pub pursuer_pos: Position,
    /// Lock streak after resolution.
    pub lock_streak: u32,
    /// Whether the Pursuer had vision while choosing.
    pub visible: bool,
    /// Whether the Pursuer had a contact alert while choosing.
    pub contact_alert: bool,
}

impl TurnRecord {
    /// Chebyshev distance after resolution.
    #[must_use]
    pub fn separation(&self) -> i32 {
        self.evader_pos.chebyshev(self.pursuer_pos)
    }
}

/// A complete or in-progress match.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Seed of the tie-break stream the match was played with.
    pub seed: u64,
    /// Resolved turns in order.
    pub turns: Vec<TurnRecord>,
    /// Winner once the match has ended.
    pub winner: Option<Role>,
}

impl MatchRecord {
    /// Start an empty record.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            turns: Vec::new(),
            winner: None,
        }
    }

    /// Append a resolved turn.
    pub fn push(&mut self, turn: TurnRecord) {
        self.turns.push(turn);
    }

    /// Mark the match finished.
    pub fn finish(&mut self, winner: Role) {
        self.winner = Some(winner);
    }

    /// Number of resolved turns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// True if no turn has been resolved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// True once a winner is recorded.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.winner.is_some()
    }

    /// Longest run of consecutive locked turns.
    #[must_use]
    pub fn longest_lock(&self) -> u32 {
        self.turns.iter().map(|t| t.lock_streak).max().unwrap_or(0)
    }

    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, RecordError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode from bincode.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, RecordError> {
        Ok(bincode::deserialize(bytes)?)
    }
}

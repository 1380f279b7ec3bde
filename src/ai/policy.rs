//! Precomputed Evader policy lookup.
//!
//! The Evader AI may consult an external table mapping a game situation to
//! a lane. The core only needs `PolicyLookup::lookup`; `NoPolicy` stands in
//! when no table is available, which is always a valid configuration.
//!
//! ## Key format
//!
//! Keys serialize as `evaderX,evaderY,pursuerX,pursuerY,lockStreak,turnNumber`.
//! A JSON table is an object from such keys to lane integers:
//!
//! ```
//! use shadow_pursuit::ai::{PolicyKey, PolicyLookup, PolicyTable};
//! use shadow_pursuit::core::Position;
//!
//! let table = PolicyTable::from_json_str(r#"{"7,2,1,2,0,1": 4}"#).unwrap();
//! let key = PolicyKey::new(Position::new(7, 2), Position::new(1, 2), 0, 1);
//! assert_eq!(table.lookup(&key), Some(4));
//! ```

use std::collections::HashMap;
use std::io::Read;
use std::str::FromStr;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{Lane, MatchState, Position};
use crate::error::PolicyError;

/// Situation key for the policy table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PolicyKey {
    pub evader: Position,
    pub pursuer: Position,
    pub lock_streak: u32,
    pub turn_number: u32,
}

impl PolicyKey {
    /// Create a key.
    #[must_use]
    pub const fn new(evader: Position, pursuer: Position, lock_streak: u32, turn_number: u32) -> Self {
        Self {
            evader,
            pursuer,
            lock_streak,
            turn_number,
        }
    }

    /// Key for the situation the Evader faces in `state`.
    #[must_use]
    pub fn for_state(state: &MatchState) -> Self {
        Self::new(
            state.evader_pos(),
            state.pursuer_pos(),
            state.lock_streak(),
            state.turn_number(),
        )
    }
}

impl std::fmt::Display for PolicyKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{},{},{},{},{},{}",
            self.evader.x, self.evader.y, self.pursuer.x, self.pursuer.y, self.lock_streak, self.turn_number
        )
    }
}

impl FromStr for PolicyKey {
    type Err = PolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || PolicyError::MalformedKey { key: s.to_string() };

        let fields: Vec<&str> = s.split(',').map(str::trim).collect();
        let &[ex, ey, px, py, streak, turn] = fields.as_slice() else {
            return Err(malformed());
        };
        let coord = |v: &str| v.parse::<i32>().map_err(|_| malformed());
        let count = |v: &str| v.parse::<u32>().map_err(|_| malformed());

        Ok(Self::new(
            Position::new(coord(ex)?, coord(ey)?),
            Position::new(coord(px)?, coord(py)?),
            count(streak)?,
            count(turn)?,
        ))
    }
}

/// Read-only situation → lane lookup.
pub trait PolicyLookup: Send + Sync {
    /// Raw lane index for `key`, or `None` if the table has no entry.
    ///
    /// The caller still checks that the lane is legal.
    fn lookup(&self, key: &PolicyKey) -> Option<u8>;
}

/// The absent policy. Every lookup misses.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoPolicy;

impl PolicyLookup for NoPolicy {
    fn lookup(&self, _key: &PolicyKey) -> Option<u8> {
        None
    }
}

/// In-memory policy table.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyTable {
    entries: FxHashMap<PolicyKey, u8>,
}

impl PolicyTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON object of `"ex,ey,px,py,streak,turn": lane` entries.
    pub fn from_json_str(json: &str) -> Result<Self, PolicyError> {
        let raw: HashMap<String, i64> = serde_json::from_str(json)?;
        Self::from_raw(raw)
    }

    /// Parse a JSON table from a reader.
    pub fn from_json_reader(reader: impl Read) -> Result<Self, PolicyError> {
        let raw: HashMap<String, i64> = serde_json::from_reader(reader)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: HashMap<String, i64>) -> Result<Self, PolicyError> {
        let mut table = Self::new();
        for (key, lane) in raw {
            let parsed: PolicyKey = key.parse()?;
            let index = u8::try_from(lane)
                .ok()
                .and_then(Lane::new)
                .ok_or_else(|| PolicyError::LaneOutOfRange { key: key.clone(), lane })?;
            table.insert(parsed, index);
        }
        Ok(table)
    }

    /// Decode the compact binary form.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PolicyError> {
        Ok(bincode::deserialize(bytes)?)
    }

    /// Encode to the compact binary form.
    pub fn to_bytes(&self) -> Result<Vec<u8>, PolicyError> {
        Ok(bincode::serialize(self)?)
    }

    /// Add or replace an entry.
    pub fn insert(&mut self, key: PolicyKey, lane: Lane) {
        self.entries.insert(key, lane.index());
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PolicyLookup for PolicyTable {
    fn lookup(&self, key: &PolicyKey) -> Option<u8> {
        self.entries.get(key).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key() -> PolicyKey {
        PolicyKey::new(Position::new(7, 2), Position::new(1, 2), 0, 1)
    }

    #[test]
    fn test_key_string_form() {
        assert_eq!(key().to_string(), "7,2,1,2,0,1");
        assert_eq!("7,2,1,2,0,1".parse::<PolicyKey>().unwrap(), key());
        assert_eq!(" 7, 2,1,2,0 ,1".parse::<PolicyKey>().unwrap(), key());
    }

    #[test]
    fn test_key_rejects_malformed() {
        for bad in ["", "7,2,1,2,0", "7,2,1,2,0,1,9", "7,2,x,2,0,1", "7,2,1,2,-1,1"] {
            assert!(
                matches!(bad.parse::<PolicyKey>(), Err(PolicyError::MalformedKey { .. })),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_no_policy_always_misses() {
        assert_eq!(NoPolicy.lookup(&key()), None);
    }

    #[test]
    fn test_table_from_json() {
        let table = PolicyTable::from_json_str(r#"{"7,2,1,2,0,1": 3, "8,3,3,4,0,2": 0}"#).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.lookup(&key()), Some(3));
        let other = PolicyKey::new(Position::new(8, 3), Position::new(3, 4), 0, 2);
        assert_eq!(table.lookup(&other), Some(0));
        assert_eq!(table.lookup(&PolicyKey::new(Position::new(9, 0), Position::new(0, 0), 0, 1)), None);
    }

    #[test]
    fn test_table_rejects_bad_lane() {
        let err = PolicyTable::from_json_str(r#"{"7,2,1,2,0,1": 5}"#).unwrap_err();
        assert!(matches!(err, PolicyError::LaneOutOfRange { lane: 5, .. }));

        let err = PolicyTable::from_json_str(r#"{"7,2,1,2,0,1": -1}"#).unwrap_err();
        assert!(matches!(err, PolicyError::LaneOutOfRange { lane: -1, .. }));
    }

    #[test]
    fn test_table_rejects_bad_json() {
        assert!(matches!(PolicyTable::from_json_str("[1, 2]"), Err(PolicyError::Json(_))));
        assert!(matches!(
            PolicyTable::from_json_str(r#"{"nope": 1}"#),
            Err(PolicyError::MalformedKey { .. })
        ));
    }

    #[test]
    fn test_table_from_reader() {
        let json = br#"{"7,2,1,2,0,1": 2}"#;
        let table = PolicyTable::from_json_reader(&json[..]).unwrap();
        assert_eq!(table.lookup(&key()), Some(2));

        let truncated = br#"{"7,2,1,2,0,1": "#;
        assert!(matches!(
            PolicyTable::from_json_reader(&truncated[..]),
            Err(PolicyError::Json(_))
        ));
    }

    #[test]
    fn test_binary_form() {
        let mut table = PolicyTable::new();
        table.insert(key(), Lane::new(4).unwrap());
        let bytes = table.to_bytes().unwrap();
        assert_eq!(PolicyTable::from_bytes(&bytes).unwrap(), table);

        assert!(matches!(PolicyTable::from_bytes(&[0xff]), Err(PolicyError::Binary(_))));
    }

    #[test]
    fn test_key_for_state() {
        let state = MatchState::from_position(Position::new(6, 0), Position::new(2, 4), 9, 1);
        assert_eq!(PolicyKey::for_state(&state).to_string(), "6,0,2,4,1,9");
    }
}

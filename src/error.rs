//! Error types for match setup and policy loading.
//!
//! Gameplay itself has no error path: illegal commands are rejected as
//! no-ops by the engine. These errors cover building a match.

use thiserror::Error;

/// Invalid match configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The board cannot hold a full lane sweep.
    #[error("board width {width} is narrower than the lane span {span}")]
    BoardTooNarrow { width: i32, span: i32 },

    /// Evader band is empty or extends past the board.
    #[error("evader band {min}..={max} does not fit a board of width {width}")]
    BandOutOfBoard { min: i32, max: i32, width: i32 },

    /// A starting position lies outside its role's range.
    #[error("{role} start {x},{y} is outside its legal range")]
    StartOutOfRange { role: &'static str, x: i32, y: i32 },

    /// A match must last at least one turn.
    #[error("max_turns must be at least 1")]
    EmptyMatch,

    /// A lock streak of zero would end every match immediately.
    #[error("win_streak must be at least 1")]
    ZeroWinStreak,

    /// Visibility cycle has no turns, or more visible turns than it has turns.
    #[error("visibility cycle of {visible} visible turns in period {period} is invalid")]
    InvalidVisibilityCycle { period: u32, visible: u32 },
}

/// Failure to load a configuration from JSON.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    /// Not valid JSON for `MatchConfig`.
    #[error("config JSON is malformed: {0}")]
    Json(#[from] serde_json::Error),
    /// Parsed but inconsistent.
    #[error(transparent)]
    Invalid(#[from] ConfigError),
}

/// Failure to build a policy table.
#[derive(Debug, Error)]
pub enum PolicyError {
    /// Key was not six comma-separated integers.
    #[error("malformed policy key {key:?}")]
    MalformedKey { key: String },

    /// Stored lane index outside `0..LANE_COUNT`.
    #[error("lane index {lane} out of range for key {key:?}")]
    LaneOutOfRange { key: String, lane: i64 },

    /// Source was not valid JSON.
    #[error("policy table JSON is malformed: {0}")]
    Json(#[from] serde_json::Error),

    /// Binary form could not be decoded.
    #[error("policy table binary is malformed: {0}")]
    Binary(#[from] bincode::Error),
}

/// A lane index outside `0..LANE_COUNT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("lane index {0} out of range")]
pub struct InvalidLane(pub u8);

/// Failure to encode or decode a match record.
#[derive(Debug, Error)]
pub enum RecordError {
    /// bincode rejected the bytes.
    #[error("match record encoding failed: {0}")]
    Binary(#[from] bincode::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_messages() {
        let err = ConfigError::BandOutOfBoard { min: 5, max: 14, width: 12 };
        assert_eq!(err.to_string(), "evader band 5..=14 does not fit a board of width 12");

        let err = ConfigError::StartOutOfRange { role: "Evader", x: 2, y: 2 };
        assert_eq!(err.to_string(), "Evader start 2,2 is outside its legal range");
    }

    #[test]
    fn test_policy_error_from_json() {
        let json_err = serde_json::from_str::<u8>("nope").unwrap_err();
        let err: PolicyError = json_err.into();
        assert!(matches!(err, PolicyError::Json(_)));
        assert!(err.to_string().starts_with("policy table JSON is malformed"));
    }

    #[test]
    fn test_invalid_lane_message() {
        assert_eq!(InvalidLane(7).to_string(), "lane index 7 out of range");
    }
}

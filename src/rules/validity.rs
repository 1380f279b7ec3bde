//! Move legality and destination computation.
//!
//! Pure functions of the lane encoding and a role's column range. Nothing
//! here depends on whose turn it is.

use crate::core::{Lane, LaneSet, MatchConfig, Position, Role};

/// Destination of a move through `lane`.
///
/// Performs no validation; call only after `is_legal` succeeds.
///
/// ```
/// use shadow_pursuit::core::{Lane, Position};
/// use shadow_pursuit::rules::apply_move;
///
/// let to = apply_move(Position::new(7, 2), Lane::new(4).unwrap());
/// assert_eq!(to, Position::new(9, 4));
/// ```
#[must_use]
pub fn apply_move(from: Position, lane: Lane) -> Position {
    Position::new(from.x + lane.column_delta(), i32::from(lane.index()))
}

/// True if moving through `lane` from `from_column` keeps `role` in range.
#[must_use]
pub fn is_legal(config: &MatchConfig, role: Role, from_column: i32, lane: Lane) -> bool {
    config
        .column_range(role)
        .contains(&(from_column + lane.column_delta()))
}

/// All lanes `role` may take from `from_column`, ascending.
#[must_use]
pub fn legal_lanes(config: &MatchConfig, role: Role, from_column: i32) -> LaneSet {
    Lane::all()
        .filter(|&lane| is_legal(config, role, from_column, lane))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indices(lanes: &LaneSet) -> Vec<u8> {
        lanes.iter().map(|l| l.index()).collect()
    }

    #[test]
    fn test_evader_centre_allows_all() {
        let config = MatchConfig::default();
        assert_eq!(indices(&legal_lanes(&config, Role::Evader, 7)), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_evader_band_edges() {
        let config = MatchConfig::default();
        assert_eq!(indices(&legal_lanes(&config, Role::Evader, 5)), vec![2, 3, 4]);
        assert_eq!(indices(&legal_lanes(&config, Role::Evader, 6)), vec![1, 2, 3, 4]);
        assert_eq!(indices(&legal_lanes(&config, Role::Evader, 9)), vec![0, 1, 2]);
    }

    #[test]
    fn test_pursuer_board_edges() {
        let config = MatchConfig::default();
        assert_eq!(indices(&legal_lanes(&config, Role::Pursuer, 0)), vec![2, 3, 4]);
        assert_eq!(indices(&legal_lanes(&config, Role::Pursuer, 1)), vec![1, 2, 3, 4]);
        assert_eq!(indices(&legal_lanes(&config, Role::Pursuer, 5)), vec![0, 1, 2, 3, 4]);
        assert_eq!(indices(&legal_lanes(&config, Role::Pursuer, 11)), vec![0, 1, 2]);
    }

    #[test]
    fn test_is_legal_matches_legal_lanes() {
        let config = MatchConfig::default();
        for role in Role::ALL {
            for column in 0..12 {
                let lanes = legal_lanes(&config, role, column);
                for lane in Lane::all() {
                    assert_eq!(lanes.contains(&lane), is_legal(&config, role, column, lane));
                }
            }
        }
    }

    #[test]
    fn test_apply_move_sets_row_to_lane() {
        let from = Position::new(6, 0);
        assert_eq!(apply_move(from, Lane::new(0).unwrap()), Position::new(4, 0));
        assert_eq!(apply_move(from, Lane::NEUTRAL), Position::new(6, 2));
        assert_eq!(apply_move(from, Lane::new(3).unwrap()), Position::new(7, 3));
    }

    #[test]
    fn test_legal_moves_stay_in_range() {
        let config = MatchConfig::default();
        for role in Role::ALL {
            for column in config.column_range(role) {
                for lane in legal_lanes(&config, role, column) {
                    let to = apply_move(Position::new(column, 0), lane);
                    assert!(config.contains(role, to), "{role} {column} {lane} -> {to}");
                }
            }
        }
    }
}

//! Move representation: lanes and engine commands.
//!
//! A move is one of five lanes. The lane picks the destination row and
//! shifts the column by `lane - 2`, so lane 2 keeps the column, lanes 0/1
//! drift left and lanes 3/4 drift right.
//!
//! Commands are what the controller feeds into the engine's transition
//! function.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::InvalidLane;

/// Number of lane choices (and board rows).
pub const LANE_COUNT: u8 = 5;

/// A lane choice in `0..LANE_COUNT`.
///
/// ```
/// use shadow_pursuit::core::Lane;
///
/// assert_eq!(Lane::NEUTRAL.column_delta(), 0);
/// assert_eq!(Lane::new(0).unwrap().column_delta(), -2);
/// assert_eq!(Lane::new(4).unwrap().column_delta(), 2);
/// assert!(Lane::new(5).is_none());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Lane(u8);

impl Lane {
    /// The lane that keeps the current column.
    pub const NEUTRAL: Lane = Lane(LANE_COUNT / 2);

    /// Create a lane from its index, or `None` if out of range.
    #[must_use]
    pub const fn new(index: u8) -> Option<Self> {
        if index < LANE_COUNT {
            Some(Self(index))
        } else {
            None
        }
    }

    /// The raw lane index.
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Signed column shift applied by this lane.
    #[must_use]
    pub const fn column_delta(self) -> i32 {
        self.0 as i32 - Self::NEUTRAL.0 as i32
    }

    /// All lanes in index order.
    pub fn all() -> impl Iterator<Item = Lane> {
        (0..LANE_COUNT).map(Lane)
    }
}

impl TryFrom<u8> for Lane {
    type Error = InvalidLane;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Lane::new(index).ok_or(InvalidLane(index))
    }
}

impl From<Lane> for u8 {
    fn from(lane: Lane) -> Self {
        lane.0
    }
}

impl std::fmt::Display for Lane {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Lane({})", self.0)
    }
}

/// A set of lanes, in ascending index order.
pub type LaneSet = SmallVec<[Lane; LANE_COUNT as usize]>;

/// Input to the turn-resolution engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Evader commits a move for the current turn.
    CommitEvader(Lane),
    /// Pursuer commits a move, resolving the turn.
    CommitPursuer(Lane),
    /// Return to the starting state.
    Reset,
}

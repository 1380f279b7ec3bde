//! Grid coordinates and distance metrics.
//!
//! The board is a curved grid: `x` is a column, `y` is the lane a piece
//! last moved through. Lock range and sensor range are both expressed in
//! Chebyshev distance, so a piece "touches" the 3x3 neighbourhood around it.

use serde::{Deserialize, Serialize};

/// A cell on the board.
///
/// Signed so that move computation can produce an out-of-range column
/// before validity rejects it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Column index in `[0, board_width)`.
    pub x: i32,
    /// Lane index in `[0, LANE_COUNT)`.
    pub y: i32,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Chebyshev (king-move) distance to another position.
    ///
    /// ```
    /// use shadow_pursuit::core::Position;
    ///
    /// let a = Position::new(7, 2);
    /// assert_eq!(a.chebyshev(Position::new(8, 3)), 1);
    /// assert_eq!(a.chebyshev(Position::new(1, 2)), 6);
    /// ```
    #[must_use]
    pub fn chebyshev(self, other: Position) -> i32 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }

    /// Absolute column difference.
    #[must_use]
    pub fn column_gap(self, column: i32) -> i32 {
        (self.x - column).abs()
    }

    /// True if the other position is inside this position's 3x3 neighbourhood.
    #[must_use]
    pub fn is_adjacent(self, other: Position) -> bool {
        self.chebyshev(other) <= 1
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

//! The four cardinal directions of the tile grid.
//!
//! Grid adjacency, graph edges, and lines of sight are all axis-aligned, so
//! these four variants are the only headings the simulation distinguishes.

use crate::Vector;

/// A cardinal direction on the grid.  Screen coordinates: `Down` is `+y`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// `(d_column, d_row)` step for this direction.
    #[inline]
    pub fn offset(self) -> (i64, i64) {
        match self {
            Direction::Up    => (0, -1),
            Direction::Down  => (0, 1),
            Direction::Left  => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up    => Direction::Down,
            Direction::Down  => Direction::Up,
            Direction::Left  => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Classify a unit facing vector.  A component must exceed `0.5` in
    /// magnitude to count; horizontal wins over vertical.  Returns `None` for
    /// a zero facing.
    pub fn from_facing(facing: Vector) -> Option<Direction> {
        if facing.x < -0.5 {
            Some(Direction::Left)
        } else if facing.x > 0.5 {
            Some(Direction::Right)
        } else if facing.y < -0.5 {
            Some(Direction::Up)
        } else if facing.y > 0.5 {
            Some(Direction::Down)
        } else {
            None
        }
    }

    /// Human-readable label, useful for logs and trace columns.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up    => "up",
            Direction::Down  => "down",
            Direction::Left  => "left",
            Direction::Right => "right",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

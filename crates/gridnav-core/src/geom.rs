//! Geometry primitives: [`Cell`] and [`Direction`].
//!
//! Coordinates are `(row, col)`: row grows downward, col grows right, and
//! `(0, 0)` is the top-left corner of a grid.

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Cell
// ---------------------------------------------------------------------------

/// A grid coordinate. Equality, hashing and ordering are by value.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new cell coordinate.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a cell shifted by (dr, dc). Wraps at the `i32` limits, which
    /// only ever produces a cell outside any grid.
    #[inline]
    pub const fn shift(self, dr: i32, dc: i32) -> Self {
        Self {
            row: self.row.wrapping_add(dr),
            col: self.col.wrapping_add(dc),
        }
    }

    /// The four cardinal neighbours, in search order: right, down, left, up.
    ///
    /// The order is fixed so that frontier expansion is reproducible.
    #[inline]
    pub const fn neighbors_4(self) -> [Cell; 4] {
        [
            self.shift(0, 1),
            self.shift(1, 0),
            self.shift(0, -1),
            self.shift(-1, 0),
        ]
    }

    /// Whether `other` is exactly one cardinal step away.
    #[inline]
    pub fn is_adjacent(self, other: Cell) -> bool {
        u64::from(self.row.abs_diff(other.row)) + u64::from(self.col.abs_diff(other.col)) == 1
    }

    /// `self - rhs`, or `None` if either component overflows.
    #[inline]
    pub fn checked_sub(self, rhs: Cell) -> Option<Cell> {
        Some(Self::new(
            self.row.checked_sub(rhs.row)?,
            self.col.checked_sub(rhs.col)?,
        ))
    }
}

// --- trait impls for Cell ---

impl PartialOrd for Cell {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cell {
    /// Row-major order.
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl Add for Cell {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Cell {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// A navigation instruction derived from two consecutive path cells.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    /// Any displacement that is not a single cardinal step.
    Unknown,
}

impl Direction {
    /// The four real directions.
    pub const CARDINAL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The direction of the step from `from` to `to`. Anything other than a
    /// single cardinal step, including displacements too large to represent,
    /// is [`Unknown`](Direction::Unknown).
    pub fn between(from: Cell, to: Cell) -> Self {
        to.checked_sub(from).map_or(Self::Unknown, Self::from_delta)
    }

    /// Map a `(Δrow, Δcol)` displacement to a direction.
    pub fn from_delta(delta: Cell) -> Self {
        match (delta.row, delta.col) {
            (-1, 0) => Self::Up,
            (1, 0) => Self::Down,
            (0, -1) => Self::Left,
            (0, 1) => Self::Right,
            _ => Self::Unknown,
        }
    }

    /// The displacement of one step in this direction. `None` for
    /// [`Unknown`](Direction::Unknown).
    pub const fn delta(self) -> Option<Cell> {
        match self {
            Self::Up => Some(Cell::new(-1, 0)),
            Self::Down => Some(Cell::new(1, 0)),
            Self::Left => Some(Cell::new(0, -1)),
            Self::Right => Some(Cell::new(0, 1)),
            Self::Unknown => None,
        }
    }

    /// Upper-case instruction label, e.g. `"UP"`.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Up => "UP",
            Self::Down => "DOWN",
            Self::Left => "LEFT",
            Self::Right => "RIGHT",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn cell_round_trip() {
        let c = Cell::new(3, 7);
        let json = serde_json::to_string(&c).unwrap();
        let back: Cell = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }

    #[test]
    fn direction_round_trip() {
        let json = serde_json::to_string(&Direction::Left).unwrap();
        let back: Direction = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Direction::Left);
    }
}

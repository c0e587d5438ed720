use gridnav_core::{Cell, OccupancyGrid};

use crate::distance::manhattan;
use crate::neighbors::FreeNeighbors;

/// Minimal pathfinding interface: neighbor enumeration.
pub trait Pather {
    /// Append neighbors of `c` into `buf`. The caller clears `buf` before calling.
    fn neighbors(&self, c: Cell, buf: &mut Vec<Cell>);
}

/// Pather with weighted (positive-cost) edges.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` to adjacent `to`. Must be > 0.
    fn cost(&self, from: Cell, to: Cell) -> i32;
}

/// Full A* pather with an admissible heuristic.
pub trait AstarPather: WeightedPather {
    /// Heuristic estimate of distance from `from` to `to`.
    /// Must never overestimate the true cost (admissible).
    fn estimate(&self, from: Cell, to: Cell) -> i32;
}

// An occupancy grid is a 4-connected, unit-cost graph over its free cells.

impl Pather for OccupancyGrid {
    fn neighbors(&self, c: Cell, buf: &mut Vec<Cell>) {
        buf.extend(FreeNeighbors::new(self, c));
    }
}

impl WeightedPather for OccupancyGrid {
    #[inline]
    fn cost(&self, _from: Cell, _to: Cell) -> i32 {
        1
    }
}

impl AstarPather for OccupancyGrid {
    #[inline]
    fn estimate(&self, from: Cell, to: Cell) -> i32 {
        manhattan(from, to)
    }
}

use std::collections::VecDeque;

use gridnav_core::Cell;

use crate::GridPathfinder;
use crate::traits::Pather;

/// Sentinel value meaning "unreachable" in a [`DistanceMap`].
pub const UNREACHABLE: i32 = i32::MAX;

/// Step counts from a single source cell to every cell of a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMap {
    source: Cell,
    rows: usize,
    cols: usize,
    dist: Vec<i32>,
}

impl DistanceMap {
    /// The cell distances were measured from.
    pub fn source(&self) -> Cell {
        self.source
    }

    /// Step count to `c`, or [`UNREACHABLE`] if `c` is out of bounds or
    /// cannot be reached.
    pub fn at(&self, c: Cell) -> i32 {
        if c.row < 0 || c.col < 0 || c.row as usize >= self.rows || c.col as usize >= self.cols {
            return UNREACHABLE;
        }
        self.dist[c.row as usize * self.cols + c.col as usize]
    }

    /// Whether `c` can be reached from the source.
    pub fn reachable(&self, c: Cell) -> bool {
        self.at(c) != UNREACHABLE
    }

    /// Number of cells reachable from the source, the source included.
    pub fn reachable_count(&self) -> usize {
        self.dist.iter().filter(|&&d| d != UNREACHABLE).count()
    }
}

impl GridPathfinder {
    /// Compute a breadth-first step-distance map from `from`.
    ///
    /// Each step has cost 1. A blocked or out-of-bounds source yields a map
    /// where every cell is [`UNREACHABLE`].
    pub fn step_distances(&self, from: Cell) -> DistanceMap {
        let grid = self.grid();
        let mut dist = vec![UNREACHABLE; grid.len()];

        let mut queue: VecDeque<usize> = VecDeque::new();
        if let Some(si) = self.idx(from) {
            if grid.is_free(from) {
                dist[si] = 0;
                queue.push_back(si);
            }
        }

        let mut nbuf = Vec::with_capacity(4);

        while let Some(ci) = queue.pop_front() {
            let current_dist = dist[ci];
            let cp = self.cell(ci);

            nbuf.clear();
            grid.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                if dist[ni] != UNREACHABLE {
                    continue;
                }
                dist[ni] = current_dist + 1;
                queue.push_back(ni);
            }
        }

        DistanceMap {
            source: from,
            rows: grid.rows(),
            cols: grid.cols(),
            dist,
        }
    }
}

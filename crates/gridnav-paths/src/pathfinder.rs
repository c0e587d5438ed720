use gridnav_core::{Cell, InvalidGrid, Occupancy, OccupancyGrid};

use crate::error::{Endpoint, EndpointFault, QueryError};
use crate::neighbors::FreeNeighbors;
use crate::path::Path;

// ---------------------------------------------------------------------------
// Internal node for the A* priority-queue search
// ---------------------------------------------------------------------------

/// Per-cell bookkeeping, allocated fresh for each query.
#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) g: i32,
    pub(crate) parent: usize,
    pub(crate) seen: bool,
    pub(crate) closed: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: 0,
            parent: usize::MAX,
            seen: false,
            closed: false,
        }
    }
}

/// Frontier entry, ordered for use in `BinaryHeap`.
///
/// Key is `(f, h, cell)` ascending, with the cell compared in row-major
/// order. A cell is only re-pushed when its `g` strictly drops, so no two
/// entries share the full key and the pop order is total.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) cell: Cell,
    pub(crate) f: i32,
    pub(crate) h: i32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest key first.
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.h.cmp(&self.h))
            .then_with(|| other.cell.cmp(&self.cell))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// GridPathfinder
// ---------------------------------------------------------------------------

/// Shortest-path queries over an [`OccupancyGrid`].
///
/// The pathfinder only stores the grid. Frontier, cost and predecessor
/// tables are created per query and dropped when it returns, so a
/// `GridPathfinder` can be shared by reference or cloned into a worker.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPathfinder {
    grid: OccupancyGrid,
}

impl GridPathfinder {
    /// Create a pathfinder over an already-validated grid.
    pub fn new(grid: OccupancyGrid) -> Self {
        Self { grid }
    }

    /// Validate `rows` and create a pathfinder over them.
    pub fn from_rows(rows: Vec<Vec<Occupancy>>) -> Result<Self, InvalidGrid> {
        OccupancyGrid::from_rows(rows).map(Self::new)
    }

    /// The grid being searched.
    #[inline]
    pub fn grid(&self) -> &OccupancyGrid {
        &self.grid
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    /// Replace the grid wholesale between queries.
    pub fn set_grid(&mut self, grid: OccupancyGrid) {
        self.grid = grid;
    }

    pub fn into_grid(self) -> OccupancyGrid {
        self.grid
    }

    /// The free, in-bounds cardinal neighbors of `c` (right, down, left, up).
    pub fn neighbors(&self, c: Cell) -> FreeNeighbors<'_> {
        FreeNeighbors::new(&self.grid, c)
    }

    /// Compute a minimum-step path from `start` to `end`.
    ///
    /// Returns `Ok(Some(path))` with both endpoints included, `Ok(None)` if
    /// `end` is unreachable, or [`QueryError::InvalidEndpoint`] if either
    /// endpoint is out of bounds or blocked. The start is checked first.
    pub fn find_path(&self, start: Cell, end: Cell) -> Result<Option<Path>, QueryError> {
        self.find_path_with(start, end, || false)
    }

    /// Like [`find_path`](Self::find_path), but polls `should_stop` before
    /// every frontier pop and returns [`QueryError::Cancelled`] as soon as
    /// it answers `true`.
    pub fn find_path_with(
        &self,
        start: Cell,
        end: Cell,
        should_stop: impl FnMut() -> bool,
    ) -> Result<Option<Path>, QueryError> {
        self.check_endpoint(Endpoint::Start, start)?;
        self.check_endpoint(Endpoint::End, end)?;
        self.astar(&self.grid, start, end, should_stop)
    }

    fn check_endpoint(&self, endpoint: Endpoint, cell: Cell) -> Result<(), QueryError> {
        let fault = match self.grid.at(cell) {
            None => EndpointFault::OutOfBounds,
            Some(Occupancy::Blocked) => EndpointFault::Blocked,
            Some(Occupancy::Free) => return Ok(()),
        };
        log::warn!("rejecting {endpoint} position {cell}: {fault:?}");
        Err(QueryError::InvalidEndpoint {
            endpoint,
            cell,
            fault,
        })
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Cell` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, c: Cell) -> Option<usize> {
        self.grid.index(c)
    }

    /// Convert a flat index back to a `Cell`.
    #[inline]
    pub(crate) fn cell(&self, idx: usize) -> Cell {
        self.grid.cell(idx)
    }
}

impl From<OccupancyGrid> for GridPathfinder {
    fn from(grid: OccupancyGrid) -> Self {
        Self::new(grid)
    }
}

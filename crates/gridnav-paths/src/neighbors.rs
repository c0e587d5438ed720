use gridnav_core::{Cell, OccupancyGrid};

/// Iterator over the free, in-bounds cardinal neighbors of a cell.
///
/// Neighbors are yielded in the fixed order right, down, left, up. The
/// iterator is `Clone`, so a sequence can be restarted from any point.
#[derive(Clone)]
pub struct FreeNeighbors<'a> {
    grid: &'a OccupancyGrid,
    candidates: [Cell; 4],
    next: usize,
}

impl<'a> FreeNeighbors<'a> {
    /// Create the neighbor sequence of `c` in `grid`.
    pub fn new(grid: &'a OccupancyGrid, c: Cell) -> Self {
        Self {
            grid,
            candidates: c.neighbors_4(),
            next: 0,
        }
    }
}

impl Iterator for FreeNeighbors<'_> {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        while self.next < self.candidates.len() {
            let n = self.candidates[self.next];
            self.next += 1;
            if self.grid.is_free(n) {
                return Some(n);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.candidates.len() - self.next))
    }
}

//! The [`OccupancyGrid`] type, a rectangular map of free and blocked cells.
//!
//! Unlike a view-based grid, an `OccupancyGrid` owns its storage outright so
//! it can be cloned into a background worker and sent across threads.

use std::fmt;

use crate::geom::Cell;

/// Whether a cell can be traversed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Occupancy {
    #[default]
    Free,
    Blocked,
}

impl Occupancy {
    /// `0` is free; any other value is blocked.
    #[inline]
    pub const fn from_value(v: i32) -> Self {
        if v == 0 { Self::Free } else { Self::Blocked }
    }

    /// Canonical integer form: `0` free, `1` blocked.
    #[inline]
    pub const fn value(self) -> i32 {
        match self {
            Self::Free => 0,
            Self::Blocked => 1,
        }
    }

    /// The opposite occupancy.
    #[inline]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Free => Self::Blocked,
            Self::Blocked => Self::Free,
        }
    }

    #[inline]
    pub const fn is_free(self) -> bool {
        matches!(self, Self::Free)
    }
}

impl From<i32> for Occupancy {
    fn from(v: i32) -> Self {
        Self::from_value(v)
    }
}

/// Errors raised when building a grid from rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidGrid {
    /// No rows at all.
    Empty,
    /// The first row has no columns.
    EmptyRow,
    /// A row's length differs from the first row's.
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl fmt::Display for InvalidGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "invalid grid: no rows"),
            Self::EmptyRow => write!(f, "invalid grid: rows have no columns"),
            Self::Ragged {
                row,
                expected,
                found,
            } => write!(
                f,
                "invalid grid: row {row} has {found} columns, expected {expected}"
            ),
        }
    }
}

impl std::error::Error for InvalidGrid {}

/// A non-empty rectangular occupancy grid stored in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OccupancyGrid {
    cells: Vec<Occupancy>,
    rows: usize,
    cols: usize,
}

impl OccupancyGrid {
    /// Build a grid from a list of rows. Every row must have the same,
    /// non-zero length.
    pub fn from_rows(rows: Vec<Vec<Occupancy>>) -> Result<Self, InvalidGrid> {
        let Some(first) = rows.first() else {
            return Err(InvalidGrid::Empty);
        };
        let cols = first.len();
        if cols == 0 {
            return Err(InvalidGrid::EmptyRow);
        }
        let n_rows = rows.len();
        let mut cells = Vec::with_capacity(n_rows * cols);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != cols {
                return Err(InvalidGrid::Ragged {
                    row: i,
                    expected: cols,
                    found: row.len(),
                });
            }
            cells.extend(row);
        }
        Ok(Self {
            cells,
            rows: n_rows,
            cols,
        })
    }

    /// Create a `rows × cols` grid with every cell set to `occ`.
    pub fn filled(rows: usize, cols: usize, occ: Occupancy) -> Result<Self, InvalidGrid> {
        if rows == 0 {
            return Err(InvalidGrid::Empty);
        }
        if cols == 0 {
            return Err(InvalidGrid::EmptyRow);
        }
        Ok(Self {
            cells: vec![occ; rows * cols],
            rows,
            cols,
        })
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`: construction rejects empty grids.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `c` lies within the grid bounds.
    #[inline]
    pub fn contains(&self, c: Cell) -> bool {
        c.row >= 0 && c.col >= 0 && (c.row as usize) < self.rows && (c.col as usize) < self.cols
    }

    /// Flat row-major index of `c`, or `None` if out of bounds.
    #[inline]
    pub fn index(&self, c: Cell) -> Option<usize> {
        if !self.contains(c) {
            return None;
        }
        Some(c.row as usize * self.cols + c.col as usize)
    }

    /// Convert a flat index back to a cell.
    #[inline]
    pub fn cell(&self, idx: usize) -> Cell {
        Cell::new((idx / self.cols) as i32, (idx % self.cols) as i32)
    }

    /// Occupancy at `c`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, c: Cell) -> Option<Occupancy> {
        self.index(c).map(|i| self.cells[i])
    }

    /// Whether `c` is in bounds and free.
    #[inline]
    pub fn is_free(&self, c: Cell) -> bool {
        self.at(c) == Some(Occupancy::Free)
    }

    /// Set the occupancy at `c`. Returns `false` if out of bounds.
    pub fn set(&mut self, c: Cell, occ: Occupancy) -> bool {
        match self.index(c) {
            Some(i) => {
                self.cells[i] = occ;
                true
            }
            None => false,
        }
    }

    /// Flip the occupancy at `c`, returning the new value.
    pub fn toggle(&mut self, c: Cell) -> Option<Occupancy> {
        let i = self.index(c)?;
        self.cells[i] = self.cells[i].toggled();
        Some(self.cells[i])
    }

    /// Fill the entire grid with `occ`.
    pub fn fill(&mut self, occ: Occupancy) {
        self.cells.fill(occ);
    }

    /// One row as a slice.
    pub fn row(&self, r: usize) -> Option<&[Occupancy]> {
        if r >= self.rows {
            return None;
        }
        Some(&self.cells[r * self.cols..(r + 1) * self.cols])
    }

    /// Iterate over `(Cell, Occupancy)` pairs in row-major order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (Cell, Occupancy)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &occ)| (self.cell(i), occ))
    }

    /// Count how many cells have the given occupancy.
    pub fn count(&self, occ: Occupancy) -> usize {
        self.cells.iter().filter(|&&c| c == occ).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use Occupancy::{Blocked as B, Free as F};

    #[test]
    fn from_rows_dimensions() {
        let g = OccupancyGrid::from_rows(vec![vec![F, B, F], vec![F, F, F]]).unwrap();
        assert_eq!(g.rows(), 2);
        assert_eq!(g.cols(), 3);
        assert_eq!(g.len(), 6);
        assert_eq!(g.at(Cell::new(0, 1)), Some(B));
        assert_eq!(g.at(Cell::new(1, 2)), Some(F));
    }

    #[test]
    fn from_rows_rejects_empty() {
        assert_eq!(OccupancyGrid::from_rows(vec![]), Err(InvalidGrid::Empty));
        assert_eq!(
            OccupancyGrid::from_rows(vec![vec![], vec![]]),
            Err(InvalidGrid::EmptyRow)
        );
    }

    #[test]
    fn from_rows_rejects_ragged() {
        let err = OccupancyGrid::from_rows(vec![vec![F, F], vec![F], vec![F, F]]).unwrap_err();
        assert_eq!(
            err,
            InvalidGrid::Ragged {
                row: 1,
                expected: 2,
                found: 1
            }
        );
        assert_eq!(
            err.to_string(),
            "invalid grid: row 1 has 1 columns, expected 2"
        );
    }

    #[test]
    fn filled_rejects_zero_dimensions() {
        assert_eq!(OccupancyGrid::filled(0, 3, F), Err(InvalidGrid::Empty));
        assert_eq!(OccupancyGrid::filled(3, 0, F), Err(InvalidGrid::EmptyRow));
        let g = OccupancyGrid::filled(2, 2, B).unwrap();
        assert_eq!(g.count(B), 4);
    }

    #[test]
    fn out_of_bounds_is_not_free() {
        let g = OccupancyGrid::filled(2, 2, F).unwrap();
        assert!(g.is_free(Cell::new(1, 1)));
        assert!(!g.is_free(Cell::new(-1, 0)));
        assert!(!g.is_free(Cell::new(0, 2)));
        assert!(!g.is_free(Cell::new(2, 0)));
        assert_eq!(g.at(Cell::new(5, 5)), None);
    }

    #[test]
    fn set_and_toggle() {
        let mut g = OccupancyGrid::filled(3, 3, F).unwrap();
        assert!(g.set(Cell::new(1, 1), B));
        assert!(!g.set(Cell::new(3, 1), B));
        assert_eq!(g.toggle(Cell::new(1, 1)), Some(F));
        assert_eq!(g.toggle(Cell::new(0, 0)), Some(B));
        assert_eq!(g.toggle(Cell::new(-1, 0)), None);
        assert_eq!(g.count(B), 1);
    }

    #[test]
    fn index_round_trip() {
        let g = OccupancyGrid::filled(4, 7, F).unwrap();
        for (c, _) in g.iter() {
            let i = g.index(c).unwrap();
            assert_eq!(g.cell(i), c);
        }
    }

    #[test]
    fn iter_is_row_major() {
        let mut g = OccupancyGrid::filled(2, 3, F).unwrap();
        g.set(Cell::new(0, 1), B);
        let items: Vec<_> = g.iter().collect();
        assert_eq!(items.len(), 6);
        assert_eq!(items[1], (Cell::new(0, 1), B));
        assert_eq!(items[3].0, Cell::new(1, 0));
    }

    #[test]
    fn row_slices() {
        let g = OccupancyGrid::from_rows(vec![vec![F, B], vec![B, B]]).unwrap();
        assert_eq!(g.row(0), Some(&[F, B][..]));
        assert_eq!(g.row(1), Some(&[B, B][..]));
        assert_eq!(g.row(2), None);
    }

    #[test]
    fn occupancy_values() {
        assert_eq!(Occupancy::from_value(0), F);
        assert_eq!(Occupancy::from_value(1), B);
        assert_eq!(Occupancy::from_value(-3), B);
        assert_eq!(Occupancy::from(7), B);
        assert_eq!(B.value(), 1);
        assert_eq!(F.toggled(), B);
        assert!(F.is_free());
    }
}

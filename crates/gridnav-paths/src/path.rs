use gridnav_core::{Cell, Direction};

use crate::directions::directions_of;

/// A path from start to end inclusive. Consecutive cells are one cardinal
/// step apart and no cell repeats.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Path(Vec<Cell>);

impl Path {
    /// Wrap an already-reconstructed, non-empty cell sequence.
    pub(crate) fn from_cells(cells: Vec<Cell>) -> Self {
        debug_assert!(!cells.is_empty());
        Self(cells)
    }

    /// The cells of the path.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.0
    }

    /// Number of cells, including both endpoints.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never true for a path returned by a search.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of moves (`len() - 1`).
    #[inline]
    pub fn steps(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    /// First cell.
    pub fn start(&self) -> Option<Cell> {
        self.0.first().copied()
    }

    /// Last cell.
    pub fn end(&self) -> Option<Cell> {
        self.0.last().copied()
    }

    pub fn contains(&self, c: Cell) -> bool {
        self.0.contains(&c)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.0.iter()
    }

    /// The navigation instructions for this path, one per step.
    pub fn directions(&self) -> Vec<Direction> {
        directions_of(&self.0)
    }

    pub fn into_cells(self) -> Vec<Cell> {
        self.0
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl AsRef<[Cell]> for Path {
    fn as_ref(&self) -> &[Cell] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let p = Path::from_cells(vec![Cell::new(0, 0), Cell::new(0, 1), Cell::new(1, 1)]);
        assert_eq!(p.len(), 3);
        assert_eq!(p.steps(), 2);
        assert_eq!(p.start(), Some(Cell::new(0, 0)));
        assert_eq!(p.end(), Some(Cell::new(1, 1)));
        assert!(p.contains(Cell::new(0, 1)));
        assert!(!p.contains(Cell::new(1, 0)));
        assert_eq!(p.directions(), vec![Direction::Right, Direction::Down]);
    }

    #[test]
    fn single_cell_path_has_no_steps() {
        let p = Path::from_cells(vec![Cell::new(2, 2)]);
        assert_eq!(p.steps(), 0);
        assert!(p.directions().is_empty());
        assert_eq!(p.start(), p.end());
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn path_serializes_as_cell_list() {
        let p = Path::from_cells(vec![Cell::new(0, 0), Cell::new(1, 0)]);
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, r#"[{"row":0,"col":0},{"row":1,"col":0}]"#);
        let back: Path = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }
}

use gridnav_core::{Cell, Direction};

/// Translate a sequence of cells into navigation instructions.
///
/// Each consecutive pair yields one [`Direction`]; a displacement that is
/// not a single cardinal step yields [`Direction::Unknown`]. Paths shorter
/// than two cells produce no instructions.
pub fn directions_of(cells: &[Cell]) -> Vec<Direction> {
    cells
        .windows(2)
        .map(|w| Direction::between(w[0], w[1]))
        .collect()
}

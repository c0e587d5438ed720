use gridnav_core::Cell;

/// Manhattan (L1) distance between two cells.
///
/// Admissible and consistent for 4-connected unit-cost movement. Saturates
/// at `i32::MAX` for cells too far apart to represent.
#[inline]
pub fn manhattan(a: Cell, b: Cell) -> i32 {
    let d = u64::from(a.row.abs_diff(b.row)) + u64::from(a.col.abs_diff(b.col));
    i32::try_from(d).unwrap_or(i32::MAX)
}

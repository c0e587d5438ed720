//! Plain-text map drawing.
//!
//! | Glyph | Meaning |
//! |---|---|
//! | `#` | blocked |
//! | `.` | free |
//! | `*` | path |
//! | `S` | start |
//! | `G` | goal |

use std::collections::HashSet;

use gridnav_core::{Cell, Occupancy, OccupancyGrid};

pub const BLOCKED: char = '#';
pub const FREE: char = '.';
pub const PATH: char = '*';
pub const START: char = 'S';
pub const GOAL: char = 'G';

/// Markers drawn on top of the grid.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOverlay<'a> {
    pub start: Option<Cell>,
    pub goal: Option<Cell>,
    pub path: Option<&'a [Cell]>,
}

/// Glyph for a single cell. Start and goal take precedence over the path,
/// and the path over the cell's occupancy.
pub fn glyph(occ: Occupancy, c: Cell, overlay: &RenderOverlay<'_>, on_path: bool) -> char {
    if overlay.start == Some(c) {
        START
    } else if overlay.goal == Some(c) {
        GOAL
    } else if on_path {
        PATH
    } else if occ == Occupancy::Blocked {
        BLOCKED
    } else {
        FREE
    }
}

/// Draw `grid` with `overlay`, one line per row, each line ending in `\n`.
pub fn render(grid: &OccupancyGrid, overlay: RenderOverlay<'_>) -> String {
    let on_path: HashSet<Cell> = overlay
        .path
        .map(|p| p.iter().copied().collect())
        .unwrap_or_default();
    let mut out = String::with_capacity((grid.cols() + 1) * grid.rows());
    for (c, occ) in grid.iter() {
        out.push(glyph(occ, c, &overlay, on_path.contains(&c)));
        if c.col as usize == grid.cols() - 1 {
            out.push('\n');
        }
    }
    out
}

//! Terminal output for maps and routes.

use std::collections::HashSet;
use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};

use gridnav_core::{Cell, Direction, OccupancyGrid};
use gridnav_io::render::{self, RenderOverlay};
use gridnav_paths::Path;

/// Color used for a glyph produced by [`render::glyph`].
fn glyph_color(ch: char) -> Color {
    match ch {
        render::START => Color::Green,
        render::GOAL => Color::Red,
        render::PATH => Color::Blue,
        render::BLOCKED => Color::DarkGrey,
        _ => Color::Grey,
    }
}

/// Draw the grid. With `color` unset this writes exactly
/// [`render::render`]'s output.
pub fn draw_grid<W: Write>(
    out: &mut W,
    grid: &OccupancyGrid,
    overlay: RenderOverlay<'_>,
    color: bool,
) -> io::Result<()> {
    if !color {
        return out.write_all(render::render(grid, overlay).as_bytes());
    }
    let on_path: HashSet<Cell> = overlay
        .path
        .map(|p| p.iter().copied().collect())
        .unwrap_or_default();
    for (c, occ) in grid.iter() {
        let ch = render::glyph(occ, c, &overlay, on_path.contains(&c));
        queue!(out, SetForegroundColor(glyph_color(ch)), Print(ch))?;
        if c.col as usize == grid.cols() - 1 {
            queue!(out, ResetColor, Print('\n'))?;
        }
    }
    out.flush()
}

/// Print a route: length, numbered instructions and numbered coordinates.
pub fn print_route<W: Write>(out: &mut W, path: &Path) -> io::Result<()> {
    writeln!(out, "Path found! Length: {} steps", path.steps())?;
    writeln!(out)?;
    writeln!(out, "=== NAVIGATION INSTRUCTIONS ===")?;
    for (i, d) in path.directions().iter().enumerate() {
        writeln!(out, "Step {}: {d}", i + 1)?;
    }
    writeln!(out)?;
    writeln!(out, "=== PATH COORDINATES ===")?;
    for (i, c) in path.iter().enumerate() {
        writeln!(out, "Step {i}: {c}")?;
    }
    Ok(())
}

/// Collapse consecutive identical directions, e.g. `DOWN x3`.
pub fn summarize(directions: &[Direction]) -> Vec<(Direction, usize)> {
    let mut runs: Vec<(Direction, usize)> = Vec::new();
    for &d in directions {
        if let Some((last, n)) = runs.last_mut() {
            if *last == d {
                *n += 1;
                continue;
            }
        }
        runs.push((d, 1));
    }
    runs
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridnav_core::Occupancy;
    use gridnav_paths::GridPathfinder;

    #[test]
    fn plain_draw_matches_render() {
        let g = OccupancyGrid::filled(2, 3, Occupancy::Free).unwrap();
        let mut out = Vec::new();
        draw_grid(&mut out, &g, RenderOverlay::default(), false).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "...\n...\n");
    }

    #[test]
    fn colored_draw_keeps_glyphs() {
        let g = OccupancyGrid::filled(1, 2, Occupancy::Free).unwrap();
        let mut out = Vec::new();
        let overlay = RenderOverlay {
            start: Some(Cell::new(0, 0)),
            goal: Some(Cell::new(0, 1)),
            path: None,
        };
        draw_grid(&mut out, &g, overlay, true).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains('S'));
        assert!(text.contains('G'));
        assert!(text.contains('\x1b'));
    }

    #[test]
    fn route_listing() {
        let pf = GridPathfinder::new(OccupancyGrid::filled(1, 3, Occupancy::Free).unwrap());
        let path = pf
            .find_path(Cell::new(0, 0), Cell::new(0, 2))
            .unwrap()
            .unwrap();
        let mut out = Vec::new();
        print_route(&mut out, &path).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Path found! Length: 2 steps"));
        assert!(text.contains("Step 2: RIGHT"));
        assert!(text.contains("Step 2: (0, 2)"));
    }

    #[test]
    fn summarize_runs() {
        use Direction::*;
        assert_eq!(
            summarize(&[Down, Down, Right, Down]),
            vec![(Down, 2), (Right, 1), (Down, 1)]
        );
        assert!(summarize(&[]).is_empty());
    }
}

//! Interactive endpoint entry.

use std::io::{self, BufRead, Write};

use gridnav_core::{Cell, Occupancy, OccupancyGrid};

use crate::cli::parse_cell;

/// Ask for a free cell until one is entered.
///
/// Malformed input, out-of-bounds cells and blocked cells each get their own
/// message and a new prompt. Returns `Ok(None)` when the input ends.
pub fn prompt_cell<R: BufRead, W: Write>(
    grid: &OccupancyGrid,
    label: &str,
    input: &mut R,
    out: &mut W,
) -> io::Result<Option<Cell>> {
    let mut line = String::new();
    loop {
        write!(out, "Enter {} position (row,col): ", label.to_lowercase())?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(None);
        }

        let cell = match parse_cell(line.trim()) {
            Ok(c) => c,
            Err(_) => {
                writeln!(out, "Invalid input! Please enter as: row,col (e.g., 10,20)")?;
                continue;
            }
        };
        match grid.at(cell) {
            None => writeln!(out, "{label} position out of bounds!")?,
            Some(Occupancy::Blocked) => writeln!(out, "{label} position is blocked!")?,
            Some(Occupancy::Free) => return Ok(Some(cell)),
        }
    }
}

/// Print the grid size and coordinate convention.
pub fn print_intro<W: Write>(grid: &OccupancyGrid, out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "Grid dimensions: {} rows x {} columns",
        grid.rows(),
        grid.cols()
    )?;
    writeln!(out, "Enter coordinates as (row, column) where (0,0) is top-left")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> OccupancyGrid {
        let mut g = OccupancyGrid::filled(3, 3, Occupancy::Free).unwrap();
        g.set(Cell::new(1, 1), Occupancy::Blocked);
        g
    }

    #[test]
    fn accepts_first_valid_entry() {
        let mut input = "2,2\n".as_bytes();
        let mut out = Vec::new();
        let c = prompt_cell(&grid(), "Start", &mut input, &mut out).unwrap();
        assert_eq!(c, Some(Cell::new(2, 2)));
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Enter start position (row,col): "
        );
    }

    #[test]
    fn reprompts_with_specific_messages() {
        let mut input = "oops\n5,0\n1,1\n0, 2\n".as_bytes();
        let mut out = Vec::new();
        let c = prompt_cell(&grid(), "End", &mut input, &mut out).unwrap();
        assert_eq!(c, Some(Cell::new(0, 2)));
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Invalid input!"));
        assert!(text.contains("End position out of bounds!"));
        assert!(text.contains("End position is blocked!"));
        assert_eq!(text.matches("Enter end position").count(), 4);
    }

    #[test]
    fn end_of_input_yields_none() {
        let mut input = "x\n".as_bytes();
        let mut out = Vec::new();
        assert_eq!(
            prompt_cell(&grid(), "Start", &mut input, &mut out).unwrap(),
            None
        );
    }

    #[test]
    fn intro_mentions_dimensions() {
        let mut out = Vec::new();
        print_intro(&grid(), &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().starts_with("Grid dimensions: 3 rows x 3 columns"));
    }
}

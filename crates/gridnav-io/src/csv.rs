//! Comma-separated occupancy grids.
//!
//! Each non-blank line is one row of integers. `0` marks a free cell and any
//! other integer a blocked one. Whitespace around a field is ignored.
//!
//! ```text
//! 0,0,1,0
//! 0,1,1,0
//! 0,0,0,0
//! ```

use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;

use gridnav_core::{InvalidGrid, Occupancy, OccupancyGrid};

/// Errors that can occur when loading a grid.
#[derive(Debug)]
pub enum LoadError {
    /// The source could not be read.
    Io(io::Error),
    /// A field is not an integer. `line` and `column` are 1-based.
    Parse {
        line: usize,
        column: usize,
        value: String,
    },
    /// A row's field count differs from the first row's.
    Dimension {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// The source has no rows.
    Empty,
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "cannot read grid: {e}"),
            Self::Parse {
                line,
                column,
                value,
            } => write!(
                f,
                "line {line}, field {column}: '{value}' is not an integer"
            ),
            Self::Dimension {
                line,
                expected,
                found,
            } => write!(f, "line {line}: expected {expected} fields, found {found}"),
            Self::Empty => write!(f, "grid file has no rows"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<InvalidGrid> for LoadError {
    fn from(e: InvalidGrid) -> Self {
        match e {
            InvalidGrid::Empty | InvalidGrid::EmptyRow => Self::Empty,
            InvalidGrid::Ragged {
                row,
                expected,
                found,
            } => Self::Dimension {
                line: row + 1,
                expected,
                found,
            },
        }
    }
}

/// Parse a grid from comma-separated text.
pub fn parse_grid(text: &str) -> Result<OccupancyGrid, LoadError> {
    let mut rows: Vec<Vec<Occupancy>> = Vec::new();
    let mut width = None;

    for (i, line) in text.lines().enumerate() {
        let line_no = i + 1;
        if line.trim().is_empty() {
            continue;
        }
        let mut row = Vec::new();
        for (j, field) in line.split(',').enumerate() {
            let field = field.trim();
            let v: i32 = field.parse().map_err(|_| LoadError::Parse {
                line: line_no,
                column: j + 1,
                value: field.to_string(),
            })?;
            row.push(Occupancy::from_value(v));
        }
        match width {
            None => width = Some(row.len()),
            Some(w) if w != row.len() => {
                return Err(LoadError::Dimension {
                    line: line_no,
                    expected: w,
                    found: row.len(),
                });
            }
            Some(_) => {}
        }
        rows.push(row);
    }

    Ok(OccupancyGrid::from_rows(rows)?)
}

/// Read and parse a grid from any reader.
pub fn read_grid<R: Read>(mut r: R) -> Result<OccupancyGrid, LoadError> {
    let mut text = String::new();
    r.read_to_string(&mut text)?;
    parse_grid(&text)
}

/// Load a grid from a file.
pub fn load_grid(path: impl AsRef<Path>) -> Result<OccupancyGrid, LoadError> {
    let path = path.as_ref();
    let grid = read_grid(File::open(path)?)?;
    log::info!(
        "loaded {}x{} grid from {}",
        grid.rows(),
        grid.cols(),
        path.display()
    );
    Ok(grid)
}

/// Write a grid as `0`/`1` comma-separated rows.
pub fn write_grid<W: Write>(grid: &OccupancyGrid, mut w: W) -> io::Result<()> {
    for r in 0..grid.rows() {
        let Some(row) = grid.row(r) else {
            break;
        };
        let mut first = true;
        for occ in row {
            if !first {
                w.write_all(b",")?;
            }
            first = false;
            write!(w, "{}", occ.value())?;
        }
        w.write_all(b"\n")?;
    }
    w.flush()
}

/// Save a grid to a file, replacing any existing content.
pub fn save_grid(grid: &OccupancyGrid, path: impl AsRef<Path>) -> io::Result<()> {
    let path = path.as_ref();
    write_grid(grid, BufWriter::new(File::create(path)?))?;
    log::info!("saved grid to {}", path.display());
    Ok(())
}

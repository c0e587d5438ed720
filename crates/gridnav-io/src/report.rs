//! Human-readable path export.

use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};

use gridnav_core::{Cell, Direction};
use gridnav_paths::Path;

/// A found path together with its navigation instructions.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathReport {
    pub start: Cell,
    pub end: Cell,
    /// Number of moves.
    pub steps: usize,
    pub directions: Vec<Direction>,
    pub cells: Vec<Cell>,
}

impl PathReport {
    /// Build a report for `path`.
    pub fn new(path: &Path) -> Self {
        Self {
            start: path.start().unwrap_or_default(),
            end: path.end().unwrap_or_default(),
            steps: path.steps(),
            directions: path.directions(),
            cells: path.cells().to_vec(),
        }
    }

    /// Serialize the report as pretty-printed JSON.
    #[cfg(feature = "serde")]
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for PathReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Navigation Path Export")?;
        writeln!(f, "{}", "=".repeat(30))?;
        writeln!(f)?;
        writeln!(f, "Start Position: {}", self.start)?;
        writeln!(f, "End Position: {}", self.end)?;
        writeln!(f, "Path Length: {} steps", self.steps)?;
        writeln!(f)?;
        writeln!(f, "Navigation Instructions:")?;
        writeln!(f, "{}", "-".repeat(25))?;
        for (i, d) in self.directions.iter().enumerate() {
            writeln!(f, "Step {}: {d}", i + 1)?;
        }
        writeln!(f)?;
        writeln!(f, "Path Coordinates:")?;
        writeln!(f, "{}", "-".repeat(20))?;
        for (i, c) in self.cells.iter().enumerate() {
            writeln!(f, "Step {i}: {c}")?;
        }
        Ok(())
    }
}

/// Write the text report for `path` to a file.
pub fn write_report(path: &Path, file: impl AsRef<std::path::Path>) -> io::Result<()> {
    let file = file.as_ref();
    let mut w = BufWriter::new(File::create(file)?);
    write!(w, "{}", PathReport::new(path))?;
    w.flush()?;
    log::info!("exported {}-step path to {}", path.steps(), file.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridnav_core::{Occupancy, OccupancyGrid};
    use gridnav_paths::GridPathfinder;

    fn straight_path() -> Path {
        let pf = GridPathfinder::new(OccupancyGrid::filled(3, 1, Occupancy::Free).unwrap());
        pf.find_path(Cell::new(0, 0), Cell::new(2, 0))
            .unwrap()
            .unwrap()
    }

    #[test]
    fn report_text() {
        let report = PathReport::new(&straight_path());
        let expected = "\
Navigation Path Export
==============================

Start Position: (0, 0)
End Position: (2, 0)
Path Length: 2 steps

Navigation Instructions:
-------------------------
Step 1: DOWN
Step 2: DOWN

Path Coordinates:
--------------------
Step 0: (0, 0)
Step 1: (1, 0)
Step 2: (2, 0)
";
        assert_eq!(report.to_string(), expected);
    }

    #[test]
    fn single_cell_report_has_no_instructions() {
        let pf = GridPathfinder::new(OccupancyGrid::filled(1, 1, Occupancy::Free).unwrap());
        let path = pf.find_path(Cell::ZERO, Cell::ZERO).unwrap().unwrap();
        let report = PathReport::new(&path);
        assert_eq!(report.steps, 0);
        assert!(report.directions.is_empty());
        assert!(report.to_string().contains("Path Length: 0 steps"));
    }

    #[test]
    fn writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("route.txt");
        let path = straight_path();
        write_report(&path, &out).unwrap();
        let text = std::fs::read_to_string(&out).unwrap();
        assert_eq!(text, PathReport::new(&path).to_string());
    }
}

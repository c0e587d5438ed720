//! Line-based grid editor.
//!
//! The editor keeps a grid, optional start/end markers and the most recent
//! route. Every change to the grid or the markers drops the route, so a
//! displayed route always belongs to the displayed map.
//!
//! ```text
//! > toggle 3,4
//! > start 0,0
//! > end 9,9
//! > find
//! ```

use std::fmt;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use gridnav_core::{Cell, Occupancy, OccupancyGrid};
use gridnav_io::{LoadError, RenderOverlay};
use gridnav_paths::{Endpoint, GridPathfinder, Path, QueryError};

use crate::cli::{DEFAULT_GRID, parse_cell};
use crate::view;
use crate::worker::SearchWorker;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Settings for an editing session.
#[derive(Debug, Clone)]
pub struct EditorConfig {
    /// File loaded at start-up. `reset` always reloads it, even after
    /// `load` has switched to another file.
    pub grid_file: PathBuf,
    /// Searches running longer than this are cancelled.
    pub search_timeout: Duration,
    /// Draw maps with terminal colors.
    pub color: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            grid_file: PathBuf::from(DEFAULT_GRID),
            search_timeout: Duration::from_secs(5),
            color: true,
        }
    }
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

/// One editor instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorCommand {
    Toggle(Cell),
    Start(Cell),
    End(Cell),
    Find,
    Clear,
    Reset,
    Load(PathBuf),
    Save(PathBuf),
    Export(PathBuf),
    Show,
    Stats,
    Help,
    Quit,
}

const HELP: &str = "\
Commands:
  toggle R,C   flip a cell between free and blocked
  start R,C    set the start marker
  end R,C      set the end marker
  find         search for a route
  clear        drop the current route
  reset        reload the start-up grid file
  load FILE    load another grid file
  save FILE    save the grid
  export FILE  write the current route report
  show         draw the map
  stats        show session statistics
  help         show this text
  quit         leave the editor";

impl FromStr for EditorCommand {
    type Err = EditorError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, arg) = match line.split_once(char::is_whitespace) {
            Some((w, a)) => (w, a.trim()),
            None => (line, ""),
        };
        let bad = || EditorError::BadCommand(line.to_string());
        let cell = || parse_cell(arg).map_err(|_| bad());
        let file = || {
            if arg.is_empty() {
                Err(bad())
            } else {
                Ok(PathBuf::from(arg))
            }
        };
        let cmd = match word.to_ascii_lowercase().as_str() {
            "toggle" | "t" => Self::Toggle(cell()?),
            "start" | "s" => Self::Start(cell()?),
            "end" | "e" => Self::End(cell()?),
            "find" | "f" => Self::Find,
            "clear" => Self::Clear,
            "reset" => Self::Reset,
            "load" => Self::Load(file()?),
            "save" => Self::Save(file()?),
            "export" => Self::Export(file()?),
            "show" => Self::Show,
            "stats" => Self::Stats,
            "help" | "?" => Self::Help,
            "quit" | "q" | "exit" => Self::Quit,
            _ => return Err(bad()),
        };
        Ok(cmd)
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors reported to the user while editing. None of them end the session.
#[derive(Debug)]
pub enum EditorError {
    BadCommand(String),
    OutOfBounds(Cell),
    /// A start or end marker cannot sit on an obstacle.
    MarkerOnObstacle(Endpoint),
    MissingEndpoint(Endpoint),
    NoPathToExport,
    Load(LoadError),
    /// Writing a grid or report file failed.
    Write(PathBuf, io::Error),
    /// Terminal I/O failed; this one ends the session.
    Io(io::Error),
    Query(QueryError),
}

impl fmt::Display for EditorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadCommand(s) => write!(f, "unknown command '{s}' (try help)"),
            Self::OutOfBounds(c) => write!(f, "{c} is outside the grid"),
            Self::MarkerOnObstacle(e) => write!(f, "Cannot set {e} on obstacle!"),
            Self::MissingEndpoint(e) => write!(f, "Please set {} position first!", article(*e)),
            Self::NoPathToExport => write!(f, "Please find a path first before exporting!"),
            Self::Load(e) => write!(f, "Failed to load grid: {e}"),
            Self::Write(p, e) => write!(f, "Failed to write {}: {e}", p.display()),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Query(e) => write!(f, "{e}"),
        }
    }
}

fn article(e: Endpoint) -> &'static str {
    match e {
        Endpoint::Start => "a start",
        Endpoint::End => "an end",
    }
}

impl std::error::Error for EditorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Load(e) => Some(e),
            Self::Write(_, e) | Self::Io(e) => Some(e),
            Self::Query(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LoadError> for EditorError {
    fn from(e: LoadError) -> Self {
        Self::Load(e)
    }
}

impl From<io::Error> for EditorError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

// ---------------------------------------------------------------------------
// Editor
// ---------------------------------------------------------------------------

/// Session counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub paths_found: usize,
    /// Sum of the step counts of every route found.
    pub total_steps: usize,
    pub obstacles_modified: usize,
}

/// What the session loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// An interactive editing session.
pub struct Editor {
    config: EditorConfig,
    grid: OccupancyGrid,
    start: Option<Cell>,
    end: Option<Cell>,
    path: Option<Path>,
    stats: Stats,
}

impl Editor {
    /// Load `config.grid_file` and start a session on it.
    pub fn open(config: EditorConfig) -> Result<Self, LoadError> {
        let grid = gridnav_io::load_grid(&config.grid_file)?;
        Ok(Self::with_grid(grid, config))
    }

    /// Start a session on an in-memory grid.
    pub fn with_grid(grid: OccupancyGrid, config: EditorConfig) -> Self {
        Self {
            config,
            grid,
            start: None,
            end: None,
            path: None,
            stats: Stats::default(),
        }
    }

    pub fn grid(&self) -> &OccupancyGrid {
        &self.grid
    }

    pub fn start(&self) -> Option<Cell> {
        self.start
    }

    pub fn end(&self) -> Option<Cell> {
        self.end
    }

    /// The most recent route, if it is still current.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_ref()
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }

    /// Flip `c` between free and blocked. Blocking a marked cell removes
    /// its marker.
    pub fn toggle(&mut self, c: Cell) -> Result<Occupancy, EditorError> {
        let occ = self.grid.toggle(c).ok_or(EditorError::OutOfBounds(c))?;
        if occ == Occupancy::Blocked {
            if self.start == Some(c) {
                self.start = None;
            }
            if self.end == Some(c) {
                self.end = None;
            }
        }
        self.stats.obstacles_modified += 1;
        self.clear_path();
        Ok(occ)
    }

    /// Place the start or end marker on a free cell.
    pub fn set_marker(&mut self, which: Endpoint, c: Cell) -> Result<(), EditorError> {
        match self.grid.at(c) {
            None => return Err(EditorError::OutOfBounds(c)),
            Some(Occupancy::Blocked) => return Err(EditorError::MarkerOnObstacle(which)),
            Some(Occupancy::Free) => {}
        }
        match which {
            Endpoint::Start => self.start = Some(c),
            Endpoint::End => self.end = Some(c),
        }
        self.clear_path();
        Ok(())
    }

    /// Search for a route between the markers on a background worker.
    ///
    /// Returns `Ok(None)` when the end is unreachable.
    pub fn find(&mut self) -> Result<Option<&Path>, EditorError> {
        let start = self
            .start
            .ok_or(EditorError::MissingEndpoint(Endpoint::Start))?;
        let end = self.end.ok_or(EditorError::MissingEndpoint(Endpoint::End))?;

        let worker = SearchWorker::spawn(GridPathfinder::new(self.grid.clone()), start, end);
        let outcome = worker.wait(self.config.search_timeout);
        log::info!("search {start} -> {end} took {:?}", outcome.elapsed);

        self.path = outcome.result.map_err(EditorError::Query)?;
        if let Some(p) = &self.path {
            self.stats.paths_found += 1;
            self.stats.total_steps += p.steps();
        }
        Ok(self.path.as_ref())
    }

    pub fn clear_path(&mut self) {
        self.path = None;
    }

    /// Reload the start-up grid file, dropping markers and route.
    pub fn reset(&mut self) -> Result<(), EditorError> {
        let grid = gridnav_io::load_grid(&self.config.grid_file)?;
        self.replace_grid(grid);
        Ok(())
    }

    /// Load a different grid file, dropping markers and route.
    pub fn load(&mut self, file: &std::path::Path) -> Result<(), EditorError> {
        let grid = gridnav_io::load_grid(file)?;
        self.replace_grid(grid);
        Ok(())
    }

    fn replace_grid(&mut self, grid: OccupancyGrid) {
        self.grid = grid;
        self.start = None;
        self.end = None;
        self.clear_path();
    }

    pub fn save(&self, file: &std::path::Path) -> Result<(), EditorError> {
        gridnav_io::save_grid(&self.grid, file)
            .map_err(|e| EditorError::Write(file.to_path_buf(), e))
    }

    /// Write the current route's report.
    pub fn export(&self, file: &std::path::Path) -> Result<(), EditorError> {
        let path = self.path.as_ref().ok_or(EditorError::NoPathToExport)?;
        gridnav_io::write_report(path, file)
            .map_err(|e| EditorError::Write(file.to_path_buf(), e))
    }

    fn overlay(&self) -> RenderOverlay<'_> {
        RenderOverlay {
            start: self.start,
            goal: self.end,
            path: self.path.as_ref().map(|p| p.cells()),
        }
    }

    /// Apply one command, writing feedback to `out`.
    pub fn execute<W: Write>(
        &mut self,
        cmd: EditorCommand,
        out: &mut W,
    ) -> Result<Flow, EditorError> {
        match cmd {
            EditorCommand::Toggle(c) => {
                let occ = self.toggle(c)?;
                let what = if occ.is_free() { "free" } else { "blocked" };
                writeln!(out, "{c} is now {what}")?;
            }
            EditorCommand::Start(c) => {
                self.set_marker(Endpoint::Start, c)?;
                writeln!(out, "Start position set")?;
            }
            EditorCommand::End(c) => {
                self.set_marker(Endpoint::End, c)?;
                writeln!(out, "End position set")?;
            }
            EditorCommand::Find => match self.find()? {
                Some(path) => {
                    let path = path.clone();
                    view::print_route(out, &path)?;
                    let summary: Vec<String> = view::summarize(&path.directions())
                        .into_iter()
                        .map(|(d, n)| format!("{d} x{n}"))
                        .collect();
                    if !summary.is_empty() {
                        writeln!(out, "Summary: {}", summary.join(", "))?;
                    }
                    view::draw_grid(out, &self.grid, self.overlay(), self.config.color)?;
                }
                None => writeln!(out, "No path found! The destination is unreachable.")?,
            },
            EditorCommand::Clear => {
                self.clear_path();
                writeln!(out, "Path cleared")?;
            }
            EditorCommand::Reset => {
                self.reset()?;
                writeln!(out, "Grid reset")?;
            }
            EditorCommand::Load(file) => {
                self.load(&file)?;
                writeln!(
                    out,
                    "Grid loaded successfully ({} x {})",
                    self.grid.rows(),
                    self.grid.cols()
                )?;
            }
            EditorCommand::Save(file) => {
                self.save(&file)?;
                writeln!(out, "Grid saved successfully")?;
            }
            EditorCommand::Export(file) => {
                self.export(&file)?;
                writeln!(out, "Path exported successfully")?;
            }
            EditorCommand::Show => {
                view::draw_grid(out, &self.grid, self.overlay(), self.config.color)?;
            }
            EditorCommand::Stats => {
                let s = self.stats;
                writeln!(out, "Paths found: {}", s.paths_found)?;
                writeln!(out, "Total steps: {}", s.total_steps)?;
                writeln!(out, "Obstacles modified: {}", s.obstacles_modified)?;
            }
            EditorCommand::Help => writeln!(out, "{HELP}")?,
            EditorCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// Read commands from `input` until `quit` or end of input.
    ///
    /// Command errors are reported to `out` and the session continues; only
    /// failures writing to `out` or reading `input` end it early.
    pub fn run<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> io::Result<()> {
        writeln!(
            out,
            "Editing {} x {} grid. Type help for commands.",
            self.grid.rows(),
            self.grid.cols()
        )?;
        let mut line = String::new();
        loop {
            write!(out, "> ")?;
            out.flush()?;
            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(out)?;
                return Ok(());
            }
            if line.trim().is_empty() {
                continue;
            }
            let flow = line
                .parse::<EditorCommand>()
                .and_then(|cmd| self.execute(cmd, out));
            match flow {
                Ok(Flow::Quit) => return Ok(()),
                Ok(Flow::Continue) => {}
                Err(EditorError::Io(e)) => return Err(e),
                Err(e) => writeln!(out, "{e}")?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editor(rows: usize, cols: usize) -> Editor {
        let config = EditorConfig {
            color: false,
            ..Default::default()
        };
        Editor::with_grid(
            OccupancyGrid::filled(rows, cols, Occupancy::Free).unwrap(),
            config,
        )
    }

    #[test]
    fn parse_commands() {
        assert_eq!(
            "toggle 1,2".parse::<EditorCommand>().unwrap(),
            EditorCommand::Toggle(Cell::new(1, 2))
        );
        assert_eq!(
            "  START  0, 3 ".parse::<EditorCommand>().unwrap(),
            EditorCommand::Start(Cell::new(0, 3))
        );
        assert_eq!(
            "save out.csv".parse::<EditorCommand>().unwrap(),
            EditorCommand::Save(PathBuf::from("out.csv"))
        );
        assert_eq!("q".parse::<EditorCommand>().unwrap(), EditorCommand::Quit);
        assert!("toggle".parse::<EditorCommand>().is_err());
        assert!("save".parse::<EditorCommand>().is_err());
        assert!("fly 1,1".parse::<EditorCommand>().is_err());
    }

    #[test]
    fn markers_rejected_on_obstacles() {
        let mut ed = editor(3, 3);
        ed.toggle(Cell::new(1, 1)).unwrap();
        assert!(matches!(
            ed.set_marker(Endpoint::Start, Cell::new(1, 1)),
            Err(EditorError::MarkerOnObstacle(Endpoint::Start))
        ));
        assert!(matches!(
            ed.set_marker(Endpoint::End, Cell::new(3, 0)),
            Err(EditorError::OutOfBounds(_))
        ));
        assert_eq!(ed.start(), None);
    }

    #[test]
    fn blocking_a_marker_removes_it() {
        let mut ed = editor(2, 2);
        ed.set_marker(Endpoint::Start, Cell::new(0, 0)).unwrap();
        ed.set_marker(Endpoint::End, Cell::new(1, 1)).unwrap();
        ed.toggle(Cell::new(1, 1)).unwrap();
        assert_eq!(ed.start(), Some(Cell::new(0, 0)));
        assert_eq!(ed.end(), None);
        assert_eq!(ed.stats().obstacles_modified, 1);
    }

    #[test]
    fn find_requires_markers() {
        let mut ed = editor(2, 2);
        assert!(matches!(
            ed.find(),
            Err(EditorError::MissingEndpoint(Endpoint::Start))
        ));
        ed.set_marker(Endpoint::Start, Cell::ZERO).unwrap();
        assert!(matches!(
            ed.find(),
            Err(EditorError::MissingEndpoint(Endpoint::End))
        ));
    }

    #[test]
    fn find_updates_stats_and_changes_clear_route() {
        let mut ed = editor(3, 3);
        ed.set_marker(Endpoint::Start, Cell::new(0, 0)).unwrap();
        ed.set_marker(Endpoint::End, Cell::new(2, 2)).unwrap();
        let steps = ed.find().unwrap().unwrap().steps();
        assert_eq!(steps, 4);
        assert_eq!(
            ed.stats(),
            Stats {
                paths_found: 1,
                total_steps: 4,
                obstacles_modified: 0
            }
        );
        ed.toggle(Cell::new(1, 0)).unwrap();
        assert!(ed.path().is_none());
    }

    #[test]
    fn unreachable_end_is_not_an_error() {
        let mut ed = editor(3, 3);
        for col in 0..3 {
            ed.toggle(Cell::new(1, col)).unwrap();
        }
        ed.set_marker(Endpoint::Start, Cell::new(0, 0)).unwrap();
        ed.set_marker(Endpoint::End, Cell::new(2, 2)).unwrap();
        assert!(ed.find().unwrap().is_none());
        assert_eq!(ed.stats().paths_found, 0);
    }

    #[test]
    fn export_requires_route() {
        let ed = editor(1, 1);
        assert!(matches!(
            ed.export(std::path::Path::new("unused.txt")),
            Err(EditorError::NoPathToExport)
        ));
    }

    #[test]
    fn failed_save_keeps_session_alive() {
        let mut ed = editor(1, 1);
        let mut out = Vec::new();
        let script = "save /nonexistent-dir/x.csv\nstats\n";
        ed.run(&mut script.as_bytes(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Failed to write /nonexistent-dir/x.csv"));
        assert!(text.contains("Paths found: 0"));
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            EditorError::MarkerOnObstacle(Endpoint::End).to_string(),
            "Cannot set end on obstacle!"
        );
        assert_eq!(
            EditorError::MissingEndpoint(Endpoint::Start).to_string(),
            "Please set a start position first!"
        );
    }
}

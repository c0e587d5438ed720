//! Subcommand implementations.

use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::{Path as FsPath, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;

use gridnav_core::{Cell, OccupancyGrid};
use gridnav_io::{PathReport, RenderOverlay};
use gridnav_paths::GridPathfinder;

use crate::cli::Command;
use crate::editor::{Editor, EditorConfig};
use crate::prompt;
use crate::view;

/// How a route query ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteStatus {
    Found,
    NoPath,
}

impl RouteStatus {
    pub fn exit_code(self) -> ExitCode {
        match self {
            Self::Found => ExitCode::SUCCESS,
            Self::NoPath => ExitCode::from(2),
        }
    }
}

/// Output options for [`find_route`].
#[derive(Debug, Clone, Default)]
pub struct RouteOptions {
    pub export: Option<PathBuf>,
    pub json: bool,
    pub render: bool,
    pub color: bool,
}

/// Run a parsed subcommand against the real terminal.
pub fn run(cmd: Command) -> Result<ExitCode, Box<dyn Error>> {
    match cmd {
        Command::Find {
            grid,
            start,
            end,
            export,
            json,
            no_render,
            plain,
        } => {
            let grid = gridnav_io::load_grid(&grid)?;
            let opts = RouteOptions {
                export,
                json,
                render: !no_render,
                color: !plain,
            };
            let stdin = io::stdin();
            let status = find_route(
                &grid,
                start,
                end,
                &opts,
                &mut stdin.lock(),
                &mut io::stdout().lock(),
            )?;
            Ok(status.exit_code())
        }
        Command::Edit { grid, timeout_ms } => {
            let config = EditorConfig {
                grid_file: grid,
                search_timeout: Duration::from_millis(timeout_ms),
                ..Default::default()
            };
            let mut editor = Editor::open(config)?;
            let stdin = io::stdin();
            editor.run(&mut stdin.lock(), &mut io::stdout().lock())?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Generate {
            rows,
            cols,
            density,
            seed,
            out,
        } => {
            generate(rows, cols, density, seed, &out)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Resolve the endpoints (prompting for missing ones), search, and report.
pub fn find_route<R: BufRead, W: Write>(
    grid: &OccupancyGrid,
    start: Option<Cell>,
    end: Option<Cell>,
    opts: &RouteOptions,
    input: &mut R,
    out: &mut W,
) -> Result<RouteStatus, Box<dyn Error>> {
    if start.is_none() || end.is_none() {
        prompt::print_intro(grid, out)?;
    }
    let start = match start {
        Some(c) => c,
        None => prompt::prompt_cell(grid, "Start", input, out)?
            .ok_or("no start position entered")?,
    };
    let end = match end {
        Some(c) => c,
        None => prompt::prompt_cell(grid, "End", input, out)?
            .ok_or("no end position entered")?,
    };

    if !opts.json {
        writeln!(out, "Finding path from {start} to {end}...")?;
    }
    let pathfinder = GridPathfinder::new(grid.clone());
    let Some(path) = pathfinder.find_path(start, end)? else {
        if opts.json {
            writeln!(out, "null")?;
        } else {
            writeln!(out, "No path found! The destination is unreachable.")?;
        }
        return Ok(RouteStatus::NoPath);
    };

    if opts.json {
        writeln!(out, "{}", PathReport::new(&path).to_json_pretty()?)?;
    } else {
        view::print_route(out, &path)?;
        if opts.render {
            writeln!(out)?;
            let overlay = RenderOverlay {
                start: Some(start),
                goal: Some(end),
                path: Some(path.cells()),
            };
            view::draw_grid(out, grid, overlay, opts.color)?;
        }
    }

    if let Some(file) = &opts.export {
        gridnav_io::write_report(&path, file)?;
        if !opts.json {
            writeln!(out, "Route exported to {}", file.display())?;
        }
    }
    Ok(RouteStatus::Found)
}

/// Write a random grid to `out`. Without a seed one is drawn and logged.
pub fn generate(
    rows: usize,
    cols: usize,
    density: f64,
    seed: Option<u64>,
    out: &FsPath,
) -> Result<OccupancyGrid, Box<dyn Error>> {
    let seed = seed.unwrap_or_else(rand::random);
    log::info!("generating {rows}x{cols} grid with seed {seed}");
    let mut rng = StdRng::seed_from_u64(seed);
    let grid = gridnav_io::random_grid(rows, cols, density, &mut rng)?;
    gridnav_io::save_grid(&grid, out)?;
    Ok(grid)
}

//! Command-line definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use gridnav_core::Cell;

/// Grid file used when none is given.
pub const DEFAULT_GRID: &str = "floor2.csv";

#[derive(Parser, Debug)]
#[command(author, version, about = "Shortest obstacle-avoiding routes on occupancy grids", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Find a route between two cells and print navigation instructions.
    Find {
        /// Comma-separated grid file (0 = free, anything else = blocked)
        #[arg(short, long, default_value = DEFAULT_GRID)]
        grid: PathBuf,
        /// Start cell as ROW,COL (prompted for if omitted)
        #[arg(short, long, value_parser = parse_cell)]
        start: Option<Cell>,
        /// End cell as ROW,COL (prompted for if omitted)
        #[arg(short, long, value_parser = parse_cell)]
        end: Option<Cell>,
        /// Write the route report to this file
        #[arg(long)]
        export: Option<PathBuf>,
        /// Print the route as JSON instead of text
        #[arg(long)]
        json: bool,
        /// Skip drawing the map
        #[arg(long)]
        no_render: bool,
        /// Draw the map without colors
        #[arg(long)]
        plain: bool,
    },
    /// Edit a grid interactively and run queries on it.
    Edit {
        #[arg(short, long, default_value = DEFAULT_GRID)]
        grid: PathBuf,
        /// Give up on a search after this many milliseconds
        #[arg(long, default_value_t = 5000)]
        timeout_ms: u64,
    },
    /// Write a random grid.
    Generate {
        #[arg(long)]
        rows: usize,
        #[arg(long)]
        cols: usize,
        /// Probability that a cell is blocked
        #[arg(long, default_value_t = 0.3)]
        density: f64,
        /// Seed for reproducible maps
        #[arg(long)]
        seed: Option<u64>,
        #[arg(short, long)]
        out: PathBuf,
    },
}

/// Parse `ROW,COL` (whitespace allowed around either number).
pub fn parse_cell(s: &str) -> Result<Cell, String> {
    let (r, c) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got '{s}'"))?;
    let row = r
        .trim()
        .parse()
        .map_err(|_| format!("invalid row '{}'", r.trim()))?;
    let col = c
        .trim()
        .parse()
        .map_err(|_| format!("invalid column '{}'", c.trim()))?;
    Ok(Cell::new(row, col))
}

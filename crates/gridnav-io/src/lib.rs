//! Plumbing around the pathfinder: reading and writing grids, exporting
//! paths, drawing maps as text, and generating random maps.

pub mod csv;
pub mod mapgen;
pub mod render;
pub mod report;

pub use csv::{LoadError, load_grid, parse_grid, read_grid, save_grid, write_grid};
pub use mapgen::random_grid;
pub use render::{RenderOverlay, render};
pub use report::{PathReport, write_report};

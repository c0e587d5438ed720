//! **gridnav-core**: occupancy grids and coordinate types.
//!
//! This crate provides the value types shared across the *gridnav*
//! workspace: [`Cell`] coordinates, cardinal [`Direction`]s, per-cell
//! [`Occupancy`], and the rectangular [`OccupancyGrid`] the pathfinder
//! searches.

pub mod geom;
pub mod grid;

pub use geom::{Cell, Direction};
pub use grid::{InvalidGrid, Occupancy, OccupancyGrid};

//! Shortest paths and navigation instructions on occupancy grids.
//!
//! The entry point is [`GridPathfinder`], which owns an
//! [`OccupancyGrid`](gridnav_core::OccupancyGrid) and answers path queries:
//!
//! - **A\*** shortest-path search ([`GridPathfinder::find_path`]), with an
//!   optional cooperative stop check ([`GridPathfinder::find_path_with`])
//! - **BFS** step-distance maps ([`GridPathfinder::step_distances`])
//! - **Direction derivation** from a path ([`directions_of`], [`Path::directions`])
//!
//! Movement is 4-connected with unit step cost. Every query allocates its
//! own frontier and bookkeeping, so a pathfinder holds no per-query state.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | BFS |
//! | [`WeightedPather`] : [`Pather`] | step costs |
//! | [`AstarPather`] : [`WeightedPather`] | A* |

mod astar;
mod bfs;
mod directions;
mod distance;
mod error;
mod neighbors;
mod path;
mod pathfinder;
mod traits;

pub use bfs::{DistanceMap, UNREACHABLE};
pub use directions::directions_of;
pub use distance::manhattan;
pub use error::{Endpoint, EndpointFault, QueryError};
pub use neighbors::FreeNeighbors;
pub use path::Path;
pub use pathfinder::GridPathfinder;
pub use traits::{AstarPather, Pather, WeightedPather};

//! Grid worlds for the trailblaze searches.
//!
//! - [`Maze`]: walls and floors, unit-cost 4-way moves, Manhattan heuristic.
//! - [`Terrain`]: elevations with an uphill penalty, 8-way moves, Euclidean heuristic.
//! - [`MazeGen`]: random perfect mazes carved from a Kruskal spanning tree.
//! - [`World`]: either of the above behind one type.
//!
//! Every world uses [`Point`](trailblaze_core::Point) as its vertex type and
//! implements [`WeightedPather`](trailblaze_paths::WeightedPather) and
//! [`SpanningGraph`](trailblaze_paths::SpanningGraph).

pub mod grid;
pub mod maze;
pub mod mazegen;
pub mod terrain;
pub mod world;

pub use grid::Grid;
pub use maze::{Maze, MazeError, Tile};
pub use mazegen::{MazeConfig, MazeGen};
pub use terrain::{Terrain, TerrainConfig};
pub use world::World;

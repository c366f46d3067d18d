use trailblaze_core::{Edge, Point, Range};
use trailblaze_paths::{Pather, SpanningGraph, WeightedPather};

use crate::maze::Maze;
use crate::terrain::Terrain;

/// Any grid world. Carries its own heuristic, so a search can be set up from
/// a `World` alone without consulting global state.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum World {
    Maze(Maze),
    Terrain(Terrain),
}

impl World {
    /// Short name of the world kind.
    pub fn kind(&self) -> &'static str {
        match self {
            World::Maze(_) => "maze",
            World::Terrain(_) => "terrain",
        }
    }

    pub fn bounds(&self) -> Range {
        match self {
            World::Maze(m) => m.bounds(),
            World::Terrain(t) => t.bounds(),
        }
    }

    /// Whether a search may start or end at `p`.
    pub fn is_open(&self, p: Point) -> bool {
        match self {
            World::Maze(m) => m.is_floor(p),
            World::Terrain(t) => t.contains(p),
        }
    }

    /// Admissible estimate of the remaining cost between two cells.
    pub fn heuristic(&self, from: Point, to: Point) -> f64 {
        match self {
            World::Maze(m) => m.heuristic(from, to),
            World::Terrain(t) => t.heuristic(from, to),
        }
    }

    pub fn render_path(&self, path: &[Point]) -> String {
        match self {
            World::Maze(m) => m.render_path(path),
            World::Terrain(t) => t.render_path(path),
        }
    }
}

impl From<Maze> for World {
    fn from(m: Maze) -> Self {
        World::Maze(m)
    }
}

impl From<Terrain> for World {
    fn from(t: Terrain) -> Self {
        World::Terrain(t)
    }
}

impl Pather for World {
    type Node = Point;

    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        match self {
            World::Maze(m) => m.neighbors(p, buf),
            World::Terrain(t) => t.neighbors(p, buf),
        }
    }
}

impl WeightedPather for World {
    fn cost(&self, from: Point, to: Point) -> f64 {
        match self {
            World::Maze(m) => m.cost(from, to),
            World::Terrain(t) => t.cost(from, to),
        }
    }
}

impl SpanningGraph for World {
    fn vertices(&self, buf: &mut Vec<Point>) {
        match self {
            World::Maze(m) => m.vertices(buf),
            World::Terrain(t) => t.vertices(buf),
        }
    }

    fn edges(&self, buf: &mut Vec<Edge<Point>>) {
        match self {
            World::Maze(m) => m.edges(buf),
            World::Terrain(t) => t.edges(buf),
        }
    }
}

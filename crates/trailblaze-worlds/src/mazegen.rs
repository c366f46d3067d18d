//! Random perfect mazes built with Kruskal's algorithm.
//!
//! Rooms sit on even coordinates. Each pair of rooms two cells apart is joined
//! by a candidate edge with a random weight, and every edge of the minimum
//! spanning tree knocks down the wall cell between its two rooms. The result
//! has exactly one path between any two floors.

use std::collections::HashMap;

use rand::Rng;
use trailblaze_core::{Edge, Point};
use trailblaze_paths::{Pather, SpanningGraph, WeightedPather, kruskal};

use crate::maze::{Maze, MazeError, Tile};

/// Maze dimensions. Odd sizes leave a full outer row and column of rooms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MazeConfig {
    pub width: i32,
    pub height: i32,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            width: 21,
            height: 11,
        }
    }
}

/// Maze generator owning its random source.
pub struct MazeGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> MazeGen<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a perfect maze of the configured size.
    pub fn generate(&mut self, config: &MazeConfig) -> Result<Maze, MazeError> {
        if config.width < 1 || config.height < 1 {
            return Err(MazeError::Empty);
        }
        let rooms = RoomGraph::new(config.width, config.height, &mut self.rng);
        let tree = kruskal(&rooms);

        let mut maze = Maze::new(config.width, config.height);
        for &room in &rooms.rooms {
            maze.set(room, Tile::Floor);
        }
        for e in tree.edges() {
            let door = Point::new((e.from.x + e.to.x) / 2, (e.from.y + e.to.y) / 2);
            maze.set(door, Tile::Floor);
        }

        log::debug!(
            "mazegen: {}x{}, {} rooms, {} doors out of {} candidates",
            config.width,
            config.height,
            rooms.rooms.len(),
            tree.len(),
            rooms.weights.len()
        );
        Ok(maze)
    }
}

/// Rooms and the randomly weighted walls between them.
struct RoomGraph {
    width: i32,
    height: i32,
    rooms: Vec<Point>,
    // keyed by (left or upper room, right or lower room)
    weights: HashMap<(Point, Point), f64>,
}

impl RoomGraph {
    fn new(width: i32, height: i32, rng: &mut impl Rng) -> Self {
        let mut rooms = Vec::new();
        let mut weights = HashMap::new();
        for y in (0..height).step_by(2) {
            for x in (0..width).step_by(2) {
                let p = Point::new(x, y);
                rooms.push(p);
                for q in [p.shift(2, 0), p.shift(0, 2)] {
                    if q.x < width && q.y < height {
                        weights.insert((p, q), rng.random::<f64>());
                    }
                }
            }
        }
        Self {
            width,
            height,
            rooms,
            weights,
        }
    }

    fn is_room(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.width && p.y < self.height && p.x % 2 == 0 && p.y % 2 == 0
    }
}

impl Pather for RoomGraph {
    type Node = Point;

    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        let candidates = [p.shift(0, -2), p.shift(2, 0), p.shift(0, 2), p.shift(-2, 0)];
        buf.extend(candidates.into_iter().filter(|&q| self.is_room(q)));
    }
}

impl WeightedPather for RoomGraph {
    fn cost(&self, from: Point, to: Point) -> f64 {
        let key = if from < to { (from, to) } else { (to, from) };
        self.weights.get(&key).copied().unwrap_or(f64::INFINITY)
    }
}

impl SpanningGraph for RoomGraph {
    fn vertices(&self, buf: &mut Vec<Point>) {
        buf.extend_from_slice(&self.rooms);
    }

    fn edges(&self, buf: &mut Vec<Edge<Point>>) {
        for &p in &self.rooms {
            for q in [p.shift(2, 0), p.shift(0, 2)] {
                if let Some(&w) = self.weights.get(&(p, q)) {
                    buf.push(Edge::new(p, q, w));
                }
            }
        }
    }
}

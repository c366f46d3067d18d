//! Maze worlds: wall/floor grids with unit-cost 4-way moves.
//!
//! Mazes read from and print to ASCII art, `#` for walls and `.` for floors:
//!
//! ```text
//! #.###
//! #...#
//! ###.#
//! ```

use std::fmt;

use trailblaze_core::{Edge, Point, Range};
use trailblaze_paths::{Pather, SpanningGraph, WeightedPather, manhattan};

use crate::grid::Grid;

/// Character used for walls in the ASCII form.
pub const WALL: char = '#';
/// Character used for floors in the ASCII form.
pub const FLOOR: char = '.';
/// Character used to draw a path over floors.
pub const PATH: char = '*';

/// A maze cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    #[default]
    Wall,
    Floor,
}

/// Errors that can occur when parsing a maze.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MazeError {
    /// No cells at all.
    #[error("maze: no cells")]
    Empty,
    /// Lines have inconsistent widths.
    #[error("maze: line {line} has width {found}, expected {expected}")]
    InconsistentSize {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// A character other than a wall or floor was found.
    #[error("maze contains invalid rune \u{201c}{ch}\u{201d} at {pos}")]
    InvalidRune { ch: char, pos: Point },
}

/// A rectangular maze of [`Tile`]s.
///
/// Neighbours are the in-bounds floor cells in the four cardinal directions.
/// Every step costs 1, so [`manhattan`] distance is an exact lower bound.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Maze {
    grid: Grid<Tile>,
}

impl Maze {
    /// Create a maze of walls.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            grid: Grid::new(width, height, Tile::Wall),
        }
    }

    /// Parse an ASCII maze.
    ///
    /// Blank lines and whitespace around each line are ignored. All
    /// remaining lines must have the same width.
    pub fn parse(s: &str) -> Result<Self, MazeError> {
        let lines: Vec<&str> = s.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        let Some(first) = lines.first() else {
            return Err(MazeError::Empty);
        };
        let width = first.chars().count();

        let mut tiles = Vec::with_capacity(width * lines.len());
        for (y, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(MazeError::InconsistentSize {
                    line: y,
                    expected: width,
                    found,
                });
            }
            for (x, ch) in line.chars().enumerate() {
                let tile = match ch {
                    WALL => Tile::Wall,
                    FLOOR => Tile::Floor,
                    _ => {
                        return Err(MazeError::InvalidRune {
                            ch,
                            pos: Point::new(x as i32, y as i32),
                        });
                    }
                };
                tiles.push(tile);
            }
        }

        let grid = Grid::from_cells(width as i32, lines.len() as i32, tiles).ok_or(MazeError::Empty)?;
        Ok(Self { grid })
    }

    #[inline]
    pub fn bounds(&self) -> Range {
        self.grid.bounds()
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.grid.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.grid.height()
    }

    /// Tile at `p`, `None` when out of bounds.
    #[inline]
    pub fn tile(&self, p: Point) -> Option<Tile> {
        self.grid.at(p)
    }

    /// Set the tile at `p`. Returns `false` when out of bounds.
    pub fn set(&mut self, p: Point, tile: Tile) -> bool {
        self.grid.set(p, tile)
    }

    /// Whether `p` is an in-bounds floor cell.
    #[inline]
    pub fn is_floor(&self, p: Point) -> bool {
        self.grid.at(p) == Some(Tile::Floor)
    }

    /// Every floor cell, in row-major order.
    pub fn floors(&self) -> impl Iterator<Item = Point> + '_ {
        self.grid.iter().filter(|&(_, t)| t == Tile::Floor).map(|(p, _)| p)
    }

    pub fn floor_count(&self) -> usize {
        self.grid.count(Tile::Floor)
    }

    /// Admissible estimate of the remaining cost between two cells.
    #[inline]
    pub fn heuristic(&self, from: Point, to: Point) -> f64 {
        manhattan(from, to)
    }

    /// ASCII rendering with `path` drawn over the floors.
    pub fn render_path(&self, path: &[Point]) -> String {
        let mut out = String::with_capacity(self.grid.bounds().len() + self.height() as usize);
        for y in 0..self.height() {
            for x in 0..self.width() {
                let p = Point::new(x, y);
                let ch = if path.contains(&p) {
                    PATH
                } else if self.is_floor(p) {
                    FLOOR
                } else {
                    WALL
                };
                out.push(ch);
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_path(&[]))
    }
}

impl Pather for Maze {
    type Node = Point;

    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        buf.extend(p.neighbors_4().into_iter().filter(|&n| self.is_floor(n)));
    }
}

impl WeightedPather for Maze {
    fn cost(&self, from: Point, to: Point) -> f64 {
        if manhattan(from, to) == 1.0 && self.is_floor(from) && self.is_floor(to) {
            1.0
        } else {
            f64::INFINITY
        }
    }
}

impl SpanningGraph for Maze {
    fn vertices(&self, buf: &mut Vec<Point>) {
        buf.extend(self.floors());
    }

    /// Each connection between adjacent floors, listed once.
    fn edges(&self, buf: &mut Vec<Edge<Point>>) {
        for p in self.floors() {
            for q in [p.shift(1, 0), p.shift(0, 1)] {
                if self.is_floor(q) {
                    buf.push(Edge::new(p, q, 1.0));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trailblaze_paths::{Algorithm, PathSearch};

    const SMALL: &str = "
        .....
        .###.
        .#...
        .#.##
        ...#.
    ";

    #[test]
    fn parse_and_display_round_trip() {
        let m = Maze::parse(SMALL).unwrap();
        assert_eq!((m.width(), m.height()), (5, 5));
        assert_eq!(m.tile(Point::new(1, 1)), Some(Tile::Wall));
        assert_eq!(m.tile(Point::new(2, 2)), Some(Tile::Floor));
        assert_eq!(m.tile(Point::new(5, 0)), None);
        let text = m.to_string();
        assert_eq!(Maze::parse(&text).unwrap(), m);
        assert_eq!(text.lines().next(), Some("....."));
    }

    #[test]
    fn parse_errors() {
        assert_eq!(Maze::parse("  \n \n"), Err(MazeError::Empty));
        assert_eq!(
            Maze::parse("...\n..\n"),
            Err(MazeError::InconsistentSize {
                line: 1,
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            Maze::parse("..\n.x\n"),
            Err(MazeError::InvalidRune {
                ch: 'x',
                pos: Point::new(1, 1)
            })
        );
    }

    #[test]
    fn neighbors_skip_walls_and_edges() {
        let m = Maze::parse(SMALL).unwrap();
        let mut buf = Vec::new();
        m.neighbors(Point::new(0, 0), &mut buf);
        assert_eq!(buf, vec![Point::new(1, 0), Point::new(0, 1)]);
        assert_eq!(m.cost(Point::new(0, 0), Point::new(1, 0)), 1.0);
        assert!(m.cost(Point::new(0, 0), Point::new(1, 1)).is_infinite());
        assert!(m.cost(Point::new(0, 0), Point::new(2, 0)).is_infinite());
    }

    #[test]
    fn every_algorithm_solves_the_small_maze() {
        let m = Maze::parse(SMALL).unwrap();
        let (from, to) = (Point::new(0, 0), Point::new(4, 4));
        let h = |a: Point, b: Point| m.heuristic(a, b);
        // (4, 4) is walled in.
        for alg in Algorithm::ALL {
            let path = PathSearch::new(&m, h).run(alg, from, to);
            assert!(path.is_empty(), "{alg}");
        }
        // Down the left column is 7 steps, around the top is 9.
        let to = Point::new(2, 3);
        for alg in Algorithm::ALL {
            let path = PathSearch::new(&m, h).run(alg, from, to);
            assert!(path.is_valid(&m), "{alg}");
            assert_eq!(path.cost(&m), 7.0, "{alg}");
            assert_eq!(path.first(), Some(from), "{alg}");
        }
    }

    #[test]
    fn render_marks_the_path() {
        let m = Maze::parse("...\n.#.\n").unwrap();
        let s = m.render_path(&[Point::new(0, 0), Point::new(0, 1)]);
        assert_eq!(s, "*..\n*#.\n");
    }

    #[test]
    fn floor_edges_are_listed_once() {
        let m = Maze::parse("..\n..\n").unwrap();
        let mut edges = Vec::new();
        m.edges(&mut edges);
        assert_eq!(edges.len(), 4);
        let mut vertices = Vec::new();
        m.vertices(&mut vertices);
        assert_eq!(vertices.len(), 4);
        assert_eq!(m.floor_count(), 4);
    }
}

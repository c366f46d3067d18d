//! Terrain worlds: elevation grids where climbing is expensive.

use rand::Rng;
use trailblaze_core::{Edge, Point, Range};
use trailblaze_paths::{Pather, SpanningGraph, WeightedPather, euclidean};

use crate::grid::Grid;

/// Terrain parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TerrainConfig {
    /// Extra cost per unit of elevation gained on a step. Negative and NaN
    /// values count as zero.
    pub altitude_penalty: f64,
    /// Number of neighbourhood-averaging passes applied to random noise.
    pub smoothing: usize,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            altitude_penalty: 100.0,
            smoothing: 3,
        }
    }
}

/// A grid of elevations in `[0, 1]` with 8-way moves.
///
/// Moving from `a` to an adjacent `b` costs the horizontal distance (1 or √2)
/// plus `altitude_penalty * max(0, elevation(b) - elevation(a))`. Going down is
/// never cheaper than flat ground, so [`euclidean`] distance stays admissible.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Terrain {
    elevation: Grid<f64>,
    config: TerrainConfig,
}

impl Terrain {
    /// Flat terrain at elevation 0.
    pub fn new(width: i32, height: i32, config: TerrainConfig) -> Self {
        Self {
            elevation: Grid::new(width, height, 0.0),
            config,
        }
    }

    /// Terrain from row-major elevations, clamped to `[0, 1]`. Returns `None`
    /// if the length does not match `width * height`.
    pub fn from_elevations(width: i32, height: i32, elevations: Vec<f64>, config: TerrainConfig) -> Option<Self> {
        let clamped = elevations.into_iter().map(|e| e.clamp(0.0, 1.0)).collect();
        Grid::from_cells(width, height, clamped).map(|elevation| Self { elevation, config })
    }

    /// Random rolling terrain: uniform noise, smoothed by repeated 3x3
    /// averaging, then stretched back to the full `[0, 1]` range.
    pub fn random(width: i32, height: i32, config: TerrainConfig, rng: &mut impl Rng) -> Self {
        let mut terrain = Self::new(width, height, config);
        let bounds = terrain.bounds();
        for p in bounds.iter() {
            terrain.elevation.set(p, rng.random::<f64>());
        }

        let mut scratch = Vec::with_capacity(bounds.len());
        for _ in 0..config.smoothing {
            scratch.clear();
            scratch.extend(bounds.iter().map(|p| terrain.local_mean(p)));
            for (p, &e) in bounds.iter().zip(scratch.iter()) {
                terrain.elevation.set(p, e);
            }
        }
        terrain.normalize();

        log::debug!(
            "terrain: {}x{}, {} smoothing passes, altitude penalty {}",
            width,
            height,
            config.smoothing,
            config.altitude_penalty
        );
        terrain
    }

    /// Mean elevation over `p` and its in-bounds neighbours.
    fn local_mean(&self, p: Point) -> f64 {
        let (sum, n) = std::iter::once(p)
            .chain(p.neighbors_8())
            .filter_map(|q| self.elevation.at(q))
            .fold((0.0, 0usize), |(s, n), e| (s + e, n + 1));
        sum / n as f64
    }

    fn normalize(&mut self) {
        let (lo, hi) = self
            .elevation
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), (_, e)| (lo.min(e), hi.max(e)));
        if hi <= lo {
            return;
        }
        for p in self.bounds().iter() {
            if let Some(e) = self.elevation.at(p) {
                self.elevation.set(p, (e - lo) / (hi - lo));
            }
        }
    }

    #[inline]
    pub fn bounds(&self) -> Range {
        self.elevation.bounds()
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.elevation.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.elevation.height()
    }

    pub fn config(&self) -> TerrainConfig {
        self.config
    }

    /// The altitude penalty actually charged, never negative.
    #[inline]
    pub fn penalty(&self) -> f64 {
        // f64::max returns the other operand for NaN.
        self.config.altitude_penalty.max(0.0)
    }

    /// Elevation at `p`, `None` when out of bounds.
    #[inline]
    pub fn elevation(&self, p: Point) -> Option<f64> {
        self.elevation.at(p)
    }

    /// Set the elevation at `p`, clamped to `[0, 1]`. Returns `false` when out of bounds.
    pub fn set_elevation(&mut self, p: Point, e: f64) -> bool {
        self.elevation.set(p, e.clamp(0.0, 1.0))
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.elevation.contains(p)
    }

    /// Admissible estimate of the remaining cost between two cells.
    #[inline]
    pub fn heuristic(&self, from: Point, to: Point) -> f64 {
        euclidean(from, to)
    }

    /// ASCII rendering: elevation as a digit from `0` to `9`, `*` on `path`.
    pub fn render_path(&self, path: &[Point]) -> String {
        let mut out = String::new();
        for y in 0..self.height() {
            for x in 0..self.width() {
                let p = Point::new(x, y);
                let ch = if path.contains(&p) {
                    '*'
                } else {
                    let e = self.elevation.at(p).unwrap_or(0.0);
                    char::from_digit((e * 9.0).round() as u32, 10).unwrap_or('9')
                };
                out.push(ch);
            }
            out.push('\n');
        }
        out
    }
}

impl Pather for Terrain {
    type Node = Point;

    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        buf.extend(p.neighbors_8().into_iter().filter(|&q| self.contains(q)));
    }
}

impl WeightedPather for Terrain {
    fn cost(&self, from: Point, to: Point) -> f64 {
        let (dx, dy) = from.delta(to);
        if dx > 1 || dy > 1 {
            return f64::INFINITY;
        }
        let (Some(a), Some(b)) = (self.elevation(from), self.elevation(to)) else {
            return f64::INFINITY;
        };
        euclidean(from, to) + self.penalty() * (b - a).max(0.0)
    }
}

impl SpanningGraph for Terrain {
    fn vertices(&self, buf: &mut Vec<Point>) {
        buf.extend(self.bounds().iter());
    }

    /// Each 8-way adjacency once, weighted by its cheaper direction.
    fn edges(&self, buf: &mut Vec<Edge<Point>>) {
        for p in self.bounds().iter() {
            for q in [p.shift(1, 0), p.shift(-1, 1), p.shift(0, 1), p.shift(1, 1)] {
                if self.contains(q) {
                    let c = self.cost(p, q).min(self.cost(q, p));
                    buf.push(Edge::new(p, q, c));
                }
            }
        }
    }
}

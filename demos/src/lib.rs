//! Shared plumbing for the `trailblaze` command-line demo.
//!
//! Builds a seeded world, resolves the endpoints and runs the selected
//! searches, collecting one [`Report`] per algorithm.

use std::time::{Duration, Instant};

use rand::Rng;
use trailblaze_core::Point;
use trailblaze_paths::{Algorithm, ParseAlgorithmError, Path, PathSearch, SearchStats};
use trailblaze_worlds::{MazeConfig, MazeError, MazeGen, Terrain, TerrainConfig, World};

/// Which kind of world to generate.
#[derive(Copy, Clone, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum WorldKind {
    Maze,
    Terrain,
}

/// Errors surfaced by the demo before any search runs.
#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    #[error(transparent)]
    Maze(#[from] MazeError),
    #[error(transparent)]
    Algorithm(#[from] ParseAlgorithmError),
    #[error("invalid point \u{201c}{0}\u{201d} (expected x,y)")]
    BadPoint(String),
    #[error("{point} is not an open cell of the {kind}")]
    Blocked { point: Point, kind: &'static str },
    #[error("the {0} has no open cells")]
    NoOpenCells(&'static str),
}

/// Parse an `x,y` pair.
pub fn parse_point(s: &str) -> Result<Point, DemoError> {
    let bad = || DemoError::BadPoint(s.to_string());
    let (x, y) = s.split_once(',').ok_or_else(bad)?;
    let x = x.trim().parse().map_err(|_| bad())?;
    let y = y.trim().parse().map_err(|_| bad())?;
    Ok(Point::new(x, y))
}

/// Parse a comma-separated list of algorithm names, or `all`.
pub fn parse_algorithms(s: &str) -> Result<Vec<Algorithm>, DemoError> {
    if s.trim().eq_ignore_ascii_case("all") {
        return Ok(Algorithm::ALL.to_vec());
    }
    let algorithms = s
        .split(',')
        .map(str::parse)
        .collect::<Result<Vec<Algorithm>, _>>()?;
    Ok(algorithms)
}

/// Generate a world of the given kind and size.
pub fn build_world(kind: WorldKind, width: i32, height: i32, rng: &mut impl Rng) -> Result<World, DemoError> {
    let world = match kind {
        WorldKind::Maze => World::Maze(MazeGen::new(rng).generate(&MazeConfig { width, height })?),
        WorldKind::Terrain => World::Terrain(Terrain::random(width, height, TerrainConfig::default(), rng)),
    };
    Ok(world)
}

/// Resolve the search endpoints. Missing ones default to the first and last
/// open cells in row-major order.
pub fn endpoints(world: &World, from: Option<Point>, to: Option<Point>) -> Result<(Point, Point), DemoError> {
    let kind = world.kind();
    let mut open = world.bounds().iter().filter(|&p| world.is_open(p));
    let first = open.next().ok_or(DemoError::NoOpenCells(kind))?;
    let last = open.last().unwrap_or(first);

    let from = from.unwrap_or(first);
    let to = to.unwrap_or(last);
    for point in [from, to] {
        if !world.is_open(point) {
            return Err(DemoError::Blocked { point, kind });
        }
    }
    Ok((from, to))
}

/// Outcome of one search.
#[derive(Debug, Clone)]
pub struct Report {
    pub algorithm: Algorithm,
    pub path: Path<Point>,
    pub cost: f64,
    pub stats: SearchStats,
    /// Wall-clock time of the search alone.
    pub elapsed: Duration,
}

impl Report {
    /// Whether the path runs from `from` to `to` over real steps of `world`.
    pub fn reaches(&self, world: &World, from: Point, to: Point) -> bool {
        self.path.first() == Some(from) && self.path.last() == Some(to) && self.path.is_valid(world)
    }
}

/// Run every algorithm in `algorithms` from `from` to `to`.
pub fn run_searches(world: &World, algorithms: &[Algorithm], from: Point, to: Point) -> Vec<Report> {
    let h = |a: Point, b: Point| world.heuristic(a, b);
    let mut search = PathSearch::new(world, h);
    algorithms
        .iter()
        .map(|&algorithm| {
            let start = Instant::now();
            let path = search.run(algorithm, from, to);
            let elapsed = start.elapsed();
            let cost = if path.is_empty() { f64::INFINITY } else { path.cost(world) };
            log::info!("{algorithm}: {} vertices, cost {cost:.3} in {elapsed:?}", path.len());
            Report {
                algorithm,
                path,
                cost,
                stats: search.stats(),
                elapsed,
            }
        })
        .collect()
}

//! Command-line demo: generate a world, search it, print the results.
//!
//! Run: cargo run --bin trailblaze -- --world maze --algorithm all
//!
//! Set `RUST_LOG=debug` to see per-search and generator summaries.

use std::error::Error;

use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use trailblaze_core::Point;
use trailblaze_demos::{
    WorldKind, build_world, endpoints, parse_algorithms, parse_point, run_searches,
};
use trailblaze_paths::kruskal;

/// Shortest paths through generated mazes and terrains.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Kind of world to generate
    #[arg(short, long, value_enum, default_value_t = WorldKind::Maze)]
    world: WorldKind,

    /// World width in cells
    #[arg(long, default_value_t = 31)]
    width: i32,

    /// World height in cells
    #[arg(long, default_value_t = 15)]
    height: i32,

    /// Random seed (random if omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Algorithm names separated by commas, or "all"
    #[arg(short, long, default_value = "all")]
    algorithm: String,

    /// Start cell as x,y (first open cell if omitted)
    #[arg(long, value_parser = parse_point)]
    from: Option<Point>,

    /// Goal cell as x,y (last open cell if omitted)
    #[arg(long, value_parser = parse_point)]
    to: Option<Point>,

    /// Also report the minimum spanning tree of the world
    #[arg(long)]
    mst: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let algorithms = parse_algorithms(&args.algorithm)?;
    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    let mut rng = StdRng::seed_from_u64(seed);
    let world = build_world(args.world, args.width, args.height, &mut rng)?;
    let (from, to) = endpoints(&world, args.from, args.to)?;

    println!(
        "{} {}x{} (seed {seed}), {from} -> {to}",
        world.kind(),
        args.width,
        args.height
    );

    let reports = run_searches(&world, &algorithms, from, to);
    for r in &reports {
        if r.path.is_empty() {
            println!(
                "{:>12}: no path ({} expansions, {:.3} ms)",
                r.algorithm.name(),
                r.stats.expanded,
                r.elapsed.as_secs_f64() * 1e3
            );
        } else {
            println!(
                "{:>12}: {} steps, cost {:.3}, {} expansions, {} iterations, {:.3} ms",
                r.algorithm.name(),
                r.path.len() - 1,
                r.cost,
                r.stats.expanded,
                r.stats.iterations,
                r.elapsed.as_secs_f64() * 1e3
            );
        }
    }

    if args.mst {
        let forest = kruskal(&world);
        println!(
            "spanning forest: {} edges, {} trees, total cost {:.3}",
            forest.len(),
            forest.tree_count(),
            forest.total_cost()
        );
    }

    for r in reports.iter().filter(|r| !r.path.is_empty() && !r.reaches(&world, from, to)) {
        log::warn!("{}: path does not run from {from} to {to}", r.algorithm);
    }
    if let Some(best) = reports.iter().find(|r| r.reaches(&world, from, to)) {
        println!();
        print!("{}", world.render_path(&best.path));
    }

    Ok(())
}

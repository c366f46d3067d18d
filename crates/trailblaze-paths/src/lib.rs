//! Path-search and spanning-tree algorithms over pluggable weighted graphs.
//!
//! This crate provides:
//!
//! - **A\*** best-first search ([`PathSearch::astar`])
//! - **IDA\*** cost-bounded depth-first search ([`PathSearch::ida_star`])
//! - **Memory-optimized IDA\*** and **periphery sweep**, two explicit-frontier
//!   iterative-deepening variants ([`PathSearch::memory_optimized_ida_star`],
//!   [`PathSearch::periphery_sweep`])
//! - **Kruskal** minimum spanning tree / forest ([`kruskal`])
//! - **Dijkstra** single-source cost maps ([`dijkstra_costs`])
//!
//! Every search takes its heuristic as a parameter and reports vertex state
//! transitions through an optional [`Observer`](trailblaze_core::Observer).
//! All score tables and frontiers are local to a single call.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | neighbour enumeration |
//! | [`WeightedPather`] : [`Pather`] | every search, Dijkstra |
//! | [`SpanningGraph`] : [`WeightedPather`] | Kruskal |
//! | [`Heuristic`] | every search |

mod astar;
mod dijkstra;
mod distance;
mod frontier;
mod ida;
mod kruskal;
mod path;
mod search;
mod sweep;
mod traits;
mod unionfind;

pub use dijkstra::dijkstra_costs;
pub use distance::{chebyshev, euclidean, manhattan, octile};
pub use kruskal::{SpanningForest, kruskal};
pub use path::Path;
pub use search::{
    Algorithm, ParseAlgorithmError, PathSearch, SearchStats, astar, ida_star,
    memory_optimized_ida_star, periphery_sweep,
};
pub use traits::{Heuristic, Pather, SpanningGraph, WeightedPather, ZeroHeuristic};
pub use unionfind::UnionFind;

#[cfg(test)]
pub(crate) mod testgraphs;

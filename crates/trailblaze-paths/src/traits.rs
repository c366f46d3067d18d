use std::fmt::Debug;
use std::hash::Hash;

use trailblaze_core::{BasicGraph, Edge, VertexId};

/// Minimal graph interface: neighbour enumeration.
pub trait Pather {
    /// Vertex identity. Must be stable for the lifetime of a search.
    type Node: Copy + Eq + Hash + Debug;

    /// Append neighbours of `node` into `buf`. The caller clears `buf` before calling.
    fn neighbors(&self, node: Self::Node, buf: &mut Vec<Self::Node>);
}

/// Pather with weighted edges.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` to adjacent `to`. Must be >= 0.
    ///
    /// An infinite cost marks the step as impassable.
    fn cost(&self, from: Self::Node, to: Self::Node) -> f64;
}

/// Weighted graph that can enumerate all of its vertices and edges.
pub trait SpanningGraph: WeightedPather {
    /// Append every vertex into `buf`. Repeated vertices count once.
    fn vertices(&self, buf: &mut Vec<Self::Node>);

    /// Append every edge into `buf`. Undirected graphs may list each
    /// connection once or in both directions.
    fn edges(&self, buf: &mut Vec<Edge<Self::Node>>);
}

/// Estimate of the remaining cost between two vertices.
///
/// Must never overestimate the true cost (admissible) for the searches to
/// return shortest paths. Consistency is assumed but not required.
pub trait Heuristic<N> {
    fn estimate(&self, from: N, to: N) -> f64;
}

impl<N, F: Fn(N, N) -> f64> Heuristic<N> for F {
    #[inline]
    fn estimate(&self, from: N, to: N) -> f64 {
        self(from, to)
    }
}

/// The zero heuristic. Turns every search into uniform-cost search.
#[derive(Copy, Clone, Debug, Default)]
pub struct ZeroHeuristic;

impl<N> Heuristic<N> for ZeroHeuristic {
    #[inline]
    fn estimate(&self, _from: N, _to: N) -> f64 {
        0.0
    }
}

impl<N> Heuristic<N> for &ZeroHeuristic {
    #[inline]
    fn estimate(&self, _from: N, _to: N) -> f64 {
        0.0
    }
}

// ---------------------------------------------------------------------------
// BasicGraph
// ---------------------------------------------------------------------------

impl Pather for BasicGraph {
    type Node = VertexId;

    fn neighbors(&self, node: VertexId, buf: &mut Vec<VertexId>) {
        buf.extend_from_slice(BasicGraph::neighbors(self, node));
    }
}

impl WeightedPather for BasicGraph {
    fn cost(&self, from: VertexId, to: VertexId) -> f64 {
        BasicGraph::cost(self, from, to).unwrap_or(f64::INFINITY)
    }
}

impl SpanningGraph for BasicGraph {
    fn vertices(&self, buf: &mut Vec<VertexId>) {
        buf.extend(BasicGraph::vertices(self));
    }

    fn edges(&self, buf: &mut Vec<Edge>) {
        buf.extend_from_slice(BasicGraph::edges(self));
    }
}

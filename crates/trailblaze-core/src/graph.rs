//! An arena-backed weighted graph with named vertices.
//!
//! Vertices live in a `Vec` owned by [`BasicGraph`] and are addressed by
//! [`VertexId`] indices, so paths and score tables never borrow from the
//! graph. Edges are directed; [`BasicGraph::connect`] adds both directions.

use std::collections::HashMap;
use std::fmt;

/// Index of a vertex inside a [`BasicGraph`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VertexId(pub usize);

impl VertexId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Index of an edge inside a [`BasicGraph`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeId(pub usize);

/// A weighted edge between two vertices of type `N`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge<N = VertexId> {
    pub from: N,
    pub to: N,
    pub cost: f64,
}

impl<N> Edge<N> {
    pub fn new(from: N, to: N, cost: f64) -> Self {
        Self { from, to, cost }
    }

    /// The same edge travelled in the opposite direction.
    pub fn reversed(self) -> Self {
        Self {
            from: self.to,
            to: self.from,
            cost: self.cost,
        }
    }
}

/// Errors raised while building a [`BasicGraph`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphError {
    #[error("duplicate vertex name \u{201c}{0}\u{201d}")]
    DuplicateVertex(String),
    #[error("unknown vertex {0}")]
    UnknownVertex(VertexId),
    #[error("invalid cost {cost} for edge {from} -> {to}: costs must be finite and non-negative")]
    InvalidCost {
        from: VertexId,
        to: VertexId,
        cost: f64,
    },
}

#[derive(Debug, Clone)]
struct VertexData {
    name: String,
    out: Vec<VertexId>,
}

/// Weighted directed graph with named vertices and O(1) edge lookup.
#[derive(Debug, Clone, Default)]
pub struct BasicGraph {
    vertices: Vec<VertexData>,
    by_name: HashMap<String, VertexId>,
    edges: Vec<Edge>,
    // (from, to) -> position in `edges`
    index: HashMap<(VertexId, VertexId), EdgeId>,
}

impl BasicGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a vertex with a unique name.
    pub fn add_vertex(&mut self, name: impl Into<String>) -> Result<VertexId, GraphError> {
        let name = name.into();
        if self.by_name.contains_key(&name) {
            return Err(GraphError::DuplicateVertex(name));
        }
        let id = VertexId(self.vertices.len());
        self.by_name.insert(name.clone(), id);
        self.vertices.push(VertexData {
            name,
            out: Vec::new(),
        });
        Ok(id)
    }

    /// Add a directed edge. Re-adding an existing edge replaces its cost.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId, cost: f64) -> Result<EdgeId, GraphError> {
        for v in [from, to] {
            if !self.contains(v) {
                return Err(GraphError::UnknownVertex(v));
            }
        }
        if !cost.is_finite() || cost < 0.0 {
            return Err(GraphError::InvalidCost { from, to, cost });
        }
        if let Some(&id) = self.index.get(&(from, to)) {
            self.edges[id.0].cost = cost;
            return Ok(id);
        }
        let id = EdgeId(self.edges.len());
        self.edges.push(Edge::new(from, to, cost));
        self.index.insert((from, to), id);
        self.vertices[from.0].out.push(to);
        Ok(id)
    }

    /// Add an undirected connection as a pair of directed edges.
    pub fn connect(&mut self, a: VertexId, b: VertexId, cost: f64) -> Result<(EdgeId, EdgeId), GraphError> {
        let ab = self.add_edge(a, b, cost)?;
        let ba = self.add_edge(b, a, cost)?;
        Ok((ab, ba))
    }

    /// Whether `v` belongs to this graph.
    #[inline]
    pub fn contains(&self, v: VertexId) -> bool {
        v.0 < self.vertices.len()
    }

    /// Look a vertex up by name.
    pub fn vertex(&self, name: &str) -> Option<VertexId> {
        self.by_name.get(name).copied()
    }

    /// Name of a vertex.
    pub fn name(&self, v: VertexId) -> Option<&str> {
        self.vertices.get(v.0).map(|d| d.name.as_str())
    }

    /// Names along a sequence of vertices, skipping unknown ids.
    pub fn names<'a>(&'a self, path: &[VertexId]) -> Vec<&'a str> {
        path.iter().filter_map(|&v| self.name(v)).collect()
    }

    /// Out-neighbours of `v`, in insertion order. Empty for unknown vertices.
    pub fn neighbors(&self, v: VertexId) -> &[VertexId] {
        self.vertices.get(v.0).map_or(&[], |d| d.out.as_slice())
    }

    /// The directed edge `from -> to`, if present.
    pub fn edge(&self, from: VertexId, to: VertexId) -> Option<&Edge> {
        self.index.get(&(from, to)).map(|id| &self.edges[id.0])
    }

    /// Edge by id.
    pub fn edge_by_id(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.0)
    }

    /// Cost of the directed edge `from -> to`, if present.
    #[inline]
    pub fn cost(&self, from: VertexId, to: VertexId) -> Option<f64> {
        self.edge(from, to).map(|e| e.cost)
    }

    /// All vertex ids, in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        (0..self.vertices.len()).map(VertexId)
    }

    /// All directed edges, in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

use std::ops::Deref;

use crate::traits::WeightedPather;

/// An ordered sequence of vertices, source first and target last.
///
/// An empty path means no path was found.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path<N> {
    nodes: Vec<N>,
}

impl<N> Default for Path<N> {
    fn default() -> Self {
        Self::none()
    }
}

impl<N> Path<N> {
    /// The empty "no path" value.
    pub fn none() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Whether no path was found.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of vertices, endpoints included.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    pub fn into_vec(self) -> Vec<N> {
        self.nodes
    }
}

impl<N: Copy + PartialEq> Path<N> {
    pub fn first(&self) -> Option<N> {
        self.nodes.first().copied()
    }

    pub fn last(&self) -> Option<N> {
        self.nodes.last().copied()
    }

    /// Sum of the edge costs along the path. Zero for empty and one-vertex paths.
    pub fn cost<G: WeightedPather<Node = N>>(&self, graph: &G) -> f64 {
        self.nodes.windows(2).map(|w| graph.cost(w[0], w[1])).sum()
    }

    /// Whether every consecutive pair is joined by a passable edge of `graph`.
    ///
    /// Empty and one-vertex paths are trivially valid.
    pub fn is_valid<G: WeightedPather<Node = N>>(&self, graph: &G) -> bool {
        let mut buf = Vec::new();
        self.nodes.windows(2).all(|w| {
            buf.clear();
            graph.neighbors(w[0], &mut buf);
            buf.contains(&w[1]) && graph.cost(w[0], w[1]).is_finite()
        })
    }
}

impl<N> From<Vec<N>> for Path<N> {
    fn from(nodes: Vec<N>) -> Self {
        Self { nodes }
    }
}

impl<N> Deref for Path<N> {
    type Target = [N];
    fn deref(&self) -> &[N] {
        &self.nodes
    }
}

impl<N> IntoIterator for Path<N> {
    type Item = N;
    type IntoIter = std::vec::IntoIter<N>;
    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}

impl<'a, N> IntoIterator for &'a Path<N> {
    type Item = &'a N;
    type IntoIter = std::slice::Iter<'a, N>;
    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

//! Kruskal's minimum spanning tree (or forest).

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use trailblaze_core::Edge;

use crate::traits::SpanningGraph;
use crate::unionfind::UnionFind;

/// Edges accepted by [`kruskal`], in acceptance (ascending cost) order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpanningForest<N> {
    edges: Vec<Edge<N>>,
    vertex_count: usize,
}

impl<N: Copy + PartialEq> SpanningForest<N> {
    pub fn edges(&self) -> &[Edge<N>] {
        &self.edges
    }

    pub fn into_edges(self) -> Vec<Edge<N>> {
        self.edges
    }

    /// Number of accepted edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Sum of the accepted edge costs.
    pub fn total_cost(&self) -> f64 {
        self.edges.iter().map(|e| e.cost).sum()
    }

    /// Number of trees, isolated vertices included.
    pub fn tree_count(&self) -> usize {
        self.vertex_count - self.edges.len()
    }

    /// Whether `a` and `b` are joined by an accepted edge, in either direction.
    pub fn contains(&self, a: N, b: N) -> bool {
        self.edges
            .iter()
            .any(|e| (e.from == a && e.to == b) || (e.from == b && e.to == a))
    }
}

/// Queue entry ordered by ascending cost, then by insertion order.
#[derive(Clone, Copy)]
struct Candidate {
    cost: f64,
    seq: usize,
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops the cheapest edge first.
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

/// Compute a minimum spanning forest of `graph`.
///
/// Connected graphs yield a tree with `|V| - 1` edges; otherwise one tree
/// per connected component. Edges touching vertices that `graph` does not
/// list are ignored.
pub fn kruskal<G: SpanningGraph>(graph: &G) -> SpanningForest<G::Node> {
    let mut vertices = Vec::new();
    graph.vertices(&mut vertices);
    // Dense ids in first-seen order; repeated vertices keep their first id.
    let mut index: HashMap<G::Node, usize> = HashMap::with_capacity(vertices.len());
    for v in vertices {
        let next = index.len();
        index.entry(v).or_insert(next);
    }

    let mut edges = Vec::new();
    graph.edges(&mut edges);

    let mut queue: BinaryHeap<Candidate> = edges
        .iter()
        .enumerate()
        .map(|(seq, e)| Candidate { cost: e.cost, seq })
        .collect();

    let mut clusters = UnionFind::new(index.len());
    let mut accepted = Vec::new();

    while let Some(Candidate { seq, .. }) = queue.pop() {
        if clusters.components() == 1 {
            break;
        }
        let e = edges[seq];
        let (Some(&a), Some(&b)) = (index.get(&e.from), index.get(&e.to)) else {
            continue;
        };
        if clusters.union(a, b) {
            accepted.push(e);
        }
    }

    let forest = SpanningForest {
        edges: accepted,
        vertex_count: index.len(),
    };
    log::debug!(
        "kruskal: accepted {} of {} edges, {} trees, total cost {}",
        forest.len(),
        edges.len(),
        forest.tree_count(),
        forest.total_cost()
    );
    forest
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testgraphs::{diamond, from_edges, islands};
    use proptest::prelude::*;

    #[test]
    fn drops_the_expensive_chord() {
        let (g, [a, b, c, d]) = diamond();
        let mst = kruskal(&g);
        assert_eq!(mst.len(), 3);
        assert!(mst.contains(a, b));
        assert!(mst.contains(c, b));
        assert!(mst.contains(d, c));
        assert!(!mst.contains(a, c));
        assert_eq!(mst.total_cost(), 4.0);
        assert_eq!(mst.tree_count(), 1);
    }

    #[test]
    fn disconnected_graph_yields_a_forest() {
        let (g, _) = islands();
        let mst = kruskal(&g);
        // Components {A, B, C}, {D, E}, {F}.
        assert_eq!(mst.len(), 6 - 3);
        assert_eq!(mst.tree_count(), 3);
        assert_eq!(mst.total_cost(), 1.0 + 3.0 + 2.0);
    }

    #[test]
    fn empty_graph_has_no_edges() {
        let (g, _) = from_edges(0, &[]);
        let mst = kruskal(&g);
        assert!(mst.is_empty());
        assert_eq!(mst.tree_count(), 0);
    }

    #[test]
    fn self_loops_are_never_accepted() {
        let (g, ids) = from_edges(2, &[(0, 0, 0.0), (0, 1, 2.0)]);
        let mst = kruskal(&g);
        assert_eq!(mst.len(), 1);
        assert!(mst.contains(ids[0], ids[1]));
    }

    /// Lists vertex 0 twice and vertex 2 after the repeat.
    struct RepeatedVertex;

    impl crate::traits::Pather for RepeatedVertex {
        type Node = usize;

        fn neighbors(&self, node: usize, buf: &mut Vec<usize>) {
            match node {
                1 => buf.push(2),
                2 => buf.push(1),
                _ => {}
            }
        }
    }

    impl crate::traits::WeightedPather for RepeatedVertex {
        fn cost(&self, from: usize, to: usize) -> f64 {
            if from.min(to) == 1 && from.max(to) == 2 { 1.5 } else { f64::INFINITY }
        }
    }

    impl SpanningGraph for RepeatedVertex {
        fn vertices(&self, buf: &mut Vec<usize>) {
            buf.extend([0, 1, 0, 2]);
        }

        fn edges(&self, buf: &mut Vec<Edge<usize>>) {
            buf.push(Edge::new(2, 1, 1.5));
        }
    }

    #[test]
    fn repeated_vertices_are_counted_once() {
        let forest = kruskal(&RepeatedVertex);
        assert_eq!(forest.len(), 1);
        assert!(forest.contains(1, 2));
        assert_eq!(forest.total_cost(), 1.5);
        // {0} and {1, 2}.
        assert_eq!(forest.tree_count(), 2);
    }

    /// Minimum over every (|V|-1)-subset of edges that spans the graph.
    fn brute_force_mst_cost(n: usize, edges: &[(usize, usize, f64)]) -> Option<f64> {
        let m = edges.len();
        let mut best: Option<f64> = None;
        for mask in 0u32..(1 << m) {
            if mask.count_ones() as usize != n - 1 {
                continue;
            }
            let mut uf = UnionFind::new(n);
            let mut cost = 0.0;
            for (i, &(a, b, c)) in edges.iter().enumerate() {
                if mask & (1 << i) != 0 {
                    uf.union(a, b);
                    cost += c;
                }
            }
            if uf.components() == 1 && best.is_none_or(|b| cost < b) {
                best = Some(cost);
            }
        }
        best
    }

    fn arb_graph() -> impl Strategy<Value = (usize, Vec<(usize, usize, f64)>)> {
        (2usize..6).prop_flat_map(|n| {
            let edge = (0..n, 0..n, 1u32..10).prop_map(|(a, b, c)| (a, b, c as f64));
            (Just(n), prop::collection::vec(edge, 0..10))
        })
    }

    proptest! {
        #[test]
        fn forest_size_and_minimality((n, edges) in arb_graph()) {
            let (g, _) = from_edges(n, &edges);
            let mst = kruskal(&g);

            let mut uf = UnionFind::new(n);
            for &(a, b, _) in &edges {
                uf.union(a, b);
            }
            prop_assert_eq!(mst.len(), n - uf.components());
            prop_assert_eq!(mst.tree_count(), uf.components());

            // Accepted edges never close a cycle.
            let mut check = UnionFind::new(n);
            for e in mst.edges() {
                prop_assert!(check.union(e.from.index(), e.to.index()));
            }

            if uf.components() == 1 {
                let best = brute_force_mst_cost(n, &edges);
                prop_assert_eq!(Some(mst.total_cost()), best);
            }
        }
    }
}

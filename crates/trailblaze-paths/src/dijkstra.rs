use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use crate::traits::WeightedPather;

#[derive(Clone, Copy)]
struct Entry<N> {
    node: N,
    g: f64,
}

impl<N> Ord for Entry<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.g.total_cmp(&self.g)
    }
}

impl<N> PartialOrd for Entry<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N> PartialEq for Entry<N> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<N> Eq for Entry<N> {}

/// Compute the shortest-path cost from `source` to every reachable vertex.
///
/// Vertices missing from the result are unreachable. Useful as a reference
/// when checking heuristic searches.
pub fn dijkstra_costs<G: WeightedPather>(graph: &G, source: G::Node) -> HashMap<G::Node, f64> {
    let mut dist: HashMap<G::Node, f64> = HashMap::new();
    let mut open = BinaryHeap::new();
    let mut nbuf = Vec::new();

    dist.insert(source, 0.0);
    open.push(Entry { node: source, g: 0.0 });

    while let Some(Entry { node, g }) = open.pop() {
        if dist.get(&node).is_some_and(|&d| g > d) {
            continue;
        }
        nbuf.clear();
        graph.neighbors(node, &mut nbuf);
        for &next in nbuf.iter() {
            let c = graph.cost(node, next);
            if !c.is_finite() {
                continue;
            }
            let tentative = g + c;
            if dist.get(&next).is_some_and(|&d| tentative >= d) {
                continue;
            }
            dist.insert(next, tentative);
            open.push(Entry {
                node: next,
                g: tentative,
            });
        }
    }

    dist
}

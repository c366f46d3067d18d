//! IDA*: cost-bounded depth-first search with a rising threshold.

use std::collections::HashSet;

use trailblaze_core::{Observer, VertexState};

use crate::path::Path;
use crate::search::PathSearch;
use crate::traits::{Heuristic, WeightedPather};

/// Outcome of one bounded depth-first dive.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Dive {
    /// The target was reached; the working path holds the route.
    Found,
    /// Some branches were pruned; retry with this threshold.
    Continue(f64),
    /// Nothing was pruned and the target was not reached.
    Exhausted,
}

impl<G, H, O> PathSearch<'_, G, H, O>
where
    G: WeightedPather,
    H: Heuristic<G::Node>,
    O: Observer<G::Node>,
{
    /// Compute the shortest path from `from` to `to` using IDA*.
    ///
    /// Memory use is proportional to the path length, at the price of
    /// re-expanding vertices on every iteration. Recursion depth equals the
    /// length of the current path.
    pub fn ida_star(&mut self, from: G::Node, to: G::Node) -> Path<G::Node> {
        self.stats.expanded = 0;
        self.stats.iterations = 0;

        let mut threshold = self.estimate(from, to);
        let mut path = vec![from];
        let mut on_path: HashSet<G::Node> = HashSet::from([from]);
        self.mark(from, VertexState::Frontier);

        let result = loop {
            self.stats.iterations += 1;
            log::trace!("ida*: iteration {} with threshold {threshold}", self.stats.iterations);

            match self.dive(from, 0.0, threshold, to, &mut path, &mut on_path) {
                Dive::Found => break Path::from(path),
                Dive::Continue(next) => threshold = next,
                Dive::Exhausted => break Path::none(),
            }
        };

        self.finish("ida*", from, to, &result);
        result
    }

    fn dive(
        &mut self,
        current: G::Node,
        g: f64,
        threshold: f64,
        to: G::Node,
        path: &mut Vec<G::Node>,
        on_path: &mut HashSet<G::Node>,
    ) -> Dive {
        let f = g + self.estimate(current, to);
        if f > threshold {
            return Dive::Continue(f);
        }

        self.stats.expanded += 1;
        self.mark(current, VertexState::Expanded);
        if current == to {
            return Dive::Found;
        }

        // Each recursion level needs its own successor list.
        let mut successors = Vec::new();
        self.graph.neighbors(current, &mut successors);

        let mut f_min = f64::INFINITY;
        for next in successors {
            if on_path.contains(&next) {
                continue;
            }
            let Some(next_g) = self.step(g, current, next) else {
                continue;
            };

            self.mark(next, VertexState::Frontier);
            path.push(next);
            on_path.insert(next);

            match self.dive(next, next_g, threshold, to, path, on_path) {
                Dive::Found => return Dive::Found,
                Dive::Continue(t) => f_min = f_min.min(t),
                Dive::Exhausted => {}
            }

            path.pop();
            on_path.remove(&next);
        }

        if f_min.is_finite() {
            Dive::Continue(f_min)
        } else {
            Dive::Exhausted
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testgraphs::{diamond, from_edges};
    use crate::traits::ZeroHeuristic;
    use trailblaze_core::VertexId;

    #[test]
    fn thresholds_rise_until_the_target_fits() {
        let (g, [a, b, c, d]) = diamond();
        let mut search = PathSearch::new(&g, ZeroHeuristic);
        let path = search.ida_star(a, d);
        assert_eq!(path.nodes(), &[a, b, c, d]);
        // Thresholds 0, 1, 3, 4 with a zero heuristic.
        assert_eq!(search.stats().iterations, 4);
    }

    #[test]
    fn exact_heuristic_needs_a_single_iteration() {
        let (g, [a, b, c, d]) = diamond();
        let exact = [4.0, 3.0, 1.0, 0.0];
        let h = move |v: VertexId, _: VertexId| exact[v.index()];
        let mut search = PathSearch::new(&g, h);
        assert_eq!(search.ida_star(a, d).nodes(), &[a, b, c, d]);
        assert_eq!(search.stats().iterations, 1);
    }

    #[test]
    fn cycles_do_not_trap_the_dive() {
        // 0-1-2-0 triangle, target 3 unreachable.
        let (g, ids) = from_edges(4, &[(0, 1, 1.0), (1, 2, 1.0), (2, 0, 1.0)]);
        let mut search = PathSearch::new(&g, ZeroHeuristic);
        assert!(search.ida_star(ids[0], ids[3]).is_empty());
    }

    #[test]
    fn a_vertex_may_be_revisited_through_a_cheaper_branch() {
        // 0->1 is expensive, 0->2->1 is cheap; 1->3 leads to the target.
        let (g, ids) = from_edges(4, &[(0, 1, 10.0), (0, 2, 1.0), (2, 1, 1.0), (1, 3, 1.0)]);
        let path = PathSearch::new(&g, ZeroHeuristic).ida_star(ids[0], ids[3]);
        assert_eq!(path.nodes(), &[ids[0], ids[2], ids[1], ids[3]]);
        assert_eq!(path.cost(&g), 3.0);
    }
}

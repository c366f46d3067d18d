use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use trailblaze_core::{Observer, VertexState};

use crate::path::Path;
use crate::search::{PathSearch, reconstruct};
use crate::traits::{Heuristic, WeightedPather};

/// Open-list entry ordered by `f` for use in `BinaryHeap`.
#[derive(Clone, Copy)]
struct Open<N> {
    node: N,
    g: f64,
    f: f64,
}

impl<N> Ord for Open<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first.
        other.f.total_cmp(&self.f)
    }
}

impl<N> PartialOrd for Open<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N> PartialEq for Open<N> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<N> Eq for Open<N> {}

impl<G, H, O> PathSearch<'_, G, H, O>
where
    G: WeightedPather,
    H: Heuristic<G::Node>,
    O: Observer<G::Node>,
{
    /// Compute the shortest path from `from` to `to` using A*.
    ///
    /// Returns the full path (including both endpoints), or an empty path if
    /// `to` cannot be reached.
    pub fn astar(&mut self, from: G::Node, to: G::Node) -> Path<G::Node> {
        self.stats.expanded = 0;
        self.stats.iterations = 1;

        let mut g_score: HashMap<G::Node, f64> = HashMap::new();
        let mut parent: HashMap<G::Node, G::Node> = HashMap::new();
        let mut open: BinaryHeap<Open<G::Node>> = BinaryHeap::new();

        g_score.insert(from, 0.0);
        open.push(Open {
            node: from,
            g: 0.0,
            f: self.estimate(from, to),
        });
        self.mark(from, VertexState::Frontier);

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search false;
            };
            let ci = current.node;

            // Skip stale entries.
            if g_score.get(&ci).is_some_and(|&g| current.g > g) {
                continue;
            }

            self.stats.expanded += 1;
            self.mark(ci, VertexState::Expanded);
            if ci == to {
                break 'search true;
            }

            nbuf.clear();
            self.graph.neighbors(ci, &mut nbuf);

            for &ni in nbuf.iter() {
                let Some(tentative_g) = self.step(current.g, ci, ni) else {
                    continue;
                };
                if g_score.get(&ni).is_some_and(|&g| tentative_g >= g) {
                    continue;
                }

                g_score.insert(ni, tentative_g);
                parent.insert(ni, ci);
                open.push(Open {
                    node: ni,
                    g: tentative_g,
                    f: tentative_g + self.estimate(ni, to),
                });
                self.mark(ni, VertexState::Frontier);
            }
        };

        self.nbuf = nbuf;

        let path = if found { reconstruct(&parent, to) } else { Path::none() };
        self.finish("astar", from, to, &path);
        path
    }
}

//! Iterative-deepening sweeps over an explicit frontier.
//!
//! Memory-optimized IDA* and the periphery sweep share one procedure. Each
//! outer iteration scans the frontier once, expanding every vertex whose
//! `f = g + h` fits under the threshold. Improved neighbours are relinked at
//! the tail, so they are reached later in the same scan. Vertices over the
//! threshold stay put and propose the next threshold.
//!
//! The periphery sweep evicts expanded vertices, so its frontier holds only
//! the current boundary. Memory-optimized IDA* keeps them, so later
//! iterations restart from the whole explored region rather than from the
//! graph edges.

use std::collections::HashMap;

use trailblaze_core::{Observer, VertexState};

use crate::frontier::FrontierList;
use crate::path::Path;
use crate::search::{PathSearch, reconstruct};
use crate::traits::{Heuristic, WeightedPather};

impl<G, H, O> PathSearch<'_, G, H, O>
where
    G: WeightedPather,
    H: Heuristic<G::Node>,
    O: Observer<G::Node>,
{
    /// Compute the shortest path from `from` to `to` using memory-optimized IDA*.
    ///
    /// Expanded vertices remain in the frontier across iterations.
    pub fn memory_optimized_ida_star(&mut self, from: G::Node, to: G::Node) -> Path<G::Node> {
        let path = self.sweep(from, to, false);
        self.finish("memory-optimized ida*", from, to, &path);
        path
    }

    /// Compute the shortest path from `from` to `to` using the periphery sweep.
    ///
    /// Expanded vertices are evicted, so the frontier only holds the boundary.
    pub fn periphery_sweep(&mut self, from: G::Node, to: G::Node) -> Path<G::Node> {
        let path = self.sweep(from, to, true);
        self.finish("periphery sweep", from, to, &path);
        path
    }

    fn sweep(&mut self, from: G::Node, to: G::Node, evict: bool) -> Path<G::Node> {
        self.stats.expanded = 0;
        self.stats.iterations = 0;

        let mut frontier = FrontierList::new();
        let mut slot_of: HashMap<G::Node, usize> = HashMap::new();
        let mut g_score: HashMap<G::Node, f64> = HashMap::new();
        let mut parent: HashMap<G::Node, G::Node> = HashMap::new();

        slot_of.insert(from, frontier.push_back(from));
        g_score.insert(from, 0.0);
        self.mark(from, VertexState::Frontier);

        let mut threshold = self.estimate(from, to);
        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            if frontier.is_empty() {
                break 'search false;
            }
            self.stats.iterations += 1;
            log::trace!(
                "sweep: iteration {} with threshold {threshold}, {} frontier vertices",
                self.stats.iterations,
                frontier.len()
            );

            let mut f_min = f64::INFINITY;
            let mut cursor = frontier.head();

            while let Some(slot) = cursor {
                let ci = frontier.node(slot);
                let current_g = g_score.get(&ci).copied().unwrap_or(f64::INFINITY);
                let f = current_g + self.estimate(ci, to);

                if f > threshold {
                    f_min = f_min.min(f);
                    cursor = frontier.next(slot);
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
                    let Some(tentative_g) = self.step(current_g, ci, ni) else {
                        continue;
                    };
                    if g_score.get(&ni).is_some_and(|&g| tentative_g >= g) {
                        continue;
                    }

                    if let Some(old) = slot_of.remove(&ni) {
                        frontier.remove(old);
                    }
                    slot_of.insert(ni, frontier.push_back(ni));
                    g_score.insert(ni, tentative_g);
                    parent.insert(ni, ci);
                    self.mark(ni, VertexState::Frontier);
                }

                // Read the link only now: the loop above may have appended
                // or relocated vertices after this one.
                cursor = frontier.next(slot);
                if evict {
                    frontier.remove(slot);
                    slot_of.remove(&ci);
                }
            }

            // A scan that skipped nothing has settled every reachable vertex.
            if f_min.is_infinite() {
                break 'search false;
            }
            threshold = f_min;
        };

        self.nbuf = nbuf;

        if found { reconstruct(&parent, to) } else { Path::none() }
    }
}

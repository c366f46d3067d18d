//! The search façade shared by every path-search algorithm.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use trailblaze_core::{NoObserver, Observer, VertexState};

use crate::path::Path;
use crate::traits::{Heuristic, WeightedPather};

/// Path-search algorithm selector.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    AStar,
    IdaStar,
    MemoryOptimizedIdaStar,
    PeripherySweep,
}

impl Algorithm {
    /// Every algorithm, in presentation order.
    pub const ALL: [Algorithm; 4] = [
        Self::AStar,
        Self::IdaStar,
        Self::MemoryOptimizedIdaStar,
        Self::PeripherySweep,
    ];

    /// Short command-line name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::AStar => "astar",
            Self::IdaStar => "ida",
            Self::MemoryOptimizedIdaStar => "memory-ida",
            Self::PeripherySweep => "periphery",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown [`Algorithm`] name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown algorithm \u{201c}{0}\u{201d} (expected astar, ida, memory-ida or periphery)")]
pub struct ParseAlgorithmError(pub String);

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "astar" | "a*" | "a-star" => Ok(Self::AStar),
            "ida" | "ida*" | "idastar" | "ida-star" => Ok(Self::IdaStar),
            "memory-ida" | "memory-ida*" | "memory-optimized-ida" | "moida" => {
                Ok(Self::MemoryOptimizedIdaStar)
            }
            "periphery" | "periphery-sweep" | "sweep" => Ok(Self::PeripherySweep),
            _ => Err(ParseAlgorithmError(s.to_string())),
        }
    }
}

/// Counters for the most recent search.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Vertex expansions, re-expansions included.
    pub expanded: usize,
    /// Outer iterations (thresholds tried). Always 1 for A*.
    pub iterations: usize,
}

/// Runs path searches over a borrowed graph.
///
/// `PathSearch` owns the heuristic and the observer and reuses a neighbour
/// scratch buffer between calls. Score tables and frontiers are created per
/// call and dropped when it returns.
pub struct PathSearch<'g, G: WeightedPather, H, O = NoObserver> {
    pub(crate) graph: &'g G,
    pub(crate) heuristic: H,
    pub(crate) observer: O,
    pub(crate) stats: SearchStats,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<G::Node>,
}

impl<'g, G, H> PathSearch<'g, G, H>
where
    G: WeightedPather,
    H: Heuristic<G::Node>,
{
    /// Create a search over `graph` guided by `heuristic`, without observer.
    pub fn new(graph: &'g G, heuristic: H) -> Self {
        Self {
            graph,
            heuristic,
            observer: NoObserver,
            stats: SearchStats::default(),
            nbuf: Vec::with_capacity(8),
        }
    }
}

impl<'g, G, H, O> PathSearch<'g, G, H, O>
where
    G: WeightedPather,
    H: Heuristic<G::Node>,
    O: Observer<G::Node>,
{
    /// Replace the observer notified of vertex state transitions.
    pub fn with_observer<P: Observer<G::Node>>(self, observer: P) -> PathSearch<'g, G, H, P> {
        PathSearch {
            graph: self.graph,
            heuristic: self.heuristic,
            observer,
            stats: self.stats,
            nbuf: self.nbuf,
        }
    }

    pub fn graph(&self) -> &'g G {
        self.graph
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    pub fn into_observer(self) -> O {
        self.observer
    }

    /// Counters of the most recent search.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Run `algorithm` from `from` to `to`.
    pub fn run(&mut self, algorithm: Algorithm, from: G::Node, to: G::Node) -> Path<G::Node> {
        match algorithm {
            Algorithm::AStar => self.astar(from, to),
            Algorithm::IdaStar => self.ida_star(from, to),
            Algorithm::MemoryOptimizedIdaStar => self.memory_optimized_ida_star(from, to),
            Algorithm::PeripherySweep => self.periphery_sweep(from, to),
        }
    }

    #[inline]
    pub(crate) fn estimate(&self, from: G::Node, to: G::Node) -> f64 {
        self.heuristic.estimate(from, to)
    }

    #[inline]
    pub(crate) fn mark(&mut self, node: G::Node, state: VertexState) {
        self.observer.on_state(node, state);
    }

    /// Cost of reaching `to` through `from` at `g`, `None` if the step is impassable.
    #[inline]
    pub(crate) fn step(&self, g: f64, from: G::Node, to: G::Node) -> Option<f64> {
        let c = self.graph.cost(from, to);
        c.is_finite().then_some(g + c)
    }

    pub(crate) fn finish(&self, name: &str, from: G::Node, to: G::Node, path: &Path<G::Node>) {
        log::debug!(
            "{name}: {from:?} -> {to:?}: {} vertices, {} expansions over {} iterations",
            path.len(),
            self.stats.expanded,
            self.stats.iterations
        );
    }
}

/// Follow predecessors back from `target` and return the path in source-first order.
pub(crate) fn reconstruct<N: Copy + Eq + std::hash::Hash>(parent: &HashMap<N, N>, target: N) -> Path<N> {
    let mut nodes = vec![target];
    let mut cur = target;
    while let Some(&p) = parent.get(&cur) {
        nodes.push(p);
        cur = p;
    }
    nodes.reverse();
    Path::from(nodes)
}

// ---------------------------------------------------------------------------
// Free entry points
// ---------------------------------------------------------------------------

/// Shortest path from `from` to `to` using A*.
pub fn astar<G, H>(graph: &G, heuristic: H, from: G::Node, to: G::Node) -> Path<G::Node>
where
    G: WeightedPather,
    H: Heuristic<G::Node>,
{
    PathSearch::new(graph, heuristic).astar(from, to)
}

/// Shortest path from `from` to `to` using IDA*.
pub fn ida_star<G, H>(graph: &G, heuristic: H, from: G::Node, to: G::Node) -> Path<G::Node>
where
    G: WeightedPather,
    H: Heuristic<G::Node>,
{
    PathSearch::new(graph, heuristic).ida_star(from, to)
}

/// Shortest path from `from` to `to` using memory-optimized IDA*.
pub fn memory_optimized_ida_star<G, H>(graph: &G, heuristic: H, from: G::Node, to: G::Node) -> Path<G::Node>
where
    G: WeightedPather,
    H: Heuristic<G::Node>,
{
    PathSearch::new(graph, heuristic).memory_optimized_ida_star(from, to)
}

/// Shortest path from `from` to `to` using the periphery sweep.
pub fn periphery_sweep<G, H>(graph: &G, heuristic: H, from: G::Node, to: G::Node) -> Path<G::Node>
where
    G: WeightedPather,
    H: Heuristic<G::Node>,
{
    PathSearch::new(graph, heuristic).periphery_sweep(from, to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testgraphs::{diamond, from_edges, islands};
    use crate::traits::ZeroHeuristic;
    use crate::dijkstra::dijkstra_costs;
    use proptest::prelude::*;
    use trailblaze_core::{StateLog, VertexId};

    #[test]
    fn algorithm_names_round_trip() {
        for alg in Algorithm::ALL {
            assert_eq!(alg.to_string().parse::<Algorithm>(), Ok(alg));
        }
        assert_eq!("A*".parse::<Algorithm>(), Ok(Algorithm::AStar));
        assert_eq!(" Sweep ".parse::<Algorithm>(), Ok(Algorithm::PeripherySweep));
        assert_eq!(
            "dfs".parse::<Algorithm>(),
            Err(ParseAlgorithmError("dfs".to_string()))
        );
    }

    #[test]
    fn every_algorithm_prefers_the_cheaper_detour() {
        let (g, [a, b, c, d]) = diamond();
        for alg in Algorithm::ALL {
            let mut search = PathSearch::new(&g, ZeroHeuristic);
            let path = search.run(alg, a, d);
            assert_eq!(path.nodes(), &[a, b, c, d], "{alg}");
            assert_eq!(path.cost(&g), 4.0, "{alg}");
            assert!(search.stats().expanded > 0, "{alg}");
        }
    }

    #[test]
    fn source_equal_to_target_is_a_single_vertex() {
        let (g, [_, b, _, _]) = diamond();
        for alg in Algorithm::ALL {
            let path = PathSearch::new(&g, ZeroHeuristic).run(alg, b, b);
            assert_eq!(path.nodes(), &[b], "{alg}");
            assert_eq!(path.cost(&g), 0.0, "{alg}");
        }
    }

    #[test]
    fn unreachable_target_gives_empty_path() {
        let (g, [a, _, c, d, _, f]) = islands();
        for alg in Algorithm::ALL {
            let mut search = PathSearch::new(&g, ZeroHeuristic);
            assert!(search.run(alg, a, d).is_empty(), "{alg}");
            assert!(search.run(alg, f, c).is_empty(), "{alg}");
        }
    }

    #[test]
    fn free_entry_points_match_the_facade() {
        let (g, [a, _, _, d]) = diamond();
        let h = |_: VertexId, _: VertexId| 0.0;
        let expected = vec![a, VertexId(1), VertexId(2), d];
        assert_eq!(astar(&g, h, a, d).into_vec(), expected);
        assert_eq!(ida_star(&g, h, a, d).into_vec(), expected);
        assert_eq!(memory_optimized_ida_star(&g, h, a, d).into_vec(), expected);
        assert_eq!(periphery_sweep(&g, h, a, d).into_vec(), expected);
    }

    #[test]
    fn vertices_are_frontier_before_expanded() {
        let (g, [a, _, _, d]) = diamond();
        for alg in Algorithm::ALL {
            let mut search = PathSearch::new(&g, ZeroHeuristic).with_observer(StateLog::new());
            search.run(alg, a, d);
            let log = search.into_observer();
            let mut seen_frontier = std::collections::HashSet::new();
            for &(v, state) in log.events() {
                match state {
                    VertexState::Frontier => {
                        seen_frontier.insert(v);
                    }
                    VertexState::Expanded => assert!(seen_frontier.contains(&v), "{alg}"),
                    VertexState::Unvisited => panic!("searches never report unvisited"),
                }
            }
            assert_eq!(log.last(d), VertexState::Expanded, "{alg}");
        }
    }

    #[test]
    fn heuristic_and_observer_can_be_lent() {
        let (g, [a, _, _, d]) = diamond();
        let zero = ZeroHeuristic;
        let mut log = StateLog::new();
        let path = PathSearch::new(&g, &zero).with_observer(&mut log).run(Algorithm::AStar, a, d);
        assert_eq!(path.cost(&g), 4.0);
        assert_eq!(log.events().first(), Some(&(a, VertexState::Frontier)));
        assert_eq!(log.last(d), VertexState::Expanded);
    }

    #[test]
    fn missing_edges_are_impassable() {
        // One-way edge: b can be reached from a, but not the other way round.
        let (mut g, ids) = from_edges(2, &[]);
        g.add_edge(ids[0], ids[1], 1.0).unwrap();
        for alg in Algorithm::ALL {
            let mut search = PathSearch::new(&g, ZeroHeuristic);
            assert_eq!(search.run(alg, ids[0], ids[1]).len(), 2, "{alg}");
            assert!(search.run(alg, ids[1], ids[0]).is_empty(), "{alg}");
        }
    }

    fn arb_graph() -> impl Strategy<Value = (usize, Vec<(usize, usize, f64)>)> {
        (2usize..7).prop_flat_map(|n| {
            let edge = (0..n, 0..n, 0u32..10).prop_map(|(a, b, c)| (a, b, c as f64));
            (Just(n), prop::collection::vec(edge, 0..(n * 2)))
        })
    }

    proptest! {
        #[test]
        fn all_algorithms_agree_with_dijkstra(
            (n, edges) in arb_graph(),
            src in 0usize..7,
            dst in 0usize..7,
        ) {
            let (g, ids) = from_edges(n, &edges);
            let (s, t) = (ids[src % n], ids[dst % n]);
            let oracle = dijkstra_costs(&g, s);
            for alg in Algorithm::ALL {
                let path = PathSearch::new(&g, ZeroHeuristic).run(alg, s, t);
                match oracle.get(&t) {
                    Some(&best) => {
                        prop_assert!(path.is_valid(&g));
                        prop_assert_eq!(path.first(), Some(s));
                        prop_assert_eq!(path.last(), Some(t));
                        prop_assert!((path.cost(&g) - best).abs() < 1e-9, "{} cost {} != {}", alg, path.cost(&g), best);
                    }
                    None => prop_assert!(path.is_empty()),
                }
            }
        }

        #[test]
        fn scaled_down_exact_distances_keep_paths_optimal(
            (n, edges) in arb_graph(),
            src in 0usize..7,
            dst in 0usize..7,
            quarters in prop::collection::vec(0u32..=4, 7),
        ) {
            // Each vertex underestimates by its own factor, so the heuristic is
            // admissible but generally not consistent.
            let (g, ids) = from_edges(n, &edges);
            let (s, t) = (ids[src % n], ids[dst % n]);
            let to_target = dijkstra_costs(&g, t);
            let h = |v: VertexId, _: VertexId| {
                let scale = quarters[v.index()] as f64 / 4.0;
                to_target.get(&v).map_or(0.0, |d| d * scale)
            };
            let best = dijkstra_costs(&g, s).get(&t).copied();
            for alg in Algorithm::ALL {
                let path = PathSearch::new(&g, h).run(alg, s, t);
                match best {
                    Some(best) => {
                        prop_assert!(path.is_valid(&g));
                        prop_assert_eq!(path.first(), Some(s));
                        prop_assert_eq!(path.last(), Some(t));
                        prop_assert!((path.cost(&g) - best).abs() < 1e-9, "{} cost {} != {}", alg, path.cost(&g), best);
                    }
                    None => prop_assert!(path.is_empty()),
                }
            }
        }
    }
}

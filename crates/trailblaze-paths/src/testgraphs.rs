//! Small fixture graphs shared by the unit tests.

use trailblaze_core::{BasicGraph, VertexId};

/// `A–B 1, B–C 2, A–C 4, C–D 1`, all undirected.
pub(crate) fn diamond() -> (BasicGraph, [VertexId; 4]) {
    let mut g = BasicGraph::new();
    let a = g.add_vertex("A").unwrap();
    let b = g.add_vertex("B").unwrap();
    let c = g.add_vertex("C").unwrap();
    let d = g.add_vertex("D").unwrap();
    g.connect(a, b, 1.0).unwrap();
    g.connect(b, c, 2.0).unwrap();
    g.connect(a, c, 4.0).unwrap();
    g.connect(c, d, 1.0).unwrap();
    (g, [a, b, c, d])
}

/// Two components: `A–B–C` and `D–E`, plus the isolated vertex `F`.
pub(crate) fn islands() -> (BasicGraph, [VertexId; 6]) {
    let mut g = BasicGraph::new();
    let ids: Vec<VertexId> = ["A", "B", "C", "D", "E", "F"]
        .into_iter()
        .map(|n| g.add_vertex(n).unwrap())
        .collect();
    g.connect(ids[0], ids[1], 3.0).unwrap();
    g.connect(ids[1], ids[2], 1.0).unwrap();
    g.connect(ids[0], ids[2], 5.0).unwrap();
    g.connect(ids[3], ids[4], 2.0).unwrap();
    (g, [ids[0], ids[1], ids[2], ids[3], ids[4], ids[5]])
}

/// Build an undirected graph on `n` vertices from `(a, b, cost)` triples.
pub(crate) fn from_edges(n: usize, edges: &[(usize, usize, f64)]) -> (BasicGraph, Vec<VertexId>) {
    let mut g = BasicGraph::new();
    let ids: Vec<VertexId> = (0..n).map(|i| g.add_vertex(format!("v{i}")).unwrap()).collect();
    for &(a, b, cost) in edges {
        g.connect(ids[a], ids[b], cost).unwrap();
    }
    (g, ids)
}

use fastrand::Rng;

use crate::color::{Graph, VertexId};

/** Erdős–Rényi random graph G(n,p): each of the n(n-1)/2 possible edges is present with
probability p. The same seed always gives the same graph. */
pub fn gnp_graph(n:usize, p:f64, seed:u64) -> Graph {
    let rng = Rng::with_seed(seed);
    let mut edges:Vec<(VertexId,VertexId)> = Vec::new();
    for u in 0..n {
        for v in u+1..n {
            if rng.f64() < p { edges.push((u,v)); }
        }
    }
    build(n, &edges)
}

/// complete graph on n vertices
pub fn complete_graph(n:usize) -> Graph {
    let edges:Vec<(VertexId,VertexId)> = (0..n)
        .flat_map(|u| (u+1..n).map(move |v| (u,v)))
        .collect();
    build(n, &edges)
}

/** cycle 0-1-...-(n-1)-0

# Panics
 - if n < 3 (no simple cycle exists)
*/
pub fn cycle_graph(n:usize) -> Graph {
    assert!(n >= 3, "a cycle needs at least 3 vertices (given: {})", n);
    let edges:Vec<(VertexId,VertexId)> = (0..n).map(|u| (u, (u+1) % n)).collect();
    build(n, &edges)
}

/// generated edges are in range and loop-free by construction
fn build(n:usize, edges:&[(VertexId,VertexId)]) -> Graph {
    match Graph::new(n, edges) {
        Ok(g) => g,
        Err(e) => panic!("generated an invalid graph: {}", e),
    }
}

use crate::color::{Graph, VertexId, UNASSIGNED};

/** result of the checker. Either the solution is valid and returns the number of colors
used, or it reports the first problem found (scanning vertices by increasing id). */
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckerResult {
    /// feasible coloring using this many distinct colors
    Ok(usize),
    /// vertex not colored
    VertexNotColored(VertexId),
    /// both endpoints of an edge share the same color
    ConflictingEdge(VertexId, VertexId),
}

/** checks the coloring currently stored in the graph.
Every vertex must be colored and no edge may have both endpoints of the same color.
*/
pub fn checker(graph:&Graph) -> CheckerResult {
    for v in 0..graph.nb_vertices() {
        if graph.color(v) == UNASSIGNED {
            return CheckerResult::VertexNotColored(v);
        }
        if let Some(w) = graph.neighbors(v).find(|w| graph.color(*w) == graph.color(v)) {
            return CheckerResult::ConflictingEdge(v, w);
        }
    }
    CheckerResult::Ok(graph.nb_colors_used())
}

/// true iff the graph holds a proper coloring (all vertices colored, no conflicting edge)
pub fn is_proper_coloring(graph:&Graph) -> bool {
    matches!(checker(graph), CheckerResult::Ok(_))
}

/// number of neighbors of v sharing its color
pub fn nb_conflicts(graph:&Graph, v:VertexId) -> usize {
    graph.neighbors(v).filter(|w| graph.color(*w) == graph.color(v)).count()
}

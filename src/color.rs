use std::collections::BTreeSet;

use tracing::info;

use crate::error::ColoringError;

/** Vertex Id */
pub type VertexId = usize;

/** Edge Id (position of the edge in the instance edge list) */
pub type EdgeId = usize;

/** Color of a vertex. Valid colors are 1, 2, ... (0 means unassigned) */
pub type Color = usize;

/// color of a vertex that has not been assigned yet
pub const UNASSIGNED:Color = 0;

/** Solution of a graph coloring problem
(represented as a partition: solution[i] contains the vertices of color i+1).
*/
pub type Solution = Vec<Vec<VertexId>>;

/** undirected edge (unordered pair of vertices) */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    /// first endpoint
    pub u: VertexId,
    /// second endpoint
    pub v: VertexId,
}

impl Edge {
    /// true if the vertex is one of the endpoints
    pub fn touches(&self, w:VertexId) -> bool { self.u == w || self.v == w }
}

/** vertex of the graph: its identity, current color and incident edges */
#[derive(Debug, Clone)]
pub struct Vertex {
    /// original index (0-based)
    id: VertexId,
    /// current color (UNASSIGNED if not colored)
    color: Color,
    /// incident[k]: k-th edge touching this vertex
    incident: Vec<EdgeId>,
}

impl Vertex {
    /// vertex id
    pub fn id(&self) -> VertexId { self.id }

    /// current color
    pub fn color(&self) -> Color { self.color }

    /// incident edge identifiers
    pub fn incident(&self) -> &[EdgeId] { &self.incident }
}

/** models a Graph Coloring instance together with the current color of each vertex.
The vertex set and the edge set are fixed at construction; only colors change afterwards.
*/
#[derive(Debug, Clone)]
pub struct Graph {
    /// edges of the graph
    edges: Vec<Edge>,
    /// vertices of the graph (vertices[i].id == i)
    vertices: Vec<Vertex>,
}

impl Graph {

    /** builds a graph from a number of vertices and an edge list (0-based ids).
    Fails if an edge refers to an unknown vertex or is a self-loop. Duplicate edges are kept.
    */
    pub fn new(nb_vertices:usize, edge_list:&[(VertexId,VertexId)]) -> Result<Self, ColoringError> {
        let mut vertices:Vec<Vertex> = (0..nb_vertices)
            .map(|id| Vertex { id, color:UNASSIGNED, incident:Vec::new() })
            .collect();
        let mut edges = Vec::with_capacity(edge_list.len());
        for (i,(u,v)) in edge_list.iter().enumerate() {
            for w in [*u, *v] {
                if w >= nb_vertices {
                    return Err(ColoringError::VertexOutOfRange { edge:i, vertex:w, nb_vertices });
                }
            }
            if u == v {
                return Err(ColoringError::SelfLoop { edge:i, vertex:*u });
            }
            vertices[*u].incident.push(i);
            vertices[*v].incident.push(i);
            edges.push(Edge { u:*u, v:*v });
        }
        Ok(Self { edges, vertices })
    }

    /// number of vertices
    pub fn nb_vertices(&self) -> usize { self.vertices.len() }

    /// number of edges
    pub fn nb_edges(&self) -> usize { self.edges.len() }

    /// edge list
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// vertex i
    pub fn vertex(&self, i:VertexId) -> &Vertex { &self.vertices[i] }

    /// number of edges touching vertex i
    pub fn degree(&self, i:VertexId) -> usize { self.vertices[i].incident.len() }

    /** returns the vertex reached from `v` through its `slot`-th incident edge.

# Panics
 - (debug builds) if the edge does not touch `v`, which the construction guarantees
    */
    pub fn other_endpoint(&self, v:VertexId, slot:usize) -> VertexId {
        let e = &self.edges[self.vertices[v].incident[slot]];
        debug_assert!(e.touches(v), "edge {:?} listed as incident to {} does not touch it", e, v);
        if e.v == v { e.u } else { e.v }
    }

    /// iterates over the neighbors of v (in incident edge order)
    pub fn neighbors(&self, v:VertexId) -> impl Iterator<Item=VertexId> + '_ {
        (0..self.degree(v)).map(move |slot| self.other_endpoint(v, slot))
    }

    /// colors of all neighbors of v (UNASSIGNED included)
    pub fn neighbor_colors(&self, v:VertexId) -> Vec<Color> {
        self.neighbors(v).map(|w| self.vertices[w].color).collect()
    }

    /// maximum degree of the graph (0 if there is no vertex)
    pub fn max_degree(&self) -> usize {
        (0..self.nb_vertices()).map(|i| self.degree(i)).max().unwrap_or(0)
    }

    /// largest color currently assigned (0 if nothing is colored)
    pub fn max_color_used(&self) -> Color {
        self.vertices.iter().map(|v| v.color).max().unwrap_or(UNASSIGNED)
    }

    /// number of distinct colors currently assigned
    pub fn nb_colors_used(&self) -> usize {
        self.vertices.iter()
            .map(|v| v.color)
            .filter(|c| *c != UNASSIGNED)
            .collect::<BTreeSet<Color>>()
            .len()
    }

    /// current color of vertex i
    pub fn color(&self, i:VertexId) -> Color { self.vertices[i].color }

    /// current colors, in vertex id order
    pub fn colors(&self) -> Vec<Color> {
        self.vertices.iter().map(|v| v.color).collect()
    }

    /// sets the color of vertex i (UNASSIGNED un-colors it)
    pub fn set_color(&mut self, i:VertexId, c:Color) { self.vertices[i].color = c; }

    /// un-colors every vertex
    pub fn reset_colors(&mut self) {
        for v in self.vertices.iter_mut() { v.color = UNASSIGNED; }
    }

    /** installs an externally supplied coloring (colors[i]: color of vertex i). */
    pub fn apply_coloring(&mut self, colors:&[Color]) -> Result<(), ColoringError> {
        if colors.len() != self.nb_vertices() {
            return Err(ColoringError::ColoringLength {
                expected: self.nb_vertices(),
                found: colors.len()
            });
        }
        for (v,c) in self.vertices.iter_mut().zip(colors) {
            v.color = *c;
        }
        Ok(())
    }

    /** partition view of the current coloring (solution[i]: vertices of color i+1).
    Uncolored vertices are not reported.
    */
    pub fn to_solution(&self) -> Solution {
        let mut res = vec![vec![] ; self.max_color_used()];
        for v in &self.vertices {
            if v.color != UNASSIGNED {
                res[v.color-1].push(v.id);
            }
        }
        res
    }

    /// print statistics of the instance
    pub fn display_statistics(&self) {
        let min_degree = (0..self.nb_vertices()).map(|i| self.degree(i)).min().unwrap_or(0);
        info!(
            nb_vertices = self.nb_vertices(),
            nb_edges = self.nb_edges(),
            min_degree,
            max_degree = self.max_degree(),
            "instance statistics"
        );
    }
}

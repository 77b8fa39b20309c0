/*
Implements:
 - reading edge-list instances ("NV NE" followed by NE pairs "u v", 0-based ids)
 - writing instances in the same format
 - writing and reading solutions ("<nb colors> 0" then one 0-based color per vertex)
*/
use std::fs;

use nom::IResult;
use nom::character::complete::{digit1, multispace0, multispace1};
use nom::combinator::map_res;
use nom::sequence::{preceded, separated_pair};

use crate::color::{Color, Graph, VertexId};
use crate::error::ColoringError;

/// reads an unsigned integer (leading whitespace allowed)
fn integer(s:&str) -> IResult<&str, usize> {
    preceded(multispace0, map_res(digit1, str::parse::<usize>))(s)
}

/// reads two integers separated by whitespace
fn integer_pair(s:&str) -> IResult<&str, (usize,usize)> {
    separated_pair(integer, multispace1, integer)(s)
}

/// parses an edge-list description, returns (nb vertices, edges)
pub fn parse_edge_list(s:&str) -> Result<(usize, Vec<(VertexId,VertexId)>), ColoringError> {
    let (mut remaining, (n,m)) = integer_pair(s)
        .map_err(|e| ColoringError::parse("edge list", format!("invalid header: {:?}", e)))?;
    // an edge takes at least 4 bytes ("u v\n"), the header alone does not bound the allocation
    let mut edges = Vec::with_capacity(m.min(remaining.len() / 4));
    for i in 0..m {
        match integer_pair(remaining) {
            Ok((tmp, e)) => {
                remaining = tmp;
                edges.push(e);
            },
            Err(_) => {
                return Err(ColoringError::parse(
                    "edge list", format!("expected {} edges, could only read {}", m, i)
                ));
            }
        }
    }
    Ok((n, edges))
}

/// reads an edge-list instance from a string and builds the graph
pub fn graph_from_str(s:&str) -> Result<Graph, ColoringError> {
    let (n, edges) = parse_edge_list(s)?;
    Graph::new(n, &edges)
}

/// reads an edge-list instance from a file and builds the graph
pub fn read_from_file(filename:&str) -> Result<Graph, ColoringError> {
    let content = fs::read_to_string(filename)?;
    graph_from_str(&content)
}

/** writes a string encoding the graph in the edge-list format */
pub fn graph_to_string(graph:&Graph) -> String {
    let mut res = format!("{} {}\n", graph.nb_vertices(), graph.nb_edges());
    for e in graph.edges() {
        res += format!("{} {}\n", e.u, e.v).as_str();
    }
    res
}

/** writes a string encoding the coloring stored in the graph (use this to export the solution).
First line: number of distinct colors used and 0 (optimality not proven). Second line: color of each vertex
(0-based, in vertex id order).
*/
pub fn solution_to_string(graph:&Graph) -> String {
    let colors:Vec<String> = graph.colors().iter()
        .map(|c| c.saturating_sub(1).to_string())
        .collect();
    format!("{} 0\n{}\n", graph.nb_colors_used(), colors.join(" "))
}

/** writes the solution into a file */
pub fn write_solution(filename:&str, graph:&Graph) -> Result<(), ColoringError> {
    fs::write(filename, solution_to_string(graph))?;
    Ok(())
}

/** parses a solution for a graph with nb_vertices vertices. Returns the colors (1-based). */
pub fn parse_solution(s:&str, nb_vertices:usize) -> Result<Vec<Color>, ColoringError> {
    let (mut remaining, _header) = integer_pair(s)
        .map_err(|e| ColoringError::parse("solution", format!("invalid header: {:?}", e)))?;
    let mut colors = Vec::with_capacity(nb_vertices);
    for v in 0..nb_vertices {
        match integer(remaining) {
            Ok((tmp, c)) => {
                remaining = tmp;
                colors.push(c+1);
            },
            Err(_) => {
                return Err(ColoringError::parse(
                    "solution", format!("missing color of vertex {}", v)
                ));
            }
        }
    }
    Ok(colors)
}

/** reads a solution file for the given graph and installs it in the graph */
pub fn read_solution(filename:&str, graph:&mut Graph) -> Result<(), ColoringError> {
    let content = fs::read_to_string(filename)?;
    let colors = parse_solution(&content, graph.nb_vertices())?;
    graph.apply_coloring(&colors)
}

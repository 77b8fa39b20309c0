use std::collections::BTreeSet;
use std::fs;

use nom::IResult;
use nom::branch::alt;
use nom::bytes::complete::{tag, take_until};
use nom::character::complete::{char, digit1, line_ending, multispace0, space0, space1};
use nom::combinator::{map_res, opt};
use nom::sequence::{preceded, separated_pair, terminated, tuple};

use crate::color::{Graph, VertexId};
use crate::error::ColoringError;

/** reads an instance from a DIMACS string, returns (n, m, edges) with 0-based edges.
The number of edge lines may be m, 2m (both directions listed, the reverse copies are
dropped) or m/2 (header counting each edge twice). */
pub fn parse_dimacs(content:&str) -> Result<(usize, usize, Vec<(VertexId,VertexId)>), ColoringError> {
    let s1 = content.replace('\r', "");
    let (s2, _) = skip_comments(s1.as_str())
        .map_err(|e| ColoringError::parse("dimacs", format!("invalid comments: {:?}", e)))?;
    let (mut s3, (n,m)) = read_header(s2)
        .map_err(|e| ColoringError::parse("dimacs", format!("invalid header: {:?}", e)))?;
    // an edge line takes at least 6 bytes ("e u v\n")
    let mut edges:Vec<(VertexId,VertexId)> = Vec::with_capacity(m.min(s3.len() / 6));
    loop {
        // comments may also appear between edges
        if let Ok((tmp, _)) = skip_comments(s3) { s3 = tmp; }
        match read_edge(s3) {
            Ok((tmp,(a,b))) => {
                s3 = tmp;
                if a == 0 || b == 0 {
                    return Err(ColoringError::parse(
                        "dimacs", format!("edge {} {}: vertices are numbered from 1", a, b)
                    ));
                }
                edges.push((a-1, b-1));
            },
            Err(_) => break,
        }
    }
    let nb_read = edges.len();
    let listed_twice = m.checked_mul(2) == Some(nb_read);
    if nb_read != m && !listed_twice && nb_read.checked_mul(2) != Some(m) {
        return Err(ColoringError::parse(
            "dimacs", format!("header announces {} edges, found {}", m, nb_read)
        ));
    }
    if listed_twice {
        let mut seen:BTreeSet<(VertexId,VertexId)> = BTreeSet::new();
        edges.retain(|(a,b)| seen.insert(((*a).min(*b), (*a).max(*b))));
    }
    Ok((n, m, edges))
}

/// reads a DIMACS string and builds the graph
pub fn graph_from_str(content:&str) -> Result<Graph, ColoringError> {
    let (n, _, edges) = parse_dimacs(content)?;
    Graph::new(n, &edges)
}

/// creates a graph from a DIMACS file
pub fn read_from_file(filename:&str) -> Result<Graph, ColoringError> {
    let content = fs::read_to_string(filename)?;
    graph_from_str(&content)
}

/// skips a single comment line
fn skip_comment(s:&str) -> IResult<&str, &str> {
    preceded(tuple((multispace0, char('c'))), terminated(take_until("\n"), char('\n')))(s)
}

/// skips all comments
pub fn skip_comments(s:&str) -> IResult<&str, Vec<&str>> {
    nom::multi::many0(skip_comment)(s)
}

/// reads two numbers separated by spaces, and the end of the line if any
fn read_two_integers(s:&str) -> IResult<&str, (usize,usize)> {
    terminated(
        separated_pair(
            map_res(digit1, str::parse::<usize>),
            space1,
            map_res(digit1, str::parse::<usize>)
        ),
        tuple((space0, opt(line_ending)))
    )(s)
}

/// reads header containing (n,m)
pub fn read_header(s:&str) -> IResult<&str, (usize,usize)> {
    preceded(tuple((multispace0, alt((tag("p edge "), tag("p col "))))), read_two_integers)(s)
}

/// reads edge line (WARNING: indices start at 1 in the DIMACS format)
pub fn read_edge(s:&str) -> IResult<&str, (usize,usize)> {
    preceded(tuple((multispace0, tag("e "))), read_two_integers)(s)
}

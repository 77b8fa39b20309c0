use std::fs;

use clap::{App, load_yaml};
use tracing::info;

use csp_coloring::{
    edgelist::graph_to_string,
    error::ColoringError,
    generator::gnp_graph,
    util::{init_logging, parse_optional},
};

/** writes a random G(n,p) instance in the edge-list format */
pub fn main() -> Result<(), ColoringError> {
    init_logging();
    // parse arguments
    let yaml = load_yaml!("gnp_generator.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    let n:usize = parse_optional(&main_args, "nb_vertices")?.unwrap_or(0);
    let p:f64 = parse_optional(&main_args, "probability")?.unwrap_or(0.);
    let seed:u64 = parse_optional(&main_args, "seed")?.unwrap_or(0);
    if !(0. ..=1.).contains(&p) {
        return Err(ColoringError::InvalidArgument(
            format!("probability must be within [0,1] (given: {})", p)
        ));
    }
    let graph = gnp_graph(n, p, seed);
    graph.display_statistics();
    let content = graph_to_string(&graph);
    match main_args.value_of("output") {
        None => print!("{}", content),
        Some(filename) => {
            fs::write(filename, content)?;
            info!("instance written in: {}", filename);
        }
    }
    Ok(())
}

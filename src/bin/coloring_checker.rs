use clap::{App, load_yaml};

use csp_coloring::{
    checker::{checker, CheckerResult},
    edgelist::read_solution,
    error::ColoringError,
    util::{init_logging, read_instance},
};

/** checks a solution file against an instance */
pub fn main() -> Result<(), ColoringError> {
    init_logging();
    // parse arguments
    let yaml = load_yaml!("coloring_checker.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    let inst_filename = main_args.value_of("instance").unwrap_or_default();
    let sol_filename = main_args.value_of("solution").unwrap_or_default();
    let instance_type = main_args.value_of("type").unwrap_or("edgelist");
    // read files
    let mut graph = read_instance(inst_filename, instance_type)?;
    read_solution(sol_filename, &mut graph)?;
    // call checker
    match checker(&graph) {
        CheckerResult::Ok(n) => {
            println!("{}", n);
        },
        CheckerResult::VertexNotColored(v) => {
            println!("ERROR: vertex {} not colored", v);
        },
        CheckerResult::ConflictingEdge(a, b) => {
            println!("ERROR: vertices {} and {} are adjacent and share color {}", a, b, graph.color(a)-1);
        },
    };
    Ok(())
}

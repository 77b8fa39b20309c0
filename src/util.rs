use std::fs;
use std::str::FromStr;

use clap::ArgMatches;
use serde_json::Value;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::{
    checker::{checker, CheckerResult},
    color::Graph,
    dimacs,
    edgelist,
    error::ColoringError,
};

/** installs the tracing subscriber used by the executables.
The verbosity is read from RUST_LOG (default: info). */
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));
    // a subscriber may already be installed (tests), keep it in that case
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/** reads an instance in the given format ("edgelist" or "dimacs") */
pub fn read_instance(filename:&str, instance_type:&str) -> Result<Graph, ColoringError> {
    match instance_type {
        "edgelist" => edgelist::read_from_file(filename),
        "dimacs" => dimacs::read_from_file(filename),
        _ => Err(ColoringError::InvalidArgument(
            format!("instance type unknown {} (valid: 'edgelist', 'dimacs')", instance_type)
        )),
    }
}

/** parses an optional command line value */
pub fn parse_optional<T:FromStr>(main_args:&ArgMatches, name:&str) -> Result<Option<T>, ColoringError> {
    match main_args.value_of(name) {
        None => Ok(None),
        Some(e) => e.parse::<T>().map(Some).map_err(|_|
            ColoringError::InvalidArgument(format!("unable to parse {} (given: {})", name, e))
        ),
    }
}

/** reads command line input and returns the instance name, graph, solution_filename, stats_filename */
pub fn read_params(main_args:&ArgMatches) -> Result<(String, Graph, Option<String>, Option<String>), ColoringError> {
    let inst_filename = main_args.value_of("instance").ok_or_else(||
        ColoringError::InvalidArgument("missing instance".to_string())
    )?;
    let instance_type = main_args.value_of("type").unwrap_or("edgelist");
    // read value of the solution filename
    let sol_file:Option<String> = main_args.value_of("solution").map(|e| {
        info!("printing solutions in: {}", e);
        e.to_string()
    });
    // read value of the performance logs filename
    let perf_file:Option<String> = main_args.value_of("perf").map(|e| {
        info!("printing perfs in: {}", e);
        e.to_string()
    });
    info!("reading instance: {}...", inst_filename);
    let graph = read_instance(inst_filename, instance_type)?;
    graph.display_statistics();
    Ok((inst_filename.to_string(), graph, sol_file, perf_file))
}

/// exports search results to files
pub fn export_results(
    graph:&Graph,
    stats:&Value,
    perf_file:Option<String>,
    sol_file:Option<String>,
) -> Result<(), ColoringError> {
    // export statistics
    if let Some(filename) = perf_file {
        fs::write(filename.as_str(), serde_json::to_string(stats)?)?;
    }
    // export solution
    if let Some(filename) = sol_file {
        match checker(graph) {
            CheckerResult::Ok(_) => {},
            checker_result => { warn!("invalid solution (reason: {:?})", checker_result) }
        };
        edgelist::write_solution(filename.as_str(), graph)?;
    }
    Ok(())
}

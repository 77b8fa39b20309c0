//! Graph coloring driver: reads an instance and colors it with the greedy or the CSP algorithm


// #![warn(clippy::all, clippy::pedantic)]
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unsafe_code)]
#![warn(unused_extern_crates)]

use std::time::Instant;

use clap::{App, load_yaml};
use serde_json::json;
use tracing::info;
use dogs::search_algorithm::TimeStoppingCriterion;

use csp_coloring::edgelist::solution_to_string;
use csp_coloring::error::ColoringError;
use csp_coloring::search::csp_backtrack::{search, solve_with_stopping_criterion, SearchStatus};
use csp_coloring::search::domains::DomainStore;
use csp_coloring::search::greedy_degree::color_greedily;
use csp_coloring::util::{export_results, init_logging, parse_optional, read_params};


/**
reads an instance, colors it with the chosen algorithm, prints and exports the coloring.
*/
pub fn main() -> Result<(), ColoringError> {
    init_logging();
    // parse arguments
    let yaml = load_yaml!("main_args.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    let (
        inst_filename,
        mut graph,
        sol_file,
        perf_file
    ) = read_params(&main_args)?;

    let t_start = Instant::now();
    let (status, stats) = match main_args.subcommand() {
        ("greedy", Some(_)) => {
            let nb_colors = color_greedily(&mut graph);
            let duration = t_start.elapsed().as_secs_f32();
            println!("greedy took {:.3} seconds. Nb colors: {}", duration, nb_colors);
            (SearchStatus::Solved, json!({
                "inst_name": inst_filename,
                "algorithm": "greedy",
                "status": SearchStatus::Solved,
                "nb_colors": nb_colors,
                "time_searched": duration
            }))
        },
        ("csp", Some(csp_args)) => {
            // default budget: max degree + 1 is always feasible
            let nb_colors:usize = parse_optional(csp_args, "colors")?
                .unwrap_or(graph.max_degree() + 1);
            let t:Option<f32> = parse_optional(csp_args, "time")?;
            info!("searching a coloring with {} colors", nb_colors);
            let mut domains = DomainStore::new(graph.nb_vertices(), nb_colors);
            let report = match t {
                None => search(&mut graph, &mut domains, nb_colors),
                Some(t) => solve_with_stopping_criterion(
                    &mut graph, &mut domains, nb_colors, TimeStoppingCriterion::new(t)
                ),
            };
            let duration = t_start.elapsed().as_secs_f32();
            match report.status {
                SearchStatus::Solved => println!(
                    "CSP took {:.3} seconds. Nb colors: {} (budget: {})",
                    duration, graph.nb_colors_used(), nb_colors
                ),
                SearchStatus::Infeasible => println!(
                    "CSP took {:.3} seconds. No coloring with {} colors", duration, nb_colors
                ),
                SearchStatus::Aborted => println!(
                    "CSP stopped after {:.3} seconds (time limit)", duration
                ),
            }
            (report.status, json!({
                "inst_name": inst_filename,
                "algorithm": "csp",
                "status": report.status,
                "budget": nb_colors,
                "nb_colors": graph.nb_colors_used(),
                "time_searched": duration,
                "search": report.statistics
            }))
        },
        (name, _) => {
            return Err(ColoringError::InvalidArgument(
                format!("unknown algorithm '{}' (valid: 'greedy', 'csp')", name)
            ));
        }
    };

    // print and export results
    if status == SearchStatus::Solved {
        print!("{}", solution_to_string(&graph));
        export_results(&graph, &stats, perf_file, sol_file)
    } else {
        export_results(&graph, &stats, perf_file, None)
    }
}

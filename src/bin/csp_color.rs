use std::time::Instant;

use clap::{App, ArgMatches, load_yaml};
use log::error;
use serde_json::json;

use csp_color::error::CspResult;
use csp_color::solver::solve_instance;
use csp_color::util::{check_solution, configure_logging, export_results, read_params};


/** reads the instance, solves it and exports the results */
fn run(main_args:&ArgMatches) -> CspResult<()> {
    let (
        inst_filename,
        instance,
        sol_file,
        perf_file
    ) = read_params(main_args)?;

    // solve it
    let t_start = Instant::now();
    let report = solve_instance(&instance)?;
    let duration = t_start.elapsed().as_secs_f32();
    match &report.coloring {
        None => println!("No solution exists."),
        Some(coloring) => {
            println!("{}", coloring.to_string_restricted(&instance.vertices()));
            if !main_args.is_present("no-check") {
                check_solution(&instance, coloring);
            }
        }
    }
    println!("search took {:.3} seconds.", duration);
    let stats = json!({
        "inst_name": inst_filename,
        "status": report.status(),
        "time_searched": duration,
        "nb_vertices": instance.nb_vertices(),
        "nb_edges": report.nb_edges,
        "nb_colors": instance.colors(),
        "propagation": report.propagation,
        "search": report.search,
    });

    // export results
    export_results(report.coloring.as_ref(), &stats, perf_file, sol_file)
}

/** solves a coloring CSP instance */
pub fn main() {
    // parse arguments
    let yaml = load_yaml!("csp_color.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    configure_logging(main_args.is_present("verbose"));
    if let Err(e) = run(&main_args) {
        error!("{}", e);
        std::process::exit(1);
    }
}

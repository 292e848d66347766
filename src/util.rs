use std::io::Write;

use clap::ArgMatches;
use log::{info, LevelFilter};
use serde_json::Value;

use crate::{
    color::{checker, CheckerResult, Coloring},
    error::CspResult,
    instance::CspInstance,
};

/** configures the logger (info level, debug level if verbose) */
pub fn configure_logging(verbose:bool) {
    let level_filter = if verbose { LevelFilter::Debug } else { LevelFilter::Info };
    env_logger::Builder::new()
        .format(move |buf, record| writeln!(buf, "{}", record.args()))
        .filter_level(level_filter)
        .target(env_logger::Target::Stdout)
        .init();
}

/** reads command line input and returns the instance name, instance, solution_filename, stats_filename */
pub fn read_params(main_args:&ArgMatches) -> CspResult<(String, CspInstance, Option<String>, Option<String>)> {
    let inst_filename = main_args.value_of("instance").unwrap_or_default();
    // read value of the solution filename
    let sol_file: Option<String> = match main_args.value_of("solution") {
        None => None,
        Some(e) => {
            info!("printing solutions in: {}", e);
            Some(e.to_string())
        }
    };
    // read value of the performance logs filename
    let perf_file: Option<String> = match main_args.value_of("perf") {
        None => None,
        Some(e) => {
            info!("printing perfs in: {}", e);
            Some(e.to_string())
        }
    };
    // read instance file
    info!("reading instance: {}...", inst_filename);
    let instance = CspInstance::from_file(inst_filename)?;
    instance.display_statistics();
    info!("=======================");
    Ok((inst_filename.to_string(), instance, sol_file, perf_file))
}

/**
checks a coloring against the instance edges and prints the verdict.
returns true iff the coloring is valid.
*/
pub fn check_solution(instance:&CspInstance, coloring:&Coloring) -> bool {
    match checker(instance.colors(), instance.edges(), coloring) {
        CheckerResult::Ok(n) => {
            println!("everything looks good ({} colors used)", n);
            true
        },
        CheckerResult::VertexNotColored(v) => {
            println!("ERROR: vertex {} not colored", v);
            false
        },
        CheckerResult::ColorOutOfRange(v, c) => {
            println!("ERROR: vertex {} has color {} (only {} colors)", v, c, instance.colors());
            false
        },
        CheckerResult::ConflictingEdge(a, b) => {
            println!("ERROR: vertices {} and {} are adjacent and share a color", a, b);
            false
        },
    }
}

/// exports search results to files
pub fn export_results(
    coloring:Option<&Coloring>,
    stats:&Value,
    perf_file:Option<String>,
    sol_file:Option<String>,
) -> CspResult<()> {
    // export statistics
    if let Some(filename) = perf_file {
        std::fs::write(filename.as_str(), serde_json::to_string(stats)?)?;
    }
    // export solution
    if let (Some(filename), Some(coloring)) = (sol_file, coloring) {
        coloring.write_to_file(filename.as_str())?;
    }
    Ok(())
}

use clap::{App, ArgMatches, load_yaml};
use log::error;

use csp_color::{
    color::Coloring,
    error::CspResult,
    instance::CspInstance,
    util::{check_solution, configure_logging},
};

/** reads both files and checks the coloring. returns true iff it is valid */
fn run(main_args:&ArgMatches) -> CspResult<bool> {
    let inst_filename = main_args.value_of("instance").unwrap_or_default();
    let sol_filename = main_args.value_of("solution").unwrap_or_default();
    // read files
    let instance = CspInstance::from_file(inst_filename)?;
    let coloring = Coloring::from_file(sol_filename)?;
    // call checker
    Ok(check_solution(&instance, &coloring))
}

/** checks a coloring against a coloring CSP instance */
pub fn main() {
    // parse arguments
    let yaml = load_yaml!("csp_checker.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    configure_logging(false);
    match run(&main_args) {
        Ok(true) => {},
        Ok(false) => std::process::exit(2),
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    }
}

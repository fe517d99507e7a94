use ladder_core::logging;

mod cli;

use crate::cli::CliCommand;

fn main() {
    logging::init_or_stderr();

    // Parse CLI and dispatch.
    if let Err(err) = CliCommand::run_from_args() {
        eprintln!("ladder error: {:#}", err);
        std::process::exit(1);
    }
}

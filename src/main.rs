use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

use shrt::cli::Cli;
use shrt::interfaces::cli::run_cli;
use shrt::system::logging::init_logging;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli.log_level, cli.log_format);
    debug!("Running {:?}", cli.command);

    match run_cli(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e.format_colored());
            ExitCode::FAILURE
        }
    }
}

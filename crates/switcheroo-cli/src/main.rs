//! Genbank switcheroo CLI.

use clap::Parser;
use std::io::{self, IsTerminal};
use switcheroo_cli::cli::Cli;
use switcheroo_cli::commands::{log_config, render_error, run, switch_config};
use switcheroo_cli::logging::init_logging;
use switcheroo_cli::summary::print_summary;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let logging = log_config(&cli, io::stderr().is_terminal());
    if let Err(error) = init_logging(&logging) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let config = switch_config(&cli);
    let exit_code = match run(&config) {
        Ok(outcome) => {
            print_summary(&outcome, &config.feature);
            0
        }
        Err(error) => {
            eprintln!("error: {}", render_error(&error));
            1
        }
    };
    std::process::exit(exit_code);
}

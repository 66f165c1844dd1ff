//! # Freight Class Pro CLI
//!
//! Command line front end for `freight_core`: one-shot calculations and an
//! interactive shell with saved loads, quick templates and PDF reports.

mod cli;
mod commands;
mod config;
mod dialog;
mod logging;
mod output;
mod session;

use clap::Parser;
use cli::{Cli, Commands};
use config::AppConfig;

fn main() {
    let cli = Cli::parse();

    let config = match AppConfig::load(cli.config.as_deref()) {
        Ok(config) => config.with_overrides(cli.data_dir.clone(), cli.output_dir.clone()),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    logging::init_cli_logger(cli.verbose, config.log_filter.as_deref());

    let command = cli.command.unwrap_or(Commands::Shell);
    if let Err(e) = commands::execute(command, &config) {
        tracing::debug!(code = e.error_code(), "command failed");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

//! vendorclean CLI
//!
//! Usage: vendorclean [ROOT] [OPTIONS]

mod cli;
mod commands;
mod ui;

use std::process::ExitCode;

use clap::Parser;
use env_logger::Builder;

use cli::Cli;

/// Environment variable overriding the `-v` derived log filter
const LOG_ENV: &str = "VENDORCLEAN_LOG";

fn main() -> ExitCode {
    let cli = Cli::parse();

    Builder::new()
        .filter_level(cli.log_level())
        .parse_env(LOG_ENV)
        .format_timestamp(None)
        .format_target(false)
        .init();

    match commands::clean::cmd_clean(&cli) {
        Ok(code) => code,
        Err(e) => {
            ui::error::print_error(&e, cli.json);
            ExitCode::FAILURE
        }
    }
}

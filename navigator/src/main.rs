//! gridnav: shortest obstacle-avoiding routes on occupancy grids.

use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;

use navigator_lib::{Cli, commands};

fn main() -> ExitCode {
    env_logger::init_from_env(Env::default().default_filter_or("warn"));
    let cli = Cli::parse();
    match commands::run(cli.command) {
        Ok(code) => code,
        Err(e) => {
            log::debug!("command failed: {e:?}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

mod cli;
mod collate_cmd;
mod config;
mod convert;
mod logging;
mod output;
mod solve_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Solve(args) => solve_cmd::run(args),
        Command::Collate(args) => collate_cmd::run(args),
        Command::Era(args) => solve_cmd::run_era(args),
    }
}

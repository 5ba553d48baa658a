use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Hemerai Athenian calendar reconstruction.
#[derive(Parser)]
#[command(
    name = "hemerai",
    version,
    about = "Reconstructs Athenian calendar years from double-dated inscriptions"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Solve each attestation of a case file into equations.
    Solve(CaseArgs),
    /// Collate the equations of a case file into consistent year structures.
    Collate(CaseArgs),
    /// Print the conciliar era of a year.
    Era(EraArgs),
}

/// Arguments for the `solve` and `collate` subcommands.
#[derive(clap::Args)]
pub struct CaseArgs {
    /// Path to TOML case file.
    #[arg(short, long, default_value = "case.toml")]
    pub case: PathBuf,

    /// Write JSON here instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override the case file's year (astronomical numbering).
    #[arg(short, long, allow_negative_numbers = true)]
    pub year: Option<i32>,
}

/// Arguments for the `era` subcommand.
#[derive(clap::Args)]
pub struct EraArgs {
    /// Astronomical year (1 BCE is 0, 2 BCE is -1).
    #[arg(allow_negative_numbers = true)]
    pub year: i32,

    /// Interpret `year` as a BCE year number.
    #[arg(long)]
    pub bce: bool,
}

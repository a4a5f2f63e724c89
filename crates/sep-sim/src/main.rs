use std::error::Error;

use clap::{Parser, Subcommand};
use commands::{
    decompose::{self, DecomposeArgs},
    generate::{self, GenerateArgs},
    stats::{self, StatsArgs},
};
use env_logger::Builder;

mod commands;

#[derive(Parser, Debug)]
#[command(name = "sep-sim", about = "Recursive separator decomposition CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a synthetic graph and write it to a file.
    Generate(GenerateArgs),
    /// Recursively decompose a graph and report every separator.
    Decompose(DecomposeArgs),
    /// Print degree distribution and diameter statistics.
    Stats(StatsArgs),
}

fn main() -> Result<(), Box<dyn Error>> {
    Builder::from_default_env().init();
    let cli = Cli::parse();
    match cli.command {
        Command::Generate(args) => generate::run(&args),
        Command::Decompose(args) => decompose::run(&args),
        Command::Stats(args) => stats::run(&args),
    }
}

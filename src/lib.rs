pub mod bench;
pub mod catalog;
pub mod digest;
pub mod generate;
pub mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Generate the catalogue of random test files
    Generate {
        /// Directory to write the test files into
        #[arg(long, default_value = ".")]
        dir: PathBuf,
    },
    /// Time hash computations over the generated test files
    Bench {
        /// Directory containing the test files
        #[arg(long, default_value = ".")]
        dir: PathBuf,
    },
}

pub fn run(cli: Cli) -> Result<()> {
    let catalog = catalog::catalog();

    match cli.command {
        Command::Generate { dir } => generate::run_generate(&catalog, &dir),
        Command::Bench { dir } => {
            let algo = bench::prompt_algorithm()?;
            bench::run_bench(&catalog, &dir, algo)
        }
    }
}

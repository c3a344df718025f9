use anyhow::Result;
use clap::Parser;
use hashbench::{run, Cli};

fn main() -> Result<()> {
    run(Cli::parse())
}

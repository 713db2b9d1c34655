//! `cmap`: a searchable customer directory for the terminal.

use clap::Parser;

mod cli;

fn main() -> anyhow::Result<()> {
    cli::Cli::parse().run()
}

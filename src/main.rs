use anyhow::Result;
use clap::Parser;
use rentio::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}

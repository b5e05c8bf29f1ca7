//! langsift command-line entry point

use clap::Parser;
use langsift_cli::commands::Commands;
use langsift_cli::CliResult;

/// Count plausible words and sentences to tell prose apart from noise
#[derive(Debug, Parser)]
#[command(name = "langsift", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    cli.command.execute()
}

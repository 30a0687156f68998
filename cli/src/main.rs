pub mod commands;
pub mod report;

use clap::Parser;
use commands::Commands;
use shared::{env, logger};

/// Escape-time renderer for the Mandelbrot set
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    env::init();
    logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render(args) => args.run(),
        Commands::Tour(args) => args.run(),
        Commands::Explore(args) => args.run(),
    }
}

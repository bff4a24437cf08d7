//! whydiff CLI
//!
//! Command-line interface for explaining why two JSON documents differ

use clap::{Parser, Subcommand};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "whydiff")]
#[command(about = "whydiff - explain why two values are different", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Explain where two JSON documents diverge
    Explain(commands::explain::ExplainArgs),
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Explain(args) => commands::explain::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

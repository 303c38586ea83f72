//! CLI frontend for the Charwright character generator.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "cw",
    about = "Charwright — roll a random level-1 D&D 5e character",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a random character and print its sheet
    Roll {
        /// Ability score method: standard or roll
        #[arg(short, long, default_value = "standard")]
        method: String,

        /// RNG seed for deterministic generation
        #[arg(short, long)]
        seed: Option<u64>,

        /// Path to the rules dataset JSON
        #[arg(short, long, default_value = "data/dataset.json")]
        data: PathBuf,

        /// Also write the sheet to a plain-text file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate a dataset against the engine's mapping tables
    Check {
        /// Path to the rules dataset JSON
        #[arg(short, long, default_value = "data/dataset.json")]
        data: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Roll {
            method,
            seed,
            data,
            output,
        } => commands::roll::run(&data, &method, seed, output.as_deref()),
        Commands::Check { data } => commands::check::run(&data),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

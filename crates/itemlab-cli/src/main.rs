//! itemlab CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "itemlab", version, about = "Classroom test item analysis (CTT + 1PL IRT)")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a results table and print or export the statistics
    Analyze {
        /// Path to the results CSV (StudentID + one column per item)
        #[arg(long)]
        results: PathBuf,

        /// Path to the item metadata CSV (ItemID,Topic,DifficultyLevel,Competency)
        #[arg(long)]
        metadata: Option<PathBuf>,

        /// Output directory for exported reports
        #[arg(long, default_value = "./itemlab-results")]
        output: PathBuf,

        /// Output format: table, json, csv, markdown, all
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// Parse the inputs and report data-quality warnings without analyzing
    Validate {
        /// Path to the results CSV
        #[arg(long)]
        results: PathBuf,

        /// Path to the item metadata CSV
        #[arg(long)]
        metadata: Option<PathBuf>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("itemlab=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Analyze {
            results,
            metadata,
            output,
            format,
        } => commands::analyze::execute(results, metadata, output, format),
        Commands::Validate { results, metadata } => commands::validate::execute(results, metadata),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

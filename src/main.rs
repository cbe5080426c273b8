//! Tabstat Studio CLI
//!
//! Loads a CSV dataset, computes its analysis and writes a JSON report.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use tabstat_studio::commands::{
    display_schema, display_version, execute_analyze, validate_args, validate_report_file,
    AnalyzeArgs,
};
use tabstat_studio::commands::models::default_output;
use tabstat_studio::parser::DatasetKind;

/// Tabstat Studio - summary statistics for tabular datasets
#[derive(Parser, Debug)]
#[command(name = "tabstat")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyze a dataset and write a JSON report
    Analyze {
        /// Dataset held by the input file
        #[arg(value_enum)]
        dataset: DatasetKind,

        /// Input CSV file
        #[arg(short, long, env = "TABSTAT_INPUT")]
        input: PathBuf,

        /// Output path for JSON report (defaults to <dataset>-report.json)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,

        /// Correlations listed in the medical summary
        #[arg(long, default_value = "5")]
        top_correlations: usize,
    },

    /// Validate a report JSON file
    Validate {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Analyze {
            dataset,
            input,
            output,
            summary,
            top_correlations,
        } => {
            let args = AnalyzeArgs {
                dataset,
                input,
                output_json: output.unwrap_or_else(|| default_output(dataset)),
                print_summary: summary,
                top_correlations,
            };

            // Validate args first
            validate_args(&args)?;

            execute_analyze(args)?;
        }

        Commands::Validate { file } => {
            validate_report_file(file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}

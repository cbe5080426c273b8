//! Analyze command implementation.
//!
//! The analyze command:
//! 1. Loads the CSV input into typed records
//! 2. Runs the dataset's analysis
//! 3. Writes the JSON report
//! 4. Optionally prints a text summary

use super::models::AnalyzeArgs;
use crate::aggregator::medical::CORRELATION_COLUMNS;
use crate::aggregator::{analyze_medical, analyze_page_views, compute, sea_level_trends};
use crate::output::{render_medical, render_page_views, render_sea_level, render_statistics, validate_path, write_report};
use crate::parser::schema::{DatasetKind, ReportEnvelope};
use crate::parser::{load_census, load_medical, load_page_views, load_sea_level};
use anyhow::{Context, Result};
use log::info;
use serde::Serialize;
use std::time::Instant;

/// Execute the analyze command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Input file missing or malformed
/// * Report file cannot be written
///
/// # Example
/// ```ignore
/// let args = AnalyzeArgs::new(DatasetKind::Demographic, "adult.data.csv");
/// execute_analyze(args)?;
/// ```
pub fn execute_analyze(args: AnalyzeArgs) -> Result<()> {
    let start_time = Instant::now();

    info!("Analyzing {} dataset: {}", args.dataset, args.input.display());

    match args.dataset {
        DatasetKind::Demographic => {
            let table = load_census(&args.input).context("Failed to load demographic data")?;
            let report = compute(&table);
            finish(&args, table.len(), report, render_statistics)?;
        }
        DatasetKind::Medical => {
            let records = load_medical(&args.input).context("Failed to load medical data")?;
            let report = analyze_medical(&records);
            let top = args.top_correlations;
            finish(&args, records.len(), report, |r| render_medical(r, top))?;
        }
        DatasetKind::SeaLevel => {
            let records = load_sea_level(&args.input).context("Failed to load sea-level data")?;
            let report = sea_level_trends(&records);
            finish(&args, records.len(), report, render_sea_level)?;
        }
        DatasetKind::PageViews => {
            let records = load_page_views(&args.input).context("Failed to load page-view data")?;
            let report = analyze_page_views(&records);
            finish(&args, records.len(), report, render_page_views)?;
        }
    }

    let elapsed = start_time.elapsed();
    info!("Analysis completed in {:.2}s", elapsed.as_secs_f64());

    Ok(())
}

/// Wrap, write and optionally print a report body
///
/// **Private** - shared tail of every dataset branch
fn finish<T: Serialize>(
    args: &AnalyzeArgs,
    record_count: usize,
    body: T,
    render: impl Fn(&T) -> String,
) -> Result<()> {
    let report = ReportEnvelope::new(
        args.dataset,
        args.input.display().to_string(),
        record_count,
        body,
    );

    write_report(&report, &args.output_json).context("Failed to write report JSON")?;

    info!("✓ Report written to: {}", args.output_json.display());

    if args.print_summary {
        println!("\n{}", "=".repeat(80));
        println!("{} SUMMARY ({} records)", args.dataset.as_str().to_uppercase(), record_count);
        println!("{}", "=".repeat(80));
        println!("{}", render(&report.body));
    }

    Ok(())
}

/// Validate analyze arguments
///
/// **Public** - can be called before execute_analyze for early validation
pub fn validate_args(args: &AnalyzeArgs) -> Result<()> {
    if args.input.as_os_str().is_empty() {
        anyhow::bail!("Input path cannot be empty");
    }

    if !args.input.is_file() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    validate_path(&args.output_json).context("Invalid output path")?;

    let cells = CORRELATION_COLUMNS.len() * (CORRELATION_COLUMNS.len() - 1) / 2;
    if args.top_correlations > cells {
        anyhow::bail!("top_correlations is too large (max {})", cells);
    }

    Ok(())
}

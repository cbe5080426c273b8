use crate::output::read_report;
use crate::utils::config::{CENSUS_COLUMNS, SCHEMA_VERSION};
use anyhow::Result;
use std::path::PathBuf;

/// Validate a report JSON file
pub fn validate_report_file(file_path: PathBuf) -> Result<()> {
    println!("Validating report: {}", file_path.display());

    let report = read_report::<serde_json::Value>(&file_path)?;

    if report.version != SCHEMA_VERSION {
        log::warn!(
            "Report schema v{} differs from current v{}",
            report.version,
            SCHEMA_VERSION
        );
    }

    println!("✓ Valid report JSON");
    println!("  Version: {}", report.version);
    println!("  Dataset: {}", report.dataset);
    println!("  Source: {}", report.source);
    println!("  Records: {}", report.record_count);
    println!("  Generated: {}", report.generated_at);

    Ok(())
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("Tabstat Studio Report Schema");
    println!("Current Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Envelope:");
        println!("  version: string        - Schema version (e.g., '1.0.0')");
        println!("  dataset: string        - demographic | medical | sea-level | page-views");
        println!("  source: string         - Input file path");
        println!("  record_count: number   - Records loaded");
        println!("  generated_at: string   - RFC 3339 timestamp");
        println!("  body: object           - Dataset-specific analysis");
        println!();
        println!("Demographic input columns (no header row):");
        println!("  {}", CENSUS_COLUMNS.join(", "));
        println!();
        println!("Demographic body:");
        println!("  race_count: array      - {{category, count}}, descending count");
        println!("  average_age_men, percentage_bachelors, higher_education_rich,");
        println!("  lower_education_rich, rich_percentage,");
        println!("  highest_earning_country_percentage: number (1 decimal)");
        println!("  min_work_hours: number");
        println!("  highest_earning_country, top_IN_occupation: string ('None' if absent)");
        println!();
        println!("Medical body:     overweight_count, categorical_counts, cleaned_count, columns, correlations");
        println!("Sea-level body:   all_data, recent (slope, intercept, r_value, std_err, projection)");
        println!("Page-views body:  lower_bound, upper_bound, daily, monthly_averages, yearly_boxes, monthly_boxes");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("Tabstat Studio v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Summary statistics, trend fits and chart data for small tabular datasets.");
}

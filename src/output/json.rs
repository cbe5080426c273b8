//! JSON report writer and reader.
//!
//! Writes report envelopes to JSON files with proper formatting.

use crate::parser::schema::ReportEnvelope;
use crate::utils::error::OutputError;
use log::{debug, info};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Write a report to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Arguments
/// * `report` - Report envelope to write
/// * `output_path` - Path to output JSON file
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
///
/// # Example
/// ```ignore
/// let report = envelope(DatasetKind::Demographic, "adult.data.csv", rows, compute(&table));
/// write_report(&report, "demographic-report.json")?;
/// ```
pub fn write_report<T: Serialize>(
    report: &ReportEnvelope<T>,
    output_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing report to: {}", output_path.display());

    validate_path(output_path)?;

    // Create parent directories if needed
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let file = File::create(output_path)?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, report)?;

    info!(
        "Report written successfully ({} bytes)",
        file_size(output_path)
    );

    Ok(())
}

/// Serialize a report to a pretty JSON string
pub fn report_to_string<T: Serialize>(report: &ReportEnvelope<T>) -> Result<String, OutputError> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Read a report from a JSON file
///
/// **Public** - used by `validate` and tests
///
/// Use `serde_json::Value` as `T` to read a report without knowing its
/// dataset.
///
/// # Errors
/// * `OutputError::WriteFailed` - File read error (reusing WriteFailed for I/O)
/// * `OutputError::SerializationFailed` - JSON parse error
pub fn read_report<T: DeserializeOwned>(
    input_path: impl AsRef<Path>,
) -> Result<ReportEnvelope<T>, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading report from: {}", input_path.display());

    let file = File::open(input_path)?;
    let report: ReportEnvelope<T> = serde_json::from_reader(file)?;

    debug!(
        "Report loaded: version {}, dataset {}",
        report.version, report.dataset
    );

    Ok(report)
}

/// Validate that an output path is writable
///
/// **Public** - also used by command argument validation
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    // Check if we're trying to overwrite a directory
    if path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    if let Some(ext) = path.extension() {
        if ext != "json" {
            debug!("File does not have .json extension: {}", path.display());
        }
    }

    Ok(())
}

/// File size in bytes, 0 if unavailable
fn file_size(path: &Path) -> u64 {
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}

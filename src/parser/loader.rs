//! Shared CSV loading for every dataset.
//!
//! Rows are deserialized straight into typed records. The first row that
//! fails to parse rejects the whole file, and the error names its line.

use crate::utils::error::LoadError;
use log::{debug, info};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Load a CSV file into typed records
///
/// **Public** - used by each dataset's `load_*` function
///
/// # Arguments
/// * `path` - Path to the CSV file
/// * `has_headers` - Whether the first row is a header row
///
/// # Errors
/// * `LoadError::Io` - File cannot be opened
/// * `LoadError::MalformedRow` - A row does not match the record type
/// * `LoadError::Csv` - Any other CSV tokenizer failure
pub fn load_records<T: DeserializeOwned>(
    path: impl AsRef<Path>,
    has_headers: bool,
) -> Result<Vec<T>, LoadError> {
    let path = path.as_ref();

    info!("Loading records from: {}", path.display());

    let file = File::open(path)?;
    let records = read_records(file, has_headers)?;

    info!("Loaded {} records", records.len());

    Ok(records)
}

/// Read typed records from any reader
///
/// **Public** - lets tests and callers parse in-memory CSV
pub fn read_records<T, R>(reader: R, has_headers: bool) -> Result<Vec<T>, LoadError>
where
    T: DeserializeOwned,
    R: Read,
{
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(has_headers)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for result in rdr.deserialize() {
        let record: T = result.map_err(classify_csv_error)?;
        records.push(record);
    }

    debug!("Parsed {} rows (headers: {})", records.len(), has_headers);

    Ok(records)
}

/// Turn row-level csv failures into `MalformedRow` with a line number
///
/// **Private** - internal error mapping
fn classify_csv_error(err: csv::Error) -> LoadError {
    let reason = match err.kind() {
        csv::ErrorKind::Deserialize { err: de, .. } => Some(de.to_string()),
        csv::ErrorKind::UnequalLengths {
            expected_len, len, ..
        } => Some(format!("expected {} fields, found {}", expected_len, len)),
        _ => None,
    };

    match (reason, err.position().map(|pos| pos.line())) {
        (Some(reason), Some(line)) => LoadError::MalformedRow { line, reason },
        _ => LoadError::Csv(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Point {
        x: i32,
        y: f64,
    }

    #[test]
    fn test_read_with_headers() {
        let data = "x,y\n1,2.5\n 3 , 4.0 \n";
        let points: Vec<Point> = read_records(data.as_bytes(), true).unwrap();

        assert_eq!(points, vec![Point { x: 1, y: 2.5 }, Point { x: 3, y: 4.0 }]);
    }

    #[test]
    fn test_read_without_headers_is_positional() {
        let data = "1,2.5\n3,4.0\n";
        let points: Vec<Point> = read_records(data.as_bytes(), false).unwrap();

        assert_eq!(points.len(), 2);
        assert_eq!(points[1].x, 3);
    }

    #[test]
    fn test_malformed_row_reports_line() {
        let data = "x,y\n1,2.5\nnope,4.0\n";
        let result: Result<Vec<Point>, _> = read_records(data.as_bytes(), true);

        match result {
            Err(LoadError::MalformedRow { line, .. }) => assert_eq!(line, 3),
            other => panic!("expected MalformedRow, got {:?}", other),
        }
    }

    #[test]
    fn test_unequal_row_length_is_malformed() {
        let data = "x,y\n1,2.5\n3\n";
        let result: Result<Vec<Point>, _> = read_records(data.as_bytes(), true);

        assert!(matches!(result, Err(LoadError::MalformedRow { .. })));
    }

    #[test]
    fn test_missing_file() {
        let result: Result<Vec<Point>, _> = load_records("/definitely/not/here.csv", true);
        assert!(matches!(result, Err(LoadError::Io(_))));
    }
}

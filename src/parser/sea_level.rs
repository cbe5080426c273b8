//! Sea-level measurement records.
//!
//! Only the year and the CSIRO adjusted level are read; the error bound
//! and NOAA columns are ignored.

use super::loader::load_records;
use crate::utils::error::LoadError;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeaLevelRecord {
    #[serde(rename = "Year")]
    pub year: i32,

    /// Sea level in inches
    #[serde(rename = "CSIRO Adjusted Sea Level")]
    pub csiro_adjusted_sea_level: f64,
}

pub fn load_sea_level(path: impl AsRef<Path>) -> Result<Vec<SeaLevelRecord>, LoadError> {
    load_records(path, true)
}

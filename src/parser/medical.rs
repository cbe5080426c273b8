//! Medical examination survey records.

use super::loader::load_records;
use crate::utils::error::LoadError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One examination row, as found in the source file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicalRecord {
    pub id: u64,
    /// Age in days
    pub age: u32,
    pub sex: u8,
    /// Height in centimetres
    pub height: f64,
    /// Weight in kilograms
    pub weight: f64,
    pub ap_hi: i64,
    pub ap_lo: i64,
    pub cholesterol: u8,
    pub gluc: u8,
    pub smoke: u8,
    pub alco: u8,
    pub active: u8,
    pub cardio: u8,
}

/// Load medical examination records from a CSV file with a header row
pub fn load_medical(path: impl AsRef<Path>) -> Result<Vec<MedicalRecord>, LoadError> {
    load_records(path, true)
}

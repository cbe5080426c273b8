//! Health indicators derived from the medical examination survey.
//!
//! Produces the data behind the categorical bar chart and the
//! correlation heat map.

use super::metrics::{mean, quantile};
use crate::parser::medical::MedicalRecord;
use crate::parser::schema::{CategoryTotal, CorrelationCell, MedicalReport};
use crate::utils::config::{LOWER_PERCENTILE, OVERWEIGHT_BMI, UPPER_PERCENTILE};
use log::debug;
use std::collections::BTreeMap;

/// Variables melted into the categorical chart
pub const CATEGORICAL_VARIABLES: [&str; 6] =
    ["cholesterol", "gluc", "smoke", "alco", "active", "overweight"];

/// Columns of the correlation matrix, in output order
pub const CORRELATION_COLUMNS: [&str; 14] = [
    "id",
    "age",
    "sex",
    "height",
    "weight",
    "ap_hi",
    "ap_lo",
    "cholesterol",
    "gluc",
    "smoke",
    "alco",
    "active",
    "cardio",
    "overweight",
];

/// A medical record with derived indicators
///
/// `cholesterol` and `gluc` are normalized to 0 (good) / 1 (bad).
#[derive(Debug, Clone, PartialEq)]
pub struct HealthRecord {
    pub record: MedicalRecord,
    pub overweight: u8,
}

impl HealthRecord {
    /// Value of a categorical variable by name
    pub fn categorical(&self, variable: &str) -> Option<u8> {
        let r = &self.record;
        match variable {
            "cholesterol" => Some(r.cholesterol),
            "gluc" => Some(r.gluc),
            "smoke" => Some(r.smoke),
            "alco" => Some(r.alco),
            "active" => Some(r.active),
            "overweight" => Some(self.overweight),
            _ => None,
        }
    }

    /// Numeric row in `CORRELATION_COLUMNS` order
    pub fn numeric_row(&self) -> [f64; 14] {
        let r = &self.record;
        [
            r.id as f64,
            r.age as f64,
            r.sex as f64,
            r.height,
            r.weight,
            r.ap_hi as f64,
            r.ap_lo as f64,
            r.cholesterol as f64,
            r.gluc as f64,
            r.smoke as f64,
            r.alco as f64,
            r.active as f64,
            r.cardio as f64,
            self.overweight as f64,
        ]
    }
}

/// Body-mass index from height in cm and weight in kg
pub fn bmi(record: &MedicalRecord) -> f64 {
    let metres = record.height / 100.0;
    record.weight / (metres * metres)
}

/// 1 when BMI is above 25, else 0
pub fn overweight(record: &MedicalRecord) -> u8 {
    u8::from(bmi(record) > OVERWEIGHT_BMI)
}

/// Map cholesterol and gluc to 0 when the raw level is 1, else 1
pub fn normalize(record: &MedicalRecord) -> MedicalRecord {
    MedicalRecord {
        cholesterol: u8::from(record.cholesterol > 1),
        gluc: u8::from(record.gluc > 1),
        ..record.clone()
    }
}

/// Derive overweight and normalize every record
///
/// Overweight is computed before normalization; it only uses height and
/// weight so the order does not matter.
pub fn derive_indicators(records: &[MedicalRecord]) -> Vec<HealthRecord> {
    records
        .iter()
        .map(|r| HealthRecord {
            overweight: overweight(r),
            record: normalize(r),
        })
        .collect()
}

/// Count records per (cardio, variable, value)
///
/// **Public** - data for the categorical bar chart
///
/// # Returns
/// Non-empty groups sorted by cardio, then variable name, then value.
pub fn categorical_counts(records: &[HealthRecord]) -> Vec<CategoryTotal> {
    let mut groups: BTreeMap<(u8, &str, u8), u64> = BTreeMap::new();

    for health in records {
        for variable in CATEGORICAL_VARIABLES {
            if let Some(value) = health.categorical(variable) {
                *groups
                    .entry((health.record.cardio, variable, value))
                    .or_insert(0) += 1;
            }
        }
    }

    groups
        .into_iter()
        .map(|((cardio, variable, value), total)| CategoryTotal {
            cardio,
            variable: variable.to_string(),
            value,
            total,
        })
        .collect()
}

/// Drop implausible rows before the heat map
///
/// **Public** - keeps rows with diastolic <= systolic pressure and height
/// and weight inside the 2.5–97.5 percentile window of the full data
pub fn clean_for_heat_map(records: &[HealthRecord]) -> Vec<HealthRecord> {
    let heights = records.iter().map(|h| h.record.height);
    let weights = records.iter().map(|h| h.record.weight);

    let (Some(h_lo), Some(h_hi), Some(w_lo), Some(w_hi)) = (
        quantile(heights.clone(), LOWER_PERCENTILE),
        quantile(heights, UPPER_PERCENTILE),
        quantile(weights.clone(), LOWER_PERCENTILE),
        quantile(weights, UPPER_PERCENTILE),
    ) else {
        return Vec::new();
    };

    debug!(
        "Heat map bounds: height [{:.1}, {:.1}], weight [{:.1}, {:.1}]",
        h_lo, h_hi, w_lo, w_hi
    );

    records
        .iter()
        .filter(|h| {
            let r = &h.record;
            r.ap_lo <= r.ap_hi
                && r.height >= h_lo
                && r.height <= h_hi
                && r.weight >= w_lo
                && r.weight <= w_hi
        })
        .cloned()
        .collect()
}

/// Pearson correlation of two equal-length columns
///
/// `None` for fewer than two points or a constant column.
pub fn pearson(xs: &[f64], ys: &[f64]) -> Option<f64> {
    if xs.len() != ys.len() || xs.len() < 2 {
        return None;
    }

    let mx = mean(xs.iter().copied())?;
    let my = mean(ys.iter().copied())?;

    let (mut sxy, mut sxx, mut syy) = (0.0, 0.0, 0.0);
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - mx;
        let dy = y - my;
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }

    if sxx == 0.0 || syy == 0.0 {
        return None;
    }

    Some((sxy / (sxx * syy).sqrt()).clamp(-1.0, 1.0))
}

/// Lower triangle of the correlation matrix
///
/// **Public** - data for the heat map; the upper triangle and the
/// diagonal are masked and therefore not returned
pub fn correlation_matrix(records: &[HealthRecord]) -> Vec<CorrelationCell> {
    let rows: Vec<[f64; 14]> = records.iter().map(HealthRecord::numeric_row).collect();
    let columns: Vec<Vec<f64>> = (0..CORRELATION_COLUMNS.len())
        .map(|c| rows.iter().map(|row| row[c]).collect())
        .collect();

    let mut cells = Vec::new();
    for (i, row_name) in CORRELATION_COLUMNS.iter().enumerate() {
        for (j, column_name) in CORRELATION_COLUMNS.iter().enumerate().take(i) {
            cells.push(CorrelationCell {
                row: row_name.to_string(),
                column: column_name.to_string(),
                value: pearson(&columns[i], &columns[j]),
            });
        }
    }

    cells
}

/// Run the full medical analysis
///
/// **Public** - main entry point for the medical aggregator
pub fn analyze_medical(records: &[MedicalRecord]) -> MedicalReport {
    debug!("Deriving health indicators for {} records", records.len());

    let health = derive_indicators(records);
    let overweight_count = health.iter().filter(|h| h.overweight == 1).count() as u64;
    let categorical_counts = categorical_counts(&health);

    let cleaned = clean_for_heat_map(&health);
    debug!("{} of {} records kept for heat map", cleaned.len(), health.len());

    MedicalReport {
        overweight_count,
        categorical_counts,
        cleaned_count: cleaned.len(),
        columns: CORRELATION_COLUMNS.iter().map(|c| c.to_string()).collect(),
        correlations: correlation_matrix(&cleaned),
    }
}

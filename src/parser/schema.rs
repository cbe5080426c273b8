//! Output JSON schema definitions for analysis reports.
//!
//! This module defines the structure of JSON files we write to disk.
//! Every report is wrapped in a versioned envelope so files can be
//! validated without knowing which dataset produced them.

use crate::utils::config::SCHEMA_VERSION;
use chrono::{NaiveDate, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which dataset a report was computed from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum DatasetKind {
    /// Census-style demographic table (headerless CSV)
    Demographic,
    /// Medical examination survey
    Medical,
    /// Sea-level measurements by year
    SeaLevel,
    /// Daily forum page views
    PageViews,
}

impl DatasetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DatasetKind::Demographic => "demographic",
            DatasetKind::Medical => "medical",
            DatasetKind::SeaLevel => "sea-level",
            DatasetKind::PageViews => "page-views",
        }
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Top-level report structure written to JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportEnvelope<T> {
    /// Schema version for compatibility checking
    pub version: String,

    /// Dataset the body was computed from
    pub dataset: DatasetKind,

    /// Input file the records were loaded from
    pub source: String,

    /// Number of records loaded
    pub record_count: usize,

    /// Timestamp when the report was generated (RFC 3339)
    pub generated_at: String,

    /// Dataset-specific analysis
    pub body: T,
}

impl<T> ReportEnvelope<T> {
    /// Wrap a body with the current schema version and timestamp
    pub fn new(dataset: DatasetKind, source: impl Into<String>, record_count: usize, body: T) -> Self {
        Self {
            version: SCHEMA_VERSION.to_string(),
            dataset,
            source: source.into(),
            record_count,
            generated_at: Utc::now().to_rfc3339(),
            body,
        }
    }
}

// ---------------------------------------------------------------------------
// Demographic
// ---------------------------------------------------------------------------

/// Count for one category of a frequency distribution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: u64,
}

/// Category counts ordered by descending count, ties in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrequencyDistribution(pub Vec<CategoryCount>);

impl FrequencyDistribution {
    /// Sum of all counts
    pub fn total(&self) -> u64 {
        self.0.iter().map(|c| c.count).sum()
    }

    /// Count for a category, 0 if absent
    pub fn get(&self, category: &str) -> u64 {
        self.0
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.count)
            .unwrap_or(0)
    }

    /// Category with the highest count (first-seen on ties)
    pub fn top(&self) -> Option<&CategoryCount> {
        self.0.first()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryCount> {
        self.0.iter()
    }
}

/// Summary statistics of the demographic table
///
/// Field names serialize verbatim as the statistic names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticReport {
    pub race_count: FrequencyDistribution,
    pub average_age_men: f64,
    pub percentage_bachelors: f64,
    pub higher_education_rich: f64,
    pub lower_education_rich: f64,
    pub min_work_hours: u32,
    pub rich_percentage: f64,
    pub highest_earning_country: String,
    pub highest_earning_country_percentage: f64,
    #[serde(rename = "top_IN_occupation")]
    pub top_in_occupation: String,
}

// ---------------------------------------------------------------------------
// Medical
// ---------------------------------------------------------------------------

/// Size of one (cardio, variable, value) group of the categorical chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub cardio: u8,
    pub variable: String,
    pub value: u8,
    pub total: u64,
}

/// One visible cell of the correlation heat map (strictly below the diagonal)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationCell {
    pub row: String,
    pub column: String,
    /// `None` when the correlation is undefined (constant column)
    pub value: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicalReport {
    /// Records flagged overweight (BMI > 25)
    pub overweight_count: u64,

    /// Bars of the categorical plot, split by cardio
    pub categorical_counts: Vec<CategoryTotal>,

    /// Records remaining after heat-map cleaning
    pub cleaned_count: usize,

    /// Column order of the correlation matrix
    pub columns: Vec<String>,

    /// Lower triangle of the correlation matrix
    pub correlations: Vec<CorrelationCell>,
}

// ---------------------------------------------------------------------------
// Sea level
// ---------------------------------------------------------------------------

/// Ordinary least-squares fit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
    /// Pearson correlation coefficient
    pub r_value: f64,
    /// Standard error of the slope
    pub std_err: f64,
    /// Number of points the line was fitted to
    pub points: usize,
}

impl LinearFit {
    /// Evaluate the line at `x`
    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    pub year: i32,
    pub level: f64,
}

/// A fitted line and its projection over a year range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendLine {
    pub label: String,
    pub fit: LinearFit,
    pub projection: Vec<ProjectionPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeaLevelReport {
    /// Fit over every measurement (absent when it cannot be computed)
    pub all_data: Option<TrendLine>,

    /// Fit over measurements from the recent-fit start year onwards
    pub recent: Option<TrendLine>,
}

// ---------------------------------------------------------------------------
// Page views
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyValue {
    pub date: NaiveDate,
    pub value: u64,
}

/// Mean page views per month of one year (January first)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyAverageRow {
    pub year: i32,
    pub months: [Option<f64>; 12],
}

/// Five-number summary plus outliers, as drawn by a box plot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxSummary {
    pub label: String,
    pub count: usize,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub lower_whisker: f64,
    pub upper_whisker: f64,
    pub outliers: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageViewReport {
    /// Inclusive bounds used to drop outlier days
    pub lower_bound: f64,
    pub upper_bound: f64,

    /// Cleaned daily series (line plot)
    pub daily: Vec<DailyValue>,

    /// Average per year and month (bar plot)
    pub monthly_averages: Vec<MonthlyAverageRow>,

    /// Year-wise box plot (trend)
    pub yearly_boxes: Vec<BoxSummary>,

    /// Month-wise box plot (seasonality)
    pub monthly_boxes: Vec<BoxSummary>,
}

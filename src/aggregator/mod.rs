//! Aggregation of loaded tables into summary statistics and chart data.
//!
//! This module transforms typed records into:
//! - Demographic summary statistics (the `StatisticReport`)
//! - Medical indicators, grouped counts and correlations
//! - Sea-level trend lines and projections
//! - Page-view monthly averages and box-plot summaries
//!
//! Nothing here performs I/O.

pub mod demographic;
pub mod medical;
pub mod metrics;
pub mod regression;
pub mod time_series;

// Re-export main entry points
pub use demographic::compute;
pub use medical::analyze_medical;
pub use metrics::{frequency_distribution, percentage, quantile, round_one_decimal};
pub use regression::{linear_regression, sea_level_trends};
pub use time_series::analyze_page_views;

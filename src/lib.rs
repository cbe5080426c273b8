//! Tabstat Studio
//!
//! Summary statistics, trend fits and chart data for small
//! tabular datasets: census demographics, medical examinations,
//! sea-level measurements and forum page views.
//!
//! This crate provides the core implementation for the
//! `tabstat` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! tabstat analyze demographic --input adult.data.csv --summary
//! tabstat validate --file demographic-report.json
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;

//! Output writers for analysis reports.
//!
//! This module handles:
//! - JSON reports (pretty printed, wrapped in a versioned envelope)
//! - Plain-text summaries for the terminal

pub mod json;
pub mod text;

// Re-export main functions
pub use json::{read_report, report_to_string, validate_path, write_report};
pub use text::{render_medical, render_page_views, render_sea_level, render_statistics};

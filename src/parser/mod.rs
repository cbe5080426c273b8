//! Dataset loading and schema definitions.
//!
//! This module handles:
//! - Reading CSV files into typed records
//! - Rejecting malformed rows at load time
//! - Defining output report schema

pub mod census;
pub mod loader;
pub mod medical;
pub mod page_views;
pub mod schema;
pub mod sea_level;

// Re-export main types
pub use census::{load_census, CensusRecord, SalaryBracket, Sex};
pub use loader::{load_records, read_records};
pub use medical::{load_medical, MedicalRecord};
pub use page_views::{load_page_views, PageViewRecord};
pub use schema::{DatasetKind, ReportEnvelope, StatisticReport};
pub use sea_level::{load_sea_level, SeaLevelRecord};

//! Daily forum page-view records.

use super::loader::load_records;
use crate::utils::error::LoadError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageViewRecord {
    pub date: NaiveDate,
    pub value: u64,
}

/// Load page views from a CSV file with `date,value` headers
pub fn load_page_views(path: impl AsRef<Path>) -> Result<Vec<PageViewRecord>, LoadError> {
    load_records(path, true)
}

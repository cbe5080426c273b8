//! Census-style demographic records.
//!
//! The source file has no header row. Columns are positional, in the order
//! listed by `CENSUS_COLUMNS`.

use super::loader::load_records;
use crate::utils::config::{BACHELORS, HIGHER_EDUCATION};
use crate::utils::error::LoadError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Recorded sex of a respondent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
}

/// Salary bracket column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SalaryBracket {
    #[serde(rename = "<=50K")]
    AtMost50K,
    #[serde(rename = ">50K")]
    Above50K,
}

/// One row of the demographic table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CensusRecord {
    pub age: u32,
    pub workclass: String,
    pub fnlwgt: u64,
    pub education: String,
    pub education_num: u32,
    pub marital_status: String,
    pub occupation: String,
    pub relationship: String,
    pub race: String,
    pub sex: Sex,
    pub capital_gain: u64,
    pub capital_loss: u64,
    pub hours_per_week: u32,
    pub native_country: String,
    pub salary: SalaryBracket,
}

impl CensusRecord {
    /// Earns more than 50K
    pub fn is_rich(&self) -> bool {
        self.salary == SalaryBracket::Above50K
    }

    pub fn is_male(&self) -> bool {
        self.sex == Sex::Male
    }

    pub fn has_bachelors(&self) -> bool {
        self.education == BACHELORS
    }

    /// Education is Bachelors, Masters or Doctorate
    pub fn has_higher_education(&self) -> bool {
        HIGHER_EDUCATION.contains(&self.education.as_str())
    }
}

/// Load the demographic table from a headerless CSV file
///
/// **Public** - main entry point for census loading
///
/// # Errors
/// * `LoadError::MalformedRow` - Non-numeric age/hours, unknown sex or
///   salary value, or a row with the wrong number of columns
pub fn load_census(path: impl AsRef<Path>) -> Result<Vec<CensusRecord>, LoadError> {
    load_records(path, false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::loader::read_records;

    const ROWS: &str = "\
39, State-gov, 77516, Bachelors, 13, Never-married, Adm-clerical, Not-in-family, White, Male, 2174, 0, 40, United-States, <=50K
52, Self-emp-inc, 287927, HS-grad, 9, Married-civ-spouse, Exec-managerial, Wife, White, Female, 15024, 0, 40, United-States, >50K
";

    #[test]
    fn test_parse_positional_rows() {
        let records: Vec<CensusRecord> = read_records(ROWS.as_bytes(), false).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].age, 39);
        assert_eq!(records[0].sex, Sex::Male);
        assert_eq!(records[0].education, "Bachelors");
        assert_eq!(records[1].salary, SalaryBracket::Above50K);
        assert_eq!(records[1].capital_gain, 15024);
        assert_eq!(records[1].native_country, "United-States");
    }

    #[test]
    fn test_predicates() {
        let records: Vec<CensusRecord> = read_records(ROWS.as_bytes(), false).unwrap();

        assert!(records[0].is_male());
        assert!(records[0].has_bachelors());
        assert!(records[0].has_higher_education());
        assert!(!records[0].is_rich());
        assert!(!records[1].has_higher_education());
        assert!(records[1].is_rich());
    }

    #[test]
    fn test_unknown_salary_rejected() {
        let row = "39,State-gov,77516,Bachelors,13,Never-married,Adm-clerical,Not-in-family,White,Male,0,0,40,United-States,50K+\n";
        let result: Result<Vec<CensusRecord>, _> = read_records(row.as_bytes(), false);

        assert!(matches!(result, Err(LoadError::MalformedRow { line: 1, .. })));
    }
}

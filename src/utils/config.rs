//! Configuration and constants for the CLI.

/// Current report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

// Census source has no header row; columns are positional in this order
pub const CENSUS_COLUMNS: &[&str] = &[
    "age",
    "workclass",
    "fnlwgt",
    "education",
    "education-num",
    "marital-status",
    "occupation",
    "relationship",
    "race",
    "sex",
    "capital-gain",
    "capital-loss",
    "hours-per-week",
    "native-country",
    "salary",
];

/// Education levels counted as higher education
pub const HIGHER_EDUCATION: &[&str] = &["Bachelors", "Masters", "Doctorate"];

pub const BACHELORS: &str = "Bachelors";
pub const INDIA: &str = "India";

/// Placeholder reported when a categorical statistic has no candidate
pub const NONE_LABEL: &str = "None";

// Percentile window used to drop outliers (medical heat map, page views)
pub const LOWER_PERCENTILE: f64 = 0.025;
pub const UPPER_PERCENTILE: f64 = 0.975;

/// BMI strictly above this value counts as overweight
pub const OVERWEIGHT_BMI: f64 = 25.0;

// Sea-level projection ranges (inclusive)
pub const FIRST_PROJECTION_YEAR: i32 = 1880;
pub const RECENT_FIT_START_YEAR: i32 = 2000;
pub const LAST_PROJECTION_YEAR: i32 = 2050;

/// Whisker reach for box-plot summaries, in multiples of the IQR
pub const WHISKER_IQR_FACTOR: f64 = 1.5;

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

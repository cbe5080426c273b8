use crate::parser::schema::DatasetKind;
use std::path::PathBuf;

/// Arguments for the analyze command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct AnalyzeArgs {
    /// Which dataset the input file holds
    pub dataset: DatasetKind,

    /// Input CSV file
    pub input: PathBuf,

    /// Output path for JSON report
    pub output_json: PathBuf,

    /// Print text summary to stdout
    pub print_summary: bool,

    /// Number of correlations shown in the medical summary
    pub top_correlations: usize,
}

impl AnalyzeArgs {
    /// Arguments with the default output path for `dataset`
    pub fn new(dataset: DatasetKind, input: impl Into<PathBuf>) -> Self {
        Self {
            dataset,
            input: input.into(),
            output_json: default_output(dataset),
            print_summary: false,
            top_correlations: 5,
        }
    }
}

/// `<dataset>-report.json`
pub fn default_output(dataset: DatasetKind) -> PathBuf {
    PathBuf::from(format!("{}-report.json", dataset))
}

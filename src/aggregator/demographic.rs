//! Summary statistics over the demographic table.
//!
//! Every statistic is total: empty subsets fall back to a fixed value
//! (0.0 or "None") instead of failing.

use super::metrics::{frequency_distribution, mean, percentage, percentage_where, round_one_decimal};
use crate::parser::census::CensusRecord;
use crate::parser::schema::StatisticReport;
use crate::utils::config::{INDIA, NONE_LABEL};
use log::debug;
use std::collections::BTreeMap;

/// Compute every demographic statistic
///
/// **Public** - main entry point for the demographic aggregator
///
/// # Arguments
/// * `table` - Loaded census records
///
/// # Returns
/// The full report. An empty table yields zeros and "None" labels.
pub fn compute(table: &[CensusRecord]) -> StatisticReport {
    debug!("Computing demographic statistics over {} records", table.len());

    let (higher_education_rich, lower_education_rich) = education_rich_split(table);
    let min_work_hours = min_work_hours(table);
    let (highest_earning_country, highest_earning_country_percentage) =
        highest_earning_country(table);

    let report = StatisticReport {
        race_count: frequency_distribution(table.iter().map(|r| r.race.as_str())),
        average_age_men: average_age_men(table),
        percentage_bachelors: percentage(
            table.iter().filter(|r| r.has_bachelors()).count(),
            table.len(),
        ),
        higher_education_rich,
        lower_education_rich,
        min_work_hours,
        rich_percentage: rich_percentage_at_hours(table, min_work_hours),
        highest_earning_country,
        highest_earning_country_percentage,
        top_in_occupation: top_rich_occupation_in(table, INDIA),
    };

    debug!(
        "Highest earning country: {} ({:.1}%)",
        report.highest_earning_country, report.highest_earning_country_percentage
    );

    report
}

/// Mean age of male records, 0.0 when there are none
pub fn average_age_men(table: &[CensusRecord]) -> f64 {
    mean(table.iter().filter(|r| r.is_male()).map(|r| r.age as f64))
        .map(round_one_decimal)
        .unwrap_or(0.0)
}

/// Rich percentage inside and outside the higher-education subset
///
/// **Public** - returns `(higher, lower)`
pub fn education_rich_split(table: &[CensusRecord]) -> (f64, f64) {
    let (higher, lower): (Vec<&CensusRecord>, Vec<&CensusRecord>) =
        table.iter().partition(|r| r.has_higher_education());

    debug!(
        "Higher education subset: {} records, complement: {}",
        higher.len(),
        lower.len()
    );

    (
        percentage_where(&higher, CensusRecord::is_rich),
        percentage_where(&lower, CensusRecord::is_rich),
    )
}

/// Minimum hours-per-week, 0 for an empty table
pub fn min_work_hours(table: &[CensusRecord]) -> u32 {
    table.iter().map(|r| r.hours_per_week).min().unwrap_or(0)
}

/// Rich percentage among records working exactly `hours`
pub fn rich_percentage_at_hours(table: &[CensusRecord], hours: u32) -> f64 {
    let workers: Vec<&CensusRecord> = table.iter().filter(|r| r.hours_per_week == hours).collect();
    percentage_where(&workers, CensusRecord::is_rich)
}

/// Country with the highest share of rich records
///
/// **Public** - returns `(country, rounded percentage)`
///
/// Countries without any rich record have no defined share and are
/// skipped. Equal shares go to the country whose name sorts first. With
/// no candidate the result is `("None", 0.0)`.
pub fn highest_earning_country(table: &[CensusRecord]) -> (String, f64) {
    // country -> (total, rich), iterated in name order
    let mut tallies: BTreeMap<&str, (u64, u64)> = BTreeMap::new();

    for record in table {
        let tally = tallies.entry(record.native_country.as_str()).or_default();
        tally.0 += 1;
        if record.is_rich() {
            tally.1 += 1;
        }
    }

    let mut best: Option<(&str, f64)> = None;
    for (&country, &(total, rich)) in &tallies {
        if rich == 0 {
            continue;
        }
        let share = rich as f64 / total as f64 * 100.0;
        if best.map_or(true, |(_, top)| share > top) {
            best = Some((country, share));
        }
    }

    match best {
        Some((country, share)) => (country.to_string(), round_one_decimal(share)),
        None => (NONE_LABEL.to_string(), 0.0),
    }
}

/// Most common occupation among rich records from `country`
///
/// "None" when no such record exists. Ties keep the first-seen occupation.
pub fn top_rich_occupation_in(table: &[CensusRecord], country: &str) -> String {
    let occupations = frequency_distribution(
        table
            .iter()
            .filter(|r| r.native_country == country && r.is_rich())
            .map(|r| r.occupation.as_str()),
    );

    occupations
        .top()
        .map(|c| c.category.clone())
        .unwrap_or_else(|| NONE_LABEL.to_string())
}

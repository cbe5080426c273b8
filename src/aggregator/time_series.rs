//! Page-view time series: outlier cleaning, monthly averages and
//! box-plot summaries.

use super::metrics::{quantile, quantile_sorted, sorted};
use crate::parser::page_views::PageViewRecord;
use crate::parser::schema::{BoxSummary, DailyValue, MonthlyAverageRow, PageViewReport};
use crate::utils::config::{LOWER_PERCENTILE, MONTH_NAMES, UPPER_PERCENTILE, WHISKER_IQR_FACTOR};
use chrono::Datelike;
use log::debug;
use std::collections::BTreeMap;

/// Keep days whose value lies inside the percentile window
///
/// **Public** - returns the kept records and the inclusive `(lower, upper)`
/// bounds, computed over all values
pub fn clean_page_views(records: &[PageViewRecord]) -> (Vec<PageViewRecord>, f64, f64) {
    let values = records.iter().map(|r| r.value as f64);
    let (Some(lower), Some(upper)) = (
        quantile(values.clone(), LOWER_PERCENTILE),
        quantile(values, UPPER_PERCENTILE),
    ) else {
        return (Vec::new(), 0.0, 0.0);
    };

    let kept: Vec<PageViewRecord> = records
        .iter()
        .filter(|r| {
            let v = r.value as f64;
            v >= lower && v <= upper
        })
        .copied()
        .collect();

    debug!(
        "Kept {} of {} days within [{:.1}, {:.1}]",
        kept.len(),
        records.len(),
        lower,
        upper
    );

    (kept, lower, upper)
}

/// Mean value for each (year, month)
///
/// **Public** - data for the grouped bar chart; years ascending, months
/// January first, `None` for months without data
pub fn monthly_averages(records: &[PageViewRecord]) -> Vec<MonthlyAverageRow> {
    let mut sums: BTreeMap<i32, [(f64, u32); 12]> = BTreeMap::new();

    for record in records {
        let slots = sums.entry(record.date.year()).or_insert([(0.0, 0); 12]);
        let slot = &mut slots[record.date.month0() as usize];
        slot.0 += record.value as f64;
        slot.1 += 1;
    }

    sums.into_iter()
        .map(|(year, slots)| MonthlyAverageRow {
            year,
            months: slots.map(|(sum, count)| (count > 0).then(|| sum / count as f64)),
        })
        .collect()
}

/// Box-plot summary of one group
///
/// Whiskers reach the most extreme values within 1.5 IQR of the
/// quartiles; anything beyond counts as an outlier. `None` when empty.
pub fn box_summary(label: impl Into<String>, values: impl IntoIterator<Item = f64>) -> Option<BoxSummary> {
    let data = sorted(values);

    let q1 = quantile_sorted(&data, 0.25)?;
    let median = quantile_sorted(&data, 0.5)?;
    let q3 = quantile_sorted(&data, 0.75)?;

    let reach = (q3 - q1) * WHISKER_IQR_FACTOR;
    let (low_fence, high_fence) = (q1 - reach, q3 + reach);

    let inside: Vec<f64> = data
        .iter()
        .copied()
        .filter(|v| *v >= low_fence && *v <= high_fence)
        .collect();

    let lower_whisker = inside.first().copied().unwrap_or(q1);
    let upper_whisker = inside.last().copied().unwrap_or(q3);

    Some(BoxSummary {
        label: label.into(),
        count: data.len(),
        q1,
        median,
        q3,
        lower_whisker,
        upper_whisker,
        outliers: data.len() - inside.len(),
    })
}

/// Year-wise box summaries (trend), years ascending
pub fn yearly_boxes(records: &[PageViewRecord]) -> Vec<BoxSummary> {
    let mut by_year: BTreeMap<i32, Vec<f64>> = BTreeMap::new();
    for record in records {
        by_year
            .entry(record.date.year())
            .or_default()
            .push(record.value as f64);
    }

    by_year
        .into_iter()
        .filter_map(|(year, values)| box_summary(year.to_string(), values))
        .collect()
}

/// Month-wise box summaries (seasonality), Jan..Dec, months with data only
pub fn monthly_boxes(records: &[PageViewRecord]) -> Vec<BoxSummary> {
    let mut by_month: [Vec<f64>; 12] = Default::default();
    for record in records {
        by_month[record.date.month0() as usize].push(record.value as f64);
    }

    by_month
        .into_iter()
        .zip(MONTH_NAMES)
        .filter_map(|(values, name)| box_summary(&name[..3], values))
        .collect()
}

/// Run the full page-view analysis
///
/// **Public** - main entry point for the time-series aggregator
pub fn analyze_page_views(records: &[PageViewRecord]) -> PageViewReport {
    let (cleaned, lower_bound, upper_bound) = clean_page_views(records);

    let mut daily: Vec<DailyValue> = cleaned
        .iter()
        .map(|r| DailyValue {
            date: r.date,
            value: r.value,
        })
        .collect();
    daily.sort_by_key(|d| d.date);

    PageViewReport {
        lower_bound,
        upper_bound,
        daily,
        monthly_averages: monthly_averages(&cleaned),
        yearly_boxes: yearly_boxes(&cleaned),
        monthly_boxes: monthly_boxes(&cleaned),
    }
}

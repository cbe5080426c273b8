//! Plain-text summaries printed with `--summary`.

use crate::parser::schema::{MedicalReport, PageViewReport, SeaLevelReport, StatisticReport, TrendLine};
use crate::utils::config::LAST_PROJECTION_YEAR;

const LABEL_WIDTH: usize = 44;
const VALUE_WIDTH: usize = 26;

/// Render a two-column bordered table
///
/// **Private** - shared by the dataset renderers
fn render_table(header: (&str, &str), rows: &[(String, String)], widths: (usize, usize)) -> String {
    let (lw, vw) = widths;
    let border = format!("+-{}-+-{}-+", "-".repeat(lw), "-".repeat(vw));

    let mut out = String::new();
    out.push_str(&border);
    out.push('\n');
    out.push_str(&format!("| {:<lw$} | {:<vw$} |\n", header.0, header.1));
    out.push_str(&border);
    out.push('\n');
    for (label, value) in rows {
        out.push_str(&format!("| {:<lw$} | {:<vw$} |\n", label, value));
    }
    out.push_str(&border);
    out
}

/// Render the demographic statistics and the race breakdown
pub fn render_statistics(report: &StatisticReport) -> String {
    let pct = |v: f64| format!("{:.1} %", v);

    let rows = vec![
        ("Average age of men".to_string(), format!("{:.1}", report.average_age_men)),
        ("People with a Bachelors degree".to_string(), pct(report.percentage_bachelors)),
        ("Higher education earning >50K".to_string(), pct(report.higher_education_rich)),
        ("Without higher education earning >50K".to_string(), pct(report.lower_education_rich)),
        ("Minimum work hours per week".to_string(), report.min_work_hours.to_string()),
        ("Earning >50K at minimum hours".to_string(), pct(report.rich_percentage)),
        ("Country with highest >50K share".to_string(), report.highest_earning_country.clone()),
        ("Share earning >50K in that country".to_string(), pct(report.highest_earning_country_percentage)),
        ("Top occupation in India (>50K)".to_string(), report.top_in_occupation.clone()),
    ];

    let races: Vec<(String, String)> = report
        .race_count
        .iter()
        .map(|c| (c.category.clone(), c.count.to_string()))
        .collect();

    format!(
        "{}\n\n{}",
        render_table(("Statistic", "Value"), &rows, (LABEL_WIDTH, VALUE_WIDTH)),
        render_table(("Race", "Count"), &races, (26, 10))
    )
}

/// Render the medical indicators and the strongest correlations
pub fn render_medical(report: &MedicalReport, top_correlations: usize) -> String {
    let mut rows = vec![
        ("Overweight records".to_string(), report.overweight_count.to_string()),
        ("Records kept for heat map".to_string(), report.cleaned_count.to_string()),
    ];

    let mut strongest: Vec<_> = report
        .correlations
        .iter()
        .filter_map(|c| c.value.map(|v| (c, v)))
        .collect();
    strongest.sort_by(|a, b| b.1.abs().total_cmp(&a.1.abs()));

    for (cell, value) in strongest.into_iter().take(top_correlations) {
        rows.push((format!("corr({}, {})", cell.row, cell.column), format!("{:.1}", value)));
    }

    render_table(("Indicator", "Value"), &rows, (LABEL_WIDTH, VALUE_WIDTH))
}

fn trend_rows(rows: &mut Vec<(String, String)>, trend: Option<&TrendLine>, name: &str) {
    match trend {
        Some(t) => {
            rows.push((format!("{} slope (in/yr)", name), format!("{:.4}", t.fit.slope)));
            rows.push((format!("{} r", name), format!("{:.3}", t.fit.r_value)));
            if let Some(last) = t.projection.last() {
                rows.push((format!("{} level in {}", name, last.year), format!("{:.2}", last.level)));
            }
        }
        None => rows.push((format!("{} fit", name), "insufficient data".to_string())),
    }
}

/// Render both sea-level trend lines
pub fn render_sea_level(report: &SeaLevelReport) -> String {
    let mut rows = Vec::new();
    trend_rows(&mut rows, report.all_data.as_ref(), "All data");
    trend_rows(&mut rows, report.recent.as_ref(), "Recent");

    let mut out = render_table(("Trend", "Value"), &rows, (LABEL_WIDTH, VALUE_WIDTH));
    if report.all_data.is_none() && report.recent.is_none() {
        out.push_str(&format!("\nNo projection to {} available", LAST_PROJECTION_YEAR));
    }
    out
}

/// Render page-view cleaning bounds and the yearly box summaries
pub fn render_page_views(report: &PageViewReport) -> String {
    let mut rows = vec![
        ("Lower bound".to_string(), format!("{:.1}", report.lower_bound)),
        ("Upper bound".to_string(), format!("{:.1}", report.upper_bound)),
        ("Days kept".to_string(), report.daily.len().to_string()),
    ];

    for summary in &report.yearly_boxes {
        rows.push((
            format!("{} median (n={})", summary.label, summary.count),
            format!("{:.1}", summary.median),
        ));
    }

    render_table(("Page views", "Value"), &rows, (LABEL_WIDTH, VALUE_WIDTH))
}

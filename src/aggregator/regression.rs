//! Least-squares trend lines for the sea-level measurements.

use super::metrics::mean;
use crate::parser::schema::{LinearFit, ProjectionPoint, SeaLevelReport, TrendLine};
use crate::parser::sea_level::SeaLevelRecord;
use crate::utils::config::{FIRST_PROJECTION_YEAR, LAST_PROJECTION_YEAR, RECENT_FIT_START_YEAR};
use log::{debug, warn};

/// Fit `y = intercept + slope * x` by ordinary least squares
///
/// **Public** - general-purpose regression
///
/// # Returns
/// `None` for mismatched lengths, fewer than two points, or when every
/// `x` is the same.
pub fn linear_regression(xs: &[f64], ys: &[f64]) -> Option<LinearFit> {
    let n = xs.len();
    if n != ys.len() || n < 2 {
        return None;
    }

    let mx = mean(xs.iter().copied())?;
    let my = mean(ys.iter().copied())?;

    let (mut sxx, mut syy, mut sxy) = (0.0, 0.0, 0.0);
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - mx;
        let dy = y - my;
        sxx += dx * dx;
        syy += dy * dy;
        sxy += dx * dy;
    }

    if sxx == 0.0 {
        return None;
    }

    let slope = sxy / sxx;
    let intercept = my - slope * mx;

    let r_value = if syy == 0.0 {
        0.0
    } else {
        (sxy / (sxx * syy).sqrt()).clamp(-1.0, 1.0)
    };

    // Two points always lie on the line, so the slope error is zero
    let std_err = if n > 2 {
        let residual = ((1.0 - r_value * r_value) * syy / sxx / (n - 2) as f64).max(0.0);
        residual.sqrt()
    } else {
        0.0
    };

    Some(LinearFit {
        slope,
        intercept,
        r_value,
        std_err,
        points: n,
    })
}

/// Evaluate a fit for every year in `first..=last`
pub fn project(fit: &LinearFit, first: i32, last: i32) -> Vec<ProjectionPoint> {
    (first..=last)
        .map(|year| ProjectionPoint {
            year,
            level: fit.predict(year as f64),
        })
        .collect()
}

/// Fit a labelled trend over records and project it
fn trend_line(
    label: &str,
    records: &[&SeaLevelRecord],
    first: i32,
    last: i32,
) -> Option<TrendLine> {
    let xs: Vec<f64> = records.iter().map(|r| r.year as f64).collect();
    let ys: Vec<f64> = records.iter().map(|r| r.csiro_adjusted_sea_level).collect();

    let Some(fit) = linear_regression(&xs, &ys) else {
        warn!("Not enough distinct years to fit '{}' ({} points)", label, xs.len());
        return None;
    };

    debug!(
        "{}: slope {:.4} in/yr, intercept {:.2}, r {:.3}",
        label, fit.slope, fit.intercept, fit.r_value
    );

    Some(TrendLine {
        label: label.to_string(),
        fit,
        projection: project(&fit, first, last),
    })
}

/// Fit both sea-level trends
///
/// **Public** - main entry point for the sea-level analysis
///
/// One line over every measurement, projected 1880–2050; one over the
/// measurements from 2000 onwards, projected 2000–2050.
pub fn sea_level_trends(records: &[SeaLevelRecord]) -> SeaLevelReport {
    let all: Vec<&SeaLevelRecord> = records.iter().collect();
    let recent: Vec<&SeaLevelRecord> = records
        .iter()
        .filter(|r| r.year >= RECENT_FIT_START_YEAR)
        .collect();

    SeaLevelReport {
        all_data: trend_line(
            "Best Fit Line 1880-2013",
            &all,
            FIRST_PROJECTION_YEAR,
            LAST_PROJECTION_YEAR,
        ),
        recent: trend_line(
            "Best Fit Line 2000-2013",
            &recent,
            RECENT_FIT_START_YEAR,
            LAST_PROJECTION_YEAR,
        ),
    }
}

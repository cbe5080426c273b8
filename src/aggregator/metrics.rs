//! Numeric building blocks shared by every analysis.
//!
//! Ratios guard their denominators explicitly, and frequency counts keep
//! first-seen order for ties, so none of these helpers can fail on
//! empty input.

use crate::parser::schema::{CategoryCount, FrequencyDistribution};
use std::collections::HashMap;

/// Round to 1 decimal place, half to even
///
/// **Public** - all reported percentages and means go through this
///
/// Scales by ten before rounding, so a value that reads as a tie rounds
/// as one: 0.25 becomes 0.2 and 0.35 becomes 0.4.
pub fn round_one_decimal(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }

    (value * 10.0).round_ties_even() / 10.0
}

/// `matching / total * 100`, rounded; 0.0 when `total` is zero
///
/// **Public** - percentage of a subset that matches a predicate
pub fn percentage(matching: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round_one_decimal(matching as f64 / total as f64 * 100.0)
}

/// Percentage of `items` for which `predicate` holds
pub fn percentage_where<T>(items: &[&T], predicate: impl Fn(&T) -> bool) -> f64 {
    let matching = items.iter().filter(|&&item| predicate(item)).count();
    percentage(matching, items.len())
}

/// Arithmetic mean, `None` for an empty iterator
pub fn mean(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));

    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

/// Count occurrences of each category
///
/// **Public** - builds a `FrequencyDistribution`
///
/// # Returns
/// Categories sorted by descending count. The sort is stable, so equal
/// counts stay in the order the categories were first seen.
pub fn frequency_distribution<'a, I>(values: I) -> FrequencyDistribution
where
    I: IntoIterator<Item = &'a str>,
{
    let mut index: HashMap<&'a str, usize> = HashMap::new();
    let mut counts: Vec<CategoryCount> = Vec::new();

    for value in values {
        match index.get(value) {
            Some(&slot) => counts[slot].count += 1,
            None => {
                index.insert(value, counts.len());
                counts.push(CategoryCount {
                    category: value.to_string(),
                    count: 1,
                });
            }
        }
    }

    counts.sort_by(|a, b| b.count.cmp(&a.count));

    FrequencyDistribution(counts)
}

/// Sort values ascending (total order, NaN last)
pub fn sorted(values: impl IntoIterator<Item = f64>) -> Vec<f64> {
    let mut values: Vec<f64> = values.into_iter().collect();
    values.sort_by(|a, b| a.total_cmp(b));
    values
}

/// Quantile of already-sorted data using linear interpolation
///
/// **Public** - percentile bounds and box-plot quartiles
///
/// `pos = q * (n - 1)`; the result interpolates between the two
/// neighbouring ranks. `q` is clamped to [0, 1].
pub fn quantile_sorted(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }

    let q = q.clamp(0.0, 1.0);
    let pos = q * (sorted.len() - 1) as f64;
    let lower = pos.floor() as usize;
    let upper = pos.ceil() as usize;
    let frac = pos - lower as f64;

    Some(sorted[lower] + (sorted[upper] - sorted[lower]) * frac)
}

/// Quantile of unsorted data
pub fn quantile(values: impl IntoIterator<Item = f64>, q: f64) -> Option<f64> {
    quantile_sorted(&sorted(values), q)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_even_on_exact_ties() {
        assert_eq!(round_one_decimal(0.25), 0.2);
        assert_eq!(round_one_decimal(0.75), 0.8);
        assert_eq!(round_one_decimal(12.25), 12.2);
    }

    #[test]
    fn test_round_scaled_ties() {
        // 0.35 * 10 lands exactly on 3.5
        assert_eq!(round_one_decimal(0.35), 0.4);
        assert_eq!(round_one_decimal(38.45), 38.4);
        assert_eq!(round_one_decimal(769.0 / 20.0), 38.4);
        assert_eq!(round_one_decimal(100.0 / 3.0), 33.3);
        assert_eq!(round_one_decimal(200.0 / 3.0), 66.7);
    }

    #[test]
    fn test_round_passes_through_nan() {
        assert!(round_one_decimal(f64::NAN).is_nan());
    }

    #[test]
    fn test_percentage_zero_denominator() {
        assert_eq!(percentage(0, 0), 0.0);
        assert_eq!(percentage(1, 4), 25.0);
        assert_eq!(percentage(1, 3), 33.3);
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean(vec![30.0, 40.0]), Some(35.0));
        assert_eq!(mean(Vec::<f64>::new()), None);
    }

    #[test]
    fn test_frequency_distribution_order() {
        let values = ["b", "a", "b", "c", "a", "d", "b"];
        let dist = frequency_distribution(values.iter().copied());

        let order: Vec<&str> = dist.iter().map(|c| c.category.as_str()).collect();
        assert_eq!(order, vec!["b", "a", "c", "d"]);
        assert_eq!(dist.get("b"), 3);
        assert_eq!(dist.get("missing"), 0);
        assert_eq!(dist.total(), 7);
    }

    #[test]
    fn test_frequency_ties_keep_first_seen() {
        let dist = frequency_distribution(["x", "y", "y", "x"].iter().copied());
        assert_eq!(dist.top().unwrap().category, "x");
    }

    #[test]
    fn test_quantile_linear() {
        assert_eq!(quantile(vec![4.0, 1.0, 3.0, 2.0], 0.5), Some(2.5));
        assert_eq!(quantile(vec![1.0, 2.0, 3.0, 4.0], 0.0), Some(1.0));
        assert_eq!(quantile(vec![1.0, 2.0, 3.0, 4.0], 1.0), Some(4.0));
        assert_eq!(quantile(vec![10.0], 0.975), Some(10.0));
        assert_eq!(quantile(Vec::<f64>::new(), 0.5), None);
    }

    #[test]
    fn test_quantile_interpolates() {
        // pos = 0.25 * 4 = 1.0 -> exactly the second value
        let data = [0.0, 10.0, 20.0, 30.0, 40.0];
        assert_eq!(quantile_sorted(&data, 0.25), Some(10.0));
        // pos = 0.1 * 4 = 0.4
        let q = quantile_sorted(&data, 0.1).unwrap();
        assert!((q - 4.0).abs() < 1e-9);
    }
}

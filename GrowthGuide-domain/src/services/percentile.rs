use tracing::debug;

use growth_guide_data::{AgeTable, Metric, PercentileLabel, ReferenceRow};

/// Extreme tier label reported one tier down when exceeded
const EXTREME_TIER: &str = "p999";
const EXTREME_TIER_REMAP: &str = "p99";

/// How a reference row's values bracket the bands between them.
///
/// The two conventions assign a value that sits inside a band to opposite
/// endpoints, so results differ between metrics for the same numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntervalPolicy {
    /// Bands are `(v[i], v[i+1]]` and report the upper label.
    /// Values past the top report it, with `p999` collapsed to `p99`.
    OpenLowClosedHigh,

    /// Bands are `[v[i], v[i+1])` and report the lower label.
    /// Values at or past the top report it unchanged.
    ClosedLowOpenHigh,
}

impl IntervalPolicy {
    /// Policy used for a metric's reference tables
    pub fn for_metric(metric: Metric) -> Self {
        match metric {
            Metric::Height | Metric::Weight => IntervalPolicy::OpenLowClosedHigh,
            Metric::Bmi => IntervalPolicy::ClosedLowOpenHigh,
        }
    }

    /// Classify a value against a row already sorted ascending by value
    fn classify(&self, sorted: &[(&str, f64)], value: f64) -> PercentileLabel {
        let (Some(&(lowest, lowest_value)), Some(&(highest, _))) = (sorted.first(), sorted.last()) else {
            return PercentileLabel::unknown();
        };

        match self {
            IntervalPolicy::OpenLowClosedHigh => {
                if value <= lowest_value {
                    return PercentileLabel::new(lowest);
                }

                for pair in sorted.windows(2) {
                    let (_, current) = pair[0];
                    let (next_label, next) = pair[1];
                    if current < value && value <= next {
                        return PercentileLabel::new(next_label);
                    }
                }

                if highest == EXTREME_TIER {
                    PercentileLabel::new(EXTREME_TIER_REMAP)
                } else {
                    PercentileLabel::new(highest)
                }
            }
            IntervalPolicy::ClosedLowOpenHigh => {
                if value < lowest_value {
                    return PercentileLabel::new(lowest);
                }

                for pair in sorted.windows(2) {
                    let (current_label, current) = pair[0];
                    let (_, next) = pair[1];
                    if current <= value && value < next {
                        return PercentileLabel::new(current_label);
                    }
                }

                PercentileLabel::new(highest)
            }
        }
    }
}

/// Classify a value against a single reference row
pub fn classify_row(policy: IntervalPolicy, row: &ReferenceRow, value: f64) -> PercentileLabel {
    let sorted = row.sorted_by_value();
    policy.classify(&sorted, value)
}

/// Percentile label for a value at an age, using the metric's policy.
///
/// Returns `unknown` when the table has no row for the age.
pub fn resolve_percentile(metric: Metric, table: &AgeTable, age: i64, value: f64) -> PercentileLabel {
    match table.row_for(age) {
        Some(row) => classify_row(IntervalPolicy::for_metric(metric), row, value),
        None => {
            debug!("No {} reference row for age {}", metric, age);
            PercentileLabel::unknown()
        }
    }
}

/// Height-for-age percentile (open-low, closed-high)
pub fn find_percentile_for_height(table: &AgeTable, age: i64, height: f64) -> PercentileLabel {
    resolve_percentile(Metric::Height, table, age, height)
}

/// Weight-for-age percentile (open-low, closed-high)
pub fn find_percentile_for_weight(table: &AgeTable, age: i64, weight: f64) -> PercentileLabel {
    resolve_percentile(Metric::Weight, table, age, weight)
}

/// BMI-for-age percentile (closed-low, open-high)
pub fn find_percentile_for_bmi(table: &AgeTable, age: i64, bmi: f64) -> PercentileLabel {
    resolve_percentile(Metric::Bmi, table, age, bmi)
}

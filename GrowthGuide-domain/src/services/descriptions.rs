//! Human-readable text for percentile labels.
//!
//! BMI uses different cut-offs before and after two years of age, so its
//! description depends on the child's age in months.

use growth_guide_data::{Metric, PercentileLabel};

/// Description of the `unknown` sentinel label
pub const UNKNOWN_DESCRIPTION: &str = "Unknown";

/// Description of a label missing from the catalog
pub const UNKNOWN_PERCENTILE_DESCRIPTION: &str = "Unknown percentile";

/// Description for a metric name that is not recognised
pub const UNKNOWN_METRIC_DESCRIPTION: &str = "Unknown metric type";

/// Age from which the over-two BMI table applies
pub const BMI_OVER_TWO_FROM_MONTHS: i32 = 24;

type Catalog = &'static [(&'static str, &'static str)];

const HEIGHT_DESCRIPTIONS: Catalog = &[
    ("p01", "Low height (<1%)"),
    ("p1", "Low height (<1%)"),
    ("p3", "Low height (1-3%)"),
    ("p5", "Low height (3-5%)"),
    ("p10", "Low height (5-10%)"),
    ("p15", "Low height (10-15%)"),
    ("p25", "Normal height (15-25%)"),
    ("p50", "Average height (25-50%)"),
    ("p75", "Above average height (50-75%)"),
    ("p85", "Tall (75-85%)"),
    ("p90", "Tall (85-90%)"),
    ("p95", "Very tall (90-95%)"),
    ("p97", "Very tall (95-97%)"),
    ("p99", "Extremely tall (≥97%)"),
    ("p999", "Extremely tall (>99%)"),
    ("unknown", UNKNOWN_DESCRIPTION),
];

const WEIGHT_DESCRIPTIONS: Catalog = &[
    ("p01", "Very low weight (<1%)"),
    ("p1", "Very low weight (<1%)"),
    ("p3", "Low weight (1-3%)"),
    ("p5", "Low weight (3-5%)"),
    ("p10", "Below average weight (5-10%)"),
    ("p15", "Below average weight (10-15%)"),
    ("p25", "Low normal weight (15-25%)"),
    ("p50", "Average weight (25-50%)"),
    ("p75", "High normal weight (50-75%)"),
    ("p85", "Above average weight (75-85%)"),
    ("p90", "Above average weight (85-90%)"),
    ("p95", "High weight (90-95%)"),
    ("p97", "High weight (95-97%)"),
    ("p99", "Very high weight (≥97%)"),
    ("p999", "Very high weight (>99%)"),
    ("unknown", UNKNOWN_DESCRIPTION),
];

const BMI_UNDER_TWO_DESCRIPTIONS: Catalog = &[
    ("p01", "Underweight (<15%)"),
    ("p1", "Underweight (<15%)"),
    ("p3", "Underweight (<15%)"),
    ("p5", "Underweight (<15%)"),
    ("p10", "Underweight (<15%)"),
    ("p15", "Underweight (<15%)"),
    ("p25", "Normal (15-97.7%)"),
    ("p50", "Normal (15-97.7%)"),
    ("p75", "Normal (15-97.7%)"),
    ("p85", "Normal (15-97.7%)"),
    ("p90", "Normal (15-97.7%)"),
    ("p95", "Normal (15-97.7%)"),
    ("p97", "Normal (15-97.7%)"),
    ("p977", "Obese (>97.7%)"),
    ("p99", "Obese (>97.7%)"),
    ("p999", "Obese (>97.7%)"),
    ("unknown", UNKNOWN_DESCRIPTION),
];

const BMI_OVER_TWO_DESCRIPTIONS: Catalog = &[
    ("p01", "Underweight (<15%)"),
    ("p1", "Underweight (<15%)"),
    ("p3", "Underweight (<15%)"),
    ("p5", "Underweight (<15%)"),
    ("p10", "Underweight (<15%)"),
    ("p15", "Underweight (<15%)"),
    ("p25", "Normal (15-85%)"),
    ("p50", "Normal (15-85%)"),
    ("p75", "Normal (15-85%)"),
    ("p85", "Normal (15-85%)"),
    ("p90", "Overweight (85-98%)"),
    ("p95", "Overweight (85-95%)"),
    ("p97", "Obese (95-99%)"),
    ("p99", "Severely obese (>99%)"),
    ("p999", "Severely obese (>99%)"),
    ("unknown", UNKNOWN_DESCRIPTION),
];

const BMI_GENERAL_DESCRIPTIONS: Catalog = &[
    ("p01", "Very low BMI (<1%)"),
    ("p1", "Very low BMI (<1%)"),
    ("p3", "Low BMI (1-3%)"),
    ("p5", "Low BMI (3-5%)"),
    ("p10", "Below average BMI (5-10%)"),
    ("p15", "Below average BMI (10-15%)"),
    ("p25", "Low normal BMI (15-25%)"),
    ("p50", "Average BMI (25-50%)"),
    ("p75", "High normal BMI (50-75%)"),
    ("p85", "Above average BMI (75-85%)"),
    ("p90", "Above average BMI (85-90%)"),
    ("p95", "High BMI (90-95%)"),
    ("p97", "High BMI (95-97%)"),
    ("p977", "Very high BMI (97.7-99%)"),
    ("p99", "Very high BMI (97-99%)"),
    ("p999", "Very high BMI (>99%)"),
    ("unknown", UNKNOWN_DESCRIPTION),
];

fn catalog_for(metric: Metric, age_months: Option<i32>) -> Catalog {
    match (metric, age_months) {
        (Metric::Height, _) => HEIGHT_DESCRIPTIONS,
        (Metric::Weight, _) => WEIGHT_DESCRIPTIONS,
        (Metric::Bmi, Some(age)) if age < BMI_OVER_TWO_FROM_MONTHS => BMI_UNDER_TWO_DESCRIPTIONS,
        (Metric::Bmi, Some(_)) => BMI_OVER_TWO_DESCRIPTIONS,
        (Metric::Bmi, None) => BMI_GENERAL_DESCRIPTIONS,
    }
}

/// Description of a percentile label for a metric.
///
/// Labels match case-insensitively. BMI picks the under-two or over-two
/// table from `age_months`, or a general table when no age is given.
pub fn describe(label: &str, metric: Metric, age_months: Option<i32>) -> &'static str {
    let label = label.to_ascii_lowercase();
    catalog_for(metric, age_months)
        .iter()
        .find(|(key, _)| *key == label)
        .map(|(_, text)| *text)
        .unwrap_or(UNKNOWN_PERCENTILE_DESCRIPTION)
}

/// [`describe`] for an already resolved label
pub fn describe_label(label: &PercentileLabel, metric: Metric, age_months: Option<i32>) -> &'static str {
    describe(label.as_str(), metric, age_months)
}

/// [`describe`] for a metric given by name.
///
/// Metric names are matched exactly (`height`, `weight`, `bmi`); only the
/// label is case-insensitive.
pub fn describe_raw(label: &str, metric_name: &str, age_months: Option<i32>) -> &'static str {
    let metric = match metric_name {
        "height" => Metric::Height,
        "weight" => Metric::Weight,
        "bmi" => Metric::Bmi,
        _ => return UNKNOWN_METRIC_DESCRIPTION,
    };
    describe(label, metric, age_months)
}

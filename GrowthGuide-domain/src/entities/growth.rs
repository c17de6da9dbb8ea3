use serde::{Deserialize, Serialize};
use validator::Validate;

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

pub use growth_guide_data::{Gender, Metric, PercentileLabel};

/// Request for a child's BMI-for-age classification
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct BmiPercentileRequest {
    /// Gender of the child
    pub gender: Gender,

    /// Age in whole months
    pub age_months: i32,

    /// Height in centimetres
    #[validate(range(max = 300.0, message = "Height must not exceed 300 cm"))]
    pub height_cm: f64,

    /// Weight in kilograms
    #[validate(range(max = 500.0, message = "Weight must not exceed 500 kg"))]
    pub weight_kg: f64,
}

/// Request for a height-for-age, weight-for-age or BMI-for-age label
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct MeasurementRequest {
    /// Metric the value measures
    pub metric: Metric,

    /// Gender of the child
    pub gender: Gender,

    /// Age key of the reference table (months, or weeks for infant tables)
    pub age: i32,

    /// Observed value in the metric's unit
    #[validate(range(min = 0.0, max = 500.0, message = "Value must be between 0 and 500"))]
    pub value: f64,
}

/// Percentile label and its description
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct PercentileResult {
    /// Percentile label, or `unknown` when no reference data applies
    pub percentile: PercentileLabel,

    /// Human-readable description of the label
    pub description: String,
}

impl PercentileResult {
    pub fn new(percentile: PercentileLabel, description: impl Into<String>) -> Self {
        Self {
            percentile,
            description: description.into(),
        }
    }

    /// `unknown` result carrying the reason in its description
    pub fn unknown(description: impl Into<String>) -> Self {
        Self::new(PercentileLabel::unknown(), description)
    }
}

/// BMI with its percentile classification
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct BmiPercentileResult {
    /// BMI rounded to two decimals
    pub bmi: f64,

    /// Percentile label, or `unknown`
    pub percentile: PercentileLabel,

    /// Human-readable description of the label
    pub description: String,
}

/// Adult BMI category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum AdultBmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl AdultBmiCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdultBmiCategory::Underweight => "underweight",
            AdultBmiCategory::Normal => "normal",
            AdultBmiCategory::Overweight => "overweight",
            AdultBmiCategory::Obese => "obese",
        }
    }
}

impl std::fmt::Display for AdultBmiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Adult BMI category with the thresholds that produced it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct AdultBmiResult {
    pub category: AdultBmiCategory,

    /// Category name with its BMI range, e.g. `Normal (19≤BMI<24)`
    pub description: String,
}

/// Precision of a parsed age date
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum AgeDatePrecision {
    /// Day given as `00`; only the month is known
    Month,

    /// Full date; age can be counted in weeks
    Week,
}

/// Age derived from a birth date
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct AgeSummary {
    /// Text for display: months and days under one year, otherwise years and months
    pub display: String,

    /// Text for storage, always years and months
    pub storage: String,

    /// Whole years
    pub years: i32,

    /// Months past the whole years
    pub months: i32,

    /// Total whole months, usable as a reference table age key
    pub total_months: i32,

    /// Whole weeks elapsed
    pub weeks: i64,

    /// Precision of the input date
    pub precision: AgeDatePrecision,
}

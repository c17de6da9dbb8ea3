use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use growth_guide_domain::entities::growth::{
    AdultBmiCategory, AdultBmiResult, AgeDatePrecision, AgeSummary, Gender,
};

pub use growth_guide_domain::entities::growth::{
    BmiPercentileRequest, BmiPercentileResult, MeasurementRequest, PercentileResult,
};

/// Request for an adult BMI category
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct AdultBmiRequest {
    /// Gender, selecting the category thresholds
    pub gender: Gender,

    /// Height in centimetres
    #[validate(range(max = 300.0, message = "Height must not exceed 300 cm"))]
    pub height_cm: f64,

    /// Weight in kilograms
    #[validate(range(max = 500.0, message = "Weight must not exceed 500 kg"))]
    pub weight_kg: f64,
}

/// Adult BMI and its category
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AdultBmiResponse {
    /// BMI rounded to two decimals
    pub bmi: f64,

    /// Category name
    pub category: AdultBmiCategory,

    /// Category name with its BMI range
    pub description: String,
}

impl AdultBmiResponse {
    pub fn new(bmi: f64, result: AdultBmiResult) -> Self {
        Self {
            bmi,
            category: result.category,
            description: result.description,
        }
    }
}

/// Query parameters for the age endpoint
#[derive(Debug, Clone, Deserialize, Validate, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct AgeQueryParams {
    /// Birth date as `YYYY-MM-DD`; a day of `00` means only the month is known
    #[validate(length(equal = 10, message = "age_date must be formatted as YYYY-MM-DD"))]
    pub age_date: String,
}

/// Age derived from a birth date
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AgeResponse {
    /// Text for display
    pub display: String,

    /// Text for storage, always years and months
    pub storage: String,

    /// Whole years
    pub years: i32,

    /// Months past the whole years
    pub months: i32,

    /// Whole weeks elapsed
    pub weeks: i64,

    /// `month` when the day was given as `00`, otherwise `week`
    pub precision: AgeDatePrecision,
}

impl From<AgeSummary> for AgeResponse {
    fn from(summary: AgeSummary) -> Self {
        Self {
            display: summary.display,
            storage: summary.storage,
            years: summary.years,
            months: summary.months,
            weeks: summary.weeks,
            precision: summary.precision,
        }
    }
}

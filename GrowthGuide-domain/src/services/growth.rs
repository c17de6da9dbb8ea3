use std::sync::Arc;

use chrono::NaiveDate;
use thiserror::Error;
use tracing::{debug, warn};
use validator::Validate;

use growth_guide_data::{Gender, Metric, ReferenceTableStore};

use crate::entities::growth::{
    AdultBmiResult, AgeSummary, BmiPercentileRequest, BmiPercentileResult, MeasurementRequest,
    PercentileResult,
};
use crate::services::{age, bmi};

/// Growth service errors
#[derive(Debug, Error, PartialEq)]
pub enum GrowthServiceError {
    /// Height or weight is zero, negative or not a number
    #[error("Invalid measurement: {0}")]
    InvalidMeasurement(String),

    /// Age date is malformed or not a calendar date
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Request fields failed validation
    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// Trait for growth classification operations
pub trait GrowthServiceTrait: Send + Sync {
    /// Validate a request with the validator crate's rules
    fn validate_request(&self, request: &dyn ValidateRequest) -> Result<(), GrowthServiceError>;

    /// BMI with its BMI-for-age percentile
    fn bmi_with_percentile(&self, request: &BmiPercentileRequest)
        -> Result<BmiPercentileResult, GrowthServiceError>;

    /// Percentile of a height, weight or BMI value
    fn classify(&self, request: &MeasurementRequest) -> Result<PercentileResult, GrowthServiceError>;

    /// Adult BMI category from raw measurements
    fn adult_category(&self, gender: Gender, height_cm: f64, weight_kg: f64)
        -> Result<(f64, AdultBmiResult), GrowthServiceError>;

    /// Age derived from an age date on the given day
    fn age_summary(&self, age_date: &str, today: NaiveDate) -> Result<AgeSummary, GrowthServiceError>;

    /// Every (metric, gender) pair the reference store carries
    fn available_tables(&self) -> Vec<(Metric, Gender)>;
}

/// Object-safe view of [`Validate`] for request types
pub trait ValidateRequest {
    fn run_validation(&self) -> Result<(), validator::ValidationErrors>;
}

impl<T: Validate> ValidateRequest for T {
    fn run_validation(&self) -> Result<(), validator::ValidationErrors> {
        self.validate()
    }
}

/// Growth service over a shared reference store
#[derive(Debug, Clone)]
pub struct GrowthService<S: ReferenceTableStore> {
    store: Arc<S>,
}

impl<S: ReferenceTableStore> GrowthService<S> {
    /// Create a new growth service
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

impl<S: ReferenceTableStore> GrowthServiceTrait for GrowthService<S> {
    fn validate_request(&self, request: &dyn ValidateRequest) -> Result<(), GrowthServiceError> {
        if let Err(validation_errors) = request.run_validation() {
            // Convert validation errors to a meaningful error message
            let error_message = validation_errors
                .field_errors()
                .iter()
                .map(|(field, errors)| {
                    let error_msgs: Vec<String> = errors
                        .iter()
                        .map(|err| match &err.message {
                            Some(msg) => msg.to_string(),
                            None => format!("Invalid {}", field),
                        })
                        .collect();
                    format!("{}: {}", field, error_msgs.join(", "))
                })
                .collect::<Vec<String>>()
                .join("; ");

            warn!("Request failed validation: {}", error_message);
            return Err(GrowthServiceError::ValidationError(error_message));
        }

        Ok(())
    }

    fn bmi_with_percentile(
        &self,
        request: &BmiPercentileRequest,
    ) -> Result<BmiPercentileResult, GrowthServiceError> {
        self.validate_request(request)?;

        let result = bmi::calculate_bmi_with_percentile(
            self.store.as_ref(),
            request.gender,
            request.age_months,
            request.height_cm,
            request.weight_kg,
        )?;

        debug!(
            "BMI {} for {} at {} months resolved to {}",
            result.bmi, request.gender, request.age_months, result.percentile
        );
        Ok(result)
    }

    fn classify(&self, request: &MeasurementRequest) -> Result<PercentileResult, GrowthServiceError> {
        self.validate_request(request)?;

        if !request.value.is_finite() {
            return Err(GrowthServiceError::InvalidMeasurement(format!(
                "{} value must be a finite number",
                request.metric
            )));
        }

        Ok(bmi::classify_measurement(
            self.store.as_ref(),
            request.metric,
            request.gender,
            request.age,
            request.value,
        ))
    }

    fn adult_category(
        &self,
        gender: Gender,
        height_cm: f64,
        weight_kg: f64,
    ) -> Result<(f64, AdultBmiResult), GrowthServiceError> {
        let value = bmi::calculate_bmi(height_cm, weight_kg)?;
        Ok((value, bmi::calculate_adult_bmi_category(value, gender)))
    }

    fn age_summary(&self, age_date: &str, today: NaiveDate) -> Result<AgeSummary, GrowthServiceError> {
        age::calculate_and_format_age(age_date, today)
    }

    fn available_tables(&self) -> Vec<(Metric, Gender)> {
        self.store.available_tables()
    }
}

/// Factory for the service used by the API
pub fn create_default_growth_service<S>(store: Arc<S>) -> Arc<dyn GrowthServiceTrait + Send + Sync>
where
    S: ReferenceTableStore + 'static,
{
    Arc::new(GrowthService::new(store))
}

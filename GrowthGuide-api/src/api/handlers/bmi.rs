use axum::extract::{rejection::JsonRejection, Json, State};
use tracing::{info, instrument, warn};

use crate::api::handlers::SharedGrowthService;
use crate::entities::growth::{
    AdultBmiRequest, AdultBmiResponse, BmiPercentileRequest, BmiPercentileResult,
};
use crate::entities::ErrorResponse;

/// Calculate a child's BMI and its BMI-for-age percentile
#[utoipa::path(
    post,
    path = "/api/v1/bmi/percentile",
    request_body = BmiPercentileRequest,
    responses(
        (status = 200, description = "BMI classified; percentile is `unknown` when no reference data applies", body = BmiPercentileResult),
        (status = 400, description = "Invalid measurement or request", body = ErrorResponse),
    ),
    tag = "bmi"
)]
#[instrument(skip(service, payload))]
pub async fn bmi_percentile(
    State(service): State<SharedGrowthService>,
    payload: Result<Json<BmiPercentileRequest>, JsonRejection>,
) -> Result<Json<BmiPercentileResult>, ErrorResponse> {
    let Json(request) = payload.map_err(|rejection| {
        warn!("Rejected BMI percentile body: {}", rejection);
        ErrorResponse::bad_request(&rejection.body_text())
    })?;

    info!(
        "Calculating BMI percentile for {} at {} months",
        request.gender, request.age_months
    );

    let result = service.bmi_with_percentile(&request).map_err(|err| {
        warn!("BMI percentile request rejected: {}", err);
        ErrorResponse::from(err)
    })?;

    Ok(Json(result))
}

/// Calculate an adult's BMI category
#[utoipa::path(
    post,
    path = "/api/v1/bmi/adult",
    request_body = AdultBmiRequest,
    responses(
        (status = 200, description = "BMI categorised", body = AdultBmiResponse),
        (status = 400, description = "Invalid measurement or request", body = ErrorResponse),
    ),
    tag = "bmi"
)]
#[instrument(skip(service, payload))]
pub async fn adult_bmi(
    State(service): State<SharedGrowthService>,
    payload: Result<Json<AdultBmiRequest>, JsonRejection>,
) -> Result<Json<AdultBmiResponse>, ErrorResponse> {
    let Json(request) = payload.map_err(|rejection| {
        warn!("Rejected adult BMI body: {}", rejection);
        ErrorResponse::bad_request(&rejection.body_text())
    })?;

    info!("Calculating adult BMI category for {}", request.gender);

    service.validate_request(&request)?;

    let (bmi, result) = service
        .adult_category(request.gender, request.height_cm, request.weight_kg)
        .map_err(|err| {
            warn!("Adult BMI request rejected: {}", err);
            ErrorResponse::from(err)
        })?;

    Ok(Json(AdultBmiResponse::new(bmi, result)))
}

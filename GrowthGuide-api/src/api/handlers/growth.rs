use axum::extract::{rejection::JsonRejection, Json, State};
use tracing::{info, instrument, warn};

use crate::api::handlers::SharedGrowthService;
use crate::entities::growth::{MeasurementRequest, PercentileResult};
use crate::entities::ErrorResponse;

/// Classify a height, weight or BMI value against the reference tables
#[utoipa::path(
    post,
    path = "/api/v1/growth/percentile",
    request_body = MeasurementRequest,
    responses(
        (status = 200, description = "Value classified; percentile is `unknown` when no reference data applies", body = PercentileResult),
        (status = 400, description = "Invalid measurement or request", body = ErrorResponse),
    ),
    tag = "growth"
)]
#[instrument(skip(service, payload))]
pub async fn growth_percentile(
    State(service): State<SharedGrowthService>,
    payload: Result<Json<MeasurementRequest>, JsonRejection>,
) -> Result<Json<PercentileResult>, ErrorResponse> {
    let Json(request) = payload.map_err(|rejection| {
        warn!("Rejected measurement body: {}", rejection);
        ErrorResponse::bad_request(&rejection.body_text())
    })?;

    info!(
        "Classifying {} for {} at age {}",
        request.metric, request.gender, request.age
    );

    let result = service.classify(&request).map_err(|err| {
        warn!("Measurement request rejected: {}", err);
        ErrorResponse::from(err)
    })?;

    Ok(Json(result))
}

use axum::extract::{rejection::QueryRejection, Json, Query, State};
use chrono::Utc;
use tracing::{info, instrument, warn};

use crate::api::handlers::SharedGrowthService;
use crate::entities::growth::{AgeQueryParams, AgeResponse};
use crate::entities::ErrorResponse;

/// Calculate an age from a birth date
#[utoipa::path(
    get,
    path = "/api/v1/age",
    params(AgeQueryParams),
    responses(
        (status = 200, description = "Age calculated", body = AgeResponse),
        (status = 400, description = "Malformed or impossible date", body = ErrorResponse),
    ),
    tag = "age"
)]
#[instrument(skip(service, query))]
pub async fn get_age(
    State(service): State<SharedGrowthService>,
    query: Result<Query<AgeQueryParams>, QueryRejection>,
) -> Result<Json<AgeResponse>, ErrorResponse> {
    let Query(params) = query.map_err(|rejection| {
        warn!("Rejected age query: {}", rejection);
        ErrorResponse::bad_request(&rejection.body_text())
    })?;

    info!("Calculating age for {}", params.age_date);

    service.validate_request(&params)?;

    let summary = service
        .age_summary(&params.age_date, Utc::now().date_naive())
        .map_err(|err| {
            warn!("Age request rejected: {}", err);
            ErrorResponse::from(err)
        })?;

    Ok(Json(AgeResponse::from(summary)))
}

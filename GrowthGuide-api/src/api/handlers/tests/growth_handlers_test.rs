#[cfg(test)]
mod growth_handler_tests {
    use axum::extract::{Json, Query, State};
    use axum::http::StatusCode;
    use chrono::{Duration, Utc};
    use growth_guide_domain::entities::growth::{AdultBmiCategory, Gender, Metric};
    use growth_guide_domain::testing::fixture_growth_service;

    use crate::api::handlers::{adult_bmi, bmi_percentile, get_age, growth_percentile, SharedGrowthService};
    use crate::entities::growth::{AdultBmiRequest, AgeQueryParams, BmiPercentileRequest, MeasurementRequest};

    fn service() -> State<SharedGrowthService> {
        State(fixture_growth_service())
    }

    #[tokio::test]
    async fn test_bmi_percentile_handler() {
        let request = BmiPercentileRequest {
            gender: Gender::Boy,
            age_months: 30,
            height_cm: 95.0,
            weight_kg: 14.2,
        };

        let Json(result) = bmi_percentile(service(), Ok(Json(request))).await.unwrap();

        assert_eq!(result.bmi, 15.73);
        assert_eq!(result.percentile, "p50");
        assert_eq!(result.description, "Normal (15-85%)");
    }

    #[tokio::test]
    async fn test_bmi_percentile_handler_rejects_zero_height() {
        let request = BmiPercentileRequest {
            gender: Gender::Boy,
            age_months: 30,
            height_cm: 0.0,
            weight_kg: 14.2,
        };

        let err = bmi_percentile(service(), Ok(Json(request))).await.unwrap_err();

        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.error, "invalid_measurement");
    }

    #[tokio::test]
    async fn test_adult_bmi_handler() {
        let request = AdultBmiRequest {
            gender: Gender::Girl,
            height_cm: 165.0,
            weight_kg: 64.0,
        };

        let Json(result) = adult_bmi(service(), Ok(Json(request))).await.unwrap();

        assert_eq!(result.bmi, 23.51);
        assert_eq!(result.category, AdultBmiCategory::Normal);
        assert_eq!(result.description, "Normal (19≤BMI<24)");
    }

    #[tokio::test]
    async fn test_adult_bmi_handler_validates_bounds() {
        let request = AdultBmiRequest {
            gender: Gender::Boy,
            height_cm: 180.0,
            weight_kg: 900.0,
        };

        let err = adult_bmi(service(), Ok(Json(request))).await.unwrap_err();

        assert_eq!(err.error, "validation_error");
        assert!(err.message.contains("weight_kg"));
    }

    #[tokio::test]
    async fn test_growth_percentile_handler() {
        let request = MeasurementRequest {
            metric: Metric::Height,
            gender: Gender::Boy,
            age: 12,
            value: 90.0,
        };

        let Json(result) = growth_percentile(service(), Ok(Json(request))).await.unwrap();

        assert_eq!(result.percentile, "p99");
    }

    #[tokio::test]
    async fn test_get_age_handler() {
        let birth = Utc::now().date_naive() - Duration::days(21);
        let params = AgeQueryParams {
            age_date: birth.format("%Y-%m-%d").to_string(),
        };

        let Json(result) = get_age(service(), Ok(Query(params))).await.unwrap();

        assert_eq!(result.years, 0);
        assert_eq!(result.weeks, 3);
        assert!(result.storage.starts_with("0 years "));
    }

    #[tokio::test]
    async fn test_get_age_handler_rejects_short_date() {
        let params = AgeQueryParams {
            age_date: "2025-9-1".to_string(),
        };

        let err = get_age(service(), Ok(Query(params))).await.unwrap_err();

        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.error, "validation_error");
    }
}

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Configure Swagger UI endpoints
pub fn configure_swagger_routes() -> SwaggerUi {
    SwaggerUi::new("/api-docs")
        .url("/api-docs/openapi.json", ApiDoc::openapi())
}

// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health endpoints
        crate::api::handlers::health::health_check,

        // BMI endpoints
        crate::api::handlers::bmi::bmi_percentile,
        crate::api::handlers::bmi::adult_bmi,

        // Growth endpoints
        crate::api::handlers::growth::growth_percentile,

        // Age endpoints
        crate::api::handlers::age::get_age
    ),
    components(
        schemas(
            // Entities
            crate::entities::common::ErrorResponse,
            crate::entities::growth::AdultBmiRequest,
            crate::entities::growth::AdultBmiResponse,
            crate::entities::growth::AgeQueryParams,
            crate::entities::growth::AgeResponse,

            // Domain schemas
            growth_guide_domain::entities::growth::BmiPercentileRequest,
            growth_guide_domain::entities::growth::BmiPercentileResult,
            growth_guide_domain::entities::growth::MeasurementRequest,
            growth_guide_domain::entities::growth::PercentileResult,
            growth_guide_domain::entities::growth::AdultBmiCategory,
            growth_guide_domain::entities::growth::AgeDatePrecision,
            growth_guide_domain::entities::growth::Gender,
            growth_guide_domain::entities::growth::Metric,
            growth_guide_domain::entities::growth::PercentileLabel,

            // Health handlers
            crate::api::handlers::health::HealthResponse,
            crate::api::handlers::health::ComponentStatus,
            crate::api::handlers::health::ComponentHealthStatus
        )
    ),
    tags(
        (name = "health", description = "Health check endpoint"),
        (name = "bmi", description = "Child BMI-for-age percentiles and adult BMI categories"),
        (name = "growth", description = "Height, weight and BMI percentile lookup"),
        (name = "age", description = "Age calculation from a birth date")
    ),
    info(
        title = "GrowthGuide API",
        version = "0.1.0",
        description = "Child growth classification against WHO reference tables",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        ),
    ),
    servers(
        (url = "/", description = "Local development server")
    )
)]
pub struct ApiDoc;

use axum::{
    routing::{get, post},
    Extension, Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::debug;

use crate::api::handlers::{age, bmi, growth, health, SharedGrowthService};
use crate::api::handlers::health::SharedHealthService;
use crate::api::security::configure_security;
use crate::config::AppConfig;
use crate::openapi::configure_swagger_routes;

/// Create the application router
pub fn create_app(
    growth_service: SharedGrowthService,
    health_service: SharedHealthService,
    config: Arc<AppConfig>,
) -> Router {
    debug!("Creating application router");

    let api_routes = Router::new()
        .route("/bmi/percentile", post(bmi::bmi_percentile))
        .route("/bmi/adult", post(bmi::adult_bmi))
        .route("/growth/percentile", post(growth::growth_percentile))
        .route("/age", get(age::get_age))
        .with_state(growth_service);

    debug!("API routes configured");

    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .layer(Extension(health_service))
        .layer(Extension(config));

    debug!("Public routes configured");

    let app = Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes);

    // Configure the Swagger UI using the helper function
    let app = add_swagger_ui(app);
    debug!("Swagger UI merged");

    let app = configure_security(app).layer(TraceLayer::new_for_http());
    debug!("Security configuration applied");

    health::initialize_server_start_time();
    debug!("Health check service initialized");

    app
}

/// Add Swagger UI to the router
pub fn add_swagger_ui(app: Router) -> Router {
    app.merge(configure_swagger_routes())
}

//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    api::{health, reports},
    error::ErrorResponse,
    models::{BookLoanCount, CategoryBookCount, ReportSnapshot},
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Library Report API",
        version = "0.1.0",
        description = "Lending activity reports for a library"
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        health::health_check,
        reports::get_report,
    ),
    components(
        schemas(
            health::HealthResponse,
            ReportSnapshot,
            BookLoanCount,
            CategoryBookCount,
            ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Service health"),
        (name = "reports", description = "Lending reports")
    )
)]
pub struct ApiDoc;

/// Swagger UI and OpenAPI document routes
pub fn create_openapi_router() -> Router {
    Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

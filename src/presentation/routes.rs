//! Route definitions and server setup

use std::time::Duration;

use axum::{
    Router, middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::Config;
use crate::domain::scan::DependencyType;
use crate::presentation::{
    controllers::{AppState, health_check, scan_dependencies},
    middleware::{logging_middleware, security_headers_middleware},
    models::*,
};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::controllers::scan_dependencies,
        crate::presentation::controllers::health_check
    ),
    components(
        schemas(
            ScanRequest,
            ScanResponse,
            DependencyDto,
            DependencyType,
            ErrorResponse,
            HealthResponse
        )
    ),
    tags(
        (name = "scan", description = "Repository dependency scan endpoints"),
        (name = "health", description = "System health monitoring endpoints")
    ),
    info(
        title = "SBOM Server API",
        version = "0.1.0",
        description = "Mock dependency-check API returning a fixed SBOM vulnerability report. Intended as a stable backend for UI and integration development; repository and branch are accepted but do not alter the result.",
        license(
            name = "AGPL-3.0",
            url = "https://www.gnu.org/licenses/agpl-3.0.html"
        )
    ),
    servers(
        (url = "http://localhost:8899", description = "Local development server")
    )
)]
pub struct ApiDoc;

/// Create the application router with the middleware stack
pub fn create_router(app_state: AppState, config: &Config) -> Router {
    // Root route - basic service info
    async fn root_handler() -> Response {
        axum::Json(serde_json::json!({
            "name": "SBOM Server",
            "version": env!("CARGO_PKG_VERSION"),
            "description": "Mock dependency-check API",
            "endpoints": {
                "depcheck": "/depcheck",
                "health": "/health",
                "docs": "/docs"
            }
        }))
        .into_response()
    }

    let scan_routes = Router::new().route("/depcheck", post(scan_dependencies));

    let health_routes = Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_check));

    // Build CORS layer from configuration. The original consumer is a browser
    // frontend on another origin, so the default is fully permissive.
    let cors_layer =
        if config.server.allowed_origins.len() == 1 && config.server.allowed_origins[0] == "*" {
            CorsLayer::new()
                .allow_origin(tower_http::cors::AllowOrigin::any())
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_headers([
                    axum::http::header::CONTENT_TYPE,
                    axum::http::header::ACCEPT,
                    axum::http::header::ORIGIN,
                    axum::http::header::ACCESS_CONTROL_REQUEST_METHOD,
                    axum::http::header::ACCESS_CONTROL_REQUEST_HEADERS,
                ])
                .allow_credentials(false)
                .max_age(Duration::from_secs(3600))
        } else {
            let origins: Vec<axum::http::HeaderValue> = config
                .server
                .allowed_origins
                .iter()
                .filter_map(|origin| {
                    axum::http::HeaderValue::from_str(origin)
                        .map_err(|_| {
                            tracing::warn!(origin, "Invalid CORS origin in config; skipping");
                        })
                        .ok()
                })
                .collect();

            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_headers([
                    axum::http::header::CONTENT_TYPE,
                    axum::http::header::ACCEPT,
                    axum::http::header::ORIGIN,
                    axum::http::header::ACCESS_CONTROL_REQUEST_METHOD,
                    axum::http::header::ACCESS_CONTROL_REQUEST_HEADERS,
                ])
                .allow_credentials(false)
                .max_age(Duration::from_secs(3600))
        };

    let mut router = Router::new().merge(scan_routes).merge(health_routes);

    // Conditionally expose Swagger UI based on configuration (avoid leaking docs in production).
    if config.server.enable_docs {
        router =
            router.merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    }

    let service_builder = ServiceBuilder::new()
        // HTTP tracing
        .layer(TraceLayer::new_for_http())
        // CORS handling
        .layer(cors_layer)
        // Request timeout
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_seconds,
        )))
        // Custom logging middleware
        .layer(middleware::from_fn(logging_middleware));

    // Conditionally add security headers middleware
    if config.server.security.enable_security_headers {
        router = router.layer(middleware::from_fn(security_headers_middleware));
    }

    router.layer(service_builder).with_state(app_state)
}

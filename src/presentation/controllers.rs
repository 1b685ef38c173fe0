//! API controllers

use std::sync::Arc;
use std::time::Instant;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::Response,
};
use chrono::Utc;

use crate::application::scan::ScanDependenciesUseCase;
use crate::config::Config;
use crate::presentation::middleware::parse_rejection_response;
use crate::presentation::models::{ErrorResponse, HealthResponse, ScanRequest, ScanResponse};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub scan_use_case: Arc<ScanDependenciesUseCase>,
    pub config: Arc<Config>,
    pub startup_time: Instant,
}

/// POST /depcheck - Scan a repository's dependencies
#[utoipa::path(
    post,
    path = "/depcheck",
    request_body = ScanRequest,
    responses(
        (status = 200, description = "Scan completed", body = ScanResponse),
        (status = 400, description = "Malformed request body", body = ErrorResponse)
    ),
    tag = "scan"
)]
pub async fn scan_dependencies(
    State(state): State<AppState>,
    payload: Result<Json<ScanRequest>, JsonRejection>,
) -> Result<Json<ScanResponse>, Response> {
    let Json(request) = payload.map_err(|rejection| parse_rejection_response(&rejection))?;

    let report = state
        .scan_use_case
        .execute(&request.repository, &request.branch)
        .await;

    Ok(Json(ScanResponse::from(report)))
}

/// GET /health - Service health check
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
        details: Some(serde_json::json!({
            "uptime_seconds": state.startup_time.elapsed().as_secs(),
            "simulated_delay_ms": state.config.scan.simulated_delay_ms,
        })),
    })
}

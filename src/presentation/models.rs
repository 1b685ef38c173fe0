//! API request and response models

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::scan::{Dependency, DependencyReport, DependencyType};

/// Request model for a repository dependency scan
///
/// Both fields are accepted as opaque identifiers and tolerate absence; the
/// mock scan does not condition its output on them.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ScanRequest {
    /// Repository URL or identifier to scan
    #[serde(default)]
    #[schema(example = "https://github.com/my-org/my-service")]
    pub repository: String,

    /// Branch to scan
    #[serde(default)]
    #[schema(example = "main")]
    pub branch: String,
}

/// One dependency entry in the scan response
#[derive(Debug, Serialize, ToSchema)]
pub struct DependencyDto {
    /// Resolved package version
    #[schema(example = "2.14.1")]
    pub version: String,

    /// Whether the dependency is declared directly or pulled in transitively
    #[serde(rename = "depType")]
    pub dep_type: DependencyType,

    /// Whether known vulnerabilities affect this version
    pub vulnerable: bool,

    /// Remediation guidance for this dependency
    #[schema(
        example = "Critical: Upgrade to version 2.15.0 or later immediately to address security vulnerabilities."
    )]
    pub recommendation: String,
}

impl From<Dependency> for DependencyDto {
    fn from(dependency: Dependency) -> Self {
        Self {
            version: dependency.version,
            dep_type: dependency.dep_type,
            vulnerable: dependency.vulnerable,
            recommendation: dependency.recommendation,
        }
    }
}

/// Response model for a completed dependency scan
#[derive(Debug, Serialize, ToSchema)]
pub struct ScanResponse {
    /// Dependency report keyed by coordinate (`group:artifact`)
    pub dependencies: HashMap<String, DependencyDto>,
}

impl From<DependencyReport> for ScanResponse {
    fn from(report: DependencyReport) -> Self {
        Self {
            dependencies: report
                .into_entries()
                .into_iter()
                .map(|(coordinate, dependency)| (coordinate, DependencyDto::from(dependency)))
                .collect(),
        }
    }
}

/// Error response model
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Machine-readable error code
    #[schema(example = "PARSE_ERROR")]
    pub code: String,

    /// Human-readable error message
    #[schema(example = "Failed to parse scan request body")]
    pub message: String,

    /// Additional error context and debugging information
    #[schema(example = r#"{"error": "Expected request with `Content-Type: application/json`"}"#)]
    pub details: Option<serde_json::Value>,

    /// Unique request identifier for tracking and support
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub request_id: Uuid,

    /// Error occurrence timestamp
    #[schema(example = "2024-01-15T10:30:00Z")]
    pub timestamp: DateTime<Utc>,
}

/// Health check response
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Overall service health status
    #[schema(example = "healthy")]
    pub status: String,

    /// Current service version
    #[schema(example = "0.1.0")]
    pub version: String,

    /// Health check timestamp
    #[schema(example = "2024-01-15T10:30:00Z")]
    pub timestamp: DateTime<Utc>,

    /// Detailed health information
    #[schema(example = r#"{"uptime_seconds": 42, "simulated_delay_ms": 2000}"#)]
    pub details: Option<serde_json::Value>,
}

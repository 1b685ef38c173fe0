//! SBOM Server - mock dependency-check service
//!
//! A single-endpoint HTTP API that accepts a repository/branch scan request
//! and returns a fixed dependency vulnerability report after a simulated
//! processing delay. Intended as a stable backend for UI and integration
//! development; no real scanning happens.
//!
//! # Modules
//!
//! - [`config`] — Strongly-typed configuration with TOML and environment variable support
//! - [`domain`] — Scan domain model (dependencies and reports)
//! - [`application`] — Scan use case and the static report generator
//! - [`presentation`] — HTTP routes, controllers, and API models
//! - [`logging`] — Structured logging with tracing
//!
//! # Configuration
//!
//! Environment variables use the `SBOM__` prefix with double underscore
//! separators:
//!
//! ```bash
//! SBOM__SERVER__PORT=8899
//! SBOM__SCAN__SIMULATED_DELAY_MS=2000
//! ```

mod app;

pub mod application;
pub mod config;
pub mod domain;
pub mod logging;
pub mod presentation;

pub use app::create_app;
pub use config::Config;
pub use logging::init_tracing;

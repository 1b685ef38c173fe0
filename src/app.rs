//! Application setup and wiring

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::Router;

use crate::application::scan::ScanDependenciesUseCase;
use crate::config::Config;
use crate::presentation::{AppState, create_router};

/// Create the application router from a loaded configuration
pub fn create_app(config: Config) -> Router {
    let config = Arc::new(config);

    let scan_use_case = Arc::new(ScanDependenciesUseCase::new(Duration::from_millis(
        config.scan.simulated_delay_ms,
    )));

    let app_state = AppState {
        scan_use_case,
        config: config.clone(),
        startup_time: Instant::now(),
    };

    create_router(app_state, &config)
}

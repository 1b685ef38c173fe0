//! Scan use cases

use std::time::Duration;

use crate::application::scan::mock_data::mock_report;
use crate::domain::scan::DependencyReport;

/// Use case for scanning a repository's dependencies.
///
/// The repository and branch are accepted as opaque identifiers: they are
/// logged for traceability but never alter the result. A configurable delay
/// marks where real resolution work would happen.
pub struct ScanDependenciesUseCase {
    simulated_delay: Duration,
}

impl ScanDependenciesUseCase {
    pub fn new(simulated_delay: Duration) -> Self {
        Self { simulated_delay }
    }

    /// Execute a scan, returning the fixed dependency report.
    pub async fn execute(&self, repository: &str, branch: &str) -> DependencyReport {
        tracing::info!(repository, branch, "Dependency scan requested");

        if !self.simulated_delay.is_zero() {
            tokio::time::sleep(self.simulated_delay).await;
        }

        let report = mock_report();

        tracing::info!(
            repository,
            dependency_count = report.len(),
            "Dependency scan completed"
        );

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn result_ignores_repository_and_branch() {
        let use_case = ScanDependenciesUseCase::new(Duration::ZERO);

        let a = use_case.execute("https://github.com/x/y", "main").await;
        let b = use_case.execute("", "").await;

        assert_eq!(a, b);
        assert_eq!(a.len(), 3);
    }

    #[tokio::test]
    async fn execute_waits_for_the_simulated_delay() {
        let delay = Duration::from_millis(50);
        let use_case = ScanDependenciesUseCase::new(delay);

        let started = std::time::Instant::now();
        use_case.execute("repo", "branch").await;

        assert!(started.elapsed() >= delay);
    }
}

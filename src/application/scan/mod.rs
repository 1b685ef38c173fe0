//! Dependency scan use case and its static report source

pub mod mock_data;
pub mod use_cases;

pub use mock_data::mock_report;
pub use use_cases::ScanDependenciesUseCase;

//! Scan entities

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::scan::value_objects::DependencyType;

/// One resolved package's reported state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    pub version: String,
    pub dep_type: DependencyType,
    pub vulnerable: bool,
    pub recommendation: String,
}

/// Report mapping dependency coordinates (`group:artifact`) to their state.
///
/// Keys are unique; ordering carries no meaning.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DependencyReport {
    dependencies: HashMap<String, Dependency>,
}

impl DependencyReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a dependency under its coordinate, replacing any previous entry.
    pub fn insert(&mut self, coordinate: impl Into<String>, dependency: Dependency) {
        self.dependencies.insert(coordinate.into(), dependency);
    }

    pub fn get(&self, coordinate: &str) -> Option<&Dependency> {
        self.dependencies.get(coordinate)
    }

    pub fn len(&self) -> usize {
        self.dependencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty()
    }

    /// Consume the report, yielding the coordinate-to-dependency map.
    pub fn into_entries(self) -> HashMap<String, Dependency> {
        self.dependencies
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_dependency() -> Dependency {
        Dependency {
            version: "1.0.0".to_string(),
            dep_type: DependencyType::Direct,
            vulnerable: false,
            recommendation: "None".to_string(),
        }
    }

    #[test]
    fn insert_replaces_existing_coordinate() {
        let mut report = DependencyReport::new();
        report.insert("com.example:lib", sample_dependency());
        report.insert(
            "com.example:lib",
            Dependency {
                version: "2.0.0".to_string(),
                ..sample_dependency()
            },
        );

        assert_eq!(report.len(), 1);
        assert_eq!(report.get("com.example:lib").unwrap().version, "2.0.0");
    }

    #[test]
    fn unknown_coordinate_is_absent() {
        let report = DependencyReport::new();
        assert!(report.is_empty());
        assert!(report.get("org.example:missing").is_none());
    }
}

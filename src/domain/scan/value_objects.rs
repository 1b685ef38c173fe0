//! Scan value objects

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Classification of how a dependency entered the dependency graph
///
/// Serialized as the variant name (`"Direct"` / `"Transitive"`), which is the
/// wire spelling consumers of the report expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum DependencyType {
    /// Declared explicitly in the project's build file
    Direct,
    /// Pulled in indirectly through another dependency
    Transitive,
}

impl std::fmt::Display for DependencyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Direct => write!(f, "direct"),
            Self::Transitive => write!(f, "transitive"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_capitalized_variant_name() {
        assert_eq!(
            serde_json::to_value(DependencyType::Direct).unwrap(),
            serde_json::json!("Direct")
        );
        assert_eq!(
            serde_json::to_value(DependencyType::Transitive).unwrap(),
            serde_json::json!("Transitive")
        );
    }
}

//! Scan domain model

pub mod entities;
pub mod value_objects;

pub use entities::{Dependency, DependencyReport};
pub use value_objects::DependencyType;

// Reference table storage
pub mod errors;
mod in_memory;
mod loader;

// Fixture tables for both testing and when mock feature is enabled
#[cfg(any(test, feature = "mock"))]
pub mod fixtures;

use crate::models::{AgeTable, Gender, Metric};

// Re-export commonly used types
pub use errors::ReferenceDataError;
pub use in_memory::InMemoryReferenceStore;
pub use loader::{load_bundled, load_from_path, load_from_str, BUNDLED_REFERENCE_DATA};

/// Read-only access to growth reference tables.
///
/// Implementations are loaded once and shared between requests, so lookups
/// never mutate.
pub trait ReferenceTableStore: Send + Sync + std::fmt::Debug {
    /// Age table for a (metric, gender) pair, if the store carries one
    fn table(&self, metric: Metric, gender: Gender) -> Option<&AgeTable>;

    /// Every (metric, gender) pair with a table
    fn available_tables(&self) -> Vec<(Metric, Gender)>;
}

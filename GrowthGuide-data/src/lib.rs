// GrowthGuide Data
// This crate holds the growth reference tables and their loaders

// Reference table models
pub mod models;

// Reference table storage and loading
pub mod reference;

// Re-export the most used types at the crate root
pub use models::{AgeKey, AgeTable, Gender, Metric, PercentileLabel, ReferenceRow};
pub use reference::{InMemoryReferenceStore, ReferenceDataError, ReferenceTableStore};

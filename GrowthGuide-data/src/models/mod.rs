// Data storage models
pub mod reference;

// Re-export common types for easier imports
pub use reference::{AgeKey, AgeTable, Gender, Metric, PercentileLabel, ReferenceRow};

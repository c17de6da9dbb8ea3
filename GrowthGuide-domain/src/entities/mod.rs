// Domain entities and value objects
pub mod growth;

// Re-export common types for easier imports
pub use growth::{
    AdultBmiCategory, AdultBmiResult, AgeDatePrecision, AgeSummary, BmiPercentileRequest,
    BmiPercentileResult, Gender, MeasurementRequest, Metric, PercentileLabel, PercentileResult,
};

pub mod age;
pub mod bmi;
pub mod descriptions;
pub mod growth;
pub mod percentile;

// Domain services
// This module contains business logic implementations.

// Re-export service traits and factory functions
pub use growth::{create_default_growth_service, GrowthService, GrowthServiceError, GrowthServiceTrait};
pub use percentile::{
    find_percentile_for_bmi, find_percentile_for_height, find_percentile_for_weight, resolve_percentile,
    IntervalPolicy,
};

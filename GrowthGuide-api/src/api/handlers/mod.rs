use std::sync::Arc;

use growth_guide_domain::services::GrowthServiceTrait;

pub mod age;
pub mod bmi;
pub mod growth;
pub mod health;

// Tests module
#[cfg(test)]
mod tests;

/// Service type for dependency injection
pub type SharedGrowthService = Arc<dyn GrowthServiceTrait + Send + Sync>;

// Re-export handlers for easier imports
pub use age::get_age;
pub use bmi::{adult_bmi, bmi_percentile};
pub use growth::growth_percentile;
pub use health::health_check;

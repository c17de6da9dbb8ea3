// Public entities for the GrowthGuide API
// This module contains data structures that are shared across the application boundary

// Growth classification requests and responses
pub mod growth;

// Common entities for error handling
pub mod common;

pub use common::ErrorResponse;
pub use growth::{AdultBmiRequest, AdultBmiResponse, AgeQueryParams, AgeResponse};

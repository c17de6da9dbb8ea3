// GrowthGuide Domain
// This crate contains the business logic for the GrowthGuide application

// Services that implement business logic
pub mod services;

// Domain entities
pub mod entities;

// Health checks and system status
pub mod health;

// Re-export the reference module from growth_guide_data for convenience
pub use growth_guide_data::reference;

// Testing utilities - only available with mock feature
#[cfg(feature = "mock")]
pub mod testing;

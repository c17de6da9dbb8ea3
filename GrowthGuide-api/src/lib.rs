// growth_guide_api lib.rs
//
// This is the main library file for the GrowthGuide API.
// It re-exports the APIs from the various modules.

// Public modules
pub mod api;
pub mod config;
pub mod entities;
pub mod openapi;

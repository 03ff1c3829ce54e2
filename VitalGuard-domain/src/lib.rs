// VitalGuard Domain
// This crate contains the business logic for the VitalGuard patient monitor

// Services that implement business logic
pub mod services;

// Re-export the data-layer modules for convenience
pub use vital_guard_data::{models, repository};

// Testing utilities - only available with the mock feature
#[cfg(any(test, feature = "mock"))]
pub mod testing;

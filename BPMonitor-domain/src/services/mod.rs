pub mod insights;
pub mod blood_pressure;
pub mod sample;

// Domain services
// This module contains business logic implementations.

// Re-export service traits and factory functions
pub use blood_pressure::{BloodPressureServiceTrait, create_blood_pressure_service};

// Domain entities and value objects
pub mod blood_pressure;
pub mod conversions;

// Re-export common types for easier imports
pub use blood_pressure::{BloodPressureReading, CreateBloodPressureRequest, BloodPressureInsights, BloodPressureCategory};

// BP Monitor Domain
// This crate contains the classification rules and record store logic

// Services that implement business logic
pub mod services;

// Domain entities
pub mod entities;

// Re-export the types most callers need
pub use entities::blood_pressure::{BloodPressureCategory, BloodPressureInsights, BloodPressureReading};
pub use services::blood_pressure::{
    create_blood_pressure_service, parse_reading_date, BloodPressureService, BloodPressureServiceTrait,
    ValidationError,
};
pub use services::insights::classify;
pub use services::sample::sample_readings;

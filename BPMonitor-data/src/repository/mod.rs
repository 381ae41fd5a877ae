// Repository module structure
pub mod errors;
mod blood_pressure;
mod in_memory;

// Re-export commonly used types
pub use errors::RepositoryError;
pub use blood_pressure::{BloodPressureRepository, BloodPressureRepositoryTrait};
pub use in_memory::InMemoryStorage;

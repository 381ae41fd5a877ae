use tracing::{debug, warn};

use crate::models::blood_pressure::{BloodPressureReading, CreateBloodPressureRequest};
use super::errors::RepositoryError;
use super::in_memory::InMemoryStorage;

/// Repository trait for blood pressure readings
pub trait BloodPressureRepositoryTrait {
    /// Store a new blood pressure reading from a request
    fn create(&mut self, request: CreateBloodPressureRequest) -> Result<BloodPressureReading, RepositoryError>;

    /// Get all blood pressure readings in insertion order
    fn get_all(&self) -> Vec<BloodPressureReading>;

    /// Get all blood pressure readings sorted by date, stable for equal dates
    fn get_sorted(&self, sort_desc: bool) -> Vec<BloodPressureReading>;

    /// Number of stored readings
    fn count(&self) -> usize;
}

/// Repository for blood pressure readings backed by process memory.
#[derive(Debug, Clone, Default)]
pub struct BloodPressureRepository {
    storage: InMemoryStorage,
}

impl BloodPressureRepository {
    /// Create a new, empty repository
    pub fn new() -> Self {
        Self {
            storage: InMemoryStorage::new(),
        }
    }
}

impl BloodPressureRepositoryTrait for BloodPressureRepository {
    fn create(&mut self, request: CreateBloodPressureRequest) -> Result<BloodPressureReading, RepositoryError> {
        let reading = BloodPressureReading::from(request);

        match self.storage.store_reading(reading) {
            Ok(stored) => {
                debug!(
                    systolic = stored.systolic,
                    diastolic = stored.diastolic,
                    date = %stored.date,
                    total = self.storage.len(),
                    "Stored blood pressure reading"
                );
                Ok(stored)
            }
            Err(e) => {
                warn!("Refusing to store reading: {}", e);
                Err(e)
            }
        }
    }

    fn get_all(&self) -> Vec<BloodPressureReading> {
        self.storage.get_all()
    }

    fn get_sorted(&self, sort_desc: bool) -> Vec<BloodPressureReading> {
        debug!(sort_desc, count = self.storage.len(), "Getting sorted blood pressure readings");
        self.storage.get_sorted(sort_desc)
    }

    fn count(&self) -> usize {
        self.storage.len()
    }
}

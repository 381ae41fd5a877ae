use crate::models::blood_pressure::{BloodPressureReading, DIASTOLIC_RANGE, SYSTOLIC_RANGE};
use super::errors::RepositoryError;

/// In-memory storage implementation for blood pressure readings.
/// Readings are kept in insertion order and live for the lifetime of the process.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStorage {
    /// Storage for blood pressure readings
    readings: Vec<BloodPressureReading>,
}

impl InMemoryStorage {
    /// Create a new in-memory storage
    pub fn new() -> Self {
        Self {
            readings: Vec::new(),
        }
    }

    /// Store a reading in memory
    pub fn store_reading(&mut self, reading: BloodPressureReading) -> Result<BloodPressureReading, RepositoryError> {
        if !reading.is_within_range() {
            return Err(RepositoryError::Validation(format!(
                "reading {}/{} is outside {}-{} / {}-{}",
                reading.systolic,
                reading.diastolic,
                SYSTOLIC_RANGE.start(),
                SYSTOLIC_RANGE.end(),
                DIASTOLIC_RANGE.start(),
                DIASTOLIC_RANGE.end(),
            )));
        }

        self.readings.push(reading.clone());
        Ok(reading)
    }

    /// Get all readings from memory in insertion order
    pub fn get_all(&self) -> Vec<BloodPressureReading> {
        self.readings.clone()
    }

    /// Get all readings sorted by date.
    /// The sort is stable, so readings sharing a date keep their insertion order.
    pub fn get_sorted(&self, sort_desc: bool) -> Vec<BloodPressureReading> {
        let mut readings = self.readings.clone();
        readings.sort_by(|a, b| {
            let cmp = a.date.cmp(&b.date);
            if sort_desc {
                cmp.reverse()
            } else {
                cmp
            }
        });
        readings
    }

    /// Number of stored readings
    pub fn len(&self) -> usize {
        self.readings.len()
    }

    /// Whether the storage holds no readings
    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn reading(systolic: u16, diastolic: u16, day: u32) -> BloodPressureReading {
        BloodPressureReading {
            systolic,
            diastolic,
            date: NaiveDate::from_ymd_opt(2025, 10, day).unwrap(),
        }
    }

    #[test]
    fn test_store_keeps_insertion_order() {
        let mut storage = InMemoryStorage::new();
        storage.store_reading(reading(120, 80, 22)).unwrap();
        storage.store_reading(reading(118, 75, 20)).unwrap();

        let all = storage.get_all();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].date.to_string(), "2025-10-22");
        assert_eq!(all[1].date.to_string(), "2025-10-20");
    }

    #[test]
    fn test_store_rejects_out_of_range() {
        let mut storage = InMemoryStorage::new();
        let result = storage.store_reading(reading(300, 80, 20));

        assert!(matches!(result, Err(RepositoryError::Validation(_))));
        assert!(storage.is_empty());
    }

    #[test]
    fn test_sorted_desc_is_stable_for_equal_dates() {
        let mut storage = InMemoryStorage::new();
        storage.store_reading(reading(110, 70, 20)).unwrap();
        storage.store_reading(reading(130, 85, 21)).unwrap();
        storage.store_reading(reading(140, 90, 20)).unwrap();

        let sorted = storage.get_sorted(true);
        let values: Vec<(u16, u16)> = sorted.iter().map(|r| (r.systolic, r.diastolic)).collect();
        assert_eq!(values, vec![(130, 85), (110, 70), (140, 90)]);
    }

    #[test]
    fn test_sorted_asc() {
        let mut storage = InMemoryStorage::new();
        storage.store_reading(reading(130, 85, 23)).unwrap();
        storage.store_reading(reading(110, 70, 21)).unwrap();

        let sorted = storage.get_sorted(false);
        assert_eq!(sorted[0].date.to_string(), "2025-10-21");
        assert_eq!(sorted[1].date.to_string(), "2025-10-23");
    }
}

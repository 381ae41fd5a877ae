use std::ops::RangeInclusive;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Accepted systolic values in mmHg, inclusive on both ends
pub const SYSTOLIC_RANGE: RangeInclusive<u16> = 50..=250;

/// Accepted diastolic values in mmHg, inclusive on both ends
pub const DIASTOLIC_RANGE: RangeInclusive<u16> = 30..=150;

/// Storage model for a blood pressure reading
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BloodPressureReading {
    /// Systolic blood pressure (the higher number)
    pub systolic: u16,

    /// Diastolic blood pressure (the lower number)
    pub diastolic: u16,

    /// Calendar day the reading was taken
    pub date: NaiveDate,
}

impl BloodPressureReading {
    /// Whether both values fall inside the accepted physiological ranges
    pub fn is_within_range(&self) -> bool {
        SYSTOLIC_RANGE.contains(&self.systolic) && DIASTOLIC_RANGE.contains(&self.diastolic)
    }
}

/// Input data for storing a new blood pressure reading
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateBloodPressureRequest {
    /// Systolic blood pressure (the higher number)
    pub systolic: u16,

    /// Diastolic blood pressure (the lower number)
    pub diastolic: u16,

    /// Calendar day the reading was taken
    pub date: NaiveDate,
}

impl From<CreateBloodPressureRequest> for BloodPressureReading {
    fn from(request: CreateBloodPressureRequest) -> Self {
        Self {
            systolic: request.systolic,
            diastolic: request.diastolic,
            date: request.date,
        }
    }
}

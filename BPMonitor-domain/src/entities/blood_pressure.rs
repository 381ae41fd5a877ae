use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Domain model for a blood pressure reading
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
    pub fn new(systolic: u16, diastolic: u16, date: NaiveDate) -> Self {
        Self { systolic, diastolic, date }
    }
}

/// Parsed input for a new blood pressure reading, checked before it reaches the store
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateBloodPressureRequest {
    /// Systolic blood pressure (the higher number)
    #[validate(range(min = 50, max = 250, message = "Systolic must be between 50 and 250"))]
    pub systolic: i32,

    /// Diastolic blood pressure (the lower number)
    #[validate(range(min = 30, max = 150, message = "Diastolic must be between 30 and 150"))]
    pub diastolic: i32,

    /// Calendar day the reading was taken
    pub date: NaiveDate,
}

/// Blood pressure category assigned by the classifier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum BloodPressureCategory {
    /// Systolic ≥ 180 or diastolic ≥ 120
    HypertensiveCrisis,

    /// Systolic 140-179 or diastolic 90-119
    Hypertension2,

    /// Systolic 130-139 or diastolic 80-89
    Hypertension1,

    /// Systolic 120-129 and diastolic < 80
    Elevated,

    /// Systolic < 120 and diastolic < 80
    Normal,

    /// Values that match none of the other rules and need a clinician's review
    PreCategorization,
}

impl BloodPressureCategory {
    /// Human readable label shown on the console
    pub fn label(&self) -> &'static str {
        match self {
            BloodPressureCategory::HypertensiveCrisis => "Hypertensive Crisis (EMERGENCY)",
            BloodPressureCategory::Hypertension2 => "Stage 2 Hypertension",
            BloodPressureCategory::Hypertension1 => "Stage 1 Hypertension",
            BloodPressureCategory::Elevated => "Elevated",
            BloodPressureCategory::Normal => "Normal",
            BloodPressureCategory::PreCategorization => "Pre-Categorization (Consult a doctor)",
        }
    }

    /// Whether the category calls for immediate medical attention
    pub fn is_emergency(&self) -> bool {
        matches!(self, BloodPressureCategory::HypertensiveCrisis)
    }
}

impl fmt::Display for BloodPressureCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Summary statistics over every stored reading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BloodPressureInsights {
    /// Number of readings analyzed
    pub reading_count: usize,

    /// Arithmetic mean of the systolic values
    pub avg_systolic: f64,

    /// Arithmetic mean of the diastolic values
    pub avg_diastolic: f64,

    /// Highest recorded systolic reading
    pub max_systolic: u16,

    /// Lowest recorded systolic reading
    pub min_systolic: u16,

    /// Highest recorded diastolic reading
    pub max_diastolic: u16,

    /// Lowest recorded diastolic reading
    pub min_diastolic: u16,

    /// Category of the two averages, not an aggregate of per-reading categories
    pub category: BloodPressureCategory,
}

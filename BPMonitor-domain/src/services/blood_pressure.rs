use chrono::{Local, NaiveDate};
use thiserror::Error;
use tracing::{debug, info, warn};
use validator::Validate;

use bp_monitor_data::repository::{BloodPressureRepository, BloodPressureRepositoryTrait, RepositoryError};

use crate::entities::blood_pressure::{
    BloodPressureCategory, BloodPressureInsights, BloodPressureReading, CreateBloodPressureRequest,
};
use crate::entities::conversions;
use crate::services::insights::classify;

/// Date format accepted from the console
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Rejected input. Returned before anything is written, so the store is never
/// left holding a reading that failed these checks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Raw input is not a whole number
    #[error("Invalid {field} value '{value}': please enter a whole number")]
    NotANumber { field: &'static str, value: String },

    /// Value parsed but lies outside the accepted physiological range
    #[error("Readings seem unrealistic: {0}")]
    OutOfRange(String),

    /// Date is not a valid YYYY-MM-DD calendar date
    #[error("Invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),
}

/// Trait for blood pressure record store operations
pub trait BloodPressureServiceTrait {
    /// Validate a parsed create request against the accepted ranges
    fn validate_create_request(&self, request: &CreateBloodPressureRequest) -> Result<(), ValidationError>;

    /// Parse, validate and store a reading, returning its category.
    /// `date` falls back to today's local date.
    fn add(
        &mut self,
        systolic_raw: &str,
        diastolic_raw: &str,
        date: Option<NaiveDate>,
    ) -> Result<BloodPressureCategory, ValidationError>;

    /// All readings, most recent date first; equal dates keep insertion order
    fn list_sorted(&self) -> Vec<BloodPressureReading>;

    /// Summary statistics, or `None` when nothing has been recorded
    fn stats(&self) -> Option<BloodPressureInsights>;

    /// Category of a single stored reading
    fn get_severity(&self, reading: &BloodPressureReading) -> BloodPressureCategory;

    /// Number of stored readings
    fn reading_count(&self) -> usize;
}

/// Blood pressure record store backed by a repository
pub struct BloodPressureService<R: BloodPressureRepositoryTrait> {
    repository: R,
}

impl<R: BloodPressureRepositoryTrait> BloodPressureService<R> {
    /// Create a new blood pressure service
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Create a service whose store starts with `readings`, in the given order.
    /// Each seed goes through the same range check as `add`.
    pub fn with_readings(repository: R, readings: Vec<BloodPressureReading>) -> Result<Self, ValidationError> {
        let mut service = Self::new(repository);
        for reading in &readings {
            let request = conversions::convert_reading_to_data_create_request(reading);
            service
                .repository
                .create(request)
                .map_err(map_repo_error)?;
        }
        debug!(count = readings.len(), "Seeded blood pressure store");
        Ok(service)
    }
}

/// Map repository errors to validation errors
fn map_repo_error(err: RepositoryError) -> ValidationError {
    match err {
        RepositoryError::Validation(msg) => ValidationError::OutOfRange(msg),
    }
}

/// Parse one raw numeric field the way a user would type it
fn parse_whole_number(field: &'static str, raw: &str) -> Result<i32, ValidationError> {
    raw.trim().parse::<i32>().map_err(|_| ValidationError::NotANumber {
        field,
        value: raw.trim().to_string(),
    })
}

/// Parse a `YYYY-MM-DD` date typed at the console
pub fn parse_reading_date(raw: &str) -> Result<NaiveDate, ValidationError> {
    let trimmed = raw.trim();
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map_err(|_| ValidationError::InvalidDate(trimmed.to_string()))
}

impl<R: BloodPressureRepositoryTrait> BloodPressureServiceTrait for BloodPressureService<R> {
    fn validate_create_request(&self, request: &CreateBloodPressureRequest) -> Result<(), ValidationError> {
        if let Err(validation_errors) = request.validate() {
            let mut field_errors: Vec<_> = validation_errors.field_errors().into_iter().collect();
            field_errors.sort_by_key(|(field, _)| *field);

            let error_message = field_errors
                .into_iter()
                .map(|(field, errors)| {
                    errors
                        .iter()
                        .map(|err| match &err.message {
                            Some(msg) => msg.to_string(),
                            None => format!("Invalid {}", field),
                        })
                        .collect::<Vec<String>>()
                        .join(", ")
                })
                .collect::<Vec<String>>()
                .join("; ");

            return Err(ValidationError::OutOfRange(error_message));
        }

        Ok(())
    }

    fn add(
        &mut self,
        systolic_raw: &str,
        diastolic_raw: &str,
        date: Option<NaiveDate>,
    ) -> Result<BloodPressureCategory, ValidationError> {
        let request = CreateBloodPressureRequest {
            systolic: parse_whole_number("systolic", systolic_raw)?,
            diastolic: parse_whole_number("diastolic", diastolic_raw)?,
            date: date.unwrap_or_else(|| Local::now().date_naive()),
        };

        if let Err(e) = self.validate_create_request(&request) {
            warn!(systolic = request.systolic, diastolic = request.diastolic, "Rejected reading: {}", e);
            return Err(e);
        }

        let data_request = conversions::convert_to_data_create_request(&request)
            .map_err(ValidationError::OutOfRange)?;

        let stored = self
            .repository
            .create(data_request)
            .map_err(map_repo_error)?;

        let reading = conversions::convert_to_domain_reading(stored);
        let category = self.get_severity(&reading);

        info!(
            systolic = reading.systolic,
            diastolic = reading.diastolic,
            date = %reading.date,
            %category,
            "Recorded blood pressure reading"
        );

        Ok(category)
    }

    fn list_sorted(&self) -> Vec<BloodPressureReading> {
        self.repository
            .get_sorted(true)
            .into_iter()
            .map(conversions::convert_to_domain_reading)
            .collect()
    }

    fn stats(&self) -> Option<BloodPressureInsights> {
        let readings = self.repository.get_all();
        if readings.is_empty() {
            debug!("No readings available to generate insights");
            return None;
        }

        let count = readings.len();
        let systolic_sum: f64 = readings.iter().map(|r| f64::from(r.systolic)).sum();
        let diastolic_sum: f64 = readings.iter().map(|r| f64::from(r.diastolic)).sum();

        let avg_systolic = systolic_sum / count as f64;
        let avg_diastolic = diastolic_sum / count as f64;

        let mut max_systolic = u16::MIN;
        let mut max_diastolic = u16::MIN;
        let mut min_systolic = u16::MAX;
        let mut min_diastolic = u16::MAX;

        for reading in &readings {
            max_systolic = max_systolic.max(reading.systolic);
            max_diastolic = max_diastolic.max(reading.diastolic);
            min_systolic = min_systolic.min(reading.systolic);
            min_diastolic = min_diastolic.min(reading.diastolic);
        }

        // Overall status comes from the averages themselves
        let category = classify(avg_systolic, avg_diastolic);

        Some(BloodPressureInsights {
            reading_count: count,
            avg_systolic,
            avg_diastolic,
            max_systolic,
            min_systolic,
            max_diastolic,
            min_diastolic,
            category,
        })
    }

    fn get_severity(&self, reading: &BloodPressureReading) -> BloodPressureCategory {
        classify(f64::from(reading.systolic), f64::from(reading.diastolic))
    }

    fn reading_count(&self) -> usize {
        self.repository.count()
    }
}

/// Create a blood pressure service over a fresh in-memory repository seeded with `initial`
pub fn create_blood_pressure_service(
    initial: Vec<BloodPressureReading>,
) -> Result<BloodPressureService<BloodPressureRepository>, ValidationError> {
    BloodPressureService::with_readings(BloodPressureRepository::new(), initial)
}

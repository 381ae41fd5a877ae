use bp_monitor_data::models::blood_pressure as data;

use crate::entities::blood_pressure::{BloodPressureReading, CreateBloodPressureRequest};

// Conversion functions between domain entities and data models
// These functions follow the pattern convert_to_[target_layer]_[model_name]

/// Convert from data model to domain entity for blood pressure reading
pub fn convert_to_domain_reading(data_reading: data::BloodPressureReading) -> BloodPressureReading {
    BloodPressureReading {
        systolic: data_reading.systolic,
        diastolic: data_reading.diastolic,
        date: data_reading.date,
    }
}

/// Convert a validated domain request to the storage payload.
///
/// Fails with the offending value when a field does not fit the storage integer width,
/// which only happens if the request skipped validation.
pub fn convert_to_data_create_request(
    domain_request: &CreateBloodPressureRequest,
) -> Result<data::CreateBloodPressureRequest, String> {
    let systolic = u16::try_from(domain_request.systolic)
        .map_err(|_| format!("systolic value {} is out of range", domain_request.systolic))?;
    let diastolic = u16::try_from(domain_request.diastolic)
        .map_err(|_| format!("diastolic value {} is out of range", domain_request.diastolic))?;

    Ok(data::CreateBloodPressureRequest {
        systolic,
        diastolic,
        date: domain_request.date,
    })
}

/// Convert a domain reading to the storage payload, used when seeding the store
pub fn convert_reading_to_data_create_request(
    reading: &BloodPressureReading,
) -> data::CreateBloodPressureRequest {
    data::CreateBloodPressureRequest {
        systolic: reading.systolic,
        diastolic: reading.diastolic,
        date: reading.date,
    }
}

use chrono::NaiveDate;

use crate::entities::blood_pressure::BloodPressureReading;

/// Demonstration readings the console starts with unless told otherwise
pub fn sample_readings() -> Vec<BloodPressureReading> {
    [
        (125, 82, (2025, 10, 20)),
        (118, 75, (2025, 10, 21)),
        (135, 90, (2025, 10, 22)),
        (105, 65, (2025, 10, 23)),
    ]
    .into_iter()
    .filter_map(|(systolic, diastolic, (y, m, d))| {
        NaiveDate::from_ymd_opt(y, m, d).map(|date| BloodPressureReading::new(systolic, diastolic, date))
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::blood_pressure::{create_blood_pressure_service, BloodPressureServiceTrait};

    #[test]
    fn test_sample_readings_seed_cleanly() {
        let readings = sample_readings();
        assert_eq!(readings.len(), 4);

        let service = create_blood_pressure_service(readings).unwrap();
        assert_eq!(service.reading_count(), 4);

        let latest = &service.list_sorted()[0];
        assert_eq!(latest.date.to_string(), "2025-10-23");
        assert_eq!((latest.systolic, latest.diastolic), (105, 65));
    }
}

use crate::entities::blood_pressure::BloodPressureCategory;

/// Classify a pair of blood pressure values.
///
/// Rules are checked top to bottom and the first match wins. The ranges overlap, so the
/// order is part of the contract: a diastolic of 80-89 yields Stage 1 even when the
/// systolic alone would only be Elevated or Normal.
///
/// Values do not need to be validated first; averages may be fractional. Anything that
/// matches no rule (in practice only NaN) lands in [`BloodPressureCategory::PreCategorization`].
pub fn classify(systolic: f64, diastolic: f64) -> BloodPressureCategory {
    if systolic >= 180.0 || diastolic >= 120.0 {
        BloodPressureCategory::HypertensiveCrisis
    } else if (140.0..180.0).contains(&systolic) || (90.0..120.0).contains(&diastolic) {
        BloodPressureCategory::Hypertension2
    } else if (130.0..140.0).contains(&systolic) || (80.0..90.0).contains(&diastolic) {
        BloodPressureCategory::Hypertension1
    } else if (120.0..130.0).contains(&systolic) && diastolic < 80.0 {
        BloodPressureCategory::Elevated
    } else if systolic < 120.0 && diastolic < 80.0 {
        BloodPressureCategory::Normal
    } else {
        BloodPressureCategory::PreCategorization
    }
}

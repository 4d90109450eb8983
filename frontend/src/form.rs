//! Form defaults and widget bounds.

use premium_api::models::{ApplicantRecord, Occupation, MAX_AGE, MIN_AGE};

pub const DEFAULT_AGE: u32 = 30;
pub const DEFAULT_WEIGHT: f64 = 65.0;
pub const DEFAULT_HEIGHT: f64 = 1.7;
pub const DEFAULT_INCOME_LPA: f64 = 10.0;
pub const DEFAULT_CITY: &str = "Mumbai";

pub const MIN_WEIGHT: f64 = 1.0;
pub const MIN_HEIGHT: f64 = 0.5;
pub const MAX_HEIGHT: f64 = 2.5;
pub const MIN_INCOME_LPA: f64 = 0.1;

pub fn default_record() -> ApplicantRecord {
    ApplicantRecord {
        age: DEFAULT_AGE,
        weight: DEFAULT_WEIGHT,
        height: DEFAULT_HEIGHT,
        income_lpa: DEFAULT_INCOME_LPA,
        smoker: true,
        city: DEFAULT_CITY.to_string(),
        occupation: Occupation::ALL[0],
    }
}

/// Browsers can skip `min`/`max`, so the widget bounds are checked again here.
pub fn check_bounds(record: &ApplicantRecord) -> Result<(), String> {
    if !(MIN_AGE..=MAX_AGE).contains(&record.age) {
        return Err(format!("Age must be between {} and {}", MIN_AGE, MAX_AGE));
    }
    if !(record.weight >= MIN_WEIGHT && record.weight.is_finite()) {
        return Err(format!("Weight (kg) must be at least {:.1}", MIN_WEIGHT));
    }
    if !(MIN_HEIGHT..=MAX_HEIGHT).contains(&record.height) {
        return Err(format!(
            "Height (m) must be between {:.1} and {:.1}",
            MIN_HEIGHT, MAX_HEIGHT
        ));
    }
    if !(record.income_lpa >= MIN_INCOME_LPA && record.income_lpa.is_finite()) {
        return Err(format!(
            "Annual Income (LPA) must be at least {:.1}",
            MIN_INCOME_LPA
        ));
    }
    Ok(())
}

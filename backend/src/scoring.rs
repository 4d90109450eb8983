//! Fixed premium scoring rule.
//!
//! Only age, smoking status and income contribute to the score. Weight,
//! height, city and occupation are collected but never scored.

use crate::models::{ApplicantRecord, PremiumCategory};
use serde::Serialize;

pub const RULE_VERSION: &str = "1.0.0";

/// Factors the rule considers, in display order.
pub const FACTORS: [&str; 3] = ["Age", "Smoking status", "Income level"];

const HIGH_THRESHOLD: u8 = 5;
const MEDIUM_THRESHOLD: u8 = 3;

pub fn age_points(age: u32) -> u8 {
    match age {
        a if a < 25 => 1,
        a if a > 60 => 3,
        _ => 2,
    }
}

pub fn smoker_points(smoker: bool) -> u8 {
    if smoker {
        3
    } else {
        0
    }
}

pub fn income_points(income_lpa: f64) -> u8 {
    if income_lpa > 20.0 {
        2
    } else if income_lpa > 10.0 {
        1
    } else {
        0
    }
}

pub fn score(record: &ApplicantRecord) -> u8 {
    age_points(record.age) + smoker_points(record.smoker) + income_points(record.income_lpa)
}

pub fn classify(score: u8) -> PremiumCategory {
    match score {
        s if s >= HIGH_THRESHOLD => PremiumCategory::High,
        s if s >= MEDIUM_THRESHOLD => PremiumCategory::Medium,
        _ => PremiumCategory::Low,
    }
}

pub fn predict(record: &ApplicantRecord) -> PremiumCategory {
    classify(score(record))
}

pub fn rule_info() -> RuleInfo {
    RuleInfo {
        version: RULE_VERSION.to_string(),
        factors: FACTORS.iter().map(|f| f.to_string()).collect(),
        categories: [
            PremiumCategory::Low,
            PremiumCategory::Medium,
            PremiumCategory::High,
        ]
        .iter()
        .map(|c| c.to_string())
        .collect(),
    }
}

#[derive(Debug, Serialize)]
pub struct RuleInfo {
    pub version: String,
    pub factors: Vec<String>,
    pub categories: Vec<String>,
}

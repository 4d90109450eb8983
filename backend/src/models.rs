use serde::{Deserialize, Serialize};
use std::fmt;

pub const MIN_AGE: u32 = 1;
pub const MAX_AGE: u32 = 119;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Occupation {
    Retired,
    Freelancer,
    Student,
    GovernmentJob,
    BusinessOwner,
    Unemployed,
    PrivateJob,
}

impl Occupation {
    pub const ALL: [Occupation; 7] = [
        Occupation::Retired,
        Occupation::Freelancer,
        Occupation::Student,
        Occupation::GovernmentJob,
        Occupation::BusinessOwner,
        Occupation::Unemployed,
        Occupation::PrivateJob,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Occupation::Retired => "retired",
            Occupation::Freelancer => "freelancer",
            Occupation::Student => "student",
            Occupation::GovernmentJob => "government_job",
            Occupation::BusinessOwner => "business_owner",
            Occupation::Unemployed => "unemployed",
            Occupation::PrivateJob => "private_job",
        }
    }
}

impl fmt::Display for Occupation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One applicant, as submitted for classification. Every field is required.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ApplicantRecord {
    pub age: u32,
    pub weight: f64,
    pub height: f64,
    pub income_lpa: f64,
    pub smoker: bool,
    pub city: String,
    pub occupation: Occupation,
}

impl ApplicantRecord {
    pub fn validate(&self) -> Result<(), String> {
        if !(MIN_AGE..=MAX_AGE).contains(&self.age) {
            return Err(format!(
                "age must be between {} and {} (got {})",
                MIN_AGE, MAX_AGE, self.age
            ));
        }

        let measures = [
            ("weight", self.weight),
            ("height", self.height),
            ("income_lpa", self.income_lpa),
        ];

        for (name, value) in measures.iter() {
            if !value.is_finite() || *value <= 0.0 {
                return Err(format!("{} must be a positive number (got {})", name, value));
            }
        }

        Ok(())
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PremiumCategory {
    Low,
    Medium,
    High,
}

impl PremiumCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            PremiumCategory::Low => "Low",
            PremiumCategory::Medium => "Medium",
            PremiumCategory::High => "High",
        }
    }
}

impl fmt::Display for PremiumCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PredictionResponse {
    pub predicted_category: PremiumCategory,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct StatusMessage {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
    pub timestamp: String,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        ApiResponse {
            success: true,
            data: Some(data),
            error: None,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn error(message: &str) -> Self {
        ApiResponse {
            success: false,
            data: None,
            error: Some(message.to_string()),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

// models/src/medical/patient.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PatientStatus {
    Active,
    Discharged,
    Critical,
}

impl fmt::Display for PatientStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatientStatus::Active => write!(f, "Active"),
            PatientStatus::Discharged => write!(f, "Discharged"),
            PatientStatus::Critical => write!(f, "Critical"),
        }
    }
}

impl FromStr for PatientStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Active" => Ok(PatientStatus::Active),
            "Discharged" => Ok(PatientStatus::Discharged),
            "Critical" => Ok(PatientStatus::Critical),
            other => Err(ValidationError::UnknownStatus(other.to_string())),
        }
    }
}

/// Patient record held in the in-memory collection. Mutated only through
/// whole-collection replacement; never persisted externally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    pub id: String,
    pub name: String,
    pub age: u8,
    pub contact: String,
    pub last_visit: NaiveDate,
    pub status: PatientStatus,
    pub gender: String,
    pub blood_group: String,
}

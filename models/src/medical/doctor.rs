// models/src/medical/doctor.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DoctorStatus {
    Available,
    OnLeave,
    InSurgery,
}

impl fmt::Display for DoctorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DoctorStatus::Available => write!(f, "Available"),
            DoctorStatus::OnLeave => write!(f, "On Leave"),
            DoctorStatus::InSurgery => write!(f, "In Surgery"),
        }
    }
}

impl FromStr for DoctorStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Available" => Ok(DoctorStatus::Available),
            "On Leave" => Ok(DoctorStatus::OnLeave),
            "In Surgery" => Ok(DoctorStatus::InSurgery),
            other => Err(ValidationError::UnknownStatus(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: String,
    pub name: String,
    pub department: String,
    /// Free-text availability window, e.g. "Mon-Fri 9AM-5PM".
    pub availability: String,
    pub status: DoctorStatus,
    pub slot_duration_minutes: u32,
}

// models/src/medical/emergency.rs
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::service_request::Urgency;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CaseStatus {
    Waiting,
    InTreatment,
    Resolved,
}

impl fmt::Display for CaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaseStatus::Waiting => write!(f, "Waiting"),
            CaseStatus::InTreatment => write!(f, "In Treatment"),
            CaseStatus::Resolved => write!(f, "Resolved"),
        }
    }
}

/// An emergency intake case on the crisis board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmergencyCase {
    pub id: String,
    pub patient_name: String,
    pub severity: Urgency,
    pub arrival_time: NaiveTime,
    pub assigned_resource: String,
    pub status: CaseStatus,
}

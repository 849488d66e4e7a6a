// models/src/medical/appointment.rs
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::ValidationError;

/// Status vocabulary of the in-memory appointment collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppointmentStatus {
    Scheduled,
    Completed,
    Cancelled,
    NoShow,
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentStatus::Scheduled => write!(f, "Scheduled"),
            AppointmentStatus::Completed => write!(f, "Completed"),
            AppointmentStatus::Cancelled => write!(f, "Cancelled"),
            AppointmentStatus::NoShow => write!(f, "No-Show"),
        }
    }
}

impl FromStr for AppointmentStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Scheduled" => Ok(AppointmentStatus::Scheduled),
            "Completed" => Ok(AppointmentStatus::Completed),
            "Cancelled" => Ok(AppointmentStatus::Cancelled),
            "No-Show" => Ok(AppointmentStatus::NoShow),
            other => Err(ValidationError::UnknownStatus(other.to_string())),
        }
    }
}

/// In-memory appointment as shown in the dashboard collections. Seeded
/// empty; the durably persisted rows live in `AppointmentRow` and the two
/// are deliberately never reconciled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    pub patient_name: String,
    pub date: NaiveDate,
    pub doctor: String,
    pub department: String,
    pub status: AppointmentStatus,
}

/// A durable appointment row as stored by the hosted backend. The status
/// vocabulary here is the backend's (`confirmed`, `cancelled`,
/// `completed`, `no-show`), not the local enum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppointmentRow {
    pub id: i64,
    pub phone_number: String,
    pub patient_name: Option<String>,
    pub appointment_date: NaiveDate,
    pub appointment_time: NaiveTime,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for the durable collection.
#[derive(Debug, Clone, Serialize)]
pub struct NewAppointment {
    pub phone_number: String,
    pub patient_name: Option<String>,
    pub appointment_date: NaiveDate,
    pub appointment_time: NaiveTime,
    pub status: String,
}

/// Partial update payload; only set fields are written.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AppointmentChange {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appointment_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appointment_time: Option<NaiveTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl AppointmentChange {
    pub fn is_empty(&self) -> bool {
        self.phone_number.is_none()
            && self.patient_name.is_none()
            && self.appointment_date.is_none()
            && self.appointment_time.is_none()
            && self.status.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_display() {
        for status in [
            AppointmentStatus::Scheduled,
            AppointmentStatus::Completed,
            AppointmentStatus::Cancelled,
            AppointmentStatus::NoShow,
        ] {
            assert_eq!(status.to_string().parse::<AppointmentStatus>(), Ok(status));
        }
    }

    #[test]
    fn unknown_status_is_rejected() {
        let err = "Rescheduled".parse::<AppointmentStatus>().unwrap_err();
        assert_eq!(err, ValidationError::UnknownStatus("Rescheduled".into()));
    }

    #[test]
    fn empty_change_serializes_to_empty_object() {
        let change = AppointmentChange::default();
        assert!(change.is_empty());
        assert_eq!(serde_json::to_string(&change).unwrap(), "{}");
    }
}

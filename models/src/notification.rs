// models/src/notification.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Appointment,
    Resource,
    Crisis,
    Service,
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotificationKind::Appointment => write!(f, "appointment"),
            NotificationKind::Resource => write!(f, "resource"),
            NotificationKind::Crisis => write!(f, "crisis"),
            NotificationKind::Service => write!(f, "service"),
        }
    }
}

/// An in-tab notification. `read` only ever flips false -> true; the
/// store never reverts or deletes entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
    pub timestamp: DateTime<Utc>,
    pub read: bool,
}

impl Notification {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        message: impl Into<String>,
        kind: NotificationKind,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Notification {
            id: id.into(),
            title: title.into(),
            message: message.into(),
            kind,
            timestamp,
            read: false,
        }
    }
}

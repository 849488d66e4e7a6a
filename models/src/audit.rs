// models/src/audit.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuditStatus {
    Success,
    Failed,
}

impl fmt::Display for AuditStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuditStatus::Success => write!(f, "Success"),
            AuditStatus::Failed => write!(f, "Failed"),
        }
    }
}

/// One append-only audit trail entry. The collection is unbounded and
/// ordered newest-first by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    /// Time-based id (millisecond timestamp rendered as a string).
    pub id: String,
    pub action: String,
    pub module: String,
    pub timestamp: DateTime<Utc>,
    pub status: AuditStatus,
    pub user: String,
}

impl AuditEntry {
    pub fn new(
        action: impl Into<String>,
        module: impl Into<String>,
        status: AuditStatus,
        at: DateTime<Utc>,
    ) -> Self {
        AuditEntry {
            id: at.timestamp_millis().to_string(),
            action: action.into(),
            module: module.into(),
            timestamp: at,
            status,
            user: "Admin".to_string(),
        }
    }
}

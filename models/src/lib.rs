// models/src/lib.rs

// Declare all top-level modules within the 'models' crate
pub mod audit;
pub mod errors;
pub mod identity;
pub mod notification;

// Declare the 'medical' sub-module
pub mod medical;

// Re-export common core types for convenience when other crates use 'models::*'
pub use audit::{AuditEntry, AuditStatus};
pub use errors::{HubError, HubResult, ValidationError, ValidationResult};
pub use identity::{Identity, ProfileUpdate, SignupData, SignupOutcome};
pub use notification::{Notification, NotificationKind};

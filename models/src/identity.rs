// models/src/identity.rs
use serde::{Deserialize, Serialize};

/// The current signed-in user, derived each session from the identity
/// provider's user payload. Never persisted locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub hospital: String,
    pub avatar: Option<String>,
    pub phone: Option<String>,
}

impl Identity {
    /// Shallow-merge a partial profile update into this identity.
    /// Fields left as `None` in the update keep their current value.
    pub fn merge(&self, update: &ProfileUpdate) -> Identity {
        Identity {
            id: self.id.clone(),
            name: update.name.clone().unwrap_or_else(|| self.name.clone()),
            email: self.email.clone(),
            role: update.role.clone().unwrap_or_else(|| self.role.clone()),
            hospital: update
                .hospital
                .clone()
                .unwrap_or_else(|| self.hospital.clone()),
            avatar: update.avatar.clone().or_else(|| self.avatar.clone()),
            phone: update.phone.clone().or_else(|| self.phone.clone()),
        }
    }
}

/// Registration fields forwarded to the provider as profile metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupData {
    pub email: String,
    pub password: String,
    pub name: String,
    pub role: Option<String>,
    pub hospital: Option<String>,
    pub phone: Option<String>,
}

/// Outcome of a signup attempt. The provider distinguishes a hard
/// rejection, an account created but awaiting email confirmation, and an
/// account with an immediately usable session.
#[derive(Debug, Clone, PartialEq)]
pub enum SignupOutcome {
    Rejected(String),
    NeedsEmailConfirmation,
    SignedIn,
}

impl SignupOutcome {
    pub fn is_success(&self) -> bool {
        !matches!(self, SignupOutcome::Rejected(_))
    }

    pub fn needs_email_confirmation(&self) -> bool {
        matches!(self, SignupOutcome::NeedsEmailConfirmation)
    }
}

/// Partial identity used by profile edits. Only the permitted metadata
/// fields are present; id and email are provider-owned.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub role: Option<String>,
    pub hospital: Option<String>,
    pub avatar: Option<String>,
    pub phone: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity() -> Identity {
        Identity {
            id: "u-1".into(),
            name: "Priya Patel".into(),
            email: "priya@hospital.example".into(),
            role: "Doctor".into(),
            hospital: "City General Hospital".into(),
            avatar: None,
            phone: Some("+91 98765 00000".into()),
        }
    }

    #[test]
    fn merge_keeps_unset_fields() {
        let updated = identity().merge(&ProfileUpdate {
            hospital: Some("Metro Care Hospital".into()),
            ..Default::default()
        });
        assert_eq!(updated.hospital, "Metro Care Hospital");
        assert_eq!(updated.name, "Priya Patel");
        assert_eq!(updated.phone.as_deref(), Some("+91 98765 00000"));
    }

    #[test]
    fn merge_never_touches_id_or_email() {
        let updated = identity().merge(&ProfileUpdate {
            name: Some("Someone Else".into()),
            ..Default::default()
        });
        assert_eq!(updated.id, "u-1");
        assert_eq!(updated.email, "priya@hospital.example");
    }

    #[test]
    fn signup_outcome_predicates() {
        assert!(SignupOutcome::SignedIn.is_success());
        assert!(SignupOutcome::NeedsEmailConfirmation.is_success());
        assert!(SignupOutcome::NeedsEmailConfirmation.needs_email_confirmation());
        assert!(!SignupOutcome::Rejected("bad password".into()).is_success());
    }
}

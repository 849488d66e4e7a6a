// backend_api/src/auth.rs
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use models::errors::HubResult;
use models::identity::{Identity, SignupData};

/// A user as the identity provider reports it. The dashboard never stores
/// this shape; it is mapped into `Identity` at the session boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderUser {
    pub id: String,
    pub email: Option<String>,
    #[serde(default)]
    pub user_metadata: UserMetadata,
    #[serde(default)]
    pub identities: Vec<ProviderIdentity>,
}

/// Profile metadata attached to the provider-side account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hospital: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// One federated identity attached to the account. A freshly signed-up
/// account that still awaits email confirmation has none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderIdentity {
    pub id: String,
    #[serde(default)]
    pub provider: String,
}

impl ProviderUser {
    /// Derive the local identity value. Absent metadata falls back the
    /// way the dashboard expects: name from the email local-part, role
    /// "User", hospital "Not Assigned".
    pub fn to_identity(&self) -> Identity {
        let email = self.email.clone().unwrap_or_default();
        let name = self
            .user_metadata
            .name
            .clone()
            .filter(|n| !n.is_empty())
            .or_else(|| email.split('@').next().map(|s| s.to_string()))
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| "User".to_string());
        Identity {
            id: self.id.clone(),
            name,
            email,
            role: self
                .user_metadata
                .role
                .clone()
                .filter(|r| !r.is_empty())
                .unwrap_or_else(|| "User".to_string()),
            hospital: self
                .user_metadata
                .hospital
                .clone()
                .filter(|h| !h.is_empty())
                .unwrap_or_else(|| "Not Assigned".to_string()),
            avatar: self.user_metadata.avatar.clone(),
            phone: self.user_metadata.phone.clone(),
        }
    }
}

/// Partial metadata write for profile updates.
pub type MetadataPatch = UserMetadata;

/// Provider response to a signup attempt. `session_created` is true when
/// the account was auto-confirmed and is immediately usable.
#[derive(Debug, Clone)]
pub struct SignupResponse {
    pub user: Option<ProviderUser>,
    pub session_created: bool,
}

/// Session-lifecycle change pushed by the provider.
#[derive(Debug, Clone)]
pub enum AuthChange {
    SignedIn(ProviderUser),
    SignedOut,
}

/// The identity provider's session/token lifecycle, as consumed by the
/// session store. Implemented over HTTP by `BackendClient` and by
/// in-memory fakes in tests.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Check for an existing session. `None` means no one is signed in;
    /// an error means the check itself failed.
    async fn current_session(&self) -> HubResult<Option<ProviderUser>>;

    async fn sign_in(&self, email: &str, password: &str) -> HubResult<ProviderUser>;

    async fn sign_up(&self, data: &SignupData) -> HubResult<SignupResponse>;

    async fn sign_out(&self) -> HubResult<()>;

    async fn update_user(&self, patch: &MetadataPatch) -> HubResult<()>;

    async fn request_password_reset(&self, email: &str, redirect_to: &str) -> HubResult<()>;

    async fn update_password(&self, new_password: &str) -> HubResult<()>;

    /// Push-style session-change feed. Every receiver sees every change
    /// for as long as it is held.
    fn subscribe(&self) -> broadcast::Receiver<AuthChange>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_mapping_uses_metadata_when_present() {
        let user = ProviderUser {
            id: "u-9".into(),
            email: Some("amit@hospital.example".into()),
            user_metadata: UserMetadata {
                name: Some("Amit Singh".into()),
                role: Some("Admin".into()),
                hospital: Some("Metro Care Hospital".into()),
                avatar: None,
                phone: Some("+91 98765 22222".into()),
            },
            identities: vec![],
        };
        let identity = user.to_identity();
        assert_eq!(identity.name, "Amit Singh");
        assert_eq!(identity.role, "Admin");
        assert_eq!(identity.hospital, "Metro Care Hospital");
    }

    #[test]
    fn identity_mapping_defaults() {
        let user = ProviderUser {
            id: "u-1".into(),
            email: Some("neha.gupta@example.org".into()),
            user_metadata: UserMetadata::default(),
            identities: vec![],
        };
        let identity = user.to_identity();
        assert_eq!(identity.name, "neha.gupta");
        assert_eq!(identity.role, "User");
        assert_eq!(identity.hospital, "Not Assigned");
        assert_eq!(identity.avatar, None);
    }

    #[test]
    fn identity_mapping_without_email_falls_back_to_user() {
        let user = ProviderUser {
            id: "u-2".into(),
            email: None,
            user_metadata: UserMetadata::default(),
            identities: vec![],
        };
        assert_eq!(user.to_identity().name, "User");
        assert_eq!(user.to_identity().email, "");
    }
}

// session_service/src/test_support.rs
//! In-memory identity provider and admin directory used by the store and
//! guard tests.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::broadcast;

use backend_api::admins::AdminDirectory;
use backend_api::auth::{
    AuthChange, IdentityProvider, MetadataPatch, ProviderIdentity, ProviderUser, SignupResponse,
    UserMetadata,
};
use models::errors::{HubError, HubResult};
use models::identity::SignupData;

pub fn provider_user(id: &str, email: &str) -> ProviderUser {
    ProviderUser {
        id: id.to_string(),
        email: Some(email.to_string()),
        user_metadata: UserMetadata::default(),
        identities: vec![ProviderIdentity {
            id: format!("{}-identity", id),
            provider: "email".to_string(),
        }],
    }
}

enum SignupMode {
    Rejects,
    NeedsConfirmation,
    OpensSession(String),
}

pub struct FakeProvider {
    session_user: Option<ProviderUser>,
    session_check_fails: bool,
    credentials: Option<(String, String, String)>,
    signup_mode: SignupMode,
    sign_out_fails: bool,
    update_fails: AtomicBool,
    events: broadcast::Sender<AuthChange>,
}

impl Default for FakeProvider {
    fn default() -> Self {
        let (events, _) = broadcast::channel(16);
        FakeProvider {
            session_user: None,
            session_check_fails: false,
            credentials: None,
            signup_mode: SignupMode::Rejects,
            sign_out_fails: false,
            update_fails: AtomicBool::new(false),
            events,
        }
    }
}

impl FakeProvider {
    pub fn with_session(mut self, user: ProviderUser) -> Self {
        self.session_user = Some(user);
        self
    }

    pub fn failing_session_check(mut self) -> Self {
        self.session_check_fails = true;
        self
    }

    /// Accept exactly this email/password pair, signing in as `user_id`.
    pub fn with_credentials(mut self, email: &str, password: &str, user_id: &str) -> Self {
        self.credentials = Some((email.to_string(), password.to_string(), user_id.to_string()));
        self
    }

    pub fn rejecting_signup(mut self) -> Self {
        self.signup_mode = SignupMode::Rejects;
        self
    }

    pub fn signup_needs_confirmation(mut self) -> Self {
        self.signup_mode = SignupMode::NeedsConfirmation;
        self
    }

    pub fn signup_opens_session(mut self, user_id: &str) -> Self {
        self.signup_mode = SignupMode::OpensSession(user_id.to_string());
        self
    }

    pub fn failing_sign_out(mut self) -> Self {
        self.sign_out_fails = true;
        self
    }

    pub fn fail_updates(&self) {
        self.update_fails.store(true, Ordering::SeqCst);
    }

    pub fn push(&self, change: AuthChange) {
        let _ = self.events.send(change);
    }
}

#[async_trait]
impl IdentityProvider for FakeProvider {
    async fn current_session(&self) -> HubResult<Option<ProviderUser>> {
        if self.session_check_fails {
            return Err(HubError::NetworkError("session check unreachable".into()));
        }
        Ok(self.session_user.clone())
    }

    async fn sign_in(&self, email: &str, password: &str) -> HubResult<ProviderUser> {
        match &self.credentials {
            Some((e, p, user_id)) if e == email && p == password => {
                Ok(provider_user(user_id, email))
            }
            _ => Err(HubError::Auth("invalid login credentials".into())),
        }
    }

    async fn sign_up(&self, data: &SignupData) -> HubResult<SignupResponse> {
        match &self.signup_mode {
            SignupMode::Rejects => Err(HubError::Auth("user already registered".into())),
            SignupMode::NeedsConfirmation => {
                let mut user = provider_user("pending", &data.email);
                user.identities.clear();
                Ok(SignupResponse {
                    user: Some(user),
                    session_created: false,
                })
            }
            SignupMode::OpensSession(user_id) => Ok(SignupResponse {
                user: Some(provider_user(user_id, &data.email)),
                session_created: true,
            }),
        }
    }

    async fn sign_out(&self) -> HubResult<()> {
        if self.sign_out_fails {
            return Err(HubError::NetworkError("sign-out unreachable".into()));
        }
        Ok(())
    }

    async fn update_user(&self, _patch: &MetadataPatch) -> HubResult<()> {
        if self.update_fails.load(Ordering::SeqCst) {
            return Err(HubError::BackendRejected("metadata write refused".into()));
        }
        Ok(())
    }

    async fn request_password_reset(&self, _email: &str, _redirect_to: &str) -> HubResult<()> {
        Ok(())
    }

    async fn update_password(&self, _new_password: &str) -> HubResult<()> {
        Ok(())
    }

    fn subscribe(&self) -> broadcast::Receiver<AuthChange> {
        self.events.subscribe()
    }
}

pub struct FakeAdmins {
    verdict: HubResult<bool>,
}

impl FakeAdmins {
    pub fn granting() -> Self {
        FakeAdmins { verdict: Ok(true) }
    }

    pub fn denying() -> Self {
        FakeAdmins { verdict: Ok(false) }
    }

    pub fn erroring() -> Self {
        FakeAdmins {
            verdict: Err(HubError::Authorization("admins table unreachable".into())),
        }
    }
}

#[async_trait]
impl AdminDirectory for FakeAdmins {
    async fn is_admin(&self, _user_id: &str) -> HubResult<bool> {
        self.verdict.clone()
    }
}

// session_service/src/session.rs
use std::sync::Arc;

use log::{error, info, warn};
use tokio::sync::broadcast::error::RecvError;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use backend_api::auth::{AuthChange, IdentityProvider, MetadataPatch, ProviderUser};
use models::identity::{Identity, ProfileUpdate, SignupData, SignupOutcome};

/// Lifecycle of the session store. `Initializing` lasts until the
/// provider's existing-session check resolves; afterwards the store is
/// either side of authenticated, driven by operations and pushed changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Initializing,
    Unauthenticated,
    Authenticated,
}

/// Identity value and phase, shared between the store and the listener
/// task applying pushed session changes.
struct SessionState {
    user: RwLock<Option<Identity>>,
    phase: RwLock<SessionPhase>,
}

impl SessionState {
    async fn apply_signed_in(&self, user: &ProviderUser) {
        *self.user.write().await = Some(user.to_identity());
        *self.phase.write().await = SessionPhase::Authenticated;
    }

    async fn transition_signed_out(&self) {
        *self.user.write().await = None;
        *self.phase.write().await = SessionPhase::Unauthenticated;
    }
}

/// Owns the current identity and mediates the provider's session/token
/// lifecycle. Constructed once per mount and handed by `Arc` to every
/// consumer; never a process global.
///
/// Failure semantics: every provider failure is caught here, logged, and
/// converted into a boolean/enum signal. No error crosses this boundary.
pub struct SessionService {
    provider: Arc<dyn IdentityProvider>,
    state: Arc<SessionState>,
}

/// Handle for the auth-change listener spawned by `init`. Dropping it
/// (or calling `close`) stops the listener; pushed changes are applied
/// only while the handle is alive.
pub struct SessionSubscription {
    listener: JoinHandle<()>,
}

impl SessionSubscription {
    pub fn close(self) {
        self.listener.abort();
    }
}

impl Drop for SessionSubscription {
    fn drop(&mut self) {
        self.listener.abort();
    }
}

impl SessionService {
    pub fn new(provider: Arc<dyn IdentityProvider>) -> Self {
        SessionService {
            provider,
            state: Arc::new(SessionState {
                user: RwLock::new(None),
                phase: RwLock::new(SessionPhase::Initializing),
            }),
        }
    }

    /// Resolve the existing-session check and start applying pushed
    /// session changes. Must be called once after construction; the
    /// returned handle keeps the listener alive.
    pub async fn init(&self) -> SessionSubscription {
        match self.provider.current_session().await {
            Ok(Some(user)) => {
                info!("[Session] existing session for {}", user.id);
                self.state.apply_signed_in(&user).await;
            }
            Ok(None) => {
                self.state.transition_signed_out().await;
            }
            Err(err) => {
                // An unreadable session is treated as no session.
                warn!("[Session] session check failed: {}", err);
                self.state.transition_signed_out().await;
            }
        }

        let mut changes = self.provider.subscribe();
        let state = Arc::clone(&self.state);
        let listener = tokio::spawn(async move {
            loop {
                match changes.recv().await {
                    Ok(AuthChange::SignedIn(user)) => state.apply_signed_in(&user).await,
                    Ok(AuthChange::SignedOut) => state.transition_signed_out().await,
                    Err(RecvError::Lagged(missed)) => {
                        warn!("[Session] auth change feed lagged, missed {}", missed);
                    }
                    Err(RecvError::Closed) => break,
                }
            }
        });
        SessionSubscription { listener }
    }

    /// Credential login. False on any provider error; the current state
    /// is left unchanged in that case.
    pub async fn login(&self, email: &str, password: &str) -> bool {
        match self.provider.sign_in(email, password).await {
            Ok(user) => {
                self.state.apply_signed_in(&user).await;
                true
            }
            Err(err) => {
                error!("[Session] login failed: {}", err);
                false
            }
        }
    }

    /// Register a new account. The identity is stored only when the
    /// provider opens a session immediately; an account awaiting email
    /// confirmation stays signed out.
    pub async fn signup(&self, data: SignupData) -> SignupOutcome {
        let response = match self.provider.sign_up(&data).await {
            Ok(response) => response,
            Err(err) => {
                error!("[Session] signup failed: {}", err);
                return SignupOutcome::Rejected(err.to_string());
            }
        };

        let Some(user) = response.user else {
            return SignupOutcome::Rejected("failed to create account".to_string());
        };

        // Zero attached identities: the account exists but is not
        // activated until the confirmation email is followed.
        if user.identities.is_empty() {
            return SignupOutcome::NeedsEmailConfirmation;
        }
        if response.session_created {
            self.state.apply_signed_in(&user).await;
        }
        SignupOutcome::SignedIn
    }

    /// Best-effort provider sign-out. The local identity is always
    /// cleared, even when the provider call fails.
    pub async fn logout(&self) {
        if let Err(err) = self.provider.sign_out().await {
            warn!("[Session] provider sign-out failed: {}", err);
        }
        self.state.transition_signed_out().await;
    }

    /// Write permitted profile fields to provider metadata and, on
    /// success, shallow-merge them into the local identity. Silent no-op
    /// on provider error.
    pub async fn update_profile(&self, update: ProfileUpdate) {
        let patch = MetadataPatch {
            name: update.name.clone(),
            role: update.role.clone(),
            hospital: update.hospital.clone(),
            avatar: update.avatar.clone(),
            phone: update.phone.clone(),
        };
        if let Err(err) = self.provider.update_user(&patch).await {
            error!("[Session] profile update failed: {}", err);
            return;
        }
        let mut user = self.state.user.write().await;
        if let Some(current) = user.take() {
            *user = Some(current.merge(&update));
        }
    }

    /// Ask the provider to send a reset email pointing at the reset view.
    pub async fn request_password_reset(&self, email: &str, redirect_to: &str) -> bool {
        match self.provider.request_password_reset(email, redirect_to).await {
            Ok(()) => true,
            Err(err) => {
                error!("[Session] password reset request failed: {}", err);
                false
            }
        }
    }

    pub async fn update_password(&self, new_password: &str) -> bool {
        match self.provider.update_password(new_password).await {
            Ok(()) => true,
            Err(err) => {
                error!("[Session] password update failed: {}", err);
                false
            }
        }
    }

    pub async fn current_user(&self) -> Option<Identity> {
        self.state.user.read().await.clone()
    }

    pub async fn phase(&self) -> SessionPhase {
        *self.state.phase.read().await
    }

    pub async fn is_authenticated(&self) -> bool {
        self.state.user.read().await.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{provider_user, FakeProvider};

    #[tokio::test]
    async fn starts_initializing_then_resolves_unauthenticated() {
        let session = SessionService::new(Arc::new(FakeProvider::default()));
        assert_eq!(session.phase().await, SessionPhase::Initializing);

        let _sub = session.init().await;
        assert_eq!(session.phase().await, SessionPhase::Unauthenticated);
        assert!(!session.is_authenticated().await);
    }

    #[tokio::test]
    async fn existing_session_restores_identity() {
        let provider = Arc::new(
            FakeProvider::default().with_session(provider_user("u-1", "priya@x.example")),
        );
        let session = SessionService::new(provider);
        let _sub = session.init().await;
        assert_eq!(session.phase().await, SessionPhase::Authenticated);
        assert_eq!(session.current_user().await.unwrap().id, "u-1");
    }

    #[tokio::test]
    async fn failed_session_check_resolves_unauthenticated() {
        let session =
            SessionService::new(Arc::new(FakeProvider::default().failing_session_check()));
        let _sub = session.init().await;
        assert_eq!(session.phase().await, SessionPhase::Unauthenticated);
    }

    #[tokio::test]
    async fn wrong_password_returns_false_and_leaves_state() {
        let session = SessionService::new(Arc::new(
            FakeProvider::default().with_credentials("a@b.com", "rightpass", "u-7"),
        ));
        let _sub = session.init().await;

        assert!(!session.login("a@b.com", "wrongpass").await);
        assert!(session.current_user().await.is_none());
        assert_eq!(session.phase().await, SessionPhase::Unauthenticated);
    }

    #[tokio::test]
    async fn successful_login_stores_identity() {
        let session = SessionService::new(Arc::new(
            FakeProvider::default().with_credentials("a@b.com", "rightpass", "u-7"),
        ));
        let _sub = session.init().await;

        assert!(session.login("a@b.com", "rightpass").await);
        assert_eq!(session.phase().await, SessionPhase::Authenticated);
        assert_eq!(session.current_user().await.unwrap().id, "u-7");
    }

    #[tokio::test]
    async fn signup_pending_confirmation_keeps_identity_absent() {
        let session =
            SessionService::new(Arc::new(FakeProvider::default().signup_needs_confirmation()));
        let _sub = session.init().await;

        let outcome = session
            .signup(SignupData {
                email: "new@x.example".into(),
                password: "secret123".into(),
                name: "New User".into(),
                role: None,
                hospital: None,
                phone: None,
            })
            .await;
        assert!(outcome.is_success());
        assert!(outcome.needs_email_confirmation());
        assert!(session.current_user().await.is_none());
    }

    #[tokio::test]
    async fn signup_with_immediate_session_signs_in() {
        let session =
            SessionService::new(Arc::new(FakeProvider::default().signup_opens_session("u-3")));
        let _sub = session.init().await;

        let outcome = session
            .signup(SignupData {
                email: "auto@x.example".into(),
                password: "secret123".into(),
                name: "Auto Confirmed".into(),
                role: Some("Admin".into()),
                hospital: None,
                phone: None,
            })
            .await;
        assert_eq!(outcome, SignupOutcome::SignedIn);
        assert_eq!(session.current_user().await.unwrap().id, "u-3");
    }

    #[tokio::test]
    async fn signup_rejection_carries_reason() {
        let session = SessionService::new(Arc::new(FakeProvider::default().rejecting_signup()));
        let _sub = session.init().await;

        let outcome = session
            .signup(SignupData {
                email: "dup@x.example".into(),
                password: "secret123".into(),
                name: "Dup".into(),
                role: None,
                hospital: None,
                phone: None,
            })
            .await;
        assert!(!outcome.is_success());
    }

    #[tokio::test]
    async fn logout_clears_identity_even_when_provider_fails() {
        let session = SessionService::new(Arc::new(
            FakeProvider::default()
                .with_session(provider_user("u-1", "priya@x.example"))
                .failing_sign_out(),
        ));
        let _sub = session.init().await;
        assert!(session.is_authenticated().await);

        session.logout().await;
        assert!(session.current_user().await.is_none());
        assert_eq!(session.phase().await, SessionPhase::Unauthenticated);
    }

    #[tokio::test]
    async fn profile_update_merges_on_success_only() {
        let provider = Arc::new(
            FakeProvider::default().with_session(provider_user("u-1", "priya@x.example")),
        );
        let session = SessionService::new(Arc::clone(&provider) as Arc<dyn IdentityProvider>);
        let _sub = session.init().await;

        session
            .update_profile(ProfileUpdate {
                hospital: Some("Metro Care Hospital".into()),
                ..Default::default()
            })
            .await;
        assert_eq!(
            session.current_user().await.unwrap().hospital,
            "Metro Care Hospital"
        );

        provider.fail_updates();
        session
            .update_profile(ProfileUpdate {
                hospital: Some("Elsewhere".into()),
                ..Default::default()
            })
            .await;
        // Rejected write leaves the local identity untouched
        assert_eq!(
            session.current_user().await.unwrap().hospital,
            "Metro Care Hospital"
        );
    }

    #[tokio::test]
    async fn password_operations_forward_to_provider() {
        let session = SessionService::new(Arc::new(FakeProvider::default()));
        let _sub = session.init().await;
        assert!(
            session
                .request_password_reset("priya@x.example", "https://hub.example/reset-password")
                .await
        );
        assert!(session.update_password("new-secret-123").await);
    }

    #[tokio::test]
    async fn pushed_sign_out_clears_identity() {
        let provider = Arc::new(
            FakeProvider::default().with_session(provider_user("u-1", "priya@x.example")),
        );
        let session = SessionService::new(Arc::clone(&provider) as Arc<dyn IdentityProvider>);
        let _sub = session.init().await;
        assert!(session.is_authenticated().await);

        provider.push(AuthChange::SignedOut);
        // Give the listener task a turn.
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
        assert!(!session.is_authenticated().await);
    }

    #[tokio::test]
    async fn pushed_sign_in_stores_identity() {
        let provider = Arc::new(FakeProvider::default());
        let session = SessionService::new(Arc::clone(&provider) as Arc<dyn IdentityProvider>);
        let _sub = session.init().await;

        provider.push(AuthChange::SignedIn(provider_user("u-4", "push@x.example")));
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
        assert_eq!(session.current_user().await.unwrap().id, "u-4");
    }

    #[tokio::test]
    async fn closed_subscription_stops_applying_changes() {
        let provider = Arc::new(FakeProvider::default());
        let session = SessionService::new(Arc::clone(&provider) as Arc<dyn IdentityProvider>);
        let sub = session.init().await;
        sub.close();
        tokio::task::yield_now().await;

        provider.push(AuthChange::SignedIn(provider_user("u-5", "late@x.example")));
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
        assert!(!session.is_authenticated().await);
    }
}

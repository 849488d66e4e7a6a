// session_service/src/guard.rs
use std::sync::Arc;

use log::error;

use backend_api::admins::AdminDirectory;

use crate::routes::RouteAccess;
use crate::session::{SessionPhase, SessionService};

/// What the view in front of a route should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    /// Session still initializing; render a loading state and re-check.
    Checking,
    /// No identity; send the visitor to `/login`.
    RedirectToLogin,
    /// Signed in but lacking the required privilege; render the in-page
    /// denial view.
    Denied,
    /// Render the protected children.
    Granted,
}

/// Authorization gate in front of protected views. Nothing is cached:
/// every check re-reads the session and, for elevated routes, re-queries
/// the admins collection, so a changed identity is always re-evaluated.
pub struct RouteGuard {
    session: Arc<SessionService>,
    admins: Arc<dyn AdminDirectory>,
}

impl RouteGuard {
    pub fn new(session: Arc<SessionService>, admins: Arc<dyn AdminDirectory>) -> Self {
        RouteGuard { session, admins }
    }

    pub async fn check(&self, route: RouteAccess) -> AccessDecision {
        if route.protection == crate::routes::Protection::Public {
            return AccessDecision::Granted;
        }
        if self.session.phase().await == SessionPhase::Initializing {
            return AccessDecision::Checking;
        }
        let Some(user) = self.session.current_user().await else {
            return AccessDecision::RedirectToLogin;
        };
        if !route.requires_admin() {
            return AccessDecision::Granted;
        }
        match self.admins.is_admin(&user.id).await {
            Ok(true) => AccessDecision::Granted,
            Ok(false) => AccessDecision::Denied,
            Err(err) => {
                // Authorization failures fail closed, never open.
                error!("[Guard] admin lookup failed for {}: {}", user.id, err);
                AccessDecision::Denied
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::route_access;
    use crate::test_support::{provider_user, FakeAdmins, FakeProvider};

    async fn signed_in_session(user_id: &str) -> Arc<SessionService> {
        let provider = Arc::new(
            FakeProvider::default().with_session(provider_user(user_id, "admin@x.example")),
        );
        let session = Arc::new(SessionService::new(provider));
        let sub = session.init().await;
        // The guard does not own the subscription; keep it out of scope.
        sub.close();
        session
    }

    #[tokio::test]
    async fn initializing_session_reports_checking() {
        let session = Arc::new(SessionService::new(Arc::new(FakeProvider::default())));
        let guard = RouteGuard::new(session, Arc::new(FakeAdmins::granting()));
        // init() not called yet
        let decision = guard.check(route_access("/appointments").unwrap()).await;
        assert_eq!(decision, AccessDecision::Checking);
    }

    #[tokio::test]
    async fn unauthenticated_protected_route_redirects() {
        let session = Arc::new(SessionService::new(Arc::new(FakeProvider::default())));
        let sub = session.init().await;
        sub.close();
        let guard = RouteGuard::new(session, Arc::new(FakeAdmins::granting()));
        let decision = guard.check(route_access("/appointments").unwrap()).await;
        assert_eq!(decision, AccessDecision::RedirectToLogin);
    }

    #[tokio::test]
    async fn public_route_is_granted_without_session() {
        let session = Arc::new(SessionService::new(Arc::new(FakeProvider::default())));
        let guard = RouteGuard::new(session, Arc::new(FakeAdmins::denying()));
        let decision = guard.check(route_access("/login").unwrap()).await;
        assert_eq!(decision, AccessDecision::Granted);
    }

    #[tokio::test]
    async fn plain_protected_route_needs_no_elevation() {
        let session = signed_in_session("u-1").await;
        let guard = RouteGuard::new(session, Arc::new(FakeAdmins::denying()));
        let decision = guard.check(route_access("/profile").unwrap()).await;
        assert_eq!(decision, AccessDecision::Granted);
    }

    #[tokio::test]
    async fn non_admin_is_denied_the_dashboard() {
        let session = signed_in_session("u-1").await;
        let guard = RouteGuard::new(session, Arc::new(FakeAdmins::denying()));
        let decision = guard.check(route_access("/").unwrap()).await;
        assert_eq!(decision, AccessDecision::Denied);
    }

    #[tokio::test]
    async fn admin_is_granted_the_dashboard() {
        let session = signed_in_session("u-1").await;
        let guard = RouteGuard::new(session, Arc::new(FakeAdmins::granting()));
        let decision = guard.check(route_access("/").unwrap()).await;
        assert_eq!(decision, AccessDecision::Granted);
    }

    #[tokio::test]
    async fn admin_lookup_error_fails_closed() {
        let session = signed_in_session("u-1").await;
        let guard = RouteGuard::new(session, Arc::new(FakeAdmins::erroring()));
        let decision = guard.check(route_access("/").unwrap()).await;
        assert_eq!(decision, AccessDecision::Denied);
    }
}

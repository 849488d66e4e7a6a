// backend_api/src/admins.rs
use async_trait::async_trait;

use models::errors::HubResult;

/// Row-existence check against the backend's `admins` collection.
/// Elevated privilege is granted iff a row keyed by the identity id
/// exists. Callers must treat an `Err` as a denial, never a grant.
#[async_trait]
pub trait AdminDirectory: Send + Sync {
    async fn is_admin(&self, user_id: &str) -> HubResult<bool>;
}

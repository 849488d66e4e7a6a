// backend_api/src/client.rs
use async_trait::async_trait;
use log::{debug, warn};
use reqwest::{Client, RequestBuilder, Response};
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::sync::{broadcast, RwLock};
use uuid::Uuid;

use models::errors::{HubError, HubResult};
use models::identity::SignupData;
use models::medical::{AppointmentChange, AppointmentRow, NewAppointment};

use crate::admins::AdminDirectory;
use crate::appointments::AppointmentApi;
use crate::auth::{AuthChange, IdentityProvider, MetadataPatch, ProviderUser, SignupResponse};
use crate::config::BackendConfig;

const AUTH_EVENT_CAPACITY: usize = 16;

/// HTTP client for the hosted backend. One instance is shared by every
/// consumer in the process; the current access token lives behind a lock
/// and is replaced on sign-in/sign-out.
pub struct BackendClient {
    http: Client,
    config: BackendConfig,
    access_token: RwLock<Option<String>>,
    auth_events: broadcast::Sender<AuthChange>,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    user: ProviderUser,
}

impl BackendClient {
    pub fn new(config: BackendConfig) -> Self {
        let (auth_events, _) = broadcast::channel(AUTH_EVENT_CAPACITY);
        BackendClient {
            http: Client::new(),
            config,
            access_token: RwLock::new(None),
            auth_events,
        }
    }

    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    /// Attach the `apikey` header and a bearer token. Until a session
    /// exists the public API key doubles as the bearer.
    async fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        let token = self.access_token.read().await.clone();
        let bearer = token.unwrap_or_else(|| self.config.api_key().to_string());
        builder
            .header("apikey", self.config.api_key())
            .bearer_auth(bearer)
    }

    /// Map a non-2xx response into an error carrying the body text.
    async fn rejection(response: Response) -> HubError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        HubError::BackendRejected(format!("{}: {}", status, body))
    }

    fn emit(&self, change: AuthChange) {
        // Nobody listening is fine; the feed only matters while a
        // session store is mounted.
        let _ = self.auth_events.send(change);
    }
}

#[async_trait]
impl IdentityProvider for BackendClient {
    async fn current_session(&self) -> HubResult<Option<ProviderUser>> {
        if self.access_token.read().await.is_none() {
            return Ok(None);
        }
        let request = self.http.get(self.config.auth_endpoint("user"));
        let response = self.authorized(request).await.send().await?;
        if response.status() == reqwest::StatusCode::UNAUTHORIZED {
            // Token no longer valid; the session is gone, not broken.
            debug!("[Backend] session token rejected, treating as signed out");
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }
        let user: ProviderUser = response.json().await?;
        Ok(Some(user))
    }

    async fn sign_in(&self, email: &str, password: &str) -> HubResult<ProviderUser> {
        let request = self
            .http
            .post(self.config.auth_endpoint("token"))
            .query(&[("grant_type", "password")])
            .json(&json!({ "email": email, "password": password }));
        let response = self.authorized(request).await.send().await?;
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(HubError::Auth(format!("{}: {}", status, body)));
        }
        let token: TokenResponse = response.json().await?;
        *self.access_token.write().await = Some(token.access_token);
        self.emit(AuthChange::SignedIn(token.user.clone()));
        Ok(token.user)
    }

    async fn sign_up(&self, data: &SignupData) -> HubResult<SignupResponse> {
        let metadata = json!({
            "name": data.name,
            "role": data.role.clone().unwrap_or_else(|| "User".to_string()),
            "hospital": data.hospital.clone().unwrap_or_default(),
            "phone": data.phone.clone().unwrap_or_default(),
        });
        let request = self
            .http
            .post(self.config.auth_endpoint("signup"))
            .json(&json!({
                "email": data.email,
                "password": data.password,
                "data": metadata,
            }));
        let response = self.authorized(request).await.send().await?;
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(HubError::Auth(format!("{}: {}", status, body)));
        }

        // The provider answers with a session payload when the account is
        // auto-confirmed, and with the bare user object when email
        // confirmation is still pending.
        let payload: Value = response.json().await?;
        let session_token = payload
            .get("access_token")
            .and_then(Value::as_str)
            .map(|s| s.to_string());
        let user_value = if payload.get("user").is_some() {
            payload.get("user").cloned().unwrap_or(Value::Null)
        } else {
            payload.clone()
        };
        let user: Option<ProviderUser> = serde_json::from_value(user_value).ok();

        let session_created = session_token.is_some();
        if let Some(token) = session_token {
            *self.access_token.write().await = Some(token);
            if let Some(ref user) = user {
                self.emit(AuthChange::SignedIn(user.clone()));
            }
        }
        Ok(SignupResponse {
            user,
            session_created,
        })
    }

    async fn sign_out(&self) -> HubResult<()> {
        let request = self.http.post(self.config.auth_endpoint("logout"));
        let result = self.authorized(request).await.send().await;
        // The local session ends regardless of what the provider said.
        *self.access_token.write().await = None;
        self.emit(AuthChange::SignedOut);
        match result {
            Ok(response) if response.status().is_success() => Ok(()),
            Ok(response) => Err(Self::rejection(response).await),
            Err(err) => {
                warn!("[Backend] sign-out call failed: {}", err);
                Err(err.into())
            }
        }
    }

    async fn update_user(&self, patch: &MetadataPatch) -> HubResult<()> {
        let request = self
            .http
            .put(self.config.auth_endpoint("user"))
            .json(&json!({ "data": patch }));
        let response = self.authorized(request).await.send().await?;
        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }
        Ok(())
    }

    async fn request_password_reset(&self, email: &str, redirect_to: &str) -> HubResult<()> {
        let request = self
            .http
            .post(self.config.auth_endpoint("recover"))
            .query(&[("redirect_to", redirect_to)])
            .json(&json!({ "email": email }));
        let response = self.authorized(request).await.send().await?;
        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }
        Ok(())
    }

    async fn update_password(&self, new_password: &str) -> HubResult<()> {
        let request = self
            .http
            .put(self.config.auth_endpoint("user"))
            .json(&json!({ "password": new_password }));
        let response = self.authorized(request).await.send().await?;
        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }
        Ok(())
    }

    fn subscribe(&self) -> broadcast::Receiver<AuthChange> {
        self.auth_events.subscribe()
    }
}

#[async_trait]
impl AppointmentApi for BackendClient {
    async fn list(&self) -> HubResult<Vec<AppointmentRow>> {
        let request = self
            .http
            .get(self.config.rest_endpoint("appointments"))
            .query(&[
                ("select", "*"),
                ("order", "appointment_date.desc,appointment_time.desc"),
            ]);
        let response = self.authorized(request).await.send().await?;
        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }
        let rows: Vec<AppointmentRow> = response.json().await?;
        Ok(rows)
    }

    async fn insert(&self, appointment: &NewAppointment) -> HubResult<AppointmentRow> {
        let request = self
            .http
            .post(self.config.rest_endpoint("appointments"))
            .header("Prefer", "return=representation")
            .json(appointment);
        let response = self.authorized(request).await.send().await?;
        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }
        let mut rows: Vec<AppointmentRow> = response.json().await?;
        rows.pop()
            .ok_or_else(|| HubError::InternalError("insert returned no row".to_string()))
    }

    async fn update(&self, id: i64, change: &AppointmentChange) -> HubResult<()> {
        if change.is_empty() {
            return Ok(());
        }
        let request = self
            .http
            .patch(self.config.rest_endpoint("appointments"))
            .query(&[("id", format!("eq.{}", id))])
            .json(change);
        let response = self.authorized(request).await.send().await?;
        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> HubResult<()> {
        let request = self
            .http
            .delete(self.config.rest_endpoint("appointments"))
            .query(&[("id", format!("eq.{}", id))]);
        let response = self.authorized(request).await.send().await?;
        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }
        Ok(())
    }
}

#[async_trait]
impl AdminDirectory for BackendClient {
    async fn is_admin(&self, user_id: &str) -> HubResult<bool> {
        // Provider identity ids are UUIDs; anything else never reaches
        // the row filter. A malformed id denies rather than grants.
        let user_id: Uuid = user_id.parse().map_err(|_| {
            HubError::Authorization(format!("'{}' is not a valid identity id", user_id))
        })?;
        let request = self
            .http
            .get(self.config.rest_endpoint("admins"))
            .query(&[("user_id", format!("eq.{}", user_id)), ("select", "id".to_string())]);
        let response = self.authorized(request).await.send().await?;
        if !response.status().is_success() {
            return Err(HubError::Authorization(format!(
                "admin lookup failed with status {}",
                response.status()
            )));
        }
        let rows: Vec<Value> = response.json().await?;
        Ok(!rows.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fresh_client_has_no_session() {
        let config = BackendConfig::new("https://backend.example", "anon-key").unwrap();
        let client = BackendClient::new(config);
        // No token stored yet, so the session check short-circuits
        // without touching the network.
        assert!(client.current_session().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn empty_update_is_a_local_noop() {
        let config = BackendConfig::new("https://backend.example", "anon-key").unwrap();
        let client = BackendClient::new(config);
        client
            .update(7, &AppointmentChange::default())
            .await
            .unwrap();
    }
}

// backend_api/src/config.rs
use models::errors::{HubError, HubResult};

pub const BACKEND_URL_VAR: &str = "HEALTH_HUB_BACKEND_URL";
pub const BACKEND_KEY_VAR: &str = "HEALTH_HUB_BACKEND_KEY";

/// Endpoint and public API key for the hosted backend, supplied at
/// process start. Missing or malformed values are a hard error: the
/// process must fail fast rather than run against no backend.
#[derive(Debug, Clone, PartialEq)]
pub struct BackendConfig {
    url: String,
    api_key: String,
}

impl BackendConfig {
    pub fn new(url: impl Into<String>, api_key: impl Into<String>) -> HubResult<Self> {
        let url = url.into().trim().trim_end_matches('/').to_string();
        let api_key = api_key.into().trim().to_string();

        if url.is_empty() {
            return Err(HubError::ConfigurationError(format!(
                "{} is empty",
                BACKEND_URL_VAR
            )));
        }
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(HubError::ConfigurationError(format!(
                "backend URL '{}' must start with http:// or https://",
                url
            )));
        }
        if api_key.is_empty() {
            return Err(HubError::ConfigurationError(format!(
                "{} is empty",
                BACKEND_KEY_VAR
            )));
        }

        Ok(BackendConfig { url, api_key })
    }

    /// Resolve the configuration from the environment.
    pub fn from_env() -> HubResult<Self> {
        let url = std::env::var(BACKEND_URL_VAR).map_err(|_| {
            HubError::ConfigurationError(format!("{} is not set", BACKEND_URL_VAR))
        })?;
        let api_key = std::env::var(BACKEND_KEY_VAR).map_err(|_| {
            HubError::ConfigurationError(format!("{} is not set", BACKEND_KEY_VAR))
        })?;
        BackendConfig::new(url, api_key)
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn auth_endpoint(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.url, path)
    }

    pub fn rest_endpoint(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.url, table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_normalized() {
        let config = BackendConfig::new("https://backend.example/", "anon-key").unwrap();
        assert_eq!(config.url(), "https://backend.example");
        assert_eq!(
            config.rest_endpoint("appointments"),
            "https://backend.example/rest/v1/appointments"
        );
        assert_eq!(
            config.auth_endpoint("token"),
            "https://backend.example/auth/v1/token"
        );
    }

    #[test]
    fn empty_values_are_rejected() {
        assert!(matches!(
            BackendConfig::new("", "anon-key"),
            Err(HubError::ConfigurationError(_))
        ));
        assert!(matches!(
            BackendConfig::new("https://backend.example", "  "),
            Err(HubError::ConfigurationError(_))
        ));
    }

    #[test]
    fn non_http_url_is_rejected() {
        assert!(matches!(
            BackendConfig::new("ftp://backend.example", "anon-key"),
            Err(HubError::ConfigurationError(_))
        ));
    }
}

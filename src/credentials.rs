//! Session credentials for authenticating against the Jusoor service.
//!
//! Credentials are resolved once at startup and passed explicitly into the
//! API client. Nothing in the crate reads authentication state from ambient
//! globals; the value lives exactly as long as the process.

use anyhow::{Result, bail};

use crate::config::AuthConfig;

/// Default environment variable consulted for the API token.
pub const DEFAULT_TOKEN_ENV: &str = "JUSOOR_TOKEN";

/// An authenticated identity for one run of the client.
#[derive(Debug, Clone)]
pub struct SessionCredentials {
    token: String,
    email: Option<String>,
}

impl SessionCredentials {
    /// Creates credentials from an already-resolved token.
    pub const fn new(token: String, email: Option<String>) -> Self {
        Self { token, email }
    }

    /// Resolves credentials from the auth section of the config file.
    ///
    /// The token environment variable takes priority over a token stored in
    /// the config file.
    ///
    /// # Errors
    ///
    /// Returns an error if no token can be found anywhere.
    pub fn resolve(auth: &AuthConfig) -> Result<Self> {
        let env_var = auth.token_env.as_deref().unwrap_or(DEFAULT_TOKEN_ENV);

        if let Ok(token) = std::env::var(env_var)
            && !token.is_empty()
        {
            return Ok(Self::new(token, auth.email.clone()));
        }

        if let Some(token) = &auth.token
            && !token.is_empty()
        {
            return Ok(Self::new(token.clone(), auth.email.clone()));
        }

        bail!(
            "No API token configured\n\n\
             Set the {env_var} environment variable:\n  \
             export {env_var}=\"your-token\"\n\n\
             Or set token in ~/.config/jusoor/config.toml under [auth]"
        );
    }

    /// The bearer token sent with every request.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// The signed-in user's email, when known.
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_resolve_prefers_env_var() {
        unsafe { std::env::set_var("JUSOOR_TEST_TOKEN", "env-token") };

        let auth = AuthConfig {
            token: Some("file-token".to_string()),
            token_env: Some("JUSOOR_TEST_TOKEN".to_string()),
            email: Some("user@example.com".to_string()),
        };

        let credentials = SessionCredentials::resolve(&auth).unwrap();
        assert_eq!(credentials.token(), "env-token");
        assert_eq!(credentials.email(), Some("user@example.com"));

        unsafe { std::env::remove_var("JUSOOR_TEST_TOKEN") };
    }

    #[test]
    #[serial]
    fn test_resolve_falls_back_to_file_token() {
        unsafe { std::env::remove_var("JUSOOR_TEST_TOKEN") };

        let auth = AuthConfig {
            token: Some("file-token".to_string()),
            token_env: Some("JUSOOR_TEST_TOKEN".to_string()),
            email: None,
        };

        let credentials = SessionCredentials::resolve(&auth).unwrap();
        assert_eq!(credentials.token(), "file-token");
        assert!(credentials.email().is_none());
    }

    #[test]
    #[serial]
    fn test_resolve_missing_token_errors() {
        unsafe { std::env::remove_var("JUSOOR_TEST_TOKEN") };

        let auth = AuthConfig {
            token: None,
            token_env: Some("JUSOOR_TEST_TOKEN".to_string()),
            email: None,
        };

        let result = SessionCredentials::resolve(&auth);
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("JUSOOR_TEST_TOKEN")
        );
    }

    #[test]
    #[serial]
    fn test_resolve_ignores_empty_env_value() {
        unsafe { std::env::set_var("JUSOOR_TEST_TOKEN", "") };

        let auth = AuthConfig {
            token: Some("file-token".to_string()),
            token_env: Some("JUSOOR_TEST_TOKEN".to_string()),
            email: None,
        };

        let credentials = SessionCredentials::resolve(&auth).unwrap();
        assert_eq!(credentials.token(), "file-token");

        unsafe { std::env::remove_var("JUSOOR_TEST_TOKEN") };
    }
}

//! Credentials and the providers that resolve them.
//!
//! Providers are synchronous: they read memory or the process environment and
//! never touch the network.

use std::fmt;
use std::sync::Arc;

use crate::error::AuthError;

/// AWS access credentials.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Access key ID.
    pub access_key_id: String,
    /// Secret access key.
    pub secret_access_key: String,
    /// Session token for temporary credentials.
    pub session_token: Option<String>,
}

impl Credentials {
    /// Create long-term credentials.
    #[must_use]
    pub fn new(access_key_id: impl Into<String>, secret_access_key: impl Into<String>) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
            session_token: None,
        }
    }

    /// Attach a session token.
    #[must_use]
    pub fn with_session_token(mut self, token: impl Into<String>) -> Self {
        self.session_token = Some(token.into());
        self
    }

    /// Whether these are the empty credentials of [`AnonymousCredentialsProvider`].
    #[must_use]
    pub fn is_anonymous(&self) -> bool {
        self.access_key_id.is_empty() && self.secret_access_key.is_empty()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"** redacted **")
            .field(
                "session_token",
                &self.session_token.as_ref().map(|_| "** redacted **"),
            )
            .finish()
    }
}

/// Source of credentials for outgoing requests.
pub trait CredentialsProvider: Send + Sync + fmt::Debug {
    /// Resolve credentials.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::CredentialsNotLoaded`] if this provider has none.
    fn provide_credentials(&self) -> Result<Credentials, AuthError>;
}

impl<P: CredentialsProvider + ?Sized> CredentialsProvider for Arc<P> {
    fn provide_credentials(&self) -> Result<Credentials, AuthError> {
        (**self).provide_credentials()
    }
}

/// Fixed credentials.
///
/// # Examples
///
/// ```
/// use stratus_auth::{Credentials, CredentialsProvider, StaticCredentialsProvider};
///
/// let provider = StaticCredentialsProvider::new(Credentials::new("AKID", "secret"));
/// assert_eq!(provider.provide_credentials().unwrap().access_key_id, "AKID");
/// ```
#[derive(Debug, Clone)]
pub struct StaticCredentialsProvider {
    credentials: Credentials,
}

impl StaticCredentialsProvider {
    /// Create a provider that always returns `credentials`.
    #[must_use]
    pub fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }
}

impl CredentialsProvider for StaticCredentialsProvider {
    fn provide_credentials(&self) -> Result<Credentials, AuthError> {
        Ok(self.credentials.clone())
    }
}

type Lookup = dyn Fn(&str) -> Option<String> + Send + Sync;

/// Credentials from `AWS_ACCESS_KEY_ID`, `AWS_SECRET_ACCESS_KEY` (or the
/// legacy `AWS_SECRET_KEY`) and `AWS_SESSION_TOKEN`.
pub struct EnvironmentCredentialsProvider {
    lookup: Box<Lookup>,
}

impl EnvironmentCredentialsProvider {
    /// Read from the process environment.
    #[must_use]
    pub fn new() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read through an arbitrary variable lookup.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String> + Send + Sync + 'static) -> Self {
        Self {
            lookup: Box::new(lookup),
        }
    }

    fn var(&self, key: &str) -> Option<String> {
        (self.lookup)(key).filter(|v| !v.trim().is_empty())
    }
}

impl Default for EnvironmentCredentialsProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EnvironmentCredentialsProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvironmentCredentialsProvider")
            .finish_non_exhaustive()
    }
}

impl CredentialsProvider for EnvironmentCredentialsProvider {
    fn provide_credentials(&self) -> Result<Credentials, AuthError> {
        let access_key_id = self.var("AWS_ACCESS_KEY_ID").ok_or_else(|| {
            AuthError::CredentialsNotLoaded("AWS_ACCESS_KEY_ID is not set".to_owned())
        })?;
        let secret_access_key = self
            .var("AWS_SECRET_ACCESS_KEY")
            .or_else(|| self.var("AWS_SECRET_KEY"))
            .ok_or_else(|| {
                AuthError::CredentialsNotLoaded("AWS_SECRET_ACCESS_KEY is not set".to_owned())
            })?;

        Ok(Credentials {
            access_key_id,
            secret_access_key,
            session_token: self.var("AWS_SESSION_TOKEN"),
        })
    }
}

/// Empty credentials, for endpoints that do not check signatures.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnonymousCredentialsProvider;

impl CredentialsProvider for AnonymousCredentialsProvider {
    fn provide_credentials(&self) -> Result<Credentials, AuthError> {
        Ok(Credentials::new("", ""))
    }
}

/// Tries each provider in order and returns the first credentials found.
#[derive(Debug, Default)]
pub struct CredentialsProviderChain {
    providers: Vec<Box<dyn CredentialsProvider>>,
}

impl CredentialsProviderChain {
    /// Create an empty chain.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a provider.
    #[must_use]
    pub fn or_else(mut self, provider: impl CredentialsProvider + 'static) -> Self {
        self.providers.push(Box::new(provider));
        self
    }

    /// Environment first, then anonymous credentials.
    #[must_use]
    pub fn default_chain() -> Self {
        Self::new()
            .or_else(EnvironmentCredentialsProvider::new())
            .or_else(AnonymousCredentialsProvider)
    }
}

impl CredentialsProvider for CredentialsProviderChain {
    fn provide_credentials(&self) -> Result<Credentials, AuthError> {
        let mut reasons = Vec::new();
        for provider in &self.providers {
            match provider.provide_credentials() {
                Ok(credentials) => return Ok(credentials),
                Err(e) => {
                    tracing::debug!(?provider, error = %e, "credentials provider skipped");
                    reasons.push(e.to_string());
                }
            }
        }
        Err(AuthError::CredentialsNotLoaded(if reasons.is_empty() {
            "no credentials providers configured".to_owned()
        } else {
            reasons.join("; ")
        }))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> EnvironmentCredentialsProvider {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        EnvironmentCredentialsProvider::from_lookup(move |key| map.get(key).cloned())
    }

    #[test]
    fn test_should_redact_secrets_in_debug() {
        let creds = Credentials::new("AKID", "topsecret").with_session_token("token123");
        let debug = format!("{creds:?}");
        assert!(debug.contains("AKID"));
        assert!(!debug.contains("topsecret"));
        assert!(!debug.contains("token123"));
    }

    #[test]
    fn test_should_read_environment_credentials() {
        let provider = env(&[
            ("AWS_ACCESS_KEY_ID", "AKID"),
            ("AWS_SECRET_ACCESS_KEY", "secret"),
            ("AWS_SESSION_TOKEN", "token"),
        ]);
        let creds = provider.provide_credentials().unwrap();
        assert_eq!(creds.access_key_id, "AKID");
        assert_eq!(creds.secret_access_key, "secret");
        assert_eq!(creds.session_token.as_deref(), Some("token"));
    }

    #[test]
    fn test_should_accept_legacy_secret_key_variable() {
        let provider = env(&[("AWS_ACCESS_KEY_ID", "AKID"), ("AWS_SECRET_KEY", "legacy")]);
        let creds = provider.provide_credentials().unwrap();
        assert_eq!(creds.secret_access_key, "legacy");
        assert!(creds.session_token.is_none());
    }

    #[test]
    fn test_should_fail_without_access_key() {
        let provider = env(&[("AWS_SECRET_ACCESS_KEY", "secret")]);
        assert!(matches!(
            provider.provide_credentials(),
            Err(AuthError::CredentialsNotLoaded(_))
        ));
    }

    #[test]
    fn test_should_fall_through_chain() {
        let chain = CredentialsProviderChain::new()
            .or_else(env(&[]))
            .or_else(StaticCredentialsProvider::new(Credentials::new("B", "b")));
        assert_eq!(chain.provide_credentials().unwrap().access_key_id, "B");
    }

    #[test]
    fn test_should_report_every_failure_of_empty_chain() {
        let chain = CredentialsProviderChain::new().or_else(env(&[]));
        let err = chain.provide_credentials().unwrap_err();
        assert!(err.to_string().contains("AWS_ACCESS_KEY_ID"));

        let err = CredentialsProviderChain::new()
            .provide_credentials()
            .unwrap_err();
        assert!(err.to_string().contains("no credentials providers"));
    }

    #[test]
    fn test_should_return_anonymous_credentials() {
        let creds = AnonymousCredentialsProvider.provide_credentials().unwrap();
        assert!(creds.is_anonymous());
    }
}

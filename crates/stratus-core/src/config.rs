//! Client configuration.
//!
//! Provides [`ClientConfig`], shared by every service client. Values are loaded
//! from the standard AWS environment variables, with a few Stratus-specific
//! knobs for the transport.

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::types::AwsRegion;

/// Configuration shared by every Stratus service client.
///
/// # Examples
///
/// ```
/// use stratus_core::ClientConfig;
///
/// let config = ClientConfig::default();
/// assert_eq!(config.region.as_str(), "us-east-1");
/// assert!(config.host_prefix_injection);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    /// Region requests are sent to.
    #[builder(default)]
    pub region: AwsRegion,

    /// Endpoint override (e.g. `http://localhost:4566`). When unset the
    /// endpoint is derived from the service prefix and the region.
    #[builder(default, setter(strip_option, into))]
    pub endpoint_url: Option<String>,

    /// Whether per-operation host prefixes are prepended to the endpoint host.
    #[builder(default = true)]
    pub host_prefix_injection: bool,

    /// Request timeout in milliseconds.
    #[builder(default = ClientConfig::DEFAULT_TIMEOUT_MS)]
    pub timeout_ms: u64,

    /// Extra text appended to the user agent.
    #[builder(default, setter(strip_option, into))]
    pub user_agent_suffix: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            region: AwsRegion::default(),
            endpoint_url: None,
            host_prefix_injection: true,
            timeout_ms: Self::DEFAULT_TIMEOUT_MS,
            user_agent_suffix: None,
        }
    }
}

impl ClientConfig {
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

    /// Load configuration from environment variables.
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `AWS_REGION` / `AWS_DEFAULT_REGION` | `us-east-1` |
    /// | `AWS_ENDPOINT_URL` | *(unset)* |
    /// | `AWS_DISABLE_HOST_PREFIX_INJECTION` | `false` |
    /// | `STRATUS_TIMEOUT_MS` | `30000` |
    /// | `STRATUS_USER_AGENT_SUFFIX` | *(unset)* |
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Examples
    ///
    /// ```
    /// use stratus_core::ClientConfig;
    ///
    /// let config = ClientConfig::from_lookup(|key| match key {
    ///     "AWS_REGION" => Some("eu-central-1".to_owned()),
    ///     _ => None,
    /// });
    /// assert_eq!(config.region.as_str(), "eu-central-1");
    /// ```
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(v) = lookup("AWS_REGION").or_else(|| lookup("AWS_DEFAULT_REGION")) {
            if !v.is_empty() {
                config.region = AwsRegion::new(v);
            }
        }
        if let Some(v) = lookup("AWS_ENDPOINT_URL") {
            if !v.is_empty() {
                config.endpoint_url = Some(v);
            }
        }
        if let Some(v) = lookup("AWS_DISABLE_HOST_PREFIX_INJECTION") {
            config.host_prefix_injection = !parse_bool(&v);
        }
        if let Some(v) = lookup("STRATUS_TIMEOUT_MS") {
            match v.parse() {
                Ok(ms) => config.timeout_ms = ms,
                Err(_) => tracing::warn!(value = %v, "ignoring invalid STRATUS_TIMEOUT_MS"),
            }
        }
        if let Some(v) = lookup("STRATUS_USER_AGENT_SUFFIX") {
            config.user_agent_suffix = Some(v);
        }

        config
    }

    /// Apply a service-specific endpoint override such as
    /// `AWS_ENDPOINT_URL_KENDRA`, which wins over `AWS_ENDPOINT_URL`.
    #[must_use]
    pub fn with_service_endpoint(
        mut self,
        service_env_id: &str,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let key = format!("AWS_ENDPOINT_URL_{}", service_env_id.to_ascii_uppercase());
        if let Some(v) = lookup(&key) {
            if !v.is_empty() {
                self.endpoint_url = Some(v);
            }
        }
        self
    }

    /// The request timeout as a [`std::time::Duration`].
    #[must_use]
    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.timeout_ms)
    }
}

/// Parse a boolean from an environment variable value.
///
/// Accepts `"1"`, `"true"` (case-insensitive) as `true`; everything else is `false`.
#[must_use]
pub fn parse_bool(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}

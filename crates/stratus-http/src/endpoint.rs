//! Endpoint resolution.

use stratus_core::ClientConfig;

use crate::error::BuildError;

/// Static description of a service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceMetadata {
    /// Service ID, e.g. `Kendra`.
    pub service_id: &'static str,
    /// First DNS label of the default endpoint.
    pub endpoint_prefix: &'static str,
    /// Service name of the signing scope.
    pub signing_name: &'static str,
    /// API version.
    pub api_version: &'static str,
}

impl ServiceMetadata {
    /// Suffix of the service-specific endpoint variable, `AWS_ENDPOINT_URL_<ID>`.
    #[must_use]
    pub fn env_id(&self) -> String {
        self.service_id.to_ascii_uppercase().replace(' ', "_")
    }
}

/// Resolve the base URL (scheme, authority and optional base path, no trailing
/// `/`) a request is sent to.
///
/// Without an override the endpoint is
/// `https://{endpoint_prefix}.{region}.{dns_suffix}`. The host prefix is
/// prepended to the host whenever [`ClientConfig::host_prefix_injection`] is
/// on, including for overridden endpoints.
///
/// # Examples
///
/// ```
/// use stratus_core::ClientConfig;
/// use stratus_http::{ServiceMetadata, resolve_endpoint};
///
/// const GEO: ServiceMetadata = ServiceMetadata {
///     service_id: "Location",
///     endpoint_prefix: "geo",
///     signing_name: "geo",
///     api_version: "2020-11-19",
/// };
///
/// let url = resolve_endpoint(&ClientConfig::default(), &GEO, Some("routes.")).unwrap();
/// assert_eq!(url, "https://routes.geo.us-east-1.amazonaws.com");
/// ```
pub fn resolve_endpoint(
    config: &ClientConfig,
    metadata: &ServiceMetadata,
    host_prefix: Option<&str>,
) -> Result<String, BuildError> {
    let base = match &config.endpoint_url {
        Some(url) => url.clone(),
        None => format!(
            "https://{}.{}.{}",
            metadata.endpoint_prefix,
            config.region,
            config.region.dns_suffix()
        ),
    };

    let uri: http::Uri = base
        .parse()
        .map_err(|e| BuildError::InvalidUri(format!("{base}: {e}")))?;
    let scheme = uri
        .scheme_str()
        .ok_or_else(|| BuildError::InvalidUri(format!("{base}: missing scheme")))?;
    let authority = uri
        .authority()
        .ok_or_else(|| BuildError::InvalidUri(format!("{base}: missing host")))?;

    let prefix = if config.host_prefix_injection {
        host_prefix.unwrap_or_default()
    } else {
        ""
    };
    let base_path = uri.path().trim_end_matches('/');

    Ok(format!("{scheme}://{prefix}{authority}{base_path}"))
}

#[cfg(test)]
mod tests {
    use stratus_core::AwsRegion;

    use super::*;

    const KENDRA: ServiceMetadata = ServiceMetadata {
        service_id: "kendra",
        endpoint_prefix: "kendra",
        signing_name: "kendra",
        api_version: "2019-02-03",
    };

    #[test]
    fn test_should_build_default_endpoint() {
        let config = ClientConfig::builder()
            .region(AwsRegion::new("eu-west-1"))
            .build();
        assert_eq!(
            resolve_endpoint(&config, &KENDRA, None).unwrap(),
            "https://kendra.eu-west-1.amazonaws.com"
        );
    }

    #[test]
    fn test_should_use_china_partition() {
        let config = ClientConfig::builder()
            .region(AwsRegion::new("cn-north-1"))
            .build();
        assert_eq!(
            resolve_endpoint(&config, &KENDRA, None).unwrap(),
            "https://kendra.cn-north-1.amazonaws.com.cn"
        );
    }

    #[test]
    fn test_should_prefer_endpoint_override() {
        let config = ClientConfig::builder()
            .endpoint_url("http://localhost:4566/")
            .build();
        assert_eq!(
            resolve_endpoint(&config, &KENDRA, None).unwrap(),
            "http://localhost:4566"
        );
    }

    #[test]
    fn test_should_prefix_overridden_host() {
        let config = ClientConfig::builder()
            .endpoint_url("http://localstack:4566/base/")
            .build();
        assert_eq!(
            resolve_endpoint(&config, &KENDRA, Some("cp.maps.")).unwrap(),
            "http://cp.maps.localstack:4566/base"
        );
    }

    #[test]
    fn test_should_skip_prefix_when_injection_disabled() {
        let config = ClientConfig::builder().host_prefix_injection(false).build();
        assert_eq!(
            resolve_endpoint(&config, &KENDRA, Some("routes.")).unwrap(),
            "https://kendra.us-east-1.amazonaws.com"
        );
    }

    #[test]
    fn test_should_reject_override_without_scheme() {
        let config = ClientConfig::builder().endpoint_url("/just/a/path").build();
        assert!(matches!(
            resolve_endpoint(&config, &KENDRA, None),
            Err(BuildError::InvalidUri(_))
        ));
    }

    #[test]
    fn test_should_derive_env_id() {
        let meta = ServiceMetadata {
            service_id: "Location",
            ..KENDRA
        };
        assert_eq!(meta.env_id(), "LOCATION");
    }
}

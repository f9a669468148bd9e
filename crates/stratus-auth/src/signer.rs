//! The request signing seam.

use std::fmt;

use bytes::Bytes;
use chrono::{DateTime, Utc};
use stratus_core::AwsRegion;

use crate::credentials::Credentials;
use crate::error::AuthError;

/// Header carrying the session token of temporary credentials.
pub const SECURITY_TOKEN_HEADER: &str = "x-amz-security-token";

/// Everything a signer needs besides the request itself.
#[derive(Debug, Clone)]
pub struct SigningContext {
    /// Resolved credentials.
    pub credentials: Credentials,
    /// Region of the credential scope.
    pub region: AwsRegion,
    /// Service name of the credential scope (`kendra`, `geo`).
    pub signing_name: &'static str,
    /// Signing time.
    pub time: DateTime<Utc>,
}

/// Signs a fully built request in place.
///
/// Implement this over an external SigV4 library to talk to real AWS.
pub trait RequestSigner: Send + Sync + fmt::Debug {
    /// Sign `request`.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Signing`] if the request cannot be signed.
    fn sign(
        &self,
        request: &mut http::Request<Bytes>,
        context: &SigningContext,
    ) -> Result<(), AuthError>;
}

/// Leaves requests unsigned apart from the session token header.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsignedRequests;

impl RequestSigner for UnsignedRequests {
    fn sign(
        &self,
        request: &mut http::Request<Bytes>,
        context: &SigningContext,
    ) -> Result<(), AuthError> {
        if let Some(token) = &context.credentials.session_token {
            let value = http::HeaderValue::from_str(token)
                .map_err(|e| AuthError::Signing(format!("invalid session token: {e}")))?;
            request.headers_mut().insert(SECURITY_TOKEN_HEADER, value);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(credentials: Credentials) -> SigningContext {
        SigningContext {
            credentials,
            region: AwsRegion::default(),
            signing_name: "kendra",
            time: Utc::now(),
        }
    }

    #[test]
    fn test_should_add_security_token() {
        let mut request = http::Request::new(Bytes::new());
        let ctx = context(Credentials::new("AKID", "secret").with_session_token("tok"));
        UnsignedRequests.sign(&mut request, &ctx).unwrap();
        assert_eq!(request.headers()[SECURITY_TOKEN_HEADER], "tok");
    }

    #[test]
    fn test_should_leave_request_untouched_without_token() {
        let mut request = http::Request::new(Bytes::new());
        UnsignedRequests
            .sign(&mut request, &context(Credentials::new("AKID", "secret")))
            .unwrap();
        assert!(request.headers().is_empty());
    }

    #[test]
    fn test_should_reject_token_with_newline() {
        let mut request = http::Request::new(Bytes::new());
        let ctx = context(Credentials::new("AKID", "secret").with_session_token("bad\ntoken"));
        assert!(matches!(
            UnsignedRequests.sign(&mut request, &ctx),
            Err(AuthError::Signing(_))
        ));
    }
}

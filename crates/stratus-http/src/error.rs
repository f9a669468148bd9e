//! Error types for building, dispatching and interpreting requests.

use stratus_auth::AuthError;

/// A request could not be built from its input.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// The input could not be serialized to JSON.
    #[error("failed to serialize request body: {0}")]
    Serialize(#[from] serde_json::Error),

    /// A member bound to the URI is missing or empty.
    #[error("missing required member: {0}")]
    MissingField(&'static str),

    /// A header value contains characters HTTP does not allow.
    #[error("invalid value for header {name}: {reason}")]
    InvalidHeader {
        /// Header name.
        name: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// The resolved URI is not valid.
    #[error("invalid URI: {0}")]
    InvalidUri(String),
}

/// The transport failed to deliver the request or read the response.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// The request did not finish within the configured timeout.
    #[error("request timed out: {0}")]
    Timeout(String),

    /// No connection could be established.
    #[error("connection failed: {0}")]
    Connect(String),

    /// Any other transport failure.
    #[error("transport error: {0}")]
    Io(String),
}

/// Failure of a client operation.
///
/// `E` is the service's own error type, produced from the response of a
/// non-2xx status.
#[derive(Debug, thiserror::Error)]
pub enum SdkError<E> {
    /// The request could not be built.
    #[error("failed to build request: {0}")]
    Build(#[from] BuildError),

    /// No credentials could be resolved.
    #[error("failed to load credentials: {0}")]
    Credentials(#[source] AuthError),

    /// The signer failed.
    #[error("failed to sign request: {0}")]
    Signing(#[source] AuthError),

    /// The transport failed.
    #[error("dispatch failure: {0}")]
    Dispatch(#[from] DispatchError),

    /// The `x-amz-crc32` header does not match the received body.
    #[error("response checksum mismatch: header {expected}, body {actual}")]
    Crc32Mismatch {
        /// Value of the header.
        expected: u32,
        /// CRC32 of the body as received.
        actual: u32,
    },

    /// The response body does not match the output shape.
    #[error("failed to parse response: {0}")]
    Unmarshal(#[source] serde_json::Error),

    /// The service returned an error response.
    #[error("service error: {0}")]
    Service(E),
}

impl<E> SdkError<E> {
    /// The service error, if that is what this is.
    #[must_use]
    pub fn as_service_error(&self) -> Option<&E> {
        match self {
            Self::Service(e) => Some(e),
            _ => None,
        }
    }

    /// Consume into the service error, if that is what this is.
    #[must_use]
    pub fn into_service_error(self) -> Option<E> {
        match self {
            Self::Service(e) => Some(e),
            _ => None,
        }
    }
}

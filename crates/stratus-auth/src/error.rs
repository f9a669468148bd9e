//! Authentication error types.

/// Errors raised while resolving credentials or signing a request.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// No provider produced credentials.
    #[error("credentials not loaded: {0}")]
    CredentialsNotLoaded(String),

    /// The signer rejected or failed to sign the request.
    #[error("failed to sign request: {0}")]
    Signing(String),
}

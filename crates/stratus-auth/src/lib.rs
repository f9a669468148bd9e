//! Credentials and request signing for the Stratus AWS clients.
//!
//! Credentials are resolved through a [`CredentialsProvider`] and handed to a
//! [`RequestSigner`] together with the signing scope. The signature algorithm
//! itself lives outside this crate: plug any SigV4 implementation in behind
//! [`RequestSigner`]. The bundled [`UnsignedRequests`] signer only forwards the
//! session token, which is all a local emulator needs.

pub mod credentials;
pub mod error;
pub mod signer;

pub use credentials::{
    AnonymousCredentialsProvider, Credentials, CredentialsProvider, CredentialsProviderChain,
    EnvironmentCredentialsProvider, StaticCredentialsProvider,
};
pub use error::AuthError;
pub use signer::{RequestSigner, SigningContext, UnsignedRequests};

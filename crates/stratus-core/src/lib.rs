//! Core types, configuration, and wire helpers for the Stratus AWS clients.
//!
//! This crate provides the building blocks shared by every service crate:
//! client configuration, region handling, the decoded form of AWS JSON error
//! responses, and serde adapters for the timestamp and blob encodings used by
//! the `awsJson1_1` and `restJson1` protocols.

pub mod blob;
mod config;
mod enums;
mod error;
pub mod timestamp;
mod types;

pub use config::{ClientConfig, parse_bool};
pub use error::{ErrorResponse, FromErrorResponse};
pub use types::AwsRegion;

#[doc(hidden)]
pub mod __private {
    pub use serde;
}

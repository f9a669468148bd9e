//! Kendra frontend service model types for Stratus.
//!
//! Kendra speaks `awsJson1_1`: every shape is a JSON object with `PascalCase`
//! member names, timestamps are epoch seconds and blobs are base64. The types
//! here are plain serde records; optional members are omitted from the wire
//! when unset and unknown members are ignored on the way in.
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::module_name_repetitions)]
#![allow(missing_docs)]

pub mod error;
pub mod input;
pub mod operations;
pub mod output;
pub mod types;

pub use error::{KendraError, KendraErrorCode};
pub use operations::KendraOperation;

/// Target prefix of the `X-Amz-Target` header.
pub const TARGET_PREFIX: &str = "AWSKendraFrontendService";

/// API version of the model.
pub const API_VERSION: &str = "2019-02-03";

/// Endpoint prefix and signing name.
pub const ENDPOINT_PREFIX: &str = "kendra";

//! Amazon Location service model types for Stratus.
//!
//! Location speaks `restJson1`. Members bound to the URI (path labels and
//! query parameters) live on the input records but are never part of the JSON
//! body; the request builders in `stratus-location` place them. Timestamps are
//! ISO-8601 strings and positions are `[longitude, latitude]` pairs.
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::module_name_repetitions)]
#![allow(missing_docs)]

pub mod error;
pub mod input;
pub mod operations;
pub mod output;
pub mod types;

pub use error::{
    LocationError, LocationErrorCode, ValidationExceptionField, ValidationExceptionReason,
};
pub use operations::LocationOperation;

/// API version of the model.
pub const API_VERSION: &str = "2020-11-19";

/// Endpoint prefix and signing name.
pub const ENDPOINT_PREFIX: &str = "geo";

//! Wire requests and the shared execution pipeline for the Stratus AWS clients.
//!
//! Service crates marshal their inputs into a [`WireRequest`] with either the
//! `awsJson1_1` protocol ([`JsonRpc`]) or the `restJson1` protocol
//! ([`RestPath`] and [`rest_json_request`]), and then run it through a
//! [`Pipeline`].

mod connector;
mod endpoint;
mod error;
mod pipeline;
mod request;
mod response;
#[cfg(any(test, feature = "test-util"))]
pub mod test_util;

pub use connector::{HttpConnector, ReqwestConnector};
pub use endpoint::{ServiceMetadata, resolve_endpoint};
pub use error::{BuildError, DispatchError, SdkError};
pub use pipeline::{INVOCATION_ID_HEADER, Pipeline};
pub use request::{APPLICATION_JSON, AWS_JSON_1_1, JsonRpc, RestPath, WireRequest, rest_json_request};
pub use response::{CRC32_HEADER, header_str, parse_json, verify_crc32};

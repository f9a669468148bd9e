//! Error types shared by every Stratus crate.
//!
//! AWS JSON services (both `awsJson1_1` and `restJson1`) report failures as a
//! non-2xx status with a small JSON document:
//!
//! ```json
//! {
//!   "__type": "com.amazonaws.kendra#ResourceNotFoundException",
//!   "Message": "Index 'abc' not found"
//! }
//! ```
//!
//! [`ErrorResponse`] is the protocol-neutral decoding of that document. Each
//! service crate turns it into its own typed error via [`FromErrorResponse`].

use bytes::Bytes;
use serde_json::{Map, Value};

/// Error code used when neither the headers nor the body name one.
const UNKNOWN_ERROR: &str = "UnknownError";

/// A decoded AWS JSON error response.
#[derive(Debug, Clone)]
pub struct ErrorResponse {
    /// The short error code, e.g. `ResourceNotFoundException`.
    pub code: String,
    /// Human-readable message, if the service sent one.
    pub message: Option<String>,
    /// HTTP status of the response.
    pub status: http::StatusCode,
    /// Value of `x-amzn-RequestId`, if present.
    pub request_id: Option<String>,
    /// The remaining members of the JSON error document.
    pub fields: Map<String, Value>,
    /// The raw response body.
    pub body: Bytes,
}

impl ErrorResponse {
    /// Decode an error response from its status, headers and body.
    ///
    /// The error code is taken from the `x-amzn-ErrorType` header first, then
    /// the body's `__type`, then `code`/`Code`. Namespaces (`ns#Code`) and
    /// header suffixes (`Code:http://...`) are stripped.
    ///
    /// # Examples
    ///
    /// ```
    /// use stratus_core::ErrorResponse;
    ///
    /// let body = br#"{"__type":"com.amazonaws.kendra#ThrottlingException","Message":"slow down"}"#;
    /// let err = ErrorResponse::from_parts(
    ///     http::StatusCode::BAD_REQUEST,
    ///     &http::HeaderMap::new(),
    ///     bytes::Bytes::from_static(body),
    /// );
    /// assert_eq!(err.code, "ThrottlingException");
    /// assert_eq!(err.message.as_deref(), Some("slow down"));
    /// ```
    #[must_use]
    pub fn from_parts(status: http::StatusCode, headers: &http::HeaderMap, body: Bytes) -> Self {
        let mut fields = match serde_json::from_slice::<Value>(&body) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        };

        let header_code = headers
            .get("x-amzn-errortype")
            .and_then(|v| v.to_str().ok())
            .map(sanitize_error_code)
            .filter(|c| !c.is_empty());

        let body_code = ["__type", "code", "Code"].iter().find_map(|key| {
            fields
                .get(*key)
                .and_then(Value::as_str)
                .map(sanitize_error_code)
                .filter(|c| !c.is_empty())
        });

        let code = header_code
            .or(body_code)
            .unwrap_or_else(|| UNKNOWN_ERROR.to_owned());

        let message = ["message", "Message", "errorMessage"]
            .iter()
            .find_map(|key| fields.remove(*key))
            .and_then(|v| v.as_str().map(ToOwned::to_owned));

        fields.remove("__type");

        let request_id = headers
            .get("x-amzn-requestid")
            .and_then(|v| v.to_str().ok())
            .map(ToOwned::to_owned);

        Self {
            code,
            message,
            status,
            request_id,
            fields,
            body,
        }
    }

    /// Look up an extra member of the error document.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }
}

/// Strip the namespace and suffix from a raw error type.
///
/// `aws.protocoltests#FooError:http://internal` becomes `FooError`.
fn sanitize_error_code(raw: &str) -> String {
    let without_suffix = raw.split(':').next().unwrap_or(raw);
    let without_namespace = without_suffix
        .rsplit_once('#')
        .map_or(without_suffix, |(_, code)| code);
    without_namespace.trim().to_owned()
}

/// Conversion from a decoded error response into a service's typed error.
pub trait FromErrorResponse: Sized {
    /// Build the typed error.
    fn from_error_response(response: ErrorResponse) -> Self;
}

impl FromErrorResponse for ErrorResponse {
    fn from_error_response(response: ErrorResponse) -> Self {
        response
    }
}

//! Location error types.
//!
//! Location reports the error code in the `x-amzn-ErrorType` header and a
//! camelCase JSON body. `ValidationException` adds a reason and the list of
//! offending fields.

use std::fmt;

use serde::{Deserialize, Serialize};
use stratus_core::{ErrorResponse, FromErrorResponse, string_enum};

string_enum! {
    /// Well-known Location error codes.
    pub enum LocationErrorCode {
        /// Caller lacks permission.
        AccessDeniedException => "AccessDeniedException",
        /// Conflicting concurrent change, or the name is taken.
        ConflictException => "ConflictException",
        /// Server-side failure.
        InternalServerException => "InternalServerException",
        /// The resource does not exist.
        ResourceNotFoundException => "ResourceNotFoundException",
        /// An account quota would be exceeded.
        ServiceQuotaExceededException => "ServiceQuotaExceededException",
        /// Request rate too high.
        ThrottlingException => "ThrottlingException",
        /// The input failed validation.
        ValidationException => "ValidationException",
    }
}

string_enum! {
    /// Why a request failed validation.
    pub enum ValidationExceptionReason {
        UnknownOperation => "UnknownOperation",
        Missing => "Missing",
        CannotParse => "CannotParse",
        FieldValidationFailed => "FieldValidationFailed",
        Other => "Other",
    }
}

/// One field rejected by validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationExceptionField {
    /// Name of the offending field.
    pub name: String,
    /// What is wrong with it.
    pub message: String,
}

/// A Location error response.
#[derive(Debug, Clone)]
pub struct LocationError {
    /// The error code.
    pub code: LocationErrorCode,
    /// A human-readable error message.
    pub message: String,
    /// The HTTP status code.
    pub status_code: http::StatusCode,
    /// The request ID, for support cases.
    pub request_id: Option<String>,
    /// Validation failure reason; only set for `ValidationException`.
    pub reason: Option<ValidationExceptionReason>,
    /// Rejected fields; only set for `ValidationException`.
    pub field_list: Vec<ValidationExceptionField>,
}

impl LocationError {
    /// Whether the same request may succeed if sent again later.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(
            self.code,
            LocationErrorCode::ThrottlingException | LocationErrorCode::InternalServerException
        ) || self.status_code.is_server_error()
    }
}

impl fmt::Display for LocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LocationError({}): {}", self.code, self.message)?;
        if let Some(reason) = &self.reason {
            write!(f, " [{reason}]")?;
        }
        Ok(())
    }
}

impl std::error::Error for LocationError {}

impl FromErrorResponse for LocationError {
    fn from_error_response(response: ErrorResponse) -> Self {
        let code = LocationErrorCode::from(response.code.as_str());
        let (reason, field_list) = if code == LocationErrorCode::ValidationException {
            let reason = response
                .field("reason")
                .and_then(serde_json::Value::as_str)
                .map(ValidationExceptionReason::from);
            let field_list = response
                .field("fieldList")
                .cloned()
                .and_then(|v| serde_json::from_value(v).ok())
                .unwrap_or_default();
            (reason, field_list)
        } else {
            (None, Vec::new())
        };

        Self {
            code,
            message: response.message.unwrap_or_default(),
            status_code: response.status,
            request_id: response.request_id,
            reason,
            field_list,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, error_type: &str, body: &'static str) -> ErrorResponse {
        let mut headers = http::HeaderMap::new();
        headers.insert("x-amzn-errortype", error_type.parse().unwrap());
        headers.insert("x-amzn-requestid", "req-1".parse().unwrap());
        ErrorResponse::from_parts(
            http::StatusCode::from_u16(status).unwrap(),
            &headers,
            body.as_bytes().to_vec().into(),
        )
    }

    #[test]
    fn test_should_decode_validation_exception_fields() {
        let err = LocationError::from_error_response(response(
            400,
            "ValidationException:http://internal.amazon.com/coral/com.amazonaws.geo/",
            r#"{"message":"bad position","reason":"FieldValidationFailed","fieldList":[{"name":"Position","message":"longitude out of range"}]}"#,
        ));

        assert_eq!(err.code, LocationErrorCode::ValidationException);
        assert_eq!(err.reason, Some(ValidationExceptionReason::FieldValidationFailed));
        assert_eq!(err.field_list.len(), 1);
        assert_eq!(err.field_list[0].name, "Position");
        assert_eq!(err.request_id.as_deref(), Some("req-1"));
        assert_eq!(
            err.to_string(),
            "LocationError(ValidationException): bad position [FieldValidationFailed]"
        );
    }

    #[test]
    fn test_should_ignore_reason_on_other_errors() {
        let err = LocationError::from_error_response(response(
            404,
            "ResourceNotFoundException",
            r#"{"message":"map not found","reason":"Other"}"#,
        ));
        assert_eq!(err.code, LocationErrorCode::ResourceNotFoundException);
        assert!(err.reason.is_none());
        assert!(err.field_list.is_empty());
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_should_flag_throttling_as_retryable() {
        let err = LocationError::from_error_response(response(429, "ThrottlingException", "{}"));
        assert!(err.is_retryable());
        assert!(err.message.is_empty());
    }

    #[test]
    fn test_should_keep_status_code_from_response() {
        let err = LocationError::from_error_response(response(
            404,
            "ResourceNotFoundException",
            r#"{"message":"no such map"}"#,
        ));
        assert_eq!(err.code, LocationErrorCode::ResourceNotFoundException);
        assert_eq!(err.status_code, http::StatusCode::NOT_FOUND);
        assert_eq!(err.message, "no such map");
    }
}

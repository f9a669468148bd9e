//! Kendra error types.
//!
//! Errors arrive as `awsJson1_1` error documents whose `__type` names one of
//! the codes below.

use std::fmt;

use stratus_core::{ErrorResponse, FromErrorResponse, string_enum};

string_enum! {
    /// Well-known Kendra error codes.
    pub enum KendraErrorCode {
        /// Caller lacks permission.
        AccessDeniedException => "AccessDeniedException",
        /// Conflicting concurrent change.
        ConflictException => "ConflictException",
        /// Server-side failure.
        InternalServerException => "InternalServerException",
        /// A resource with this name already exists.
        ResourceAlreadyExistException => "ResourceAlreadyExistException",
        /// The resource is being used by another operation.
        ResourceInUseException => "ResourceInUseException",
        /// The resource does not exist.
        ResourceNotFoundException => "ResourceNotFoundException",
        /// The resource is temporarily unavailable.
        ResourceUnavailableException => "ResourceUnavailableException",
        /// An account quota would be exceeded.
        ServiceQuotaExceededException => "ServiceQuotaExceededException",
        /// Request rate too high.
        ThrottlingException => "ThrottlingException",
        /// The input failed validation.
        ValidationException => "ValidationException",
    }
}

/// A Kendra error response.
#[derive(Debug, Clone)]
pub struct KendraError {
    /// The error code.
    pub code: KendraErrorCode,
    /// A human-readable error message.
    pub message: String,
    /// The HTTP status code.
    pub status_code: http::StatusCode,
    /// The request ID, for support cases.
    pub request_id: Option<String>,
}

impl KendraError {
    /// Whether the same request may succeed if sent again later.
    ///
    /// Throttling and server-side failures are; everything else needs a
    /// different request. Retrying is left to the caller.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(
            self.code,
            KendraErrorCode::ThrottlingException | KendraErrorCode::InternalServerException
        ) || self.status_code.is_server_error()
    }
}

impl fmt::Display for KendraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KendraError({}): {}", self.code, self.message)
    }
}

impl std::error::Error for KendraError {}

impl FromErrorResponse for KendraError {
    fn from_error_response(response: ErrorResponse) -> Self {
        Self {
            code: KendraErrorCode::from(response.code.as_str()),
            message: response.message.unwrap_or_default(),
            status_code: response.status,
            request_id: response.request_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, body: &'static str) -> ErrorResponse {
        ErrorResponse::from_parts(
            http::StatusCode::from_u16(status).unwrap(),
            &http::HeaderMap::new(),
            body.as_bytes().to_vec().into(),
        )
    }

    #[test]
    fn test_should_map_known_error_code() {
        let err = KendraError::from_error_response(response(
            400,
            r#"{"__type":"com.amazonaws.kendra#ResourceNotFoundException","Message":"no index"}"#,
        ));
        assert_eq!(err.code, KendraErrorCode::ResourceNotFoundException);
        assert_eq!(err.message, "no index");
        assert!(!err.is_retryable());
        assert_eq!(
            err.to_string(),
            "KendraError(ResourceNotFoundException): no index"
        );
    }

    #[test]
    fn test_should_keep_unknown_error_code() {
        let err = KendraError::from_error_response(response(
            400,
            r#"{"__type":"FeaturedResultsConflictException"}"#,
        ));
        assert_eq!(
            err.code,
            KendraErrorCode::Unknown("FeaturedResultsConflictException".to_owned())
        );
        assert!(err.message.is_empty());
    }

    #[test]
    fn test_should_flag_retryable_errors() {
        let throttled = KendraError::from_error_response(response(
            400,
            r#"{"__type":"ThrottlingException","message":"slow"}"#,
        ));
        assert_eq!(throttled.status_code, http::StatusCode::BAD_REQUEST);
        assert!(throttled.is_retryable());

        let gateway = KendraError::from_error_response(response(502, "<html/>"));
        assert_eq!(gateway.code, KendraErrorCode::Unknown("UnknownError".to_owned()));
        assert!(gateway.is_retryable());
    }

    #[test]
    fn test_should_keep_status_code_from_response() {
        let err = KendraError::from_error_response(response(
            409,
            r#"{"__type":"ConflictException","Message":"busy"}"#,
        ));
        assert_eq!(err.code, KendraErrorCode::ConflictException);
        assert_eq!(err.status_code, http::StatusCode::CONFLICT);
        assert!(!err.is_retryable());
    }
}

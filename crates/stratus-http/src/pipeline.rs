//! The shared execution pipeline.
//!
//! Every client operation funnels through [`Pipeline::invoke`]:
//!
//! 1. marshal the input, resolve the endpoint and attach the standard headers,
//! 2. resolve credentials (per call or from the pipeline) and sign,
//! 3. dispatch through the connector,
//! 4. verify `x-amz-crc32`, and turn non-2xx responses into service errors.
//!
//! Retries are left to the caller.

use std::sync::Arc;
use std::time::{Duration, Instant};

use bytes::Bytes;
use serde::de::DeserializeOwned;
use stratus_auth::{
    CredentialsProvider, CredentialsProviderChain, RequestSigner, SigningContext, UnsignedRequests,
};
use stratus_core::{ClientConfig, ErrorResponse, FromErrorResponse};
use tracing::{Instrument, Span, debug, field, warn};

use crate::connector::{HttpConnector, ReqwestConnector};
use crate::endpoint::{ServiceMetadata, resolve_endpoint};
use crate::error::{BuildError, DispatchError, SdkError};
use crate::request::WireRequest;
use crate::response::{parse_json, verify_crc32};

/// Header carrying the per-attempt invocation ID.
pub const INVOCATION_ID_HEADER: &str = "amz-sdk-invocation-id";

/// Configuration, transport, credentials and signer of one service client.
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: Arc<ClientConfig>,
    metadata: &'static ServiceMetadata,
    connector: Arc<dyn HttpConnector>,
    credentials: Arc<dyn CredentialsProvider>,
    signer: Arc<dyn RequestSigner>,
}

impl Pipeline {
    /// Create a pipeline with the `reqwest` transport, the default credentials
    /// chain and [`UnsignedRequests`].
    pub fn new(config: ClientConfig, metadata: &'static ServiceMetadata) -> Result<Self, DispatchError> {
        let connector = ReqwestConnector::new(config.timeout())?;
        Ok(Self::with_connector(config, metadata, connector))
    }

    /// Create a pipeline over a custom transport.
    #[must_use]
    pub fn with_connector(
        config: ClientConfig,
        metadata: &'static ServiceMetadata,
        connector: impl HttpConnector + 'static,
    ) -> Self {
        Self {
            config: Arc::new(config),
            metadata,
            connector: Arc::new(connector),
            credentials: Arc::new(CredentialsProviderChain::default_chain()),
            signer: Arc::new(UnsignedRequests),
        }
    }

    /// Replace the credentials provider.
    #[must_use]
    pub fn credentials_provider(mut self, provider: impl CredentialsProvider + 'static) -> Self {
        self.credentials = Arc::new(provider);
        self
    }

    /// Replace the signer.
    #[must_use]
    pub fn signer(mut self, signer: impl RequestSigner + 'static) -> Self {
        self.signer = Arc::new(signer);
        self
    }

    /// The client configuration.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The service this pipeline talks to.
    #[must_use]
    pub fn metadata(&self) -> &'static ServiceMetadata {
        self.metadata
    }

    fn user_agent(&self) -> String {
        let mut ua = format!(
            "stratus/{} api/{}#{}",
            env!("CARGO_PKG_VERSION"),
            self.metadata.service_id,
            self.metadata.api_version
        );
        if let Some(suffix) = &self.config.user_agent_suffix {
            ua.push(' ');
            ua.push_str(suffix);
        }
        ua
    }

    /// Execute one operation and return the raw successful response.
    pub async fn execute<E: FromErrorResponse>(
        &self,
        operation: &'static str,
        request: WireRequest,
    ) -> Result<http::Response<Bytes>, SdkError<E>> {
        self.invoke(operation, None, || Ok(request)).await
    }

    /// Execute one operation and unmarshal its JSON output.
    pub async fn execute_json<T, E>(
        &self,
        operation: &'static str,
        request: WireRequest,
    ) -> Result<T, SdkError<E>>
    where
        T: DeserializeOwned,
        E: FromErrorResponse,
    {
        self.invoke_json(operation, None, || Ok(request)).await
    }

    /// Marshal and execute one operation.
    ///
    /// `marshall` runs inside the operation span so its duration is measured
    /// with the other phases. `credentials`, when given, replaces the
    /// pipeline's provider for this call only.
    ///
    /// Phase durations are recorded in microseconds on the `aws_operation`
    /// span as `marshall_us`, `credentials_us` and `execute_us`.
    pub async fn invoke<E, M>(
        &self,
        operation: &'static str,
        credentials: Option<&dyn CredentialsProvider>,
        marshall: M,
    ) -> Result<http::Response<Bytes>, SdkError<E>>
    where
        E: FromErrorResponse,
        M: FnOnce() -> Result<WireRequest, BuildError>,
    {
        let invocation_id = uuid::Uuid::new_v4().to_string();
        let span = tracing::info_span!(
            "aws_operation",
            service = self.metadata.service_id,
            operation,
            invocation_id = %invocation_id,
            marshall_us = field::Empty,
            credentials_us = field::Empty,
            execute_us = field::Empty,
        );
        self.invoke_inner(marshall, credentials, invocation_id)
            .instrument(span)
            .await
    }

    /// [`invoke`](Self::invoke) and unmarshal the JSON output.
    pub async fn invoke_json<T, E, M>(
        &self,
        operation: &'static str,
        credentials: Option<&dyn CredentialsProvider>,
        marshall: M,
    ) -> Result<T, SdkError<E>>
    where
        T: DeserializeOwned,
        E: FromErrorResponse,
        M: FnOnce() -> Result<WireRequest, BuildError>,
    {
        let response = self.invoke(operation, credentials, marshall).await?;
        parse_json(response.body()).map_err(SdkError::Unmarshal)
    }

    async fn invoke_inner<E, M>(
        &self,
        marshall: M,
        credentials: Option<&dyn CredentialsProvider>,
        invocation_id: String,
    ) -> Result<http::Response<Bytes>, SdkError<E>>
    where
        E: FromErrorResponse,
        M: FnOnce() -> Result<WireRequest, BuildError>,
    {
        let span = Span::current();

        let started = Instant::now();
        let mut http_request = self.marshall(marshall()?, &invocation_id)?;
        let marshall_us = micros(started.elapsed());
        span.record("marshall_us", marshall_us);

        let started = Instant::now();
        let provider = credentials.unwrap_or(self.credentials.as_ref());
        let credentials = provider
            .provide_credentials()
            .map_err(SdkError::Credentials)?;
        let credentials_us = micros(started.elapsed());
        span.record("credentials_us", credentials_us);

        let context = SigningContext {
            credentials,
            region: self.config.region.clone(),
            signing_name: self.metadata.signing_name,
            time: chrono::Utc::now(),
        };
        self.signer
            .sign(&mut http_request, &context)
            .map_err(SdkError::Signing)?;

        debug!(
            method = %http_request.method(),
            uri = %http_request.uri(),
            bytes = http_request.body().len(),
            "dispatching request"
        );
        let started = Instant::now();
        let response = self.connector.call(http_request).await?;
        let execute_us = micros(started.elapsed());
        span.record("execute_us", execute_us);

        let status = response.status();
        debug!(
            status = status.as_u16(),
            bytes = response.body().len(),
            marshall_us,
            credentials_us,
            execute_us,
            "received response"
        );

        if let Err((expected, actual)) = verify_crc32(response.headers(), response.body()) {
            warn!(expected, actual, "response checksum mismatch");
            return Err(SdkError::Crc32Mismatch { expected, actual });
        }

        if !status.is_success() {
            let (parts, body) = response.into_parts();
            let error = ErrorResponse::from_parts(parts.status, &parts.headers, body);
            warn!(
                code = %error.code,
                status = status.as_u16(),
                request_id = error.request_id.as_deref().unwrap_or("-"),
                "service returned an error",
            );
            return Err(SdkError::Service(E::from_error_response(error)));
        }

        Ok(response)
    }

    /// Turn a wire request into an HTTP request with the standard headers.
    fn marshall(
        &self,
        request: WireRequest,
        invocation_id: &str,
    ) -> Result<http::Request<Bytes>, BuildError> {
        let base = resolve_endpoint(&self.config, self.metadata, request.host_prefix)?;
        let uri = format!("{base}{}", request.path_and_query());
        let body_len = request.body.len();

        let mut http_request = http::Request::builder()
            .method(request.method)
            .uri(&uri)
            .body(request.body)
            .map_err(|e| BuildError::InvalidUri(format!("{uri}: {e}")))?;

        let headers = http_request.headers_mut();
        headers.extend(request.headers);
        headers.insert(http::header::USER_AGENT, header_value("user-agent", &self.user_agent())?);
        headers.insert(INVOCATION_ID_HEADER, header_value(INVOCATION_ID_HEADER, invocation_id)?);
        if let Some(content_type) = request.content_type {
            headers.insert(
                http::header::CONTENT_TYPE,
                http::HeaderValue::from_static(content_type),
            );
        }
        headers.insert(http::header::CONTENT_LENGTH, http::HeaderValue::from(body_len));
        Ok(http_request)
    }
}

fn micros(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX)
}

fn header_value(name: &str, value: &str) -> Result<http::HeaderValue, BuildError> {
    http::HeaderValue::from_str(value).map_err(|e| BuildError::InvalidHeader {
        name: name.to_owned(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use stratus_auth::{AuthError, Credentials, StaticCredentialsProvider};

    use super::*;
    use crate::request::JsonRpc;
    use crate::test_util::CaptureConnector;

    static KENDRA: ServiceMetadata = ServiceMetadata {
        service_id: "kendra",
        endpoint_prefix: "kendra",
        signing_name: "kendra",
        api_version: "2019-02-03",
    };

    #[derive(Debug, serde::Serialize)]
    struct Empty {}

    #[derive(Debug, serde::Deserialize)]
    #[serde(rename_all = "PascalCase")]
    struct Output {
        id: Option<String>,
    }

    fn pipeline(connector: &CaptureConnector) -> Pipeline {
        Pipeline::with_connector(ClientConfig::default(), &KENDRA, connector.clone())
            .credentials_provider(StaticCredentialsProvider::new(
                Credentials::new("AKID", "secret").with_session_token("tok"),
            ))
    }

    fn request() -> WireRequest {
        JsonRpc {
            target_prefix: "AWSKendraFrontendService",
        }
        .request("DescribeIndex", &Empty {})
        .unwrap()
    }

    #[tokio::test]
    async fn test_should_attach_standard_headers() {
        let connector = CaptureConnector::new();
        connector.push_json(200, r#"{"Id":"abc"}"#);

        let out: Output = pipeline(&connector)
            .execute_json::<Output, ErrorResponse>("DescribeIndex", request())
            .await
            .unwrap();
        assert_eq!(out.id.as_deref(), Some("abc"));

        let sent = connector.last_request().unwrap();
        assert_eq!(sent.uri, "https://kendra.us-east-1.amazonaws.com/");
        assert_eq!(sent.header("content-type"), Some("application/x-amz-json-1.1"));
        assert_eq!(sent.header("content-length"), Some("2"));
        assert_eq!(sent.header("x-amz-security-token"), Some("tok"));
        assert!(sent.header("user-agent").unwrap().starts_with("stratus/"));
        assert_eq!(sent.header(INVOCATION_ID_HEADER).unwrap().len(), 36);
    }

    #[tokio::test]
    async fn test_should_translate_error_responses() {
        let connector = CaptureConnector::new();
        connector.push_json(
            400,
            r#"{"__type":"com.amazonaws.kendra#ValidationException","Message":"bad id"}"#,
        );

        let err = pipeline(&connector)
            .execute::<ErrorResponse>("DescribeIndex", request())
            .await
            .unwrap_err();
        let service = err.into_service_error().unwrap();
        assert_eq!(service.code, "ValidationException");
        assert_eq!(service.message.as_deref(), Some("bad id"));
    }

    #[tokio::test]
    async fn test_should_reject_checksum_mismatch() {
        let connector = CaptureConnector::new();
        let response = http::Response::builder()
            .status(200)
            .header("x-amz-crc32", "1")
            .body(Bytes::from_static(b"{}"))
            .unwrap();
        connector.push_response(response);

        let err = pipeline(&connector)
            .execute::<ErrorResponse>("DescribeIndex", request())
            .await
            .unwrap_err();
        assert!(matches!(err, SdkError::Crc32Mismatch { expected: 1, .. }));
    }

    #[tokio::test]
    async fn test_should_report_unparseable_output() {
        let connector = CaptureConnector::new();
        connector.push_json(200, r#"{"Id":42}"#);

        let err = pipeline(&connector)
            .execute_json::<Output, ErrorResponse>("DescribeIndex", request())
            .await
            .unwrap_err();
        assert!(matches!(err, SdkError::Unmarshal(_)));
    }

    #[derive(Debug)]
    struct NoCredentials;

    impl CredentialsProvider for NoCredentials {
        fn provide_credentials(&self) -> Result<Credentials, AuthError> {
            Err(AuthError::CredentialsNotLoaded("none".to_owned()))
        }
    }

    #[tokio::test]
    async fn test_should_fail_before_dispatch_without_credentials() {
        let connector = CaptureConnector::new();
        let err = pipeline(&connector)
            .credentials_provider(NoCredentials)
            .execute::<ErrorResponse>("DescribeIndex", request())
            .await
            .unwrap_err();
        assert!(matches!(err, SdkError::Credentials(_)));
        assert!(connector.requests().is_empty());
    }

    #[tokio::test]
    async fn test_should_append_user_agent_suffix() {
        let connector = CaptureConnector::new();
        let config = ClientConfig::builder().user_agent_suffix("app/2").build();
        Pipeline::with_connector(config, &KENDRA, connector.clone())
            .execute::<ErrorResponse>("DescribeIndex", request())
            .await
            .unwrap();
        let sent = connector.last_request().unwrap();
        assert!(sent.header("user-agent").unwrap().ends_with(" app/2"));
    }

    #[tokio::test]
    async fn test_should_prefer_per_call_credentials() {
        let connector = CaptureConnector::new();
        let pipeline = pipeline(&connector).credentials_provider(NoCredentials);
        let override_provider = StaticCredentialsProvider::new(
            Credentials::new("AKID2", "secret2").with_session_token("override"),
        );

        pipeline
            .invoke::<ErrorResponse, _>("DescribeIndex", Some(&override_provider), || Ok(request()))
            .await
            .unwrap();
        let sent = connector.last_request().unwrap();
        assert_eq!(sent.header("x-amz-security-token"), Some("override"));

        // The pipeline's own provider is still used without an override.
        let err = pipeline
            .execute::<ErrorResponse>("DescribeIndex", request())
            .await
            .unwrap_err();
        assert!(matches!(err, SdkError::Credentials(_)));
        assert_eq!(connector.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_should_report_marshall_failure_before_credentials() {
        let connector = CaptureConnector::new();
        let err = pipeline(&connector)
            .credentials_provider(NoCredentials)
            .invoke::<ErrorResponse, _>("DescribeIndex", None, || {
                Err(BuildError::MissingField("IndexId"))
            })
            .await
            .unwrap_err();
        assert!(matches!(err, SdkError::Build(BuildError::MissingField("IndexId"))));
        assert!(connector.requests().is_empty());
    }

    #[derive(Debug, Clone, Default)]
    struct LogBuffer(Arc<parking_lot::Mutex<Vec<u8>>>);

    impl std::io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_should_log_phase_timings() {
        let logs = LogBuffer::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();

        let connector = CaptureConnector::new();
        connector.push_json(200, "{}");
        tracing::subscriber::with_default(subscriber, || {
            runtime
                .block_on(pipeline(&connector).execute::<ErrorResponse>("DescribeIndex", request()))
                .unwrap();
        });

        let output = String::from_utf8(logs.0.lock().clone()).unwrap();
        assert!(output.contains("received response"));
        assert!(output.contains("marshall_us="));
        assert!(output.contains("credentials_us="));
        assert!(output.contains("execute_us="));
        assert!(output.contains("DescribeIndex"));
    }
}

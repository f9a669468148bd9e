//! In-memory transport for tests.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use parking_lot::Mutex;

use crate::connector::HttpConnector;
use crate::error::DispatchError;

/// A request as seen by [`CaptureConnector`].
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    /// Method.
    pub method: http::Method,
    /// Full URI.
    pub uri: http::Uri,
    /// Headers.
    pub headers: http::HeaderMap,
    /// Body.
    pub body: Bytes,
}

impl CapturedRequest {
    /// A header as a string.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// The URI path, still percent-encoded.
    #[must_use]
    pub fn path(&self) -> &str {
        self.uri.path()
    }

    /// The host and port, including any host prefix.
    #[must_use]
    pub fn host(&self) -> &str {
        self.uri.authority().map_or("", http::uri::Authority::as_str)
    }

    /// Decoded query parameters, in order.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        self.uri
            .query()
            .map(|q| form_urlencoded::parse(q.as_bytes()).into_owned().collect())
            .unwrap_or_default()
    }

    /// The body parsed as JSON, or `Null` when empty.
    #[must_use]
    pub fn body_json(&self) -> serde_json::Value {
        if self.body.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&self.body).unwrap_or(serde_json::Value::Null)
        }
    }
}

#[derive(Debug, Default)]
struct State {
    requests: Vec<CapturedRequest>,
    responses: VecDeque<Result<http::Response<Bytes>, DispatchError>>,
}

/// Records every request and replays queued responses.
///
/// When the queue is empty it answers `200 {}`.
#[derive(Debug, Clone, Default)]
pub struct CaptureConnector {
    state: Arc<Mutex<State>>,
}

impl CaptureConnector {
    /// Create an empty connector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a JSON response.
    pub fn push_json(&self, status: u16, body: &'static str) {
        let response = http::Response::builder()
            .status(status)
            .header("content-type", "application/json")
            .body(Bytes::from_static(body.as_bytes()))
            .expect("valid canned response");
        self.push_response(response);
    }

    /// Queue an arbitrary response.
    pub fn push_response(&self, response: http::Response<Bytes>) {
        self.state.lock().responses.push_back(Ok(response));
    }

    /// Queue a transport failure.
    pub fn push_error(&self, error: DispatchError) {
        self.state.lock().responses.push_back(Err(error));
    }

    /// Every request received so far.
    #[must_use]
    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.state.lock().requests.clone()
    }

    /// The most recent request.
    #[must_use]
    pub fn last_request(&self) -> Option<CapturedRequest> {
        self.state.lock().requests.last().cloned()
    }
}

#[async_trait]
impl HttpConnector for CaptureConnector {
    async fn call(
        &self,
        request: http::Request<Bytes>,
    ) -> Result<http::Response<Bytes>, DispatchError> {
        let (parts, body) = request.into_parts();
        let mut state = self.state.lock();
        state.requests.push(CapturedRequest {
            method: parts.method,
            uri: parts.uri,
            headers: parts.headers,
            body,
        });
        state.responses.pop_front().unwrap_or_else(|| {
            Ok(http::Response::new(Bytes::from_static(b"{}")))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_should_split_captured_uri() {
        let connector = CaptureConnector::new();
        let request = http::Request::builder()
            .uri("https://routes.geo.us-east-1.amazonaws.com:8443/tags/a%2Fb?tagKeys=x&tagKeys=y%20z")
            .body(Bytes::new())
            .unwrap();
        connector.call(request).await.unwrap();

        let sent = connector.last_request().unwrap();
        assert_eq!(sent.host(), "routes.geo.us-east-1.amazonaws.com:8443");
        assert_eq!(sent.path(), "/tags/a%2Fb");
        assert_eq!(
            sent.query_pairs(),
            vec![
                ("tagKeys".to_owned(), "x".to_owned()),
                ("tagKeys".to_owned(), "y z".to_owned()),
            ]
        );
    }

    #[tokio::test]
    async fn test_should_read_origin_form_uri() {
        let connector = CaptureConnector::new();
        let request = http::Request::builder()
            .uri("/maps/v0/list-maps")
            .body(Bytes::new())
            .unwrap();
        connector.call(request).await.unwrap();

        let sent = connector.last_request().unwrap();
        assert_eq!(sent.host(), "");
        assert_eq!(sent.path(), "/maps/v0/list-maps");
        assert!(sent.query_pairs().is_empty());
    }
}

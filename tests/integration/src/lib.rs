//! End-to-end tests of the Stratus clients.
//!
//! Each test starts a [`MockServer`] on an ephemeral local port and drives a
//! real client (reqwest transport, full pipeline) against it. The server
//! records every request and answers with a canned response.
//!
//! Run them with:
//! ```text
//! cargo test -p stratus-integration
//! ```

mod test_kendra;
mod test_location;

use std::net::SocketAddr;
use std::sync::{Arc, Once};

use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use parking_lot::Mutex;
use stratus_auth::{Credentials, StaticCredentialsProvider};
use stratus_core::ClientConfig;
use stratus_http::{Pipeline, ReqwestConnector, ServiceMetadata};
use stratus_kendra::KendraClient;
use stratus_location::LocationClient;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

static INIT: Once = Once::new();

/// Initialize tracing (once).
fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// A request as received by the server.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// Method.
    pub method: http::Method,
    /// Origin-form URI: path and query.
    pub uri: http::Uri,
    /// Headers.
    pub headers: http::HeaderMap,
    /// Body.
    pub body: Bytes,
}

impl RecordedRequest {
    /// A header as a string.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// The body as JSON, `Null` when empty.
    #[must_use]
    pub fn body_json(&self) -> serde_json::Value {
        if self.body.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&self.body).expect("request body should be JSON")
        }
    }
}

/// A canned response.
#[derive(Debug, Clone)]
pub struct MockResponse {
    status: u16,
    headers: Vec<(&'static str, String)>,
    body: Bytes,
}

impl MockResponse {
    /// A JSON response.
    #[must_use]
    pub fn json(status: u16, body: &str) -> Self {
        Self {
            status,
            headers: vec![("content-type", "application/json".to_owned())],
            body: Bytes::copy_from_slice(body.as_bytes()),
        }
    }

    /// A raw payload with its media type.
    #[must_use]
    pub fn blob(content_type: &str, body: &'static [u8]) -> Self {
        Self {
            status: 200,
            headers: vec![("content-type", content_type.to_owned())],
            body: Bytes::from_static(body),
        }
    }

    /// Add a header.
    #[must_use]
    pub fn header(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.headers.push((name, value.into()));
        self
    }

    /// Add an `x-amz-crc32` header matching the body.
    #[must_use]
    pub fn with_crc32(self) -> Self {
        let crc = crc32fast::hash(&self.body);
        self.header("x-amz-crc32", crc.to_string())
    }

    fn into_response(self) -> http::Response<Full<Bytes>> {
        let mut builder = http::Response::builder().status(self.status);
        for (name, value) in self.headers {
            builder = builder.header(name, value);
        }
        builder
            .body(Full::new(self.body))
            .expect("canned response should be valid")
    }
}

type Responder = dyn Fn(&RecordedRequest) -> MockResponse + Send + Sync;

/// An HTTP/1 server on `127.0.0.1` answering every request with a responder.
#[derive(Debug)]
pub struct MockServer {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    task: JoinHandle<()>,
}

impl MockServer {
    /// Bind an ephemeral port and start serving.
    pub async fn start(
        responder: impl Fn(&RecordedRequest) -> MockResponse + Send + Sync + 'static,
    ) -> Self {
        init_tracing();

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("should bind an ephemeral port");
        let addr = listener.local_addr().expect("listener should have an address");
        let requests = Arc::new(Mutex::new(Vec::new()));
        let responder: Arc<Responder> = Arc::new(responder);

        let recorded = Arc::clone(&requests);
        let task = tokio::spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                let responder = Arc::clone(&responder);
                let recorded = Arc::clone(&recorded);
                let service = service_fn(move |req: http::Request<Incoming>| {
                    let responder = Arc::clone(&responder);
                    let recorded = Arc::clone(&recorded);
                    async move {
                        let (parts, body) = req.into_parts();
                        let body = body.collect().await?.to_bytes();
                        let request = RecordedRequest {
                            method: parts.method,
                            uri: parts.uri,
                            headers: parts.headers,
                            body,
                        };
                        let response = responder(&request);
                        recorded.lock().push(request);
                        Ok::<_, hyper::Error>(response.into_response())
                    }
                });

                tokio::spawn(async move {
                    let _ = http1::Builder::new()
                        .serve_connection(TokioIo::new(stream), service)
                        .await;
                });
            }
        });

        Self {
            addr,
            requests,
            task,
        }
    }

    /// Serve the same response to every request.
    pub async fn respond_with(response: MockResponse) -> Self {
        Self::start(move |_| response.clone()).await
    }

    /// Base URL of the server.
    #[must_use]
    pub fn endpoint_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Requests received so far.
    #[must_use]
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().clone()
    }

    /// The most recent request.
    #[must_use]
    pub fn last_request(&self) -> RecordedRequest {
        self.requests
            .lock()
            .last()
            .cloned()
            .expect("server should have received a request")
    }

    /// Client configuration pointing at this server.
    ///
    /// Host prefixes are disabled: `routes.127.0.0.1` does not resolve.
    #[must_use]
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::builder()
            .endpoint_url(self.endpoint_url())
            .host_prefix_injection(false)
            .timeout_ms(5_000)
            .build()
    }
}

impl Drop for MockServer {
    fn drop(&mut self) {
        self.task.abort();
    }
}

fn pipeline(server: &MockServer, metadata: &'static ServiceMetadata) -> Pipeline {
    // Loopback traffic must not go through an `HTTP_PROXY` from the environment.
    let client = reqwest::Client::builder()
        .no_proxy()
        .timeout(server.client_config().timeout())
        .build()
        .expect("reqwest client should build");
    Pipeline::with_connector(
        server.client_config(),
        metadata,
        ReqwestConnector::from_client(client),
    )
    .credentials_provider(StaticCredentialsProvider::new(
        Credentials::new("test", "test").with_session_token("session"),
    ))
}

/// A Kendra client talking to `server`.
#[must_use]
pub fn kendra_client(server: &MockServer) -> KendraClient {
    KendraClient::with_pipeline(pipeline(server, &stratus_kendra::marshall::METADATA))
}

/// A Location client talking to `server`.
#[must_use]
pub fn location_client(server: &MockServer) -> LocationClient {
    LocationClient::with_pipeline(pipeline(server, &stratus_location::marshall::METADATA))
}

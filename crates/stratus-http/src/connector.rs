//! HTTP transport.
//!
//! The pipeline talks to the network only through [`HttpConnector`], which
//! uses `#[async_trait]` so it can be held as `Arc<dyn HttpConnector>`.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;

use crate::error::DispatchError;

/// Sends a request and buffers the whole response.
#[async_trait]
pub trait HttpConnector: Send + Sync + fmt::Debug {
    /// Send `request`.
    async fn call(&self, request: http::Request<Bytes>)
    -> Result<http::Response<Bytes>, DispatchError>;
}

/// [`HttpConnector`] backed by a pooled `reqwest` client.
#[derive(Debug, Clone)]
pub struct ReqwestConnector {
    client: reqwest::Client,
}

impl ReqwestConnector {
    /// Create a connector with the given request timeout.
    pub fn new(timeout: Duration) -> Result<Self, DispatchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DispatchError::Io(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client })
    }

    /// Wrap an existing client.
    #[must_use]
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

fn classify(error: &reqwest::Error) -> DispatchError {
    if error.is_timeout() {
        DispatchError::Timeout(error.to_string())
    } else if error.is_connect() {
        DispatchError::Connect(error.to_string())
    } else {
        DispatchError::Io(error.to_string())
    }
}

#[async_trait]
impl HttpConnector for ReqwestConnector {
    async fn call(
        &self,
        request: http::Request<Bytes>,
    ) -> Result<http::Response<Bytes>, DispatchError> {
        let request = reqwest::Request::try_from(request)
            .map_err(|e| DispatchError::Io(format!("invalid request: {e}")))?;
        let response = self.client.execute(request).await.map_err(|e| classify(&e))?;

        let status = response.status();
        let version = response.version();
        let headers = response.headers().clone();
        let body = response.bytes().await.map_err(|e| classify(&e))?;

        let mut out = http::Response::new(body);
        *out.status_mut() = status;
        *out.version_mut() = version;
        *out.headers_mut() = headers;
        Ok(out)
    }
}

//! Protocol-neutral wire requests and the two JSON protocols that build them.

use bytes::Bytes;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Serialize;

use crate::error::BuildError;

/// Content type of `awsJson1_1` requests.
pub const AWS_JSON_1_1: &str = "application/x-amz-json-1.1";

/// Content type of `restJson1` request bodies.
pub const APPLICATION_JSON: &str = "application/json";

/// RFC 3986 unreserved characters pass through; everything else is encoded.
const UNRESERVED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// A fully marshalled request, before endpoint resolution and signing.
#[derive(Debug, Clone)]
pub struct WireRequest {
    /// HTTP method.
    pub method: http::Method,
    /// Encoded path, starting with `/`.
    pub path: String,
    /// Query parameters, unencoded.
    pub query: Vec<(String, String)>,
    /// Operation-specific headers.
    pub headers: http::HeaderMap,
    /// Request body.
    pub body: Bytes,
    /// Content type of `body`, if there is one.
    pub content_type: Option<&'static str>,
    /// Prefix prepended to the endpoint host, e.g. `routes.`.
    pub host_prefix: Option<&'static str>,
}

impl WireRequest {
    /// An empty request.
    #[must_use]
    pub fn new(method: http::Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            headers: http::HeaderMap::new(),
            body: Bytes::new(),
            content_type: None,
            host_prefix: None,
        }
    }

    /// Append a query parameter.
    #[must_use]
    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }

    /// Append a query parameter when `value` is set.
    #[must_use]
    pub fn query_opt(self, name: &str, value: Option<impl ToString>) -> Self {
        match value {
            Some(v) => self.query(name, v.to_string()),
            None => self,
        }
    }

    /// Set a header.
    pub fn header(mut self, name: &'static str, value: &str) -> Result<Self, BuildError> {
        let value = http::HeaderValue::from_str(value).map_err(|e| BuildError::InvalidHeader {
            name: name.to_owned(),
            reason: e.to_string(),
        })?;
        self.headers.insert(name, value);
        Ok(self)
    }

    /// Serialize `body` as the JSON payload.
    pub fn json_body<T: Serialize>(
        mut self,
        body: &T,
        content_type: &'static str,
    ) -> Result<Self, BuildError> {
        self.body = Bytes::from(serde_json::to_vec(body)?);
        self.content_type = Some(content_type);
        Ok(self)
    }

    /// Set the host prefix.
    #[must_use]
    pub fn host_prefix(mut self, prefix: &'static str) -> Self {
        self.host_prefix = Some(prefix);
        self
    }

    /// The path with the encoded query string appended.
    #[must_use]
    pub fn path_and_query(&self) -> String {
        if self.query.is_empty() {
            return self.path.clone();
        }
        let query = self
            .query
            .iter()
            .map(|(k, v)| {
                format!(
                    "{}={}",
                    utf8_percent_encode(k, UNRESERVED),
                    utf8_percent_encode(v, UNRESERVED)
                )
            })
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{query}", self.path)
    }
}

/// The `awsJson1_1` protocol: every operation is a `POST /` naming its target
/// in `X-Amz-Target`.
#[derive(Debug, Clone, Copy)]
pub struct JsonRpc {
    /// Target prefix, e.g. `AWSKendraFrontendService`.
    pub target_prefix: &'static str,
}

impl JsonRpc {
    /// Build the request for `operation`.
    ///
    /// # Examples
    ///
    /// ```
    /// use stratus_http::JsonRpc;
    ///
    /// #[derive(serde::Serialize)]
    /// struct Empty {}
    ///
    /// let req = JsonRpc { target_prefix: "AWSKendraFrontendService" }
    ///     .request("ListIndices", &Empty {})
    ///     .unwrap();
    /// assert_eq!(req.headers["x-amz-target"], "AWSKendraFrontendService.ListIndices");
    /// assert_eq!(&req.body[..], b"{}");
    /// ```
    pub fn request<T: Serialize>(
        &self,
        operation: &str,
        input: &T,
    ) -> Result<WireRequest, BuildError> {
        WireRequest::new(http::Method::POST, "/")
            .header(
                "x-amz-target",
                &format!("{}.{operation}", self.target_prefix),
            )?
            .json_body(input, AWS_JSON_1_1)
    }
}

/// Start a `restJson1` request. Add a body with
/// [`WireRequest::json_body`] only when the operation has body members.
#[must_use]
pub fn rest_json_request(method: http::Method, path: String) -> WireRequest {
    WireRequest::new(method, path)
}

/// Expands a `restJson1` URI template such as
/// `/maps/v0/maps/{MapName}/tiles/{Z}/{X}/{Y}`.
#[derive(Debug, Clone)]
pub struct RestPath {
    template: &'static str,
    labels: Vec<(&'static str, String)>,
}

impl RestPath {
    /// Start expanding `template`.
    #[must_use]
    pub fn new(template: &'static str) -> Self {
        Self {
            template,
            labels: Vec::new(),
        }
    }

    /// Bind a label. The value is percent-encoded, including `/`.
    #[must_use]
    pub fn label(mut self, name: &'static str, value: impl AsRef<str>) -> Self {
        self.labels.push((
            name,
            utf8_percent_encode(value.as_ref(), UNRESERVED).to_string(),
        ));
        self
    }

    /// Produce the encoded path.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::MissingField`] if a label is unbound or empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use stratus_http::RestPath;
    ///
    /// let path = RestPath::new("/maps/v0/maps/{MapName}/glyphs/{FontStack}/{FontUnicodeRange}")
    ///     .label("MapName", "city")
    ///     .label("FontStack", "Noto Sans Regular,Arial")
    ///     .label("FontUnicodeRange", "0-255.pbf")
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(path, "/maps/v0/maps/city/glyphs/Noto%20Sans%20Regular%2CArial/0-255.pbf");
    /// ```
    pub fn build(&self) -> Result<String, BuildError> {
        let mut out = String::with_capacity(self.template.len() + 32);
        let mut rest: &'static str = self.template;

        while let Some(start) = rest.find('{') {
            out.push_str(&rest[..start]);
            let after = &rest[start + 1..];
            let end = after
                .find('}')
                .ok_or_else(|| BuildError::InvalidUri(format!("unclosed label in {}", self.template)))?;
            let name = &after[..end];
            let value = self
                .labels
                .iter()
                .find(|(label, _)| *label == name)
                .map(|(_, value)| value.as_str())
                .filter(|value| !value.is_empty())
                .ok_or(BuildError::MissingField(name))?;
            out.push_str(value);
            rest = &after[end + 1..];
        }
        out.push_str(rest);

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    #[serde(rename_all = "PascalCase")]
    struct DescribeIndex {
        id: String,
    }

    #[test]
    fn test_should_build_json_rpc_request() {
        let req = JsonRpc {
            target_prefix: "AWSKendraFrontendService",
        }
        .request(
            "DescribeIndex",
            &DescribeIndex {
                id: "idx".to_owned(),
            },
        )
        .unwrap();

        assert_eq!(req.method, http::Method::POST);
        assert_eq!(req.path, "/");
        assert_eq!(
            req.headers["x-amz-target"],
            "AWSKendraFrontendService.DescribeIndex"
        );
        assert_eq!(req.content_type, Some(AWS_JSON_1_1));
        assert_eq!(&req.body[..], br#"{"Id":"idx"}"#);
        assert!(req.host_prefix.is_none());
    }

    #[test]
    fn test_should_encode_reserved_characters_in_labels() {
        let path = RestPath::new("/tags/{ResourceArn}")
            .label(
                "ResourceArn",
                "arn:aws:geo:us-east-1:123456789012:map/city map",
            )
            .build()
            .unwrap();
        assert_eq!(
            path,
            "/tags/arn%3Aaws%3Ageo%3Aus-east-1%3A123456789012%3Amap%2Fcity%20map"
        );
    }

    #[test]
    fn test_should_keep_label_values_within_one_segment() {
        let path = RestPath::new("/maps/v0/maps/{MapName}/tiles/{Z}/{X}/{Y}")
            .label("MapName", "../city")
            .label("Z", "3")
            .label("X", "1/2")
            .label("Y", "4")
            .build()
            .unwrap();
        assert_eq!(path, "/maps/v0/maps/..%2Fcity/tiles/3/1%2F2/4");
    }

    #[test]
    fn test_should_reject_empty_label() {
        let err = RestPath::new("/maps/v0/maps/{MapName}")
            .label("MapName", "")
            .build()
            .unwrap_err();
        assert!(matches!(err, BuildError::MissingField("MapName")));
    }

    #[test]
    fn test_should_reject_unbound_label() {
        let err = RestPath::new("/maps/v0/maps/{MapName}/tiles/{Z}/{X}/{Y}")
            .label("MapName", "m")
            .label("Z", "1")
            .label("Y", "3")
            .build()
            .unwrap_err();
        assert!(matches!(err, BuildError::MissingField("X")));
    }

    #[test]
    fn test_should_append_encoded_query() {
        let req = rest_json_request(http::Method::DELETE, "/tags/arn".to_owned())
            .query("tagKeys", "env")
            .query("tagKeys", "team name")
            .query_opt("MaxResults", None::<i32>);
        assert_eq!(req.path_and_query(), "/tags/arn?tagKeys=env&tagKeys=team%20name");
    }

    #[test]
    fn test_should_reject_invalid_header_value() {
        let err = WireRequest::new(http::Method::GET, "/")
            .header("x-custom", "line\nbreak")
            .unwrap_err();
        assert!(matches!(err, BuildError::InvalidHeader { .. }));
    }
}

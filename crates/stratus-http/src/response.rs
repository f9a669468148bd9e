//! Response interpretation shared by every protocol.

use serde::de::DeserializeOwned;

/// Header carrying the CRC32 of the response body.
pub const CRC32_HEADER: &str = "x-amz-crc32";

/// Unmarshal a JSON body. An empty body is read as `{}`.
///
/// Unknown members are ignored and absent optional members stay `None`.
pub fn parse_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, serde_json::Error> {
    if body.iter().all(u8::is_ascii_whitespace) {
        serde_json::from_slice(b"{}")
    } else {
        serde_json::from_slice(body)
    }
}

/// Compare the `x-amz-crc32` header, when present, against the body.
///
/// Returns `Err((expected, actual))` on mismatch.
pub fn verify_crc32(headers: &http::HeaderMap, body: &[u8]) -> Result<(), (u32, u32)> {
    let Some(expected) = headers
        .get(CRC32_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u32>().ok())
    else {
        return Ok(());
    };

    let actual = crc32fast::hash(body);
    if expected == actual {
        Ok(())
    } else {
        Err((expected, actual))
    }
}

/// Read a header as a string.
#[must_use]
pub fn header_str<'a>(headers: &'a http::HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "PascalCase")]
    struct ListOutput {
        #[serde(default)]
        next_token: Option<String>,
        #[serde(default)]
        items: Vec<String>,
    }

    #[test]
    fn test_should_parse_empty_body_as_empty_object() {
        let out: ListOutput = parse_json(b"").unwrap();
        assert!(out.next_token.is_none());
        assert!(out.items.is_empty());
    }

    #[test]
    fn test_should_ignore_unknown_members() {
        let out: ListOutput =
            parse_json(br#"{"Items":["a"],"NextToken":"t","Brand":"new"}"#).unwrap();
        assert_eq!(out.items, vec!["a"]);
        assert_eq!(out.next_token.as_deref(), Some("t"));
    }

    #[test]
    fn test_should_accept_matching_crc32() {
        let body = br#"{"IndexConfigurationSummaryItems":[]}"#;
        let mut headers = http::HeaderMap::new();
        headers.insert(
            CRC32_HEADER,
            http::HeaderValue::from(crc32fast::hash(body)),
        );
        assert!(verify_crc32(&headers, body).is_ok());
    }

    #[test]
    fn test_should_detect_crc32_mismatch() {
        let mut headers = http::HeaderMap::new();
        headers.insert(CRC32_HEADER, http::HeaderValue::from_static("12345"));
        let err = verify_crc32(&headers, b"{}").unwrap_err();
        assert_eq!(err, (12345, crc32fast::hash(b"{}")));
    }

    #[test]
    fn test_should_skip_crc32_without_header() {
        assert!(verify_crc32(&http::HeaderMap::new(), b"anything").is_ok());
    }
}

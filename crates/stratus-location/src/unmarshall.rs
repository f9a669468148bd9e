//! Response unmarshalling for Amazon Location.
//!
//! JSON outputs go through [`stratus_http::parse_json`]; only the map
//! resources need a dedicated reader.

use bytes::Bytes;
use stratus_http::header_str;
use stratus_location_model::output::MapBlobOutput;
use tracing::debug;

/// Read a `GetMap*` response: the body is the payload as is.
#[must_use]
pub fn blob_output(response: http::Response<Bytes>) -> MapBlobOutput {
    let content_type = header_str(response.headers(), http::header::CONTENT_TYPE.as_str())
        .map(ToOwned::to_owned);
    let blob = response.into_body().to_vec();
    debug!(
        bytes = blob.len(),
        content_type = content_type.as_deref().unwrap_or("-"),
        "read map resource"
    );
    MapBlobOutput { blob, content_type }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_keep_payload_and_content_type() {
        let response = http::Response::builder()
            .header("content-type", "application/x-protobuf")
            .body(Bytes::from_static(&[0x1a, 0x02, 0x08, 0x01]))
            .unwrap();

        let out = blob_output(response);
        assert_eq!(out.blob, vec![0x1a, 0x02, 0x08, 0x01]);
        assert_eq!(out.content_type.as_deref(), Some("application/x-protobuf"));
    }

    #[test]
    fn test_should_allow_missing_content_type() {
        let out = blob_output(http::Response::new(Bytes::new()));
        assert!(out.blob.is_empty());
        assert!(out.content_type.is_none());
    }
}

//! Request marshalling for Kendra.
//!
//! Kendra uses `awsJson1_1`, so every operation marshals the same way: a
//! `POST /` carrying the whole input as the JSON body.

use serde::Serialize;
use stratus_http::{BuildError, JsonRpc, ServiceMetadata, WireRequest};
use stratus_kendra_model::{API_VERSION, ENDPOINT_PREFIX, KendraOperation, TARGET_PREFIX};

/// Endpoint and signing metadata of the Kendra frontend service.
pub static METADATA: ServiceMetadata = ServiceMetadata {
    service_id: "kendra",
    endpoint_prefix: ENDPOINT_PREFIX,
    signing_name: ENDPOINT_PREFIX,
    api_version: API_VERSION,
};

const PROTOCOL: JsonRpc = JsonRpc {
    target_prefix: TARGET_PREFIX,
};

/// Build the wire request for `operation`.
pub fn request<T: Serialize>(
    operation: KendraOperation,
    input: &T,
) -> Result<WireRequest, BuildError> {
    PROTOCOL.request(operation.as_str(), input)
}

#[cfg(test)]
mod tests {
    use stratus_kendra_model::input::{BatchDeleteDocumentInput, ListIndicesInput};

    use super::*;

    #[test]
    fn test_should_marshall_target_and_body() {
        let req = request(
            KendraOperation::BatchDeleteDocument,
            &BatchDeleteDocumentInput {
                index_id: "idx".to_owned(),
                document_id_list: vec!["a".to_owned(), "b".to_owned()],
            },
        )
        .unwrap();

        assert_eq!(req.method, http::Method::POST);
        assert_eq!(req.path, "/");
        assert_eq!(
            req.headers["x-amz-target"],
            "AWSKendraFrontendService.BatchDeleteDocument"
        );
        assert_eq!(req.content_type, Some("application/x-amz-json-1.1"));
        assert_eq!(
            &req.body[..],
            br#"{"IndexId":"idx","DocumentIdList":["a","b"]}"#
        );
    }

    #[test]
    fn test_should_send_empty_object_for_empty_input() {
        let req = request(KendraOperation::ListIndices, &ListIndicesInput::default()).unwrap();
        assert_eq!(&req.body[..], b"{}");
    }
}

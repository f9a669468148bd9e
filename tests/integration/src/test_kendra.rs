//! Kendra end to end: `awsJson1_1` over a real socket.

#[cfg(test)]
mod tests {
    use stratus_kendra::model::input::{DescribeIndexInput, ListIndicesInput, QueryInput};
    use stratus_kendra::model::types::{AttributeFilter, DocumentAttribute, DocumentAttributeValue};
    use stratus_kendra::model::{KendraErrorCode, KendraOperation};

    use crate::{MockResponse, MockServer, kendra_client};

    const QUERY_RESPONSE: &str = r#"{
        "QueryId": "q-1",
        "TotalNumberOfResults": 1,
        "ResultItems": [{
            "Id": "r-1",
            "Type": "DOCUMENT",
            "DocumentId": "doc-7",
            "DocumentTitle": {"Text": "Getting started"},
            "DocumentURI": "https://docs.example.com/start",
            "FeedbackToken": "tok"
        }]
    }"#;

    #[tokio::test]
    async fn test_should_run_query_against_server() {
        let server =
            MockServer::respond_with(MockResponse::json(200, QUERY_RESPONSE).with_crc32()).await;
        let client = kendra_client(&server);

        let mut input = QueryInput::new("idx-1", "how do I start");
        input.page_size = Some(5);
        input.attribute_filter = Some(AttributeFilter::equals_to(DocumentAttribute::new(
            "_category",
            DocumentAttributeValue::string("guides"),
        )));
        let output = client.query(input).await.unwrap();

        assert_eq!(output.query_id.as_deref(), Some("q-1"));
        assert_eq!(output.total_number_of_results, Some(1));
        assert_eq!(output.result_items.len(), 1);
        let item = &output.result_items[0];
        assert_eq!(item.document_id.as_deref(), Some("doc-7"));
        assert_eq!(
            item.document_uri.as_deref(),
            Some("https://docs.example.com/start")
        );

        let request = server.last_request();
        assert_eq!(request.method, http::Method::POST);
        assert_eq!(request.uri.path(), "/");
        assert_eq!(
            request.header("x-amz-target"),
            Some("AWSKendraFrontendService.Query")
        );
        assert_eq!(
            request.header("content-type"),
            Some("application/x-amz-json-1.1")
        );
        assert!(
            request
                .header("user-agent")
                .is_some_and(|ua| ua.starts_with("stratus/"))
        );
        assert!(request.header("amz-sdk-invocation-id").is_some());

        let body = request.body_json();
        assert_eq!(body["IndexId"], "idx-1");
        assert_eq!(body["QueryText"], "how do I start");
        assert_eq!(body["PageSize"], 5);
        assert_eq!(body["AttributeFilter"]["EqualsTo"]["Key"], "_category");
    }

    #[tokio::test]
    async fn test_should_send_fresh_invocation_id_per_call() {
        let server =
            MockServer::respond_with(MockResponse::json(200, r#"{"IndexConfigurationSummaryItems":[]}"#))
                .await;
        let client = kendra_client(&server);

        client.list_indices(ListIndicesInput::default()).await.unwrap();
        client.list_indices(ListIndicesInput::default()).await.unwrap();

        let requests = server.requests();
        assert_eq!(requests.len(), 2);
        assert_ne!(
            requests[0].header("amz-sdk-invocation-id"),
            requests[1].header("amz-sdk-invocation-id")
        );
        assert!(requests.iter().all(|r| r.body_json() == serde_json::json!({})));
    }

    #[tokio::test]
    async fn test_should_surface_service_error() {
        let server = MockServer::respond_with(
            MockResponse::json(400, r#"{"message":"Index idx-9 not found"}"#)
                .header("x-amzn-errortype", "ResourceNotFoundException")
                .header("x-amzn-requestid", "req-42"),
        )
        .await;
        let client = kendra_client(&server);

        let err = client
            .describe_index(DescribeIndexInput {
                id: "idx-9".to_owned(),
            })
            .await
            .unwrap_err();

        let service = err.into_service_error().unwrap();
        assert_eq!(service.code, KendraErrorCode::ResourceNotFoundException);
        assert_eq!(service.message, "Index idx-9 not found");
        assert_eq!(service.status_code, http::StatusCode::BAD_REQUEST);
        assert_eq!(service.request_id.as_deref(), Some("req-42"));
        assert_eq!(
            server.last_request().header("x-amz-target"),
            Some(format!("AWSKendraFrontendService.{}", KendraOperation::DescribeIndex).as_str())
        );
    }

    #[tokio::test]
    async fn test_should_reject_corrupted_body() {
        let server = MockServer::respond_with(
            MockResponse::json(200, QUERY_RESPONSE).header("x-amz-crc32", "12345"),
        )
        .await;
        let client = kendra_client(&server);

        let err = client
            .query(QueryInput::new("idx-1", "anything"))
            .await
            .unwrap_err();

        match err {
            stratus_http::SdkError::Crc32Mismatch { expected, actual } => {
                assert_eq!(expected, 12345);
                assert_eq!(actual, crc32fast::hash(QUERY_RESPONSE.as_bytes()));
            }
            other => panic!("expected checksum mismatch, got {other:?}"),
        }
    }
}

//! The Kendra client facade.

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use stratus_auth::CredentialsProvider;
use stratus_core::ClientConfig;
use stratus_http::{DispatchError, Pipeline, SdkError};
use stratus_kendra_model::input::{
    BatchDeleteDocumentInput, BatchPutDocumentInput, CreateDataSourceInput, CreateFaqInput,
    CreateIndexInput, DeleteDataSourceInput, DeleteFaqInput, DeleteIndexInput,
    DescribeDataSourceInput, DescribeFaqInput, DescribeIndexInput, ListDataSourceSyncJobsInput,
    ListDataSourcesInput, ListFaqsInput, ListIndicesInput, ListTagsForResourceInput, QueryInput,
    StartDataSourceSyncJobInput, StopDataSourceSyncJobInput, SubmitFeedbackInput,
    TagResourceInput, UntagResourceInput, UpdateDataSourceInput, UpdateIndexInput,
};
use stratus_kendra_model::output::{
    BatchDeleteDocumentOutput, BatchPutDocumentOutput, CreateDataSourceOutput, CreateFaqOutput,
    CreateIndexOutput, DescribeDataSourceOutput, DescribeFaqOutput, DescribeIndexOutput,
    ListDataSourceSyncJobsOutput, ListDataSourcesOutput, ListFaqsOutput, ListIndicesOutput,
    ListTagsForResourceOutput, QueryOutput, StartDataSourceSyncJobOutput, TagResourceOutput,
    UntagResourceOutput,
};
use stratus_kendra_model::{KendraError, KendraOperation};

use crate::marshall::{self, METADATA};

/// Result of a Kendra operation.
pub type KendraResult<T> = Result<T, SdkError<KendraError>>;

/// Client for the Kendra frontend service.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct KendraClient {
    pipeline: Pipeline,
    credentials: Option<Arc<dyn CredentialsProvider>>,
}

impl KendraClient {
    /// Create a client with the default transport and credentials chain.
    pub fn new(config: ClientConfig) -> Result<Self, DispatchError> {
        Ok(Self::with_pipeline(Pipeline::new(config, &METADATA)?))
    }

    /// Create a client from the environment, honouring `AWS_ENDPOINT_URL_KENDRA`.
    pub fn from_env() -> Result<Self, DispatchError> {
        let config = ClientConfig::from_env()
            .with_service_endpoint(&METADATA.env_id(), |key| std::env::var(key).ok());
        Self::new(config)
    }

    /// Create a client over a preconfigured pipeline.
    #[must_use]
    pub fn with_pipeline(pipeline: Pipeline) -> Self {
        Self {
            pipeline,
            credentials: None,
        }
    }

    /// A client that signs its calls with `provider` instead of the
    /// pipeline's credentials. The connection pool is shared.
    #[must_use]
    pub fn with_credentials(&self, provider: impl CredentialsProvider + 'static) -> Self {
        Self {
            pipeline: self.pipeline.clone(),
            credentials: Some(Arc::new(provider)),
        }
    }

    /// The underlying pipeline.
    #[must_use]
    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    async fn call<I, O>(&self, operation: KendraOperation, input: &I) -> KendraResult<O>
    where
        I: Serialize,
        O: DeserializeOwned,
    {
        self.pipeline
            .invoke_json(operation.as_str(), self.credentials.as_deref(), || {
                marshall::request(operation, input)
            })
            .await
    }

    async fn call_void<I: Serialize>(
        &self,
        operation: KendraOperation,
        input: &I,
    ) -> KendraResult<()> {
        self.pipeline
            .invoke::<KendraError, _>(operation.as_str(), self.credentials.as_deref(), || {
                marshall::request(operation, input)
            })
            .await?;
        Ok(())
    }

    // -- Documents --

    /// Remove documents from an index.
    pub async fn batch_delete_document(
        &self,
        input: BatchDeleteDocumentInput,
    ) -> KendraResult<BatchDeleteDocumentOutput> {
        self.call(KendraOperation::BatchDeleteDocument, &input).await
    }

    /// Add or replace documents in an index.
    pub async fn batch_put_document(
        &self,
        input: BatchPutDocumentInput,
    ) -> KendraResult<BatchPutDocumentOutput> {
        self.call(KendraOperation::BatchPutDocument, &input).await
    }

    // -- Data sources --

    /// Create a data source connector.
    pub async fn create_data_source(
        &self,
        input: CreateDataSourceInput,
    ) -> KendraResult<CreateDataSourceOutput> {
        self.call(KendraOperation::CreateDataSource, &input).await
    }

    /// Delete a data source.
    pub async fn delete_data_source(&self, input: DeleteDataSourceInput) -> KendraResult<()> {
        self.call_void(KendraOperation::DeleteDataSource, &input)
            .await
    }

    /// Describe a data source.
    pub async fn describe_data_source(
        &self,
        input: DescribeDataSourceInput,
    ) -> KendraResult<DescribeDataSourceOutput> {
        self.call(KendraOperation::DescribeDataSource, &input).await
    }

    /// List the sync runs of a data source.
    pub async fn list_data_source_sync_jobs(
        &self,
        input: ListDataSourceSyncJobsInput,
    ) -> KendraResult<ListDataSourceSyncJobsOutput> {
        self.call(KendraOperation::ListDataSourceSyncJobs, &input)
            .await
    }

    /// List the data sources of an index.
    pub async fn list_data_sources(
        &self,
        input: ListDataSourcesInput,
    ) -> KendraResult<ListDataSourcesOutput> {
        self.call(KendraOperation::ListDataSources, &input).await
    }

    /// Start syncing a data source.
    pub async fn start_data_source_sync_job(
        &self,
        input: StartDataSourceSyncJobInput,
    ) -> KendraResult<StartDataSourceSyncJobOutput> {
        self.call(KendraOperation::StartDataSourceSyncJob, &input)
            .await
    }

    /// Stop a running sync.
    pub async fn stop_data_source_sync_job(
        &self,
        input: StopDataSourceSyncJobInput,
    ) -> KendraResult<()> {
        self.call_void(KendraOperation::StopDataSourceSyncJob, &input)
            .await
    }

    /// Update a data source.
    pub async fn update_data_source(&self, input: UpdateDataSourceInput) -> KendraResult<()> {
        self.call_void(KendraOperation::UpdateDataSource, &input)
            .await
    }

    // -- FAQs --

    /// Import an FAQ file from S3.
    pub async fn create_faq(&self, input: CreateFaqInput) -> KendraResult<CreateFaqOutput> {
        self.call(KendraOperation::CreateFaq, &input).await
    }

    /// Delete an FAQ.
    pub async fn delete_faq(&self, input: DeleteFaqInput) -> KendraResult<()> {
        self.call_void(KendraOperation::DeleteFaq, &input).await
    }

    /// Describe an FAQ.
    pub async fn describe_faq(&self, input: DescribeFaqInput) -> KendraResult<DescribeFaqOutput> {
        self.call(KendraOperation::DescribeFaq, &input).await
    }

    /// List the FAQs of an index.
    pub async fn list_faqs(&self, input: ListFaqsInput) -> KendraResult<ListFaqsOutput> {
        self.call(KendraOperation::ListFaqs, &input).await
    }

    // -- Indexes --

    /// Create an index. Creation is asynchronous; poll `describe_index`.
    pub async fn create_index(&self, input: CreateIndexInput) -> KendraResult<CreateIndexOutput> {
        self.call(KendraOperation::CreateIndex, &input).await
    }

    /// Delete an index.
    pub async fn delete_index(&self, input: DeleteIndexInput) -> KendraResult<()> {
        self.call_void(KendraOperation::DeleteIndex, &input).await
    }

    /// Describe an index.
    pub async fn describe_index(
        &self,
        input: DescribeIndexInput,
    ) -> KendraResult<DescribeIndexOutput> {
        self.call(KendraOperation::DescribeIndex, &input).await
    }

    /// List indexes.
    pub async fn list_indices(&self, input: ListIndicesInput) -> KendraResult<ListIndicesOutput> {
        self.call(KendraOperation::ListIndices, &input).await
    }

    /// Update an index.
    pub async fn update_index(&self, input: UpdateIndexInput) -> KendraResult<()> {
        self.call_void(KendraOperation::UpdateIndex, &input).await
    }

    // -- Query --

    /// Search an index.
    pub async fn query(&self, input: QueryInput) -> KendraResult<QueryOutput> {
        self.call(KendraOperation::Query, &input).await
    }

    /// Report clicks and relevance judgements for query results.
    pub async fn submit_feedback(&self, input: SubmitFeedbackInput) -> KendraResult<()> {
        self.call_void(KendraOperation::SubmitFeedback, &input).await
    }

    // -- Tagging --

    /// List the tags of an index, data source or FAQ.
    pub async fn list_tags_for_resource(
        &self,
        input: ListTagsForResourceInput,
    ) -> KendraResult<ListTagsForResourceOutput> {
        self.call(KendraOperation::ListTagsForResource, &input).await
    }

    /// Tag a resource.
    pub async fn tag_resource(&self, input: TagResourceInput) -> KendraResult<TagResourceOutput> {
        self.call(KendraOperation::TagResource, &input).await
    }

    /// Remove tags from a resource.
    pub async fn untag_resource(
        &self,
        input: UntagResourceInput,
    ) -> KendraResult<UntagResourceOutput> {
        self.call(KendraOperation::UntagResource, &input).await
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use serde_json::json;
    use stratus_auth::{Credentials, StaticCredentialsProvider};
    use stratus_http::test_util::CaptureConnector;
    use stratus_kendra_model::KendraErrorCode;
    use stratus_kendra_model::types::{
        ClickFeedback, DataSourceType, Document, RelevanceFeedback, RelevanceType, Tag,
    };

    use super::*;

    fn client(connector: &CaptureConnector) -> KendraClient {
        let config = ClientConfig::builder()
            .endpoint_url("http://localhost:4566")
            .build();
        KendraClient::with_pipeline(Pipeline::with_connector(
            config,
            &METADATA,
            connector.clone(),
        ))
    }

    #[tokio::test]
    async fn test_should_query_index() {
        let connector = CaptureConnector::new();
        connector.push_json(
            200,
            r#"{
                "QueryId": "q-1",
                "ResultItems": [{
                    "Id": "r-1",
                    "Type": "DOCUMENT",
                    "DocumentId": "doc-1",
                    "DocumentTitle": {"Text": "Reset your password"},
                    "FeedbackToken": "fb"
                }],
                "TotalNumberOfResults": 1
            }"#,
        );

        let out = client(&connector)
            .query(QueryInput {
                page_size: Some(5),
                ..QueryInput::new("idx", "password")
            })
            .await
            .unwrap();

        assert_eq!(out.query_id.as_deref(), Some("q-1"));
        assert_eq!(out.total_number_of_results, Some(1));
        assert_eq!(out.result_items[0].document_id.as_deref(), Some("doc-1"));

        let sent = connector.last_request().unwrap();
        assert_eq!(sent.uri, "http://localhost:4566/");
        assert_eq!(sent.header("x-amz-target"), Some("AWSKendraFrontendService.Query"));
        assert_eq!(
            sent.body_json(),
            json!({"IndexId": "idx", "QueryText": "password", "PageSize": 5})
        );
    }

    #[tokio::test]
    async fn test_should_put_documents_with_base64_blob() {
        let connector = CaptureConnector::new();
        connector.push_json(
            200,
            r#"{"FailedDocuments":[{"Id":"doc-2","ErrorCode":"InvalidRequest","ErrorMessage":"too big"}]}"#,
        );

        let out = client(&connector)
            .batch_put_document(BatchPutDocumentInput {
                index_id: "idx".to_owned(),
                role_arn: None,
                documents: vec![Document {
                    id: "doc-1".to_owned(),
                    blob: Some(b"hello".to_vec()),
                    ..Document::default()
                }],
            })
            .await
            .unwrap();

        assert_eq!(out.failed_documents.len(), 1);
        assert_eq!(out.failed_documents[0].error_message.as_deref(), Some("too big"));
        let sent = connector.last_request().unwrap();
        assert_eq!(sent.body_json()["Documents"][0]["Blob"], "aGVsbG8=");
    }

    #[tokio::test]
    async fn test_should_return_unit_for_void_operations() {
        let connector = CaptureConnector::new();
        connector.push_json(200, "");

        client(&connector)
            .delete_index(DeleteIndexInput {
                id: "idx".to_owned(),
            })
            .await
            .unwrap();

        let sent = connector.last_request().unwrap();
        assert_eq!(
            sent.header("x-amz-target"),
            Some("AWSKendraFrontendService.DeleteIndex")
        );
        assert_eq!(sent.body_json(), json!({"Id": "idx"}));
    }

    #[tokio::test]
    async fn test_should_submit_feedback_with_epoch_timestamps() {
        let connector = CaptureConnector::new();
        client(&connector)
            .submit_feedback(SubmitFeedbackInput {
                index_id: "idx".to_owned(),
                query_id: "q-1".to_owned(),
                click_feedback_items: vec![ClickFeedback {
                    result_id: "r-1".to_owned(),
                    click_time: Utc.timestamp_opt(1_600_000_000, 0).unwrap(),
                }],
                relevance_feedback_items: vec![RelevanceFeedback {
                    result_id: "r-1".to_owned(),
                    relevance_value: RelevanceType::Relevant,
                }],
            })
            .await
            .unwrap();

        let body = connector.last_request().unwrap().body_json();
        assert_eq!(body["ClickFeedbackItems"][0]["ClickTime"], 1_600_000_000.0);
        assert_eq!(body["RelevanceFeedbackItems"][0]["RelevanceValue"], "RELEVANT");
    }

    #[tokio::test]
    async fn test_should_surface_service_errors() {
        let connector = CaptureConnector::new();
        connector.push_json(
            400,
            r#"{"__type":"com.amazonaws.kendra#ResourceAlreadyExistException","Message":"exists"}"#,
        );

        let err = client(&connector)
            .create_data_source(CreateDataSourceInput {
                name: "wiki".to_owned(),
                index_id: "idx".to_owned(),
                data_source_type: DataSourceType::Custom,
                tags: vec![Tag::new("team", "search")],
                ..CreateDataSourceInput::default()
            })
            .await
            .unwrap_err();

        let service = err.into_service_error().unwrap();
        assert_eq!(service.code, KendraErrorCode::ResourceAlreadyExistException);
        assert_eq!(service.message, "exists");
    }

    #[tokio::test]
    async fn test_should_send_one_request_per_operation() {
        let connector = CaptureConnector::new();
        let client = client(&connector);

        client.list_indices(ListIndicesInput::default()).await.unwrap();
        client
            .list_tags_for_resource(ListTagsForResourceInput {
                resource_arn: "arn:aws:kendra:us-east-1:1:index/idx".to_owned(),
            })
            .await
            .unwrap();

        let targets: Vec<_> = connector
            .requests()
            .iter()
            .map(|r| r.header("x-amz-target").unwrap_or_default().to_owned())
            .collect();
        assert_eq!(
            targets,
            [
                "AWSKendraFrontendService.ListIndices",
                "AWSKendraFrontendService.ListTagsForResource"
            ]
        );
    }

    #[tokio::test]
    async fn test_should_sign_with_per_client_credentials() {
        let connector = CaptureConnector::new();
        connector.push_json(200, r#"{"Id":"idx-1","Status":"ACTIVE"}"#);

        let scoped = client(&connector).with_credentials(StaticCredentialsProvider::new(
            Credentials::new("AKID", "secret").with_session_token("tenant-a"),
        ));
        scoped
            .describe_index(DescribeIndexInput {
                id: "idx-1".to_owned(),
            })
            .await
            .unwrap();

        let sent = connector.last_request().unwrap();
        assert_eq!(sent.header("x-amz-security-token"), Some("tenant-a"));
    }
}


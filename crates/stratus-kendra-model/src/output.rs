//! Kendra operation outputs.
//!
//! Operations that return nothing (`DeleteIndex`, `UpdateDataSource`, ...)
//! have no output type; their client methods return `()`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{
    BatchDeleteDocumentResponseFailedDocument, BatchPutDocumentResponseFailedDocument,
    CapacityUnitsConfiguration, DataSourceConfiguration, DataSourceStatus, DataSourceSummary,
    DataSourceSyncJob, DataSourceType, DocumentMetadataConfiguration, FacetResult, FaqFileFormat,
    FaqStatus, FaqSummary, IndexConfigurationSummary, IndexEdition, IndexStatistics, IndexStatus,
    QueryResultItem, S3Path, ServerSideEncryptionConfiguration, Tag,
};

/// Output of `BatchDeleteDocument`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BatchDeleteDocumentOutput {
    /// Documents that could not be processed.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failed_documents: Vec<BatchDeleteDocumentResponseFailedDocument>,
}

/// Output of `BatchPutDocument`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BatchPutDocumentOutput {
    /// Documents that could not be processed.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failed_documents: Vec<BatchPutDocumentResponseFailedDocument>,
}

/// Output of `CreateDataSource`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateDataSourceOutput {
    /// ID of the data source.
    #[serde(default)]
    pub id: String,
}

/// Output of `CreateFaq`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateFaqOutput {
    /// ID of the FAQ.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// Output of `CreateIndex`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateIndexOutput {
    /// ID of the index.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// Output of `DescribeDataSource`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeDataSourceOutput {
    /// ID of the data source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// ID of the index.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index_id: Option<String>,

    /// Name of the data source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Type of repository the data source crawls.
    #[serde(default, rename = "Type", skip_serializing_if = "Option::is_none")]
    pub data_source_type: Option<DataSourceType>,

    /// Connector settings of the data source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configuration: Option<DataSourceConfiguration>,

    /// When the data source was created.
    #[serde(
        default,
        with = "stratus_core::timestamp::epoch_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,

    /// When the data source was last updated.
    #[serde(
        default,
        with = "stratus_core::timestamp::epoch_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<DateTime<Utc>>,

    /// Free-form description of the data source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Current status of the data source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<DataSourceStatus>,

    /// Sync schedule as a cron expression; empty for on-demand syncs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<String>,

    /// IAM role the service assumes to access the data source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<String>,

    /// Set when `status` is `FAILED`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

/// Output of `DescribeFaq`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeFaqOutput {
    /// ID of the FAQ.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// ID of the index.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index_id: Option<String>,

    /// Name of the FAQ.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Free-form description of the FAQ.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// When the FAQ was created.
    #[serde(
        default,
        with = "stratus_core::timestamp::epoch_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,

    /// When the FAQ was last updated.
    #[serde(
        default,
        with = "stratus_core::timestamp::epoch_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<DateTime<Utc>>,

    /// S3 location of the FAQ file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s3_path: Option<S3Path>,

    /// Current status of the FAQ.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<FaqStatus>,

    /// IAM role allowed to read the FAQ file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<String>,

    /// Why the FAQ is in the `FAILED` state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,

    /// Format of the FAQ file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_format: Option<FaqFileFormat>,
}

/// Output of `DescribeIndex`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeIndexOutput {
    /// Name of the index.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// ID of the index.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Edition of the index.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edition: Option<IndexEdition>,

    /// IAM role allowed to write CloudWatch logs and metrics.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<String>,

    /// KMS key used to encrypt the index.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_side_encryption_configuration: Option<ServerSideEncryptionConfiguration>,

    /// Current status of the index.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<IndexStatus>,

    /// Free-form description of the index.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// When the index was created.
    #[serde(
        default,
        with = "stratus_core::timestamp::epoch_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,

    /// When the index was last updated.
    #[serde(
        default,
        with = "stratus_core::timestamp::epoch_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<DateTime<Utc>>,

    /// Settings of each document attribute.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub document_metadata_configurations: Vec<DocumentMetadataConfiguration>,

    /// Document and FAQ counts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index_statistics: Option<IndexStatistics>,

    /// Why the index is in the `FAILED` state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,

    /// Extra storage and query capacity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity_units: Option<CapacityUnitsConfiguration>,
}

/// Output of `ListDataSourceSyncJobs`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListDataSourceSyncJobsOutput {
    /// Sync jobs, most recent first.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub history: Vec<DataSourceSyncJob>,

    /// Pagination token from a previous response; absent on the last page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// Output of `ListDataSources`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListDataSourcesOutput {
    /// One summary per data source.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub summary_items: Vec<DataSourceSummary>,

    /// Pagination token from a previous response; absent on the last page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// Output of `ListFaqs`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListFaqsOutput {
    /// Pagination token from a previous response; absent on the last page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,

    /// One summary per FAQ.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub faq_summary_items: Vec<FaqSummary>,
}

/// Output of `ListIndices`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListIndicesOutput {
    /// One summary per index.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub index_configuration_summary_items: Vec<IndexConfigurationSummary>,

    /// Pagination token from a previous response; absent on the last page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// Output of `ListTagsForResource`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListTagsForResourceOutput {
    /// Tags attached to the resource.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
}

/// Output of `Query`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct QueryOutput {
    /// Pass back in `SubmitFeedback`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_id: Option<String>,

    /// Results of the current page.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub result_items: Vec<QueryResultItem>,

    /// Counts for each requested facet.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub facet_results: Vec<FacetResult>,

    /// Total matches across all pages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_number_of_results: Option<i32>,
}

/// Output of `StartDataSourceSyncJob`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StartDataSourceSyncJobOutput {
    /// ID of the sync job.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execution_id: Option<String>,
}

/// Output of `TagResource`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TagResourceOutput {}

/// Output of `UntagResource`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UntagResourceOutput {}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_should_parse_describe_index() {
        let out: DescribeIndexOutput = serde_json::from_value(json!({
            "Id": "idx",
            "Name": "docs",
            "Edition": "ENTERPRISE_EDITION",
            "Status": "ACTIVE",
            "CreatedAt": 1_600_000_000.123,
            "IndexStatistics": {
                "FaqStatistics": {"IndexedQuestionAnswersCount": 3},
                "TextDocumentStatistics": {"IndexedTextDocumentsCount": 10, "IndexedTextBytes": 2048}
            },
            "CapacityUnits": {"StorageCapacityUnits": 1, "QueryCapacityUnits": 2}
        }))
        .unwrap();

        assert_eq!(out.edition, Some(IndexEdition::EnterpriseEdition));
        assert_eq!(out.status, Some(IndexStatus::Active));
        assert_eq!(out.created_at.unwrap().timestamp_millis(), 1_600_000_000_123);
        assert!(out.updated_at.is_none());
        let stats = out.index_statistics.unwrap();
        assert_eq!(stats.text_document_statistics.indexed_text_bytes, 2048);
        assert_eq!(out.capacity_units.unwrap().query_capacity_units, 2);
    }

    #[test]
    fn test_should_parse_sync_job_history() {
        let out: ListDataSourceSyncJobsOutput = serde_json::from_value(json!({
            "History": [{
                "ExecutionId": "exec-1",
                "StartTime": 1_600_000_000,
                "Status": "SUCCEEDED",
                "Metrics": {"DocumentsAdded": "12", "DocumentsFailed": "0"}
            }],
            "NextToken": "more"
        }))
        .unwrap();

        let job = &out.history[0];
        assert_eq!(job.execution_id.as_deref(), Some("exec-1"));
        assert_eq!(
            job.status,
            Some(crate::types::DataSourceSyncJobStatus::Succeeded)
        );
        assert_eq!(
            job.metrics.as_ref().unwrap().documents_added.as_deref(),
            Some("12")
        );
        assert_eq!(out.next_token.as_deref(), Some("more"));
    }

    #[test]
    fn test_should_accept_empty_tag_resource_output() {
        let _: TagResourceOutput = serde_json::from_str("{}").unwrap();
        let out: ListTagsForResourceOutput = serde_json::from_str("{}").unwrap();
        assert!(out.tags.is_empty());
    }
}

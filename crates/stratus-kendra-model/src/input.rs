//! Kendra operation inputs.
//!
//! Every input is serialized whole as the JSON body of an `awsJson1_1`
//! request. Optional members are omitted when `None` and empty collections
//! are omitted.

use serde::{Deserialize, Serialize};

use crate::types::{
    AttributeFilter, CapacityUnitsConfiguration, ClickFeedback, DataSourceConfiguration,
    DataSourceSyncJobStatus, DataSourceType, Document, DocumentMetadataConfiguration, Facet,
    FaqFileFormat, IndexEdition, QueryResultType, RelevanceFeedback, S3Path,
    ServerSideEncryptionConfiguration, SortingConfiguration, Tag, TimeRange,
};

// ---------------------------------------------------------------------------
// Documents
// ---------------------------------------------------------------------------

/// Input for `BatchDeleteDocument`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BatchDeleteDocumentInput {
    /// ID of the index.
    pub index_id: String,

    /// IDs of the documents to remove.
    pub document_id_list: Vec<String>,
}

/// Input for `BatchPutDocument`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BatchPutDocumentInput {
    /// ID of the index.
    pub index_id: String,

    /// Role with access to the S3 documents referenced by `documents`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<String>,

    /// Documents to add or replace, at most 10 per call.
    pub documents: Vec<Document>,
}

// ---------------------------------------------------------------------------
// Data sources
// ---------------------------------------------------------------------------

/// Input for `CreateDataSource`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateDataSourceInput {
    /// Name of the data source.
    pub name: String,

    /// ID of the index.
    pub index_id: String,

    /// Type of repository the data source crawls.
    #[serde(rename = "Type")]
    pub data_source_type: DataSourceType,

    /// Connector settings of the data source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configuration: Option<DataSourceConfiguration>,

    /// Free-form description of the data source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Cron expression of the sync schedule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<String>,

    /// IAM role the service assumes to access the data source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<String>,

    /// Tags attached to the data source.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,

    /// Idempotency token; generated when not set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
}

/// Input for `DeleteDataSource`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteDataSourceInput {
    /// ID of the data source.
    pub id: String,

    /// ID of the index.
    pub index_id: String,
}

/// Input for `DescribeDataSource`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeDataSourceInput {
    /// ID of the data source.
    pub id: String,

    /// ID of the index.
    pub index_id: String,
}

/// Input for `ListDataSourceSyncJobs`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListDataSourceSyncJobsInput {
    /// Data source ID.
    pub id: String,

    /// ID of the index.
    pub index_id: String,

    /// Pagination token from a previous response; absent on the last page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,

    /// Maximum number of items to return per page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,

    /// Only return jobs started within this range.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time_filter: Option<TimeRange>,

    /// Only return jobs in this status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_filter: Option<DataSourceSyncJobStatus>,
}

/// Input for `ListDataSources`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListDataSourcesInput {
    /// ID of the index.
    pub index_id: String,

    /// Pagination token from a previous response; absent on the last page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,

    /// Maximum number of items to return per page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

/// Input for `StartDataSourceSyncJob`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StartDataSourceSyncJobInput {
    /// ID of the data source.
    pub id: String,

    /// ID of the index.
    pub index_id: String,
}

/// Input for `StopDataSourceSyncJob`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StopDataSourceSyncJobInput {
    /// ID of the data source.
    pub id: String,

    /// ID of the index.
    pub index_id: String,
}

/// Input for `UpdateDataSource`. Unset members are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateDataSourceInput {
    /// ID of the data source.
    pub id: String,

    /// Name of the data source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// ID of the index.
    pub index_id: String,

    /// Connector settings of the data source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configuration: Option<DataSourceConfiguration>,

    /// Free-form description of the data source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Sync schedule as a cron expression; empty for on-demand syncs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<String>,

    /// IAM role the service assumes to access the data source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<String>,
}

// ---------------------------------------------------------------------------
// FAQs
// ---------------------------------------------------------------------------

/// Input for `CreateFaq`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateFaqInput {
    /// ID of the index.
    pub index_id: String,

    /// Name of the FAQ.
    pub name: String,

    /// Free-form description of the FAQ.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// S3 location of the FAQ file.
    pub s3_path: S3Path,

    /// IAM role allowed to read the FAQ file.
    pub role_arn: String,

    /// Tags attached to the FAQ.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,

    /// Format of the FAQ file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_format: Option<FaqFileFormat>,

    /// Idempotency token; generated when not set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
}

/// Input for `DeleteFaq`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteFaqInput {
    /// ID of the FAQ.
    pub id: String,

    /// ID of the index.
    pub index_id: String,
}

/// Input for `DescribeFaq`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeFaqInput {
    /// ID of the FAQ.
    pub id: String,

    /// ID of the index.
    pub index_id: String,
}

/// Input for `ListFaqs`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListFaqsInput {
    /// ID of the index.
    pub index_id: String,

    /// Pagination token from a previous response; absent on the last page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,

    /// Maximum number of items to return per page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

// ---------------------------------------------------------------------------
// Indexes
// ---------------------------------------------------------------------------

/// Input for `CreateIndex`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateIndexInput {
    /// Name of the index.
    pub name: String,

    /// Edition of the index.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edition: Option<IndexEdition>,

    /// IAM role allowed to write CloudWatch logs and metrics.
    pub role_arn: String,

    /// KMS key used to encrypt the index.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_side_encryption_configuration: Option<ServerSideEncryptionConfiguration>,

    /// Free-form description of the index.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Idempotency token; generated when not set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,

    /// Tags attached to the index.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
}

/// Input for `DeleteIndex`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteIndexInput {
    /// ID of the index.
    pub id: String,
}

/// Input for `DescribeIndex`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeIndexInput {
    /// ID of the index.
    pub id: String,
}

/// Input for `ListIndices`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListIndicesInput {
    /// Pagination token from a previous response; absent on the last page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,

    /// Maximum number of items to return per page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

/// Input for `UpdateIndex`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateIndexInput {
    /// ID of the index.
    pub id: String,

    /// Name of the index.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// IAM role allowed to write CloudWatch logs and metrics.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<String>,

    /// Free-form description of the index.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Document attribute settings to add or replace.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub document_metadata_configuration_updates: Vec<DocumentMetadataConfiguration>,

    /// Extra storage and query capacity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity_units: Option<CapacityUnitsConfiguration>,
}

// ---------------------------------------------------------------------------
// Query and feedback
// ---------------------------------------------------------------------------

/// Input for `Query`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct QueryInput {
    /// ID of the index.
    pub index_id: String,

    /// The search text.
    pub query_text: String,

    /// Restricts results to documents whose attributes match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute_filter: Option<AttributeFilter>,

    /// Document attributes to return facet counts for.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub facets: Vec<Facet>,

    /// Attributes to include in each result. All are returned when empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub requested_document_attributes: Vec<String>,

    /// Only return results of this type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_result_type_filter: Option<QueryResultType>,

    /// Page of results to return, starting at 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_number: Option<i32>,

    /// Results per page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i32>,

    /// Sort on a document attribute instead of relevance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sorting_configuration: Option<SortingConfiguration>,
}

impl QueryInput {
    /// A plain text query against `index_id`.
    #[must_use]
    pub fn new(index_id: impl Into<String>, query_text: impl Into<String>) -> Self {
        Self {
            index_id: index_id.into(),
            query_text: query_text.into(),
            ..Self::default()
        }
    }
}

/// Input for `SubmitFeedback`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SubmitFeedbackInput {
    /// ID of the index.
    pub index_id: String,

    /// ID of the query the feedback is about.
    pub query_id: String,

    /// Results the user clicked.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub click_feedback_items: Vec<ClickFeedback>,

    /// Results the user rated as relevant or not.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub relevance_feedback_items: Vec<RelevanceFeedback>,
}

// ---------------------------------------------------------------------------
// Tagging
// ---------------------------------------------------------------------------

/// Input for `ListTagsForResource`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListTagsForResourceInput {
    /// ARN of the tagged resource.
    #[serde(rename = "ResourceARN")]
    pub resource_arn: String,
}

/// Input for `TagResource`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TagResourceInput {
    /// ARN of the tagged resource.
    #[serde(rename = "ResourceARN")]
    pub resource_arn: String,

    /// Tags attached to the resource.
    pub tags: Vec<Tag>,
}

/// Input for `UntagResource`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UntagResourceInput {
    /// ARN of the tagged resource.
    #[serde(rename = "ResourceARN")]
    pub resource_arn: String,

    /// Keys of the tags to remove.
    pub tag_keys: Vec<String>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_should_serialize_minimal_query() {
        let input = QueryInput::new("idx", "what is kendra");
        assert_eq!(
            serde_json::to_value(&input).unwrap(),
            json!({"IndexId": "idx", "QueryText": "what is kendra"})
        );
    }

    #[test]
    fn test_should_serialize_list_indices_as_empty_object() {
        assert_eq!(
            serde_json::to_string(&ListIndicesInput::default()).unwrap(),
            "{}"
        );
    }

    #[test]
    fn test_should_rename_resource_arn() {
        let input = UntagResourceInput {
            resource_arn: "arn:aws:kendra:us-east-1:123456789012:index/idx".to_owned(),
            tag_keys: vec!["env".to_owned()],
        };
        assert_eq!(
            serde_json::to_value(&input).unwrap(),
            json!({
                "ResourceARN": "arn:aws:kendra:us-east-1:123456789012:index/idx",
                "TagKeys": ["env"]
            })
        );
    }

    #[test]
    fn test_should_serialize_data_source_type_as_type() {
        let input = CreateDataSourceInput {
            name: "wiki".to_owned(),
            index_id: "idx".to_owned(),
            data_source_type: DataSourceType::SharePoint,
            ..CreateDataSourceInput::default()
        };
        let value = serde_json::to_value(&input).unwrap();
        assert_eq!(value["Type"], "SHAREPOINT");
        assert!(value.get("Tags").is_none());
        assert!(value.get("Configuration").is_none());
    }
}

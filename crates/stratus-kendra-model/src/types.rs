//! Shared Kendra shapes and enums.
//!
//! Collections are omitted from the wire when empty; everything else that is
//! optional in the API model is an `Option`.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use stratus_core::string_enum;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

string_enum! {
    /// Kind of repository a data source connects to.
    pub enum DataSourceType {
        S3 => "S3",
        SharePoint => "SHAREPOINT",
        Database => "DATABASE",
        Salesforce => "SALESFORCE",
        OneDrive => "ONEDRIVE",
        ServiceNow => "SERVICENOW",
        Custom => "CUSTOM",
    }
}

string_enum! {
    pub enum DataSourceStatus {
        Creating => "CREATING",
        Deleting => "DELETING",
        Failed => "FAILED",
        Updating => "UPDATING",
        Active => "ACTIVE",
    }
}

string_enum! {
    pub enum DataSourceSyncJobStatus {
        Failed => "FAILED",
        Succeeded => "SUCCEEDED",
        Syncing => "SYNCING",
        Incomplete => "INCOMPLETE",
        Stopping => "STOPPING",
        Aborted => "ABORTED",
        SyncingIndexing => "SYNCING_INDEXING",
    }
}

string_enum! {
    /// Error category of failed documents and sync jobs.
    pub enum ErrorCode {
        InternalError => "InternalError",
        InvalidRequest => "InvalidRequest",
    }
}

string_enum! {
    pub enum FaqStatus {
        Creating => "CREATING",
        Updating => "UPDATING",
        Active => "ACTIVE",
        Deleting => "DELETING",
        Failed => "FAILED",
    }
}

string_enum! {
    /// Layout of an FAQ file in S3.
    pub enum FaqFileFormat {
        Csv => "CSV",
        CsvWithHeader => "CSV_WITH_HEADER",
        Json => "JSON",
    }
}

string_enum! {
    pub enum IndexStatus {
        Creating => "CREATING",
        Active => "ACTIVE",
        Deleting => "DELETING",
        Failed => "FAILED",
        Updating => "UPDATING",
        SystemUpdating => "SYSTEM_UPDATING",
    }
}

string_enum! {
    pub enum IndexEdition {
        DeveloperEdition => "DEVELOPER_EDITION",
        EnterpriseEdition => "ENTERPRISE_EDITION",
    }
}

string_enum! {
    pub enum DocumentAttributeValueType {
        StringValue => "STRING_VALUE",
        StringListValue => "STRING_LIST_VALUE",
        LongValue => "LONG_VALUE",
        DateValue => "DATE_VALUE",
    }
}

string_enum! {
    /// File type of an inline document.
    pub enum ContentType {
        Pdf => "PDF",
        Html => "HTML",
        MsWord => "MS_WORD",
        PlainText => "PLAIN_TEXT",
        Ppt => "PPT",
    }
}

string_enum! {
    pub enum PrincipalType {
        User => "USER",
        Group => "GROUP",
    }
}

string_enum! {
    pub enum ReadAccessType {
        Allow => "ALLOW",
        Deny => "DENY",
    }
}

string_enum! {
    pub enum QueryResultType {
        Document => "DOCUMENT",
        QuestionAnswer => "QUESTION_ANSWER",
        Answer => "ANSWER",
    }
}

string_enum! {
    pub enum AdditionalResultAttributeValueType {
        TextWithHighlightsValue => "TEXT_WITH_HIGHLIGHTS_VALUE",
    }
}

string_enum! {
    pub enum ScoreConfidence {
        VeryHigh => "VERY_HIGH",
        High => "HIGH",
        Medium => "MEDIUM",
        Low => "LOW",
    }
}

string_enum! {
    pub enum RelevanceType {
        Relevant => "RELEVANT",
        NotRelevant => "NOT_RELEVANT",
    }
}

string_enum! {
    pub enum SortOrder {
        Desc => "DESC",
        Asc => "ASC",
    }
}

string_enum! {
    /// Whether higher or lower attribute values rank first.
    pub enum Order {
        Ascending => "ASCENDING",
        Descending => "DESCENDING",
    }
}

string_enum! {
    pub enum SharePointVersion {
        SharePoint2013 => "SHAREPOINT_2013",
        SharePoint2016 => "SHAREPOINT_2016",
        SharePointOnline => "SHAREPOINT_ONLINE",
    }
}

string_enum! {
    pub enum DatabaseEngineType {
        RdsAuroraMysql => "RDS_AURORA_MYSQL",
        RdsAuroraPostgresql => "RDS_AURORA_POSTGRESQL",
        RdsMysql => "RDS_MYSQL",
        RdsPostgresql => "RDS_POSTGRESQL",
    }
}

string_enum! {
    pub enum QueryIdentifiersEnclosingOption {
        DoubleQuotes => "DOUBLE_QUOTES",
        None => "NONE",
    }
}

string_enum! {
    pub enum SalesforceStandardObjectName {
        Account => "ACCOUNT",
        Campaign => "CAMPAIGN",
        Case => "CASE",
        Contact => "CONTACT",
        Contract => "CONTRACT",
        Document => "DOCUMENT",
        Group => "GROUP",
        Idea => "IDEA",
        Lead => "LEAD",
        Opportunity => "OPPORTUNITY",
        Partner => "PARTNER",
        Pricebook => "PRICEBOOK",
        Product => "PRODUCT",
        Profile => "PROFILE",
        Solution => "SOLUTION",
        Task => "TASK",
        User => "USER",
    }
}

string_enum! {
    pub enum SalesforceKnowledgeArticleState {
        Draft => "DRAFT",
        Published => "PUBLISHED",
        Archived => "ARCHIVED",
    }
}

string_enum! {
    pub enum SalesforceChatterFeedIncludeFilterType {
        ActiveUser => "ACTIVE_USER",
        StandardUser => "STANDARD_USER",
    }
}

string_enum! {
    pub enum ServiceNowBuildVersionType {
        London => "LONDON",
        Others => "OTHERS",
    }
}

// ---------------------------------------------------------------------------
// Documents
// ---------------------------------------------------------------------------

/// A key/value tag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Tag {
    /// Tag key.
    pub key: String,

    /// Tag value.
    pub value: String,
}

impl Tag {
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Location of an object in S3.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct S3Path {
    /// Bucket name.
    pub bucket: String,

    /// Object key.
    pub key: String,
}

/// A user or group allowed or denied access to a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Principal {
    /// User or group name.
    pub name: String,

    /// Whether the principal is a user or a group.
    #[serde(rename = "Type")]
    pub principal_type: PrincipalType,

    /// Whether access is allowed or denied.
    pub access: ReadAccessType,
}

/// The value of a document attribute. Exactly one member is set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DocumentAttributeValue {
    /// A string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub string_value: Option<String>,

    /// A list of strings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub string_list_value: Option<Vec<String>>,

    /// A 64-bit integer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_value: Option<i64>,

    /// A timestamp, sent as epoch seconds.
    #[serde(
        default,
        with = "stratus_core::timestamp::epoch_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub date_value: Option<DateTime<Utc>>,
}

impl DocumentAttributeValue {
    /// A string value.
    #[must_use]
    pub fn string(value: impl Into<String>) -> Self {
        Self {
            string_value: Some(value.into()),
            ..Self::default()
        }
    }

    /// A string list value.
    #[must_use]
    pub fn string_list(values: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            string_list_value: Some(values.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    /// A long value.
    #[must_use]
    pub fn long(value: i64) -> Self {
        Self {
            long_value: Some(value),
            ..Self::default()
        }
    }

    /// A date value.
    #[must_use]
    pub fn date(value: DateTime<Utc>) -> Self {
        Self {
            date_value: Some(value),
            ..Self::default()
        }
    }
}

/// A named document attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DocumentAttribute {
    /// Attribute key; reserved keys start with `_`.
    pub key: String,

    /// Attribute value.
    pub value: DocumentAttributeValue,
}

impl DocumentAttribute {
    #[must_use]
    pub fn new(key: impl Into<String>, value: DocumentAttributeValue) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

/// A document to add to an index, either inline (`blob`) or in S3.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Document {
    /// ID of the document, unique within the index.
    pub id: String,

    /// Title shown in query results.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Inline document content, base64-encoded on the wire.
    #[serde(
        default,
        with = "stratus_core::blob::base64_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub blob: Option<Vec<u8>>,

    /// Location of the document in S3, instead of `blob`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s3_path: Option<S3Path>,

    /// Custom and reserved (`_`-prefixed) attributes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<DocumentAttribute>,

    /// Users and groups allowed or denied access.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub access_control_list: Vec<Principal>,

    /// Format of the content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<ContentType>,
}

/// A document `BatchDeleteDocument` could not delete.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BatchDeleteDocumentResponseFailedDocument {
    /// ID of the document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Error code for the failed item.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<ErrorCode>,

    /// Why the item failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

/// A document `BatchPutDocument` could not add.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BatchPutDocumentResponseFailedDocument {
    /// ID of the document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Error code for the failed item.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<ErrorCode>,

    /// Why the item failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

// ---------------------------------------------------------------------------
// Query
// ---------------------------------------------------------------------------

/// Filters query results on document attributes.
///
/// The boolean combinators nest arbitrarily; a leaf sets exactly one of the
/// comparison members.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AttributeFilter {
    /// Matches when every nested filter matches.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub and_all_filters: Vec<AttributeFilter>,

    /// Matches when any nested filter matches.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub or_all_filters: Vec<AttributeFilter>,

    /// Matches when the nested filter does not.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub not_filter: Option<Box<AttributeFilter>>,

    /// Attribute equals the value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equals_to: Option<DocumentAttribute>,

    /// String list attribute contains every value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contains_all: Option<DocumentAttribute>,

    /// String list attribute contains any value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contains_any: Option<DocumentAttribute>,

    /// Attribute is greater than the value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub greater_than: Option<DocumentAttribute>,

    /// Attribute is greater than or equal to the value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub greater_than_or_equals: Option<DocumentAttribute>,

    /// Attribute is less than the value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub less_than: Option<DocumentAttribute>,

    /// Attribute is less than or equal to the value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub less_than_or_equals: Option<DocumentAttribute>,
}

impl AttributeFilter {
    /// Match documents whose attribute equals `attribute.value`.
    #[must_use]
    pub fn equals_to(attribute: DocumentAttribute) -> Self {
        Self {
            equals_to: Some(attribute),
            ..Self::default()
        }
    }

    /// Match documents matched by every filter.
    #[must_use]
    pub fn and_all(filters: Vec<AttributeFilter>) -> Self {
        Self {
            and_all_filters: filters,
            ..Self::default()
        }
    }

    /// Match documents matched by any filter.
    #[must_use]
    pub fn or_all(filters: Vec<AttributeFilter>) -> Self {
        Self {
            or_all_filters: filters,
            ..Self::default()
        }
    }

    /// Match documents not matched by `filter`.
    #[must_use]
    pub fn not(filter: AttributeFilter) -> Self {
        Self {
            not_filter: Some(Box::new(filter)),
            ..Self::default()
        }
    }
}

/// A document attribute to compute facet counts for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Facet {
    /// Attribute to count values of.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_attribute_key: Option<String>,
}

/// Number of results carrying one attribute value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DocumentAttributeValueCountPair {
    /// One distinct attribute value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_attribute_value: Option<DocumentAttributeValue>,

    /// Number of results with that value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<i32>,
}

/// Facet counts for one attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FacetResult {
    /// Attribute the counts are for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_attribute_key: Option<String>,

    /// Type of the attribute.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_attribute_value_type: Option<DocumentAttributeValueType>,

    /// Count of each distinct value.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub document_attribute_value_count_pairs: Vec<DocumentAttributeValueCountPair>,
}

/// A highlighted span, in characters from the start of the text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Highlight {
    /// Start of the span.
    pub begin_offset: i32,

    /// End of the span, exclusive.
    pub end_offset: i32,

    /// Whether the span is the best answer to the query.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_answer: Option<bool>,
}

/// Text with the spans that match the query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TextWithHighlights {
    /// The text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Spans of the text that match the query.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub highlights: Vec<Highlight>,
}

/// Value of an [`AdditionalResultAttribute`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AdditionalResultAttributeValue {
    /// Text with the spans that match the query.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_with_highlights_value: Option<TextWithHighlights>,
}

/// Extra information attached to a result, such as the question and answer
/// of an FAQ match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AdditionalResultAttribute {
    /// Attribute key, such as `QuestionText` or `AnswerText`.
    pub key: String,

    /// Type of the value.
    pub value_type: AdditionalResultAttributeValueType,

    /// The value.
    pub value: AdditionalResultAttributeValue,
}

/// How well a result matches the query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ScoreAttributes {
    /// How confident the service is in the match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score_confidence: Option<ScoreConfidence>,
}

/// One query result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct QueryResultItem {
    /// ID of the result.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Document, question/answer or answer.
    #[serde(default, rename = "Type", skip_serializing_if = "Option::is_none")]
    pub result_type: Option<QueryResultType>,

    /// Question and answer text of FAQ matches.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub additional_attributes: Vec<AdditionalResultAttribute>,

    /// ID of the matching document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_id: Option<String>,

    /// Title of the document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_title: Option<TextWithHighlights>,

    /// Excerpt of the document around the match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_excerpt: Option<TextWithHighlights>,

    /// URI of the original document.
    #[serde(default, rename = "DocumentURI", skip_serializing_if = "Option::is_none")]
    pub document_uri: Option<String>,

    /// Attributes of the document.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub document_attributes: Vec<DocumentAttribute>,

    /// Confidence of the match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score_attributes: Option<ScoreAttributes>,

    /// Token to pass back in `SubmitFeedback`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback_token: Option<String>,
}

/// Sort order of query results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SortingConfiguration {
    /// Attribute to sort on; must be sortable.
    pub document_attribute_key: String,

    /// Sort direction.
    pub sort_order: SortOrder,
}

/// A result the user clicked on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ClickFeedback {
    /// ID of the clicked result.
    pub result_id: String,

    /// When the user clicked.
    #[serde(with = "stratus_core::timestamp::epoch_seconds")]
    pub click_time: DateTime<Utc>,
}

/// Whether a result was relevant to the query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RelevanceFeedback {
    /// ID of the rated result.
    pub result_id: String,

    /// The rating.
    pub relevance_value: RelevanceType,
}

// ---------------------------------------------------------------------------
// Data sources
// ---------------------------------------------------------------------------

/// Maps a field of the repository onto an index field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DataSourceToIndexFieldMapping {
    /// Field name in the repository.
    pub data_source_field_name: String,

    /// Date format of the field, e.g. `yyyy-MM-dd`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_field_format: Option<String>,

    /// Index field to map it to.
    pub index_field_name: String,
}

impl DataSourceToIndexFieldMapping {
    #[must_use]
    pub fn new(data_source_field_name: impl Into<String>, index_field_name: impl Into<String>) -> Self {
        Self {
            data_source_field_name: data_source_field_name.into(),
            date_field_format: None,
            index_field_name: index_field_name.into(),
        }
    }
}

/// VPC a data source connects through.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DataSourceVpcConfiguration {
    /// Subnets to connect from.
    pub subnet_ids: Vec<String>,

    /// Security groups of the connection.
    pub security_group_ids: Vec<String>,
}

/// Location of the access control file of an S3 data source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AccessControlListConfiguration {
    /// S3 path of the access control file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_path: Option<String>,
}

/// Location of the per-document metadata files of an S3 data source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DocumentsMetadataConfiguration {
    /// Prefix of the per-document metadata files.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s3_prefix: Option<String>,
}

/// Crawl an S3 bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct S3DataSourceConfiguration {
    /// Bucket holding the documents.
    pub bucket_name: String,

    /// Only crawl keys under these prefixes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub inclusion_prefixes: Vec<String>,

    /// Glob patterns of files to skip.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclusion_patterns: Vec<String>,

    /// Where the document metadata files live.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documents_metadata_configuration: Option<DocumentsMetadataConfiguration>,

    /// Where the access control file lives.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_control_list_configuration: Option<AccessControlListConfiguration>,
}

/// Crawl SharePoint sites.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SharePointConfiguration {
    /// SharePoint edition.
    pub share_point_version: SharePointVersion,

    /// Sites to crawl.
    pub urls: Vec<String>,

    /// Secrets Manager secret holding the connection credentials.
    pub secret_arn: String,

    /// Whether attachments are crawled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crawl_attachments: Option<bool>,

    /// Use the SharePoint change log to find changed documents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_change_log: Option<bool>,

    /// Glob patterns of files to include; everything when empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub inclusion_patterns: Vec<String>,

    /// Glob patterns of files to skip.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclusion_patterns: Vec<String>,

    /// VPC used to reach the repository.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vpc_configuration: Option<DataSourceVpcConfiguration>,

    /// Maps repository fields onto index fields.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub field_mappings: Vec<DataSourceToIndexFieldMapping>,

    /// Repository field used as the document title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_title_field_name: Option<String>,
}

/// How to reach a database.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ConnectionConfiguration {
    /// Host name of the database.
    pub database_host: String,

    /// Port of the database.
    pub database_port: i32,

    /// Name of the database.
    pub database_name: String,

    /// Table holding the documents.
    pub table_name: String,

    /// Secrets Manager secret holding the connection credentials.
    pub secret_arn: String,
}

/// Columns that make up a database document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ColumnConfiguration {
    /// Column holding the document ID.
    pub document_id_column_name: String,

    /// Column holding the document body.
    pub document_data_column_name: String,

    /// Column holding the document title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_title_column_name: Option<String>,

    /// Maps repository fields onto index fields.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub field_mappings: Vec<DataSourceToIndexFieldMapping>,

    /// Columns compared between syncs to detect changes.
    pub change_detecting_columns: Vec<String>,
}

/// Per-row access control of a database data source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AclConfiguration {
    /// Column listing the groups allowed to see each row.
    pub allowed_groups_column_name: String,
}

/// SQL dialect settings of a database data source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SqlConfiguration {
    /// Whether identifiers are wrapped in double quotes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_identifiers_enclosing_option: Option<QueryIdentifiersEnclosingOption>,
}

/// Crawl a relational database table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DatabaseConfiguration {
    /// Database engine.
    pub database_engine_type: DatabaseEngineType,

    /// How to connect.
    pub connection_configuration: ConnectionConfiguration,

    /// VPC used to reach the repository.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vpc_configuration: Option<DataSourceVpcConfiguration>,

    /// Which columns make up a document.
    pub column_configuration: ColumnConfiguration,

    /// Per-row access control.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acl_configuration: Option<AclConfiguration>,

    /// SQL dialect settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sql_configuration: Option<SqlConfiguration>,
}

/// One Salesforce standard object to crawl.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SalesforceStandardObjectConfiguration {
    /// Standard object to crawl.
    pub name: SalesforceStandardObjectName,

    /// Repository field holding the document body.
    pub document_data_field_name: String,

    /// Repository field used as the document title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_title_field_name: Option<String>,

    /// Maps repository fields onto index fields.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub field_mappings: Vec<DataSourceToIndexFieldMapping>,
}

/// Settings for standard Salesforce knowledge articles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SalesforceStandardKnowledgeArticleTypeConfiguration {
    /// Repository field holding the document body.
    pub document_data_field_name: String,

    /// Repository field used as the document title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_title_field_name: Option<String>,

    /// Maps repository fields onto index fields.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub field_mappings: Vec<DataSourceToIndexFieldMapping>,
}

/// Settings for one custom Salesforce knowledge article type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SalesforceCustomKnowledgeArticleTypeConfiguration {
    /// API name of the custom article type.
    pub name: String,

    /// Repository field holding the document body.
    pub document_data_field_name: String,

    /// Repository field used as the document title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_title_field_name: Option<String>,

    /// Maps repository fields onto index fields.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub field_mappings: Vec<DataSourceToIndexFieldMapping>,
}

/// Which Salesforce knowledge articles to crawl.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SalesforceKnowledgeArticleConfiguration {
    /// Article states to crawl.
    pub included_states: Vec<SalesforceKnowledgeArticleState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub standard_knowledge_article_type_configuration:
        Option<SalesforceStandardKnowledgeArticleTypeConfiguration>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub custom_knowledge_article_type_configurations:
        Vec<SalesforceCustomKnowledgeArticleTypeConfiguration>,
}

/// Settings for the Salesforce Chatter feed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SalesforceChatterFeedConfiguration {
    /// Repository field holding the document body.
    pub document_data_field_name: String,

    /// Repository field used as the document title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_title_field_name: Option<String>,

    /// Maps repository fields onto index fields.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub field_mappings: Vec<DataSourceToIndexFieldMapping>,

    /// Which users' posts to crawl; all when empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub include_filter_types: Vec<SalesforceChatterFeedIncludeFilterType>,
}

/// Settings for attachments of Salesforce standard objects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SalesforceStandardObjectAttachmentConfiguration {
    /// Repository field used as the document title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_title_field_name: Option<String>,

    /// Maps repository fields onto index fields.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub field_mappings: Vec<DataSourceToIndexFieldMapping>,
}

/// Crawl a Salesforce instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SalesforceConfiguration {
    /// URL of the Salesforce instance.
    pub server_url: String,

    /// Secrets Manager secret holding the connection credentials.
    pub secret_arn: String,

    /// Standard objects to crawl.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub standard_object_configurations: Vec<SalesforceStandardObjectConfiguration>,

    /// Settings for crawling knowledge articles.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub knowledge_article_configuration: Option<SalesforceKnowledgeArticleConfiguration>,

    /// Settings for crawling the Chatter feed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chatter_feed_configuration: Option<SalesforceChatterFeedConfiguration>,

    /// Whether attachments are crawled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crawl_attachments: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub standard_object_attachment_configuration:
        Option<SalesforceStandardObjectAttachmentConfiguration>,

    /// Regexes of attachment file names to include.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub include_attachment_file_patterns: Vec<String>,

    /// Regexes of attachment file names to skip.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude_attachment_file_patterns: Vec<String>,
}

/// OneDrive users to crawl, inline or from an S3 file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OneDriveUsers {
    /// User principal names to crawl.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub one_drive_user_list: Vec<String>,

    /// S3 file listing the users to crawl, one per line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub one_drive_user_s3_path: Option<S3Path>,
}

/// Crawl OneDrive for Business users.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OneDriveConfiguration {
    /// Azure AD domain of the organization.
    pub tenant_domain: String,

    /// Secrets Manager secret holding the connection credentials.
    pub secret_arn: String,

    /// Users whose documents are crawled.
    pub one_drive_users: OneDriveUsers,

    /// Glob patterns of files to include; everything when empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub inclusion_patterns: Vec<String>,

    /// Glob patterns of files to skip.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclusion_patterns: Vec<String>,

    /// Maps repository fields onto index fields.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub field_mappings: Vec<DataSourceToIndexFieldMapping>,
}

/// Shared shape of the ServiceNow knowledge base and service catalog settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ServiceNowItemConfiguration {
    /// Whether attachments are crawled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crawl_attachments: Option<bool>,

    /// Regexes of attachment file names to include.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub include_attachment_file_patterns: Vec<String>,

    /// Regexes of attachment file names to skip.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude_attachment_file_patterns: Vec<String>,

    /// Repository field holding the document body.
    pub document_data_field_name: String,

    /// Repository field used as the document title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_title_field_name: Option<String>,

    /// Maps repository fields onto index fields.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub field_mappings: Vec<DataSourceToIndexFieldMapping>,
}

/// Crawl a ServiceNow instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ServiceNowConfiguration {
    /// Host name of the instance, without scheme.
    pub host_url: String,

    /// Secrets Manager secret holding the connection credentials.
    pub secret_arn: String,

    /// ServiceNow release of the instance.
    pub service_now_build_version: ServiceNowBuildVersionType,

    /// Settings for crawling knowledge articles.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub knowledge_article_configuration: Option<ServiceNowItemConfiguration>,

    /// Settings for crawling the service catalog.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_catalog_configuration: Option<ServiceNowItemConfiguration>,
}

/// Connector settings. Set the member matching the data source type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DataSourceConfiguration {
    /// Settings for an S3 bucket.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s3_configuration: Option<S3DataSourceConfiguration>,

    /// Settings for SharePoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub share_point_configuration: Option<SharePointConfiguration>,

    /// Settings for a relational database.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_configuration: Option<DatabaseConfiguration>,

    /// Settings for Salesforce.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salesforce_configuration: Option<SalesforceConfiguration>,

    /// Settings for OneDrive.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub one_drive_configuration: Option<OneDriveConfiguration>,

    /// Settings for ServiceNow.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_now_configuration: Option<ServiceNowConfiguration>,
}

/// Summary of a data source, as listed by `ListDataSources`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DataSourceSummary {
    /// Name of the data source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// ID of the data source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Type of repository the data source crawls.
    #[serde(default, rename = "Type", skip_serializing_if = "Option::is_none")]
    pub data_source_type: Option<DataSourceType>,

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

    /// Current status of the data source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<DataSourceStatus>,
}

/// Document counts of a sync job. The service reports them as strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DataSourceSyncJobMetrics {
    /// Documents added since the last sync.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documents_added: Option<String>,

    /// Documents changed since the last sync.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documents_modified: Option<String>,

    /// Documents deleted since the last sync.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documents_deleted: Option<String>,

    /// Documents that could not be indexed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documents_failed: Option<String>,

    /// Documents scanned in the repository.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documents_scanned: Option<String>,
}

/// One run of a data source sync.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DataSourceSyncJob {
    /// ID of the sync job.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execution_id: Option<String>,

    /// When the sync job started.
    #[serde(
        default,
        with = "stratus_core::timestamp::epoch_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub start_time: Option<DateTime<Utc>>,

    /// When the sync job finished.
    #[serde(
        default,
        with = "stratus_core::timestamp::epoch_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub end_time: Option<DateTime<Utc>>,

    /// Current status of the job.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<DataSourceSyncJobStatus>,

    /// Why the job failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,

    /// Error code when the job failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<ErrorCode>,

    /// Error code reported by the repository.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_source_error_code: Option<String>,

    /// Document counts of the job.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics: Option<DataSourceSyncJobMetrics>,
}

/// A closed time interval.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TimeRange {
    /// Start of the range, inclusive.
    #[serde(
        default,
        with = "stratus_core::timestamp::epoch_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub start_time: Option<DateTime<Utc>>,

    /// End of the range, exclusive.
    #[serde(
        default,
        with = "stratus_core::timestamp::epoch_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub end_time: Option<DateTime<Utc>>,
}

// ---------------------------------------------------------------------------
// FAQs
// ---------------------------------------------------------------------------

/// Summary of an FAQ, as listed by `ListFaqs`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FaqSummary {
    /// ID of the FAQ.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Name of the FAQ.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Current status of the FAQ.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<FaqStatus>,

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

    /// Format of the FAQ file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_format: Option<FaqFileFormat>,
}

// ---------------------------------------------------------------------------
// Indexes
// ---------------------------------------------------------------------------

/// FAQ counts of an index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FaqStatistics {
    /// Number of indexed question and answer pairs.
    pub indexed_question_answers_count: i32,
}

/// Document counts of an index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TextDocumentStatistics {
    /// Number of indexed documents.
    pub indexed_text_documents_count: i32,

    /// Total size of the indexed text.
    pub indexed_text_bytes: i64,
}

/// Counts of what an index holds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct IndexStatistics {
    /// FAQ counts.
    pub faq_statistics: FaqStatistics,

    /// Document counts.
    pub text_document_statistics: TextDocumentStatistics,
}

/// Summary of an index, as listed by `ListIndices`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct IndexConfigurationSummary {
    /// Name of the index.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// ID of the index.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Edition of the index.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edition: Option<IndexEdition>,

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

    /// Current status of the index.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<IndexStatus>,
}

/// Tuning of how an attribute affects ranking.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Relevance {
    /// Boost recently changed documents; date attributes only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub freshness: Option<bool>,

    /// Relative weight of the attribute, from 1 to 10.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub importance: Option<i32>,

    /// Freshness window, e.g. `"86400s"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,

    /// Whether higher or lower values rank first.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank_order: Option<Order>,

    /// Weight of individual string values.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub value_importance_map: HashMap<String, i32>,
}

/// How a document attribute takes part in queries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Search {
    /// Whether the attribute can be faceted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facetable: Option<bool>,

    /// Whether the attribute is searched by default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub searchable: Option<bool>,

    /// Whether the attribute is returned in results.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub displayable: Option<bool>,

    /// Whether results can be sorted on the attribute.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sortable: Option<bool>,
}

/// Definition of an index field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DocumentMetadataConfiguration {
    /// Name of the attribute.
    pub name: String,

    /// Type of the attribute.
    #[serde(rename = "Type")]
    pub attribute_type: DocumentAttributeValueType,

    /// How the attribute affects ranking.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relevance: Option<Relevance>,

    /// How the attribute is used in queries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<Search>,
}

/// Extra capacity beyond the edition's baseline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CapacityUnitsConfiguration {
    /// Extra storage units beyond the edition default.
    pub storage_capacity_units: i32,

    /// Extra query units beyond the edition default.
    pub query_capacity_units: i32,
}

/// Encryption at rest of an index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ServerSideEncryptionConfiguration {
    /// KMS key ID; the service key when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,
}

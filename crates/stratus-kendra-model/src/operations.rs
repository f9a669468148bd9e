//! Kendra operation enum.

use std::fmt;

/// All Kendra frontend service operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KendraOperation {
    // Documents
    /// Remove documents from an index.
    BatchDeleteDocument,
    /// Add or replace documents in an index.
    BatchPutDocument,

    // Data sources
    /// Create a data source connector.
    CreateDataSource,
    /// Delete a data source.
    DeleteDataSource,
    /// Describe a data source.
    DescribeDataSource,
    /// List the sync runs of a data source.
    ListDataSourceSyncJobs,
    /// List the data sources of an index.
    ListDataSources,
    /// Start syncing a data source.
    StartDataSourceSyncJob,
    /// Stop a running sync.
    StopDataSourceSyncJob,
    /// Update a data source.
    UpdateDataSource,

    // FAQs
    /// Import an FAQ file.
    CreateFaq,
    /// Delete an FAQ.
    DeleteFaq,
    /// Describe an FAQ.
    DescribeFaq,
    /// List the FAQs of an index.
    ListFaqs,

    // Indexes
    /// Create an index.
    CreateIndex,
    /// Delete an index.
    DeleteIndex,
    /// Describe an index.
    DescribeIndex,
    /// List indexes.
    ListIndices,
    /// Update an index.
    UpdateIndex,

    // Query
    /// Search an index.
    Query,
    /// Report clicks and relevance for query results.
    SubmitFeedback,

    // Tagging
    /// List the tags of a resource.
    ListTagsForResource,
    /// Tag a resource.
    TagResource,
    /// Remove tags from a resource.
    UntagResource,
}

impl KendraOperation {
    /// Every operation, in declaration order.
    pub const ALL: [Self; 24] = [
        Self::BatchDeleteDocument,
        Self::BatchPutDocument,
        Self::CreateDataSource,
        Self::DeleteDataSource,
        Self::DescribeDataSource,
        Self::ListDataSourceSyncJobs,
        Self::ListDataSources,
        Self::StartDataSourceSyncJob,
        Self::StopDataSourceSyncJob,
        Self::UpdateDataSource,
        Self::CreateFaq,
        Self::DeleteFaq,
        Self::DescribeFaq,
        Self::ListFaqs,
        Self::CreateIndex,
        Self::DeleteIndex,
        Self::DescribeIndex,
        Self::ListIndices,
        Self::UpdateIndex,
        Self::Query,
        Self::SubmitFeedback,
        Self::ListTagsForResource,
        Self::TagResource,
        Self::UntagResource,
    ];

    /// Returns the AWS operation name string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BatchDeleteDocument => "BatchDeleteDocument",
            Self::BatchPutDocument => "BatchPutDocument",
            Self::CreateDataSource => "CreateDataSource",
            Self::DeleteDataSource => "DeleteDataSource",
            Self::DescribeDataSource => "DescribeDataSource",
            Self::ListDataSourceSyncJobs => "ListDataSourceSyncJobs",
            Self::ListDataSources => "ListDataSources",
            Self::StartDataSourceSyncJob => "StartDataSourceSyncJob",
            Self::StopDataSourceSyncJob => "StopDataSourceSyncJob",
            Self::UpdateDataSource => "UpdateDataSource",
            Self::CreateFaq => "CreateFaq",
            Self::DeleteFaq => "DeleteFaq",
            Self::DescribeFaq => "DescribeFaq",
            Self::ListFaqs => "ListFaqs",
            Self::CreateIndex => "CreateIndex",
            Self::DeleteIndex => "DeleteIndex",
            Self::DescribeIndex => "DescribeIndex",
            Self::ListIndices => "ListIndices",
            Self::UpdateIndex => "UpdateIndex",
            Self::Query => "Query",
            Self::SubmitFeedback => "SubmitFeedback",
            Self::ListTagsForResource => "ListTagsForResource",
            Self::TagResource => "TagResource",
            Self::UntagResource => "UntagResource",
        }
    }

    /// Parse an operation name string into a `KendraOperation`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.as_str() == name)
    }
}

impl fmt::Display for KendraOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_resolve_every_operation_by_name() {
        for op in KendraOperation::ALL {
            assert_eq!(KendraOperation::from_name(op.as_str()), Some(op));
        }
    }

    #[test]
    fn test_should_reject_unknown_operation() {
        assert_eq!(KendraOperation::from_name("DescribeThesaurus"), None);
    }
}

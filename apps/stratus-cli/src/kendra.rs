//! `stratus kendra ...`

use anyhow::{Context, Result};
use clap::Subcommand;
use stratus_core::ClientConfig;
use stratus_kendra::KendraClient;
use stratus_kendra::model::input::{DescribeIndexInput, ListIndicesInput, QueryInput};
use stratus_kendra::model::types::{AttributeFilter, DocumentAttribute, DocumentAttributeValue};

use crate::print_json;

#[derive(Debug, Subcommand)]
pub(crate) enum KendraCommand {
    /// Search an index.
    Query {
        /// Index to search.
        #[arg(long)]
        index_id: String,
        /// Restrict results to documents whose `_category` equals this value.
        #[arg(long)]
        category: Option<String>,
        /// Results per page.
        #[arg(long)]
        page_size: Option<i32>,
        /// 1-based page of results.
        #[arg(long)]
        page_number: Option<i32>,
        /// Query text.
        text: String,
    },
    /// List indexes.
    ListIndices {
        #[arg(long)]
        max_results: Option<i32>,
        #[arg(long)]
        next_token: Option<String>,
    },
    /// Describe an index.
    DescribeIndex {
        /// Index identifier.
        id: String,
    },
}

pub(crate) async fn run(config: ClientConfig, command: &KendraCommand) -> Result<()> {
    let client = KendraClient::new(config).context("failed to create Kendra client")?;

    match command {
        KendraCommand::Query {
            index_id,
            category,
            page_size,
            page_number,
            text,
        } => {
            let input = QueryInput {
                attribute_filter: category
                    .as_deref()
                    .map(|c| {
                        AttributeFilter::equals_to(DocumentAttribute::new(
                            "_category",
                            DocumentAttributeValue::string(c),
                        ))
                    }),
                page_size: *page_size,
                page_number: *page_number,
                ..QueryInput::new(index_id.as_str(), text.as_str())
            };
            let out = client.query(input).await.context("Query failed")?;
            print_json(&out)
        }
        KendraCommand::ListIndices {
            max_results,
            next_token,
        } => {
            let out = client
                .list_indices(ListIndicesInput {
                    next_token: next_token.clone(),
                    max_results: *max_results,
                })
                .await
                .context("ListIndices failed")?;
            print_json(&out)
        }
        KendraCommand::DescribeIndex { id } => {
            let out = client
                .describe_index(DescribeIndexInput { id: id.clone() })
                .await
                .context("DescribeIndex failed")?;
            print_json(&out)
        }
    }
}

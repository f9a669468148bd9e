//! Kendra frontend service client for Stratus.
//!
//! ```no_run
//! use stratus_kendra::KendraClient;
//! use stratus_kendra::model::input::QueryInput;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = KendraClient::from_env()?;
//! let out = client.query(QueryInput::new("my-index-id", "how do I reset my password")).await?;
//! for item in out.result_items {
//!     println!("{:?}", item.document_title.and_then(|t| t.text));
//! }
//! # Ok(())
//! # }
//! ```

mod client;
pub mod marshall;

pub use client::{KendraClient, KendraResult};
pub use stratus_kendra_model as model;

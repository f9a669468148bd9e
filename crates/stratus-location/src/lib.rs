//! Amazon Location service client for Stratus.
//!
//! ```no_run
//! use stratus_location::LocationClient;
//! use stratus_location::model::input::SearchPlaceIndexForTextInput;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = LocationClient::from_env()?;
//! let out = client
//!     .search_place_index_for_text(SearchPlaceIndexForTextInput::new("places", "Space Needle"))
//!     .await?;
//! for result in out.results {
//!     println!("{:?} {:?}", result.place.label, result.place.geometry.point);
//! }
//! # Ok(())
//! # }
//! ```

mod client;
pub mod marshall;
pub mod unmarshall;

pub use client::{LocationClient, LocationResult};
pub use stratus_location_model as model;

//! SEC EDGAR company facts fetching and flattening.
//!
//! This module provides:
//! - [`CompanyFactsClient`], a single-request client for the XBRL company facts API
//! - [`FlatTable`], the USD-denominated US-GAAP facts of one company as flat rows
//!
//! # Example
//!
//! ```no_run
//! use finstmt_data::edgar::{CompanyFactsClient, FlatTable};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CompanyFactsClient::new()?;
//!     let document = client.fetch_company_facts("0000320193").await?; // Apple Inc.
//!
//!     let table = FlatTable::from_company_facts(&document, "0000320193");
//!     for obs in table.iter().filter(|o| o.account == "Assets").take(3) {
//!         println!("{:?}: {:?}", obs.end, obs.value);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod facts;

// Re-export main types
pub use client::{ClientConfig, CompanyFactsClient, normalize_cik};
pub use facts::{FlatTable, Observation, US_GAAP, USD, epoch_days};

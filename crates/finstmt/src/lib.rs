#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/finstmt/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod pipeline;

// Re-export main types from sub-crates
pub use finstmt_data as data;
pub use finstmt_statements as statements;

pub use finstmt_data::{
    ClientConfig, CompanyFactsClient, DataError, FlatTable, Observation, Result,
};
pub use finstmt_statements::{CombinedTable, StatementGroup, StatementKind, StatementTable};
pub use pipeline::{FinancialStatements, Pipeline, get_financial_statements};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

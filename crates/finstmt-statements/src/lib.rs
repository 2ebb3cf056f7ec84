#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/finstmt/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod accounts;
pub mod combine;
pub mod extract;
pub mod table;

pub use combine::{CombinedTable, StatementGroup};
pub use extract::{StatementKind, balance_sheet, extract, income_statement};
pub use table::StatementTable;

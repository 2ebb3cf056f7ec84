//! Statement extraction from a flat table of observations.
//!
//! Both statements use the same mechanics: keep rows from annual 10-K filings
//! labeled as a full fiscal year, restricted to the requested fiscal years and
//! to the statement's account whitelist, then pivot them by period end date.
//! They differ only in how a row's period is checked:
//!
//! - income statement facts cover a period, which must exceed
//!   [`MIN_ANNUAL_DURATION_DAYS`] so mislabeled quarterly figures drop out;
//! - balance sheet facts are point-in-time, so they must have no period start.

use crate::{accounts, table::StatementTable};
use finstmt_data::edgar::{FlatTable, Observation};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Annual report form type.
pub const ANNUAL_FORM: &str = "10-K";

/// Fiscal period label of a full fiscal year.
pub const FULL_YEAR_PERIOD: &str = "FY";

/// Shortest period, in days, an income statement fact may cover (exclusive).
pub const MIN_ANNUAL_DURATION_DAYS: i64 = 300;

/// The statement to extract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatementKind {
    /// Statement of operations (duration facts)
    IncomeStatement,
    /// Statement of financial position (instant facts)
    BalanceSheet,
}

impl StatementKind {
    /// Accounts this statement keeps.
    pub const fn accounts(&self) -> &'static [&'static str] {
        match self {
            Self::IncomeStatement => &accounts::INCOME_STATEMENT,
            Self::BalanceSheet => &accounts::BALANCE_SHEET,
        }
    }

    /// Returns true if `obs` belongs in this statement for `years`.
    pub fn includes(&self, obs: &Observation, years: &[i32]) -> bool {
        obs.form.as_deref() == Some(ANNUAL_FORM)
            && obs.fiscal_period.as_deref() == Some(FULL_YEAR_PERIOD)
            && self.period_matches(obs)
            && obs.fiscal_year.is_some_and(|fy| years.contains(&fy))
            && self.accounts().contains(&obs.account.as_str())
    }

    fn period_matches(&self, obs: &Observation) -> bool {
        match self {
            Self::IncomeStatement => obs
                .duration_days()
                .is_some_and(|days| days > MIN_ANNUAL_DURATION_DAYS),
            Self::BalanceSheet => obs.start.is_none(),
        }
    }
}

impl std::fmt::Display for StatementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IncomeStatement => write!(f, "IncomeStatement"),
            Self::BalanceSheet => write!(f, "BalanceSheet"),
        }
    }
}

/// Extracts one statement for the given fiscal years.
pub fn extract(flat: &FlatTable, kind: StatementKind, years: &[i32]) -> StatementTable {
    let table = StatementTable::pivot(flat.iter().filter(|obs| kind.includes(obs, years)));
    debug!(
        statement = %kind,
        ?years,
        rows = table.height(),
        columns = table.width(),
        "extracted statement"
    );
    table
}

/// Extracts the income statement for the given fiscal years.
pub fn income_statement(flat: &FlatTable, years: &[i32]) -> StatementTable {
    extract(flat, StatementKind::IncomeStatement, years)
}

/// Extracts the balance sheet for the given fiscal years.
pub fn balance_sheet(flat: &FlatTable, years: &[i32]) -> StatementTable {
    extract(flat, StatementKind::BalanceSheet, years)
}

//! Date-indexed, account-columned statement tables.

use chrono::NaiveDate;
use finstmt_data::edgar::{Observation, epoch_days};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Name of the date column in DataFrame views.
pub const DATE_COLUMN: &str = "end";

/// A statement pivoted into rows keyed by period end date and columns keyed by
/// account name.
///
/// Rows are ordered by ascending date and columns lexicographically. A cell
/// that was never reported is absent rather than zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatementTable {
    rows: BTreeMap<NaiveDate, BTreeMap<String, f64>>,
    columns: BTreeSet<String>,
}

impl StatementTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pivots observations into a table, in the order given.
    ///
    /// When several observations share a (date, account) pair, the one seen
    /// last wins. Observations without an end date or a value are ignored.
    pub fn pivot<'a>(observations: impl IntoIterator<Item = &'a Observation>) -> Self {
        let mut table = Self::new();
        for obs in observations {
            let (Some(end), Some(value)) = (obs.end, obs.value) else {
                continue;
            };
            table.insert(end, &obs.account, value);
        }
        table
    }

    /// Sets a cell, returning the value it replaced.
    pub fn insert(&mut self, date: NaiveDate, account: &str, value: f64) -> Option<f64> {
        if !self.columns.contains(account) {
            self.columns.insert(account.to_string());
        }
        self.rows
            .entry(date)
            .or_default()
            .insert(account.to_string(), value)
    }

    /// Returns the cell for a date and account.
    pub fn get(&self, date: NaiveDate, account: &str) -> Option<f64> {
        self.rows.get(&date)?.get(account).copied()
    }

    /// Returns every reported cell of one row.
    pub fn row(&self, date: NaiveDate) -> Option<&BTreeMap<String, f64>> {
        self.rows.get(&date)
    }

    /// Row index in ascending order.
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.rows.keys().copied().collect()
    }

    /// Column names in order.
    pub fn columns(&self) -> impl Iterator<Item = &str> + '_ {
        self.columns.iter().map(String::as_str)
    }

    /// Returns true if `account` has at least one cell.
    pub fn has_column(&self, account: &str) -> bool {
        self.columns.contains(account)
    }

    /// Returns true if `date` has at least one cell.
    pub fn has_date(&self, date: NaiveDate) -> bool {
        self.rows.contains_key(&date)
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if the table has no cells.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Converts the table into a DataFrame: an `end` date column followed by
    /// one nullable `Float64` column per account.
    pub fn to_dataframe(&self) -> PolarsResult<DataFrame> {
        let dates = self.dates();
        let mut columns = vec![date_column(&dates)?];
        columns.extend(self.value_columns(&dates, |account| account.to_string()));
        DataFrame::new(columns)
    }

    /// Builds one column per account, aligned to `dates`, named by `name`.
    pub(crate) fn value_columns(
        &self,
        dates: &[NaiveDate],
        name: impl Fn(&str) -> String,
    ) -> Vec<Column> {
        self.columns()
            .map(|account| {
                let values: Vec<Option<f64>> =
                    dates.iter().map(|date| self.get(*date, account)).collect();
                Series::new(name(account).into(), values).into()
            })
            .collect()
    }
}

/// Builds the `end` date column for a row index.
pub(crate) fn date_column(dates: &[NaiveDate]) -> PolarsResult<Column> {
    let days: Vec<i32> = dates.iter().copied().map(epoch_days).collect();
    Ok(Series::new(DATE_COLUMN.into(), days)
        .cast(&DataType::Date)?
        .into())
}

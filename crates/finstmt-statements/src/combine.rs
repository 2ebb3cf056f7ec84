//! Side-by-side combination of the income statement and balance sheet.

use crate::table::{StatementTable, date_column};
use chrono::NaiveDate;
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Separator between group label and account in DataFrame column names.
pub const GROUP_SEPARATOR: char = '.';

/// Top-level column group of a [`CombinedTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StatementGroup {
    /// Income statement columns
    IncomeStatement,
    /// Balance sheet columns
    BalanceSheet,
}

impl StatementGroup {
    /// Groups in column order.
    pub const ALL: [Self; 2] = [Self::IncomeStatement, Self::BalanceSheet];

    /// Group label.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::IncomeStatement => "IncomeStatement",
            Self::BalanceSheet => "BalanceSheet",
        }
    }
}

impl std::fmt::Display for StatementGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// The income statement and balance sheet aligned on a shared date index.
///
/// The date index is the union of both tables' dates. Each group keeps its
/// source table's columns unchanged; a date missing from one source has no
/// cells in that group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CombinedTable {
    income_statement: StatementTable,
    balance_sheet: StatementTable,
    dates: Vec<NaiveDate>,
}

impl CombinedTable {
    /// Combines the two statements.
    pub fn new(income_statement: StatementTable, balance_sheet: StatementTable) -> Self {
        let dates: BTreeSet<NaiveDate> = income_statement
            .dates()
            .into_iter()
            .chain(balance_sheet.dates())
            .collect();

        Self {
            income_statement,
            balance_sheet,
            dates: dates.into_iter().collect(),
        }
    }

    /// Returns the table behind a group.
    pub const fn group(&self, group: StatementGroup) -> &StatementTable {
        match group {
            StatementGroup::IncomeStatement => &self.income_statement,
            StatementGroup::BalanceSheet => &self.balance_sheet,
        }
    }

    /// Shared row index in ascending order.
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Every column as a (group, account) pair, income statement first.
    pub fn columns(&self) -> Vec<(StatementGroup, &str)> {
        StatementGroup::ALL
            .into_iter()
            .flat_map(move |group| {
                self.group(group)
                    .columns()
                    .map(move |account| (group, account))
            })
            .collect()
    }

    /// Returns the cell for a group, date and account.
    pub fn get(&self, group: StatementGroup, date: NaiveDate, account: &str) -> Option<f64> {
        self.group(group).get(date, account)
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.dates.len()
    }

    /// Number of columns across both groups.
    pub fn width(&self) -> usize {
        self.income_statement.width() + self.balance_sheet.width()
    }

    /// Returns true if neither statement has any cells.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Splits the table back into its income statement and balance sheet.
    pub fn into_parts(self) -> (StatementTable, StatementTable) {
        (self.income_statement, self.balance_sheet)
    }

    /// Converts the table into a DataFrame: an `end` date column followed by
    /// one column per (group, account), named `<Group>.<Account>`.
    pub fn to_dataframe(&self) -> PolarsResult<DataFrame> {
        let mut columns = vec![date_column(&self.dates)?];
        for group in StatementGroup::ALL {
            columns.extend(
                self.group(group)
                    .value_columns(&self.dates, |account| column_name(group, account)),
            );
        }
        DataFrame::new(columns)
    }
}

/// DataFrame column name for an account within a group.
pub fn column_name(group: StatementGroup, account: &str) -> String {
    format!("{}{}{}", group.label(), GROUP_SEPARATOR, account)
}

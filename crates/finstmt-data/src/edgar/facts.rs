//! Flattening of the company facts document into observations.
//!
//! The SEC company facts document nests facts as
//! `facts -> us-gaap -> <account> -> units -> <unit> -> [entry, ...]`.
//! [`FlatTable::from_company_facts`] walks the `USD` unit of every US-GAAP
//! account and emits one [`Observation`] per entry, in document order.
//!
//! Malformed pieces are tolerated rather than rejected: a missing `facts` or
//! `us-gaap` object yields an empty table, accounts without a `USD` unit are
//! skipped, and fields that are absent or fail to parse become `None`.

use crate::error::Result;
use chrono::NaiveDate;
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// Taxonomy whose facts are kept.
pub const US_GAAP: &str = "us-gaap";

/// Unit whose facts are kept.
pub const USD: &str = "USD";

/// Date format used by the SEC API.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// One reported fact for one account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Company identifier the fact was fetched for
    pub cik: String,

    /// US-GAAP account tag (e.g., "NetIncomeLoss")
    pub account: String,

    /// Start of the reporting period (None for point-in-time facts)
    pub start: Option<NaiveDate>,

    /// End of the reporting period
    pub end: Option<NaiveDate>,

    /// Reported value
    pub value: Option<f64>,

    /// Form type (e.g., "10-K", "10-Q")
    pub form: Option<String>,

    /// Fiscal year
    pub fiscal_year: Option<i32>,

    /// Fiscal period (e.g., "FY", "Q1")
    pub fiscal_period: Option<String>,
}

impl Observation {
    /// Returns the period length in days, or `None` unless both `start` and
    /// `end` are known.
    pub fn duration_days(&self) -> Option<i64> {
        self.start
            .zip(self.end)
            .map(|(start, end)| end.signed_duration_since(start).num_days())
    }

    /// Returns true if this is a point-in-time fact (no period start).
    pub const fn is_instant(&self) -> bool {
        self.start.is_none()
    }

    fn from_entry(cik: &str, account: &str, entry: &Value) -> Self {
        Self {
            cik: cik.to_string(),
            account: account.to_string(),
            start: entry.get("start").and_then(parse_date),
            end: entry.get("end").and_then(parse_date),
            value: entry.get("val").and_then(Value::as_f64),
            form: entry.get("form").and_then(Value::as_str).map(str::to_string),
            fiscal_year: entry.get("fy").and_then(parse_fiscal_year),
            fiscal_period: entry.get("fp").and_then(Value::as_str).map(str::to_string),
        }
    }
}

fn parse_date(value: &Value) -> Option<NaiveDate> {
    value
        .as_str()
        .and_then(|s| NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok())
}

fn parse_fiscal_year(value: &Value) -> Option<i32> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
    .and_then(|fy| i32::try_from(fy).ok())
}

/// A company's USD-denominated US-GAAP facts, one row per reported fact.
///
/// Rows keep the order in which they were encountered in the source document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlatTable {
    observations: Vec<Observation>,
}

impl FlatTable {
    /// Flattens a company facts document.
    ///
    /// Every row is tagged with `cik` and its account name.
    pub fn from_company_facts(document: &Value, cik: &str) -> Self {
        let mut observations = Vec::new();
        let mut accounts = 0usize;
        let mut skipped = 0usize;

        let taxonomy = document
            .get("facts")
            .and_then(|facts| facts.get(US_GAAP))
            .and_then(Value::as_object);

        for (account, account_data) in taxonomy.into_iter().flatten() {
            accounts += 1;
            let Some(entries) = account_data.get("units").and_then(|units| units.get(USD)) else {
                skipped += 1;
                continue;
            };

            for entry in entries.as_array().into_iter().flatten() {
                observations.push(Observation::from_entry(cik, account, entry));
            }
        }

        debug!(
            cik,
            accounts,
            skipped,
            rows = observations.len(),
            "normalized company facts"
        );

        Self { observations }
    }

    /// Decodes a company facts JSON string and flattens it.
    pub fn from_json_str(json: &str, cik: &str) -> Result<Self> {
        let document: Value = serde_json::from_str(json)?;
        Ok(Self::from_company_facts(&document, cik))
    }

    /// Builds a table from observations already in encounter order.
    pub const fn from_observations(observations: Vec<Observation>) -> Self {
        Self { observations }
    }

    /// Returns the rows in encounter order.
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// Iterates over the rows in encounter order.
    pub fn iter(&self) -> std::slice::Iter<'_, Observation> {
        self.observations.iter()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Returns true if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Converts the table into a DataFrame with one column per field plus
    /// `duration_days`.
    pub fn to_dataframe(&self) -> Result<DataFrame> {
        let rows = &self.observations;

        let ciks: Vec<&str> = rows.iter().map(|o| o.cik.as_str()).collect();
        let accounts: Vec<&str> = rows.iter().map(|o| o.account.as_str()).collect();
        let starts: Vec<Option<i32>> = rows.iter().map(|o| o.start.map(epoch_days)).collect();
        let ends: Vec<Option<i32>> = rows.iter().map(|o| o.end.map(epoch_days)).collect();
        let values: Vec<Option<f64>> = rows.iter().map(|o| o.value).collect();
        let forms: Vec<Option<&str>> = rows.iter().map(|o| o.form.as_deref()).collect();
        let years: Vec<Option<i32>> = rows.iter().map(|o| o.fiscal_year).collect();
        let periods: Vec<Option<&str>> = rows.iter().map(|o| o.fiscal_period.as_deref()).collect();
        let durations: Vec<Option<i64>> = rows.iter().map(Observation::duration_days).collect();

        let df = DataFrame::new(vec![
            Series::new("cik".into(), ciks).into(),
            Series::new("account".into(), accounts).into(),
            Series::new("start".into(), starts).cast(&DataType::Date)?.into(),
            Series::new("end".into(), ends).cast(&DataType::Date)?.into(),
            Series::new("value".into(), values).into(),
            Series::new("form".into(), forms).into(),
            Series::new("fy".into(), years).into(),
            Series::new("fp".into(), periods).into(),
            Series::new("duration_days".into(), durations).into(),
        ])?;

        Ok(df)
    }
}

impl<'a> IntoIterator for &'a FlatTable {
    type Item = &'a Observation;
    type IntoIter = std::slice::Iter<'a, Observation>;

    fn into_iter(self) -> Self::IntoIter {
        self.observations.iter()
    }
}

/// Days since 1970-01-01, the physical representation of a polars `Date`.
pub fn epoch_days(date: NaiveDate) -> i32 {
    // NaiveDate::default() is 1970-01-01
    date.signed_duration_since(NaiveDate::default()).num_days() as i32
}

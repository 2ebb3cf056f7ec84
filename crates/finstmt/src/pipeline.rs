//! End-to-end retrieval of a company's financial statements.
//!
//! The pipeline runs four stages in order, each consuming only the previous
//! stage's output:
//!
//! 1. fetch the company facts document ([`CompanyFactsClient`])
//! 2. flatten its USD US-GAAP facts ([`FlatTable`])
//! 3. extract the income statement and balance sheet ([`StatementTable`])
//! 4. combine both under their group labels ([`CombinedTable`])
//!
//! Any failure aborts the run; no partial result is returned.

use finstmt_data::edgar::{ClientConfig, CompanyFactsClient, FlatTable, normalize_cik};
use finstmt_data::Result;
use finstmt_statements::{CombinedTable, StatementTable, balance_sheet, income_statement};
use serde::{Deserialize, Serialize};
use tracing::info;

/// The three tables produced for one company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialStatements {
    /// Income statement for the requested income years
    pub income_statement: StatementTable,
    /// Balance sheet for the requested balance years
    pub balance_sheet: StatementTable,
    /// Both statements aligned on their combined date index
    pub combined: CombinedTable,
}

impl FinancialStatements {
    /// Extracts and combines both statements from a flat table.
    pub fn from_flat_table(flat: &FlatTable, income_years: &[i32], balance_years: &[i32]) -> Self {
        let income_statement = income_statement(flat, income_years);
        let balance_sheet = balance_sheet(flat, balance_years);
        let combined = CombinedTable::new(income_statement.clone(), balance_sheet.clone());

        Self {
            income_statement,
            balance_sheet,
            combined,
        }
    }
}

/// Runs the fetch-and-reshape pipeline against the SEC API.
#[derive(Debug)]
pub struct Pipeline {
    client: CompanyFactsClient,
}

impl Pipeline {
    /// Creates a pipeline with a client configured from the environment
    /// (see [`ClientConfig::from_env`]).
    pub fn new() -> Result<Self> {
        Ok(Self::with_client(CompanyFactsClient::with_config(
            ClientConfig::from_env(),
        )?))
    }

    /// Creates a pipeline around an existing client.
    pub const fn with_client(client: CompanyFactsClient) -> Self {
        Self { client }
    }

    /// Fetches a company's facts and builds its statements.
    ///
    /// # Arguments
    /// * `cik` - The company's CIK, padded or unpadded
    /// * `income_years` - Fiscal years to include in the income statement
    /// * `balance_years` - Fiscal years to include in the balance sheet
    ///
    /// # Errors
    /// Fails if the CIK is invalid, the request fails or returns a non-success
    /// status, or the body is not JSON. Nothing is transformed in that case.
    pub async fn run(
        &self,
        cik: &str,
        income_years: &[i32],
        balance_years: &[i32],
    ) -> Result<FinancialStatements> {
        let cik = normalize_cik(cik)?;
        let document = self.client.fetch_company_facts(&cik).await?;
        Self::from_company_facts(&document, &cik, income_years, balance_years)
    }

    /// Builds a company's statements from an already-fetched company facts
    /// document.
    pub fn from_company_facts(
        document: &serde_json::Value,
        cik: &str,
        income_years: &[i32],
        balance_years: &[i32],
    ) -> Result<FinancialStatements> {
        let cik = normalize_cik(cik)?;
        let flat = FlatTable::from_company_facts(document, &cik);
        let statements = FinancialStatements::from_flat_table(&flat, income_years, balance_years);

        info!(
            %cik,
            observations = flat.len(),
            income_rows = statements.income_statement.height(),
            balance_rows = statements.balance_sheet.height(),
            combined_rows = statements.combined.height(),
            "built financial statements"
        );

        Ok(statements)
    }
}

/// Fetches a company's facts and builds its statements with a default
/// [`Pipeline`].
///
/// # Example
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> finstmt::Result<()> {
/// let statements = finstmt::get_financial_statements("320193", &[2023], &[2023]).await?;
/// println!("{:?}", statements.combined.dates());
/// # Ok(())
/// # }
/// ```
pub async fn get_financial_statements(
    cik: &str,
    income_years: &[i32],
    balance_years: &[i32],
) -> Result<FinancialStatements> {
    Pipeline::new()?
        .run(cik, income_years, balance_years)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use finstmt_data::DataError;
    use serde_json::json;

    #[test]
    fn test_from_company_facts() {
        let document = json!({"facts": {"us-gaap": {
            "NetIncomeLoss": {"units": {"USD": [
                {"start": "2023-01-01", "end": "2023-12-31", "val": 100, "form": "10-K", "fy": 2023, "fp": "FY"}
            ]}},
            "Assets": {"units": {"USD": [
                {"end": "2023-12-31", "val": 500, "form": "10-K", "fy": 2023, "fp": "FY"}
            ]}}
        }}});

        let statements = Pipeline::from_company_facts(&document, "1", &[2023], &[2023]).unwrap();
        assert_eq!(statements.income_statement.width(), 1);
        assert_eq!(statements.balance_sheet.width(), 1);
        assert_eq!(statements.combined.height(), 1);
        assert_eq!(statements.combined.width(), 2);
    }

    #[test]
    fn test_from_company_facts_separate_year_sets() {
        let document = json!({"facts": {"us-gaap": {
            "NetIncomeLoss": {"units": {"USD": [
                {"start": "2022-01-01", "end": "2022-12-31", "val": 90, "form": "10-K", "fy": 2022, "fp": "FY"}
            ]}},
            "Assets": {"units": {"USD": [
                {"end": "2023-12-31", "val": 500, "form": "10-K", "fy": 2023, "fp": "FY"}
            ]}}
        }}});

        let statements = Pipeline::from_company_facts(&document, "1", &[2022], &[2023]).unwrap();
        assert_eq!(statements.income_statement.height(), 1);
        assert_eq!(statements.balance_sheet.height(), 1);
        assert_eq!(statements.combined.height(), 2);

        let statements = Pipeline::from_company_facts(&document, "1", &[2023], &[2022]).unwrap();
        assert!(statements.combined.is_empty());
    }

    #[test]
    fn test_from_company_facts_invalid_cik() {
        let result = Pipeline::from_company_facts(&json!({}), "not-a-cik", &[2023], &[2023]);
        assert!(matches!(result, Err(DataError::InvalidCik(_))));
    }
}

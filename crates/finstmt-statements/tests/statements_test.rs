//! End-to-end tests from a company facts document to statement tables.

use chrono::NaiveDate;
use finstmt_data::FlatTable;
use finstmt_statements::accounts::{BALANCE_SHEET, INCOME_STATEMENT};
use finstmt_statements::{CombinedTable, StatementGroup, balance_sheet, income_statement};
use serde_json::json;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// A trimmed-down company facts document with two fiscal years, a restatement,
/// quarterly noise, a non-USD account and an account outside both whitelists.
fn company_facts() -> serde_json::Value {
    json!({
        "cik": 1,
        "entityName": "Example Corp",
        "facts": {"us-gaap": {
            "Revenues": {"units": {"USD": [
                {"start": "2022-01-01", "end": "2022-12-31", "val": 1000, "form": "10-K", "fy": 2022, "fp": "FY"},
                {"start": "2022-10-01", "end": "2022-12-31", "val": 260, "form": "10-K", "fy": 2022, "fp": "FY"},
                {"start": "2023-01-01", "end": "2023-03-31", "val": 280, "form": "10-Q", "fy": 2023, "fp": "Q1"},
                {"start": "2023-01-01", "end": "2023-12-31", "val": 1200, "form": "10-K", "fy": 2023, "fp": "FY"},
                {"start": "2022-01-01", "end": "2022-12-31", "val": 1010, "form": "10-K", "fy": 2023, "fp": "FY"}
            ]}},
            "NetIncomeLoss": {"units": {"USD": [
                {"start": "2023-01-01", "end": "2023-12-31", "val": 100, "form": "10-K", "fy": 2023, "fp": "FY"},
                {"start": "2023-01-01", "end": "2023-12-31", "val": 150, "form": "10-K", "fy": 2023, "fp": "FY"}
            ]}},
            "Assets": {"units": {"USD": [
                {"end": "2022-12-31", "val": 450, "form": "10-K", "fy": 2022, "fp": "FY"},
                {"end": "2023-12-31", "val": 500, "form": "10-K", "fy": 2023, "fp": "FY"},
                {"end": "2023-06-30", "val": 480, "form": "10-Q", "fy": 2023, "fp": "Q2"}
            ]}},
            "StockholdersEquity": {"units": {"USD": [
                {"start": "2023-01-01", "end": "2023-12-31", "val": 7, "form": "10-K", "fy": 2023, "fp": "FY"},
                {"end": "2024-12-31", "val": 210, "form": "10-K", "fy": 2024, "fp": "FY"}
            ]}},
            "EarningsPerShareBasic": {"units": {"USD/shares": [
                {"start": "2023-01-01", "end": "2023-12-31", "val": 6.1, "form": "10-K", "fy": 2023, "fp": "FY"}
            ]}},
            "AmortizationOfIntangibleAssets": {"units": {"USD": [
                {"start": "2023-01-01", "end": "2023-12-31", "val": 12, "form": "10-K", "fy": 2023, "fp": "FY"}
            ]}}
        }}
    })
}

#[test]
fn test_income_statement() {
    let flat = FlatTable::from_company_facts(&company_facts(), "0000000001");
    let income = income_statement(&flat, &[2022, 2023]);

    assert_eq!(income.dates(), vec![date(2022, 12, 31), date(2023, 12, 31)]);
    assert_eq!(
        income.columns().collect::<Vec<_>>(),
        vec!["NetIncomeLoss", "Revenues"]
    );
    // The fy2023 10-K restates fy2022 revenue and is encountered later
    assert_eq!(income.get(date(2022, 12, 31), "Revenues"), Some(1010.0));
    assert_eq!(income.get(date(2023, 12, 31), "Revenues"), Some(1200.0));
    assert_eq!(income.get(date(2023, 12, 31), "NetIncomeLoss"), Some(150.0));
    assert_eq!(income.get(date(2022, 12, 31), "NetIncomeLoss"), None);
    assert!(income.columns().all(|c| INCOME_STATEMENT.contains(&c)));
}

#[test]
fn test_income_statement_single_year() {
    let flat = FlatTable::from_company_facts(&company_facts(), "0000000001");
    let income = income_statement(&flat, &[2022]);

    assert_eq!(income.dates(), vec![date(2022, 12, 31)]);
    assert_eq!(income.get(date(2022, 12, 31), "Revenues"), Some(1000.0));
    assert!(!income.has_column("NetIncomeLoss"));
}

#[test]
fn test_balance_sheet() {
    let flat = FlatTable::from_company_facts(&company_facts(), "0000000001");
    let balance = balance_sheet(&flat, &[2022, 2023, 2024]);

    assert_eq!(
        balance.dates(),
        vec![date(2022, 12, 31), date(2023, 12, 31), date(2024, 12, 31)]
    );
    assert_eq!(balance.get(date(2023, 12, 31), "Assets"), Some(500.0));
    assert_eq!(balance.get(date(2024, 12, 31), "StockholdersEquity"), Some(210.0));
    // The duration-tagged equity figure is not a balance sheet fact
    assert_eq!(balance.get(date(2023, 12, 31), "StockholdersEquity"), None);
    assert!(balance.columns().all(|c| BALANCE_SHEET.contains(&c)));
}

#[test]
fn test_combined() {
    let flat = FlatTable::from_company_facts(&company_facts(), "0000000001");
    let income = income_statement(&flat, &[2023]);
    let balance = balance_sheet(&flat, &[2023, 2024]);
    let combined = CombinedTable::new(income.clone(), balance.clone());

    // fy2023's 10-K carries the 2022 comparative, so income spans 2022-2023
    assert_eq!(
        combined.dates(),
        &[date(2022, 12, 31), date(2023, 12, 31), date(2024, 12, 31)]
    );
    assert_eq!(combined.group(StatementGroup::IncomeStatement), &income);
    assert_eq!(combined.group(StatementGroup::BalanceSheet), &balance);
    assert_eq!(
        combined.get(StatementGroup::IncomeStatement, date(2024, 12, 31), "Revenues"),
        None
    );
    assert_eq!(
        combined.get(StatementGroup::BalanceSheet, date(2024, 12, 31), "StockholdersEquity"),
        Some(210.0)
    );

    let df = combined.to_dataframe().unwrap();
    assert_eq!(df.height(), 3);
    assert_eq!(df.width(), 1 + income.width() + balance.width());
}

#[test]
fn test_empty_document() {
    let flat = FlatTable::from_company_facts(&json!({}), "0000000001");
    let combined = CombinedTable::new(
        income_statement(&flat, &[2023]),
        balance_sheet(&flat, &[2023]),
    );
    assert!(combined.is_empty());
    assert_eq!(combined.width(), 0);
}

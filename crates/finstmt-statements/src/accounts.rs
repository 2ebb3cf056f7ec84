//! US-GAAP account whitelists for each statement.
//!
//! The lists are fixed. Companies use different tags for the same line item
//! across years (e.g. `SalesRevenueNet` before ASC 606 and
//! `RevenueFromContractWithCustomerExcludingAssessedTax` after), so several
//! alternatives are listed side by side and each becomes its own column.

/// Income statement accounts.
pub const INCOME_STATEMENT: [&str; 14] = [
    "SalesRevenueNet",
    "Revenues",
    "RevenueFromContractWithCustomerExcludingAssessedTax",
    "CostOfGoodsAndServicesSold",
    "GrossProfit",
    "OperatingExpenses",
    "ResearchAndDevelopmentExpense",
    "SellingGeneralAndAdministrativeExpense",
    "OperatingIncomeLoss",
    "NonoperatingIncomeExpense",
    "InterestExpense",
    "IncomeLossFromContinuingOperationsBeforeIncomeTaxesExtraordinaryItemsNoncontrollingInterest",
    "IncomeTaxExpenseBenefit",
    "NetIncomeLoss",
];

/// Balance sheet accounts.
pub const BALANCE_SHEET: [&str; 26] = [
    "Assets",
    "AssetsCurrent",
    "AssetsNoncurrent",
    "CashAndCashEquivalentsAtCarryingValue",
    "MarketableSecuritiesCurrent",
    "MarketableSecuritiesNoncurrent",
    "AccountsReceivableNetCurrent",
    "InventoryNet",
    "PropertyPlantAndEquipmentNet",
    "OtherAssetsCurrent",
    "OtherAssetsNoncurrent",
    "Liabilities",
    "LiabilitiesCurrent",
    "LiabilitiesNoncurrent",
    "AccountsPayableCurrent",
    "OtherLiabilitiesCurrent",
    "OtherLiabilitiesNoncurrent",
    "LongTermDebt",
    "LongTermDebtCurrent",
    "LongTermDebtNoncurrent",
    "CommercialPaper",
    "StockholdersEquity",
    "CommonStocksIncludingAdditionalPaidInCapital",
    "RetainedEarningsAccumulatedDeficit",
    "AccumulatedOtherComprehensiveIncomeLossNetOfTax",
    "LiabilitiesAndStockholdersEquity",
];

/// Returns true if `account` is an income statement account.
pub fn is_income_statement(account: &str) -> bool {
    INCOME_STATEMENT.contains(&account)
}

/// Returns true if `account` is a balance sheet account.
pub fn is_balance_sheet(account: &str) -> bool {
    BALANCE_SHEET.contains(&account)
}

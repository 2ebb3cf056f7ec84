//! Example fetching a company's annual statements from SEC EDGAR.
//!
//! Run with:
//! ```bash
//! FINSTMT_USER_AGENT="Jane Doe jane@example.com" \
//!     cargo run --example company_statements -- 320193 2022 2023
//! ```
//!
//! Arguments are a CIK followed by the fiscal years to include in both
//! statements. Set `RUST_LOG=debug` to see the request and row counts.

use finstmt::Pipeline;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let cik = args.next().unwrap_or_else(|| "320193".to_string());
    let years: Vec<i32> = args.map(|arg| arg.parse()).collect::<Result<_, _>>()?;
    let years = if years.is_empty() {
        vec![2022, 2023]
    } else {
        years
    };

    println!("=== Financial statements for CIK {} ({:?}) ===\n", cik, years);

    let pipeline = Pipeline::new()?;
    let statements = pipeline.run(&cik, &years, &years).await?;

    println!("Income statement:");
    println!("{}\n", statements.income_statement.to_dataframe()?);

    println!("Balance sheet:");
    println!("{}\n", statements.balance_sheet.to_dataframe()?);

    println!("Combined:");
    println!("{}", statements.combined.to_dataframe()?);

    Ok(())
}

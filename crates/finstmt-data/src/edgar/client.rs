//! SEC EDGAR company facts client.

use crate::error::{DataError, Result};
use std::time::Duration;
use tracing::{debug, warn};

/// SEC XBRL API base URL
const XBRL_BASE_URL: &str = "https://data.sec.gov/api/xbrl";

/// User agent for SEC EDGAR requests (SEC requires identifying information)
const USER_AGENT: &str = "finstmt/0.1 Academic research (research@example.com)";

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Width of a zero-padded CIK
const CIK_WIDTH: usize = 10;

/// Environment variable overriding the user agent.
pub const ENV_USER_AGENT: &str = "FINSTMT_USER_AGENT";
/// Environment variable overriding the API base URL.
pub const ENV_BASE_URL: &str = "FINSTMT_BASE_URL";
/// Environment variable overriding the request timeout, in whole seconds.
pub const ENV_TIMEOUT_SECS: &str = "FINSTMT_TIMEOUT_SECS";

/// Normalizes a company identifier into a 10-digit, zero-padded CIK.
///
/// Accepts an optional `CIK` prefix and surrounding whitespace, so
/// `"320193"`, `"CIK320193"` and `"0000320193"` all normalize to
/// `"0000320193"`.
///
/// # Errors
/// Returns [`DataError::InvalidCik`] if the identifier is empty, contains
/// anything other than ASCII digits, or is longer than 10 digits.
pub fn normalize_cik(cik: &str) -> Result<String> {
    let trimmed = cik.trim();
    let digits = trimmed
        .get(..3)
        .filter(|prefix| prefix.eq_ignore_ascii_case("CIK"))
        .map_or(trimmed, |_| &trimmed[3..]);

    if digits.is_empty() || digits.len() > CIK_WIDTH || !digits.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(DataError::InvalidCik(cik.to_string()));
    }

    Ok(format!("{:0>width$}", digits, width = CIK_WIDTH))
}

/// Settings for [`CompanyFactsClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the XBRL API, without a trailing slash
    pub base_url: String,
    /// Contact-style User-Agent sent with every request
    pub user_agent: String,
    /// Whole-request timeout
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: XBRL_BASE_URL.to_string(),
            user_agent: USER_AGENT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Builds a configuration from the defaults, overridden by
    /// `FINSTMT_USER_AGENT`, `FINSTMT_BASE_URL` and `FINSTMT_TIMEOUT_SECS`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a configuration from the defaults, overridden by whatever
    /// `lookup` returns for the `FINSTMT_*` keys.
    ///
    /// A timeout that does not parse as whole seconds is ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(user_agent) = lookup(ENV_USER_AGENT).filter(|v| !v.trim().is_empty()) {
            config.user_agent = user_agent;
        }
        if let Some(base_url) = lookup(ENV_BASE_URL).filter(|v| !v.trim().is_empty()) {
            config.base_url = base_url.trim_end_matches('/').to_string();
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            match raw.trim().parse::<u64>() {
                Ok(secs) => config.timeout = Duration::from_secs(secs),
                Err(_) => warn!(value = %raw, "ignoring unparseable {ENV_TIMEOUT_SECS}"),
            }
        }

        config
    }

    /// Sets the API base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Sets the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Sets the request timeout.
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Client for the SEC company facts endpoint.
///
/// Each call to [`CompanyFactsClient::fetch_company_facts`] issues exactly one
/// GET request. Nothing is cached and nothing is retried.
#[derive(Debug)]
pub struct CompanyFactsClient {
    client: reqwest::Client,
    base_url: String,
}

impl CompanyFactsClient {
    /// Creates a client with the default configuration.
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Creates a client with a custom User-Agent.
    ///
    /// The SEC requires a User-Agent identifying the requester.
    /// Format should be: "Name contact@email.com"
    pub fn with_user_agent(user_agent: &str) -> Result<Self> {
        Self::with_config(ClientConfig::default().with_user_agent(user_agent))
    }

    /// Creates a client from an explicit configuration.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent)
            .timeout(config.timeout)
            .build()
            .map_err(DataError::Network)?;

        Ok(Self {
            client,
            base_url: config.base_url,
        })
    }

    /// Returns the company facts URL for an already-normalized CIK.
    pub fn company_facts_url(&self, cik: &str) -> String {
        format!("{}/companyfacts/CIK{}.json", self.base_url, cik)
    }

    /// Fetches the raw company facts document for a CIK.
    ///
    /// # Arguments
    /// * `cik` - The company's CIK, padded or unpadded
    ///
    /// # Errors
    /// * [`DataError::InvalidCik`] if `cik` is not numeric
    /// * [`DataError::Http`] on a non-2xx response
    /// * [`DataError::Decode`] if the body is not valid JSON
    /// * [`DataError::Network`] on transport failure
    ///
    /// # Example
    /// ```no_run
    /// # use finstmt_data::edgar::CompanyFactsClient;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = CompanyFactsClient::new()?;
    /// let document = client.fetch_company_facts("320193").await?; // Apple
    /// # Ok(())
    /// # }
    /// ```
    pub async fn fetch_company_facts(&self, cik: &str) -> Result<serde_json::Value> {
        let cik = normalize_cik(cik)?;
        let url = self.company_facts_url(&cik);
        debug!(%url, "fetching company facts");

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "company facts request failed");
            return Err(DataError::Http {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.text().await?;
        let document = serde_json::from_str(&body)?;
        Ok(document)
    }
}

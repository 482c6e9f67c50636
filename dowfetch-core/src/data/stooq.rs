//! Stooq quote provider.
//!
//! Downloads daily OHLCV history as CSV from Stooq's `q/d/l` endpoint. One
//! blocking client is built up front and reused for every symbol; the loop
//! drives it strictly sequentially. There is no retry: a failed request is
//! reported once and the loop moves on.

use super::provider::{DataError, QuoteProvider};
use super::ticker::{format_date, ticker_token};
use crate::config::FetchConfig;
use chrono::NaiveDate;

/// Interval code for daily bars.
const DAILY_INTERVAL: &str = "d";

/// Stooq CSV provider.
pub struct StooqProvider {
    client: reqwest::blocking::Client,
    endpoint: String,
}

impl StooqProvider {
    pub fn new(config: &FetchConfig) -> Result<Self, DataError> {
        let mut builder = reqwest::blocking::Client::builder();
        if let Some(ua) = &config.user_agent {
            builder = builder.user_agent(ua.clone());
        }
        let client = builder
            .build()
            .map_err(|e| DataError::Network(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    /// Build the download URL for a symbol and date range.
    pub fn quote_url(&self, symbol: &str, start: NaiveDate, end: NaiveDate) -> String {
        format!(
            "{}?s={}&d1={}&d2={}&i={DAILY_INTERVAL}",
            self.endpoint,
            ticker_token(symbol),
            format_date(start),
            format_date(end),
        )
    }
}

impl QuoteProvider for StooqProvider {
    fn name(&self) -> &str {
        "stooq"
    }

    fn fetch(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<u8>, DataError> {
        let url = self.quote_url(symbol, start, end);
        tracing::debug!(symbol, %url, "requesting quotes");

        let resp = self
            .client
            .get(&url)
            .send()
            .map_err(|e| DataError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(DataError::HttpStatus {
                status: status.as_u16(),
                url,
            });
        }

        let body = resp
            .bytes()
            .map_err(|e| DataError::Network(format!("failed to read body: {e}")))?;
        Ok(body.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider(endpoint: &str) -> StooqProvider {
        StooqProvider::new(&FetchConfig {
            endpoint: endpoint.into(),
            ..FetchConfig::default()
        })
        .unwrap()
    }

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn equity_url_matches_template() {
        let p = provider("https://stooq.com/q/d/l/");
        assert_eq!(
            p.quote_url("AAPL", d(2024, 1, 1), d(2024, 1, 5)),
            "https://stooq.com/q/d/l/?s=aapl.us&d1=20240101&d2=20240105&i=d"
        );
    }

    #[test]
    fn index_url_uses_escaped_token() {
        let p = provider("https://stooq.com/q/d/l/");
        assert_eq!(
            p.quote_url("^DJI", d(2023, 12, 1), d(2024, 2, 29)),
            "https://stooq.com/q/d/l/?s=%5Edji&d1=20231201&d2=20240229&i=d"
        );
    }

    #[test]
    fn index_token_does_not_depend_on_window() {
        let p = provider("http://x/");
        let a = p.quote_url("^DJI", d(2000, 1, 1), d(2000, 1, 2));
        let b = p.quote_url("^DJI", d(2020, 6, 1), d(2021, 6, 1));
        assert!(a.starts_with("http://x/?s=%5Edji&"));
        assert!(b.starts_with("http://x/?s=%5Edji&"));
    }

    #[test]
    fn name_is_stooq() {
        assert_eq!(provider("http://x/").name(), "stooq");
    }
}

//! Ticker-token derivation and query date formatting.
//!
//! Stooq addresses US equities as `<lowercase symbol>.us`. Symbols whose
//! display form cannot go through that rule are listed in
//! [`TICKER_OVERRIDES`] with their already URL-escaped token.

use chrono::NaiveDate;
use std::borrow::Cow;

/// Market suffix appended to US equity tickers.
pub const MARKET_SUFFIX: &str = ".us";

/// Symbol → pre-escaped token, consulted before the suffix rule.
pub const TICKER_OVERRIDES: &[(&str, &str)] = &[("^DJI", "%5Edji")];

/// Derive the token used in the `s` query parameter for `symbol`.
pub fn ticker_token(symbol: &str) -> Cow<'static, str> {
    match TICKER_OVERRIDES.iter().find(|(sym, _)| *sym == symbol) {
        Some((_, token)) => Cow::Borrowed(*token),
        None => Cow::Owned(format!("{}{MARKET_SUFFIX}", symbol.to_lowercase())),
    }
}

/// Format a date as `YYYYMMDD`. chrono formatting ignores host locale.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

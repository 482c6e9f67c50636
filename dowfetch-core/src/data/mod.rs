//! Quote download: basket, ticker mapping, provider, and the persist loop.

pub mod basket;
pub mod download;
pub mod progress;
pub mod provider;
pub mod stooq;
pub mod ticker;

pub use basket::{Basket, DOW30, INDEX_SYMBOL};
pub use download::{download_basket, is_no_data, DownloadSummary, Outcome, OutcomeKind};
pub use progress::{DownloadProgress, LogProgress, NullProgress};
pub use provider::{DataError, QuoteProvider};
pub use stooq::StooqProvider;
pub use ticker::{format_date, ticker_token, MARKET_SUFFIX, TICKER_OVERRIDES};

//! Progress reporting for basket downloads.

use super::download::{DownloadSummary, Outcome};

/// Progress callback for multi-symbol operations.
pub trait DownloadProgress {
    /// Called before a symbol is fetched.
    fn on_start(&self, symbol: &str, index: usize, total: usize);

    /// Called once a symbol's outcome is known, before the next fetch starts.
    fn on_complete(&self, symbol: &str, index: usize, total: usize, outcome: &Outcome);

    /// Called when the whole basket has been attempted.
    fn on_batch_complete(&self, summary: &DownloadSummary);
}

/// Reports outcomes as `tracing` events: `info` for saved files, `warn` for
/// no-data responses, `error` for failures.
pub struct LogProgress;

impl DownloadProgress for LogProgress {
    fn on_start(&self, symbol: &str, index: usize, total: usize) {
        tracing::debug!(symbol, "[{}/{}] fetching {symbol}", index + 1, total);
    }

    fn on_complete(&self, symbol: &str, _index: usize, _total: usize, outcome: &Outcome) {
        match outcome {
            Outcome::Saved { path, bytes } => tracing::info!(
                symbol,
                path = %path.display(),
                bytes,
                "OK: {symbol} saved"
            ),
            Outcome::NoData => tracing::warn!(symbol, "NO DATA: {symbol}"),
            Outcome::Failed(e) => tracing::error!(symbol, "FAIL: {symbol}: {e}"),
        }
    }

    fn on_batch_complete(&self, summary: &DownloadSummary) {
        tracing::info!(
            saved = summary.saved(),
            no_data = summary.no_data(),
            failed = summary.failed(),
            "download complete: {}/{} saved",
            summary.saved(),
            summary.total
        );
    }
}

/// Discards all progress events.
pub struct NullProgress;

impl DownloadProgress for NullProgress {
    fn on_start(&self, _symbol: &str, _index: usize, _total: usize) {}

    fn on_complete(&self, _symbol: &str, _index: usize, _total: usize, _outcome: &Outcome) {}

    fn on_batch_complete(&self, _summary: &DownloadSummary) {}
}

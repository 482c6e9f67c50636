//! Download orchestrator. Walks the basket and persists each symbol's CSV.
//!
//! Symbols are processed one at a time in basket order. Every fault is scoped
//! to its symbol and turned into an [`Outcome::Failed`]; the loop itself only
//! fails if the destination directory cannot be created.

use super::basket::Basket;
use super::progress::DownloadProgress;
use super::provider::{DataError, QuoteProvider};
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};

/// Response prefix Stooq uses instead of an HTTP error for empty results.
const NO_DATA_SENTINEL: &[u8] = b"No data";

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Result of one symbol's iteration.
#[derive(Debug)]
pub enum Outcome {
    Saved { path: PathBuf, bytes: usize },
    NoData,
    Failed(DataError),
}

/// Fieldless mirror of [`Outcome`] for counting and reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutcomeKind {
    Saved,
    NoData,
    Failed,
}

impl Outcome {
    pub fn kind(&self) -> OutcomeKind {
        match self {
            Outcome::Saved { .. } => OutcomeKind::Saved,
            Outcome::NoData => OutcomeKind::NoData,
            Outcome::Failed(_) => OutcomeKind::Failed,
        }
    }
}

/// True when the body starts with the no-data sentinel (ASCII case-insensitive).
pub fn is_no_data(body: &[u8]) -> bool {
    let body = body.strip_prefix(UTF8_BOM).unwrap_or(body);
    body.len() >= NO_DATA_SENTINEL.len()
        && body[..NO_DATA_SENTINEL.len()].eq_ignore_ascii_case(NO_DATA_SENTINEL)
}

/// Path of the CSV file for `symbol` inside `dest`.
pub fn output_path(dest: &Path, symbol: &str) -> PathBuf {
    dest.join(format!("{symbol}.csv"))
}

/// Download every symbol in `basket` for `[start, end]` into `dest`.
///
/// `dest` is created (with parents) before the first request. Existing
/// `<SYMBOL>.csv` files are overwritten. The returned summary is for
/// reporting only; per-symbol failures never abort the run.
pub fn download_basket(
    provider: &dyn QuoteProvider,
    basket: &Basket,
    start: NaiveDate,
    end: NaiveDate,
    dest: &Path,
    progress: &dyn DownloadProgress,
) -> Result<DownloadSummary, DataError> {
    fs::create_dir_all(dest).map_err(|e| DataError::io(dest, e))?;

    let total = basket.len();
    let mut outcomes = Vec::with_capacity(total);

    for (i, symbol) in basket.iter().enumerate() {
        progress.on_start(symbol, i, total);
        let outcome = download_single(provider, symbol, start, end, dest);
        progress.on_complete(symbol, i, total, &outcome);
        outcomes.push((symbol.to_string(), outcome));
    }

    let summary = DownloadSummary { total, outcomes };
    progress.on_batch_complete(&summary);
    Ok(summary)
}

/// Download a single symbol: fetch → classify → persist.
fn download_single(
    provider: &dyn QuoteProvider,
    symbol: &str,
    start: NaiveDate,
    end: NaiveDate,
    dest: &Path,
) -> Outcome {
    let body = match provider.fetch(symbol, start, end) {
        Ok(body) => body,
        Err(e) => return Outcome::Failed(e),
    };

    if is_no_data(&body) {
        return Outcome::NoData;
    }

    match write_atomic(&output_path(dest, symbol), &body) {
        Ok(path) => Outcome::Saved {
            path,
            bytes: body.len(),
        },
        Err(e) => Outcome::Failed(e),
    }
}

/// Write `body` verbatim: write to `.tmp`, then rename over the target.
fn write_atomic(path: &Path, body: &[u8]) -> Result<PathBuf, DataError> {
    let tmp_path = path.with_extension("csv.tmp");

    fs::write(&tmp_path, body).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        DataError::io(&tmp_path, e)
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        DataError::io(path, e)
    })?;

    Ok(path.to_path_buf())
}

/// Per-symbol outcomes of a basket download, in basket order.
#[derive(Debug)]
pub struct DownloadSummary {
    pub total: usize,
    pub outcomes: Vec<(String, Outcome)>,
}

impl DownloadSummary {
    fn count(&self, kind: OutcomeKind) -> usize {
        self.outcomes.iter().filter(|(_, o)| o.kind() == kind).count()
    }

    pub fn saved(&self) -> usize {
        self.count(OutcomeKind::Saved)
    }

    pub fn no_data(&self) -> usize {
        self.count(OutcomeKind::NoData)
    }

    pub fn failed(&self) -> usize {
        self.count(OutcomeKind::Failed)
    }

    /// Outcome recorded for `symbol`, if it was attempted.
    pub fn outcome(&self, symbol: &str) -> Option<&Outcome> {
        self.outcomes
            .iter()
            .find(|(s, _)| s == symbol)
            .map(|(_, o)| o)
    }

    /// Symbols that failed, with their errors.
    pub fn failures(&self) -> impl Iterator<Item = (&str, &DataError)> {
        self.outcomes.iter().filter_map(|(s, o)| match o {
            Outcome::Failed(e) => Some((s.as_str(), e)),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_matches_exact_text() {
        assert!(is_no_data(b"No data"));
    }

    #[test]
    fn sentinel_is_case_insensitive() {
        assert!(is_no_data(b"NO DATA"));
        assert!(is_no_data(b"no data\r\n"));
        assert!(is_no_data(b"nO dAtA for this symbol"));
    }

    #[test]
    fn sentinel_ignores_leading_bom() {
        assert!(is_no_data(b"\xEF\xBB\xBFNo data"));
    }

    #[test]
    fn csv_body_is_not_sentinel() {
        assert!(!is_no_data(
            b"Date,Open,High,Low,Close,Volume\n2024-01-02,187.15,188.44,183.89,185.64,82488674\n"
        ));
    }

    #[test]
    fn short_or_empty_body_is_not_sentinel() {
        assert!(!is_no_data(b""));
        assert!(!is_no_data(b"No da"));
    }

    #[test]
    fn sentinel_must_be_a_prefix() {
        assert!(!is_no_data(b" No data"));
        assert!(!is_no_data(b"Date\nNo data"));
    }

    #[test]
    fn output_path_keeps_declared_casing() {
        let p = output_path(Path::new("/tmp/q"), "^DJI");
        assert_eq!(p, PathBuf::from("/tmp/q/^DJI.csv"));
    }

    #[test]
    fn atomic_write_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("AAPL.csv");
        write_atomic(&target, b"a,b\r\n1,2\r\n").unwrap();
        assert_eq!(fs::read(&target).unwrap(), b"a,b\r\n1,2\r\n");
        assert!(!dir.path().join("AAPL.csv.tmp").exists());
    }

    #[test]
    fn atomic_write_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("KO.csv");
        fs::write(&target, b"old contents that are longer").unwrap();
        write_atomic(&target, b"new").unwrap();
        assert_eq!(fs::read(&target).unwrap(), b"new");
    }

    #[test]
    fn write_into_missing_dir_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("missing").join("MMM.csv");
        let err = write_atomic(&target, b"x").unwrap_err();
        assert!(matches!(err, DataError::Io { .. }));
    }
}

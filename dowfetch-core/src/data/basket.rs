//! The fixed download basket.
//!
//! The 30 Dow Jones Industrial Average constituents followed by the index
//! itself. The basket is build-time data: there is no loader for
//! caller-supplied symbol lists.

/// Dow Jones Industrial Average constituents, in download order.
pub const DOW30: [&str; 30] = [
    "AAPL", "AMGN", "AXP", "BA", "CAT", "CRM", "CSCO", "CVX", "DIS", "DOW", "GS", "HD", "HON",
    "IBM", "INTC", "JNJ", "JPM", "KO", "MCD", "MMM", "MRK", "MSFT", "NKE", "PG", "TRV", "UNH",
    "V", "VZ", "WBA", "WMT",
];

/// The index symbol, always downloaded last.
pub const INDEX_SYMBOL: &str = "^DJI";

const DOW_BASKET: [&str; 31] = [
    "AAPL", "AMGN", "AXP", "BA", "CAT", "CRM", "CSCO", "CVX", "DIS", "DOW", "GS", "HD", "HON",
    "IBM", "INTC", "JNJ", "JPM", "KO", "MCD", "MMM", "MRK", "MSFT", "NKE", "PG", "TRV", "UNH",
    "V", "VZ", "WBA", "WMT", INDEX_SYMBOL,
];

/// An immutable, ordered set of symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Basket {
    symbols: &'static [&'static str],
}

impl Basket {
    /// The production basket: Dow 30 constituents plus `^DJI`.
    pub const fn dow_jones() -> Self {
        Self {
            symbols: &DOW_BASKET,
        }
    }

    /// A basket over another static symbol table (used by tests and demos).
    pub const fn from_static(symbols: &'static [&'static str]) -> Self {
        Self { symbols }
    }

    /// Symbols in declared order.
    pub fn symbols(&self) -> &'static [&'static str] {
        self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static str> {
        self.symbols.iter().copied()
    }
}

impl Default for Basket {
    fn default() -> Self {
        Self::dow_jones()
    }
}

//! Symbols, selections, and daily price history.

use core::fmt;
use std::collections::HashSet;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::BoardError;

const MAX_SYMBOL_LEN: usize = 16;

/// A validated ticker symbol such as `AAPL` or `BRK.B`.
///
/// Accepts ASCII alphanumerics plus `.`, `-`, `^` and `=`; the value is kept
/// exactly as given (no case folding) so it matches the catalog verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Symbol(String);

impl Symbol {
    /// Validate and wrap a ticker string.
    ///
    /// # Errors
    /// Returns `InvalidArg` for empty, overlong, or non-ticker characters.
    pub fn new(raw: impl Into<String>) -> Result<Self, BoardError> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(BoardError::InvalidArg("symbol must not be empty".into()));
        }
        if raw.len() > MAX_SYMBOL_LEN {
            return Err(BoardError::InvalidArg(format!(
                "symbol `{raw}` exceeds {MAX_SYMBOL_LEN} characters"
            )));
        }
        if let Some(bad) = raw
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '^' | '=')))
        {
            return Err(BoardError::InvalidArg(format!(
                "symbol `{raw}` contains invalid character {bad:?}"
            )));
        }
        Ok(Self(raw))
    }

    /// Borrow the ticker text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Symbol {
    type Error = BoardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Symbol {
    type Error = BoardError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Symbol> for String {
    fn from(s: Symbol) -> Self {
        s.0
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// The user's current choice of symbols, in the order they were picked.
///
/// A symbol appears at most once; later duplicates are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection(Vec<Symbol>);

impl Selection {
    /// An empty selection.
    #[must_use]
    pub const fn empty() -> Self {
        Self(Vec::new())
    }

    /// Build a selection from symbols, keeping the first occurrence of each.
    #[must_use]
    pub fn from_symbols(symbols: impl IntoIterator<Item = Symbol>) -> Self {
        let mut seen = HashSet::new();
        Self(
            symbols
                .into_iter()
                .filter(|s| seen.insert(s.clone()))
                .collect(),
        )
    }

    /// Parse a comma-separated list such as `"AAPL, MSFT"`.
    ///
    /// Blank entries are skipped so `""` is the empty selection.
    ///
    /// # Errors
    /// Returns `InvalidArg` if any entry is not a valid symbol.
    pub fn parse(raw: &str) -> Result<Self, BoardError> {
        let symbols = raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(Symbol::new)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_symbols(symbols))
    }

    /// Selected symbols in selection order.
    #[must_use]
    pub fn symbols(&self) -> &[Symbol] {
        &self.0
    }

    /// Number of selected symbols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the selected symbols in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Symbol> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a Selection {
    type Item = &'a Symbol;
    type IntoIter = std::slice::Iter<'a, Symbol>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A concrete `[start, end]` period for a daily history fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRequest {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl HistoryRequest {
    /// Build a request for the given period.
    ///
    /// # Errors
    /// Returns `InvalidArg` when `start` is not strictly before `end`.
    pub fn try_from_period(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, BoardError> {
        if start >= end {
            return Err(BoardError::InvalidArg(format!(
                "history start {start} must be before end {end}"
            )));
        }
        Ok(Self { start, end })
    }

    /// Inclusive period start.
    #[must_use]
    pub const fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Period end.
    #[must_use]
    pub const fn end(&self) -> DateTime<Utc> {
        self.end
    }
}

/// Fixed-start history window; the end is "now" at each render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryWindow {
    /// First calendar day of the window, in `timezone`.
    pub start: NaiveDate,
    /// Exchange timezone used to anchor the start date.
    pub timezone: Tz,
}

impl Default for HistoryWindow {
    fn default() -> Self {
        Self {
            start: NaiveDate::from_ymd_opt(2018, 1, 1).unwrap_or_default(),
            timezone: chrono_tz::America::New_York,
        }
    }
}

impl HistoryWindow {
    /// Resolve the window into a request ending at `now`.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the start date lies in the future or has no
    /// valid local midnight in the configured timezone.
    pub fn request_at(&self, now: DateTime<Utc>) -> Result<HistoryRequest, BoardError> {
        let midnight = self.start.and_hms_opt(0, 0, 0).ok_or_else(|| {
            BoardError::InvalidArg(format!("invalid history start {}", self.start))
        })?;
        let start = self
            .timezone
            .from_local_datetime(&midnight)
            .earliest()
            .ok_or_else(|| {
                BoardError::InvalidArg(format!(
                    "history start {} does not exist in {}",
                    self.start, self.timezone
                ))
            })?
            .with_timezone(&Utc);
        HistoryRequest::try_from_period(start, now)
    }
}

/// One day of adjusted-close history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Trading day in the exchange's local calendar.
    pub date: NaiveDate,
    /// Close adjusted for splits and dividends.
    pub adj_close: f64,
}

/// Daily adjusted-close series for one symbol, ordered by date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    /// Symbol the series belongs to.
    pub symbol: Symbol,
    /// Points in ascending date order.
    pub points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Build a series, sorting points by date.
    #[must_use]
    pub fn new(symbol: Symbol, mut points: Vec<PricePoint>) -> Self {
        points.sort_by_key(|p| p.date);
        Self { symbol, points }
    }

    /// True if the provider returned no usable rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

//! Symbol catalog: the fixed, sorted list of tickers offered by the page.

use std::collections::BTreeSet;
use std::io::Read;
use std::path::Path;

use tickerboard_core::{BoardError, Selection, Symbol};

/// Name of the column holding ticker symbols.
pub const SYMBOL_COLUMN: &str = "Symbol";

/// Read-only list of the symbols a user may select.
///
/// Sorted lexicographically and duplicate-free; loaded once at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolCatalog {
    symbols: Vec<Symbol>,
}

impl SymbolCatalog {
    /// Load the catalog from a CSV file with a `Symbol` column.
    ///
    /// # Errors
    /// Returns `Catalog` if the file cannot be opened or its contents are
    /// rejected by [`from_reader`](Self::from_reader).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, BoardError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)
            .map_err(|e| BoardError::Catalog(format!("{}: {e}", path.display())))?;
        Self::from_reader(file)
            .map_err(|e| match e {
                BoardError::Catalog(msg) => BoardError::Catalog(format!("{}: {msg}", path.display())),
                other => other,
            })
    }

    /// Parse CSV from any reader.
    ///
    /// Every row must carry a valid symbol; blank cells and malformed rows are
    /// rejected rather than skipped.
    ///
    /// # Errors
    /// Returns `Catalog` on a missing `Symbol` header, a malformed row or an
    /// invalid symbol.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, BoardError> {
        let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
        let column = rdr
            .headers()
            .map_err(|e| BoardError::Catalog(e.to_string()))?
            .iter()
            .position(|h| h == SYMBOL_COLUMN)
            .ok_or_else(|| BoardError::Catalog(format!("missing `{SYMBOL_COLUMN}` column")))?;

        let mut symbols = BTreeSet::new();
        for (i, record) in rdr.records().enumerate() {
            let record = record.map_err(|e| BoardError::Catalog(e.to_string()))?;
            // Header is line 1.
            let line = i + 2;
            let raw = record.get(column).unwrap_or_default();
            let symbol = Symbol::new(raw)
                .map_err(|e| BoardError::Catalog(format!("line {line}: {e}")))?;
            symbols.insert(symbol);
        }
        Ok(Self {
            symbols: symbols.into_iter().collect(),
        })
    }

    /// Build directly from symbols (sorted and de-duplicated).
    pub fn from_symbols(symbols: impl IntoIterator<Item = Symbol>) -> Self {
        let set: BTreeSet<Symbol> = symbols.into_iter().collect();
        Self {
            symbols: set.into_iter().collect(),
        }
    }

    /// All symbols in lexicographic order.
    #[must_use]
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Number of symbols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// True when the catalog holds no symbols.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Whether `symbol` is part of the catalog.
    #[must_use]
    pub fn contains(&self, symbol: &Symbol) -> bool {
        self.symbols.binary_search(symbol).is_ok()
    }

    /// Check that every selected symbol belongs to the catalog.
    ///
    /// # Errors
    /// Returns `NotFound` naming the first symbol outside the catalog.
    pub fn validate(&self, selection: &Selection) -> Result<(), BoardError> {
        match selection.iter().find(|s| !self.contains(s)) {
            Some(unknown) => Err(BoardError::not_found(format!("symbol {unknown} in catalog"))),
            None => Ok(()),
        }
    }
}

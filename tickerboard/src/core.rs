use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tickerboard_core::{
    BoardConfig, BoardConnector, BoardError, Capability, HistoryWindow, PriceSeries,
    ProfileSnapshot, Selection,
};

use crate::cards::ProfileCard;
use crate::catalog::SymbolCatalog;
use crate::figure::Figure;

/// Orchestrator behind both dashboard views.
///
/// Every render validates the selection against the catalog, then fetches
/// one symbol at a time in selection order. Nothing is cached between
/// renders.
pub struct Board {
    connector: Arc<dyn BoardConnector>,
    catalog: SymbolCatalog,
    window: HistoryWindow,
    request_timeout: Option<Duration>,
}

/// Builder for constructing a `Board`.
pub struct BoardBuilder {
    connector: Option<Arc<dyn BoardConnector>>,
    catalog: Option<SymbolCatalog>,
    window: HistoryWindow,
    request_timeout: Option<Duration>,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a builder with the default history window and no render deadline.
    #[must_use]
    pub fn new() -> Self {
        let cfg = BoardConfig::default();
        Self {
            connector: None,
            catalog: None,
            window: cfg.history_window,
            request_timeout: cfg.request_timeout,
        }
    }

    /// Register the market-data connector. A later call replaces an earlier one.
    #[must_use]
    pub fn with_connector(mut self, c: Arc<dyn BoardConnector>) -> Self {
        self.connector = Some(c);
        self
    }

    /// Set the catalog selections are checked against.
    #[must_use]
    pub fn catalog(mut self, catalog: SymbolCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Apply the history window and render deadline from a config.
    #[must_use]
    pub fn config(mut self, cfg: &BoardConfig) -> Self {
        self.window = cfg.history_window;
        self.request_timeout = cfg.request_timeout;
        self
    }

    /// Override the history window.
    #[must_use]
    pub const fn history_window(mut self, window: HistoryWindow) -> Self {
        self.window = window;
        self
    }

    /// Bound the total time of one view render (all symbols).
    ///
    /// When exceeded the render fails with `RequestTimeout`.
    #[must_use]
    pub const fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Build the `Board`.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no connector or no catalog was provided.
    pub fn build(self) -> Result<Board, BoardError> {
        let connector = self.connector.ok_or_else(|| {
            BoardError::InvalidArg(
                "no connector registered; add one via with_connector(...)".to_string(),
            )
        })?;
        let catalog = self.catalog.ok_or_else(|| {
            BoardError::InvalidArg("no symbol catalog; set one via catalog(...)".to_string())
        })?;
        Ok(Board {
            connector,
            catalog,
            window: self.window,
            request_timeout: self.request_timeout,
        })
    }
}

/// Attribute untagged failures to the connector that produced them.
///
/// A provider `NotFound` becomes a `Connector` error: the symbol passed the
/// catalog check, so an unknown ticker upstream is not the caller's fault.
pub fn tag_err(connector: &str, e: BoardError) -> BoardError {
    match e {
        e @ (BoardError::Connector { .. }
        | BoardError::Data(_)
        | BoardError::Unsupported { .. }
        | BoardError::RequestTimeout { .. }) => e,
        other => BoardError::Connector {
            connector: connector.to_string(),
            msg: other.to_string(),
        },
    }
}

impl Board {
    /// Start building a new `Board`.
    ///
    /// ```rust,ignore
    /// use std::sync::Arc;
    /// use tickerboard::{Board, SymbolCatalog};
    /// use tickerboard_mock::MockConnector;
    ///
    /// let board = Board::builder()
    ///     .with_connector(Arc::new(MockConnector::new()))
    ///     .catalog(SymbolCatalog::load("constituents.csv")?)
    ///     .build()?;
    /// let figure = board.price_figure(&Selection::parse("AAPL,MSFT")?).await?;
    /// ```
    #[must_use]
    pub fn builder() -> BoardBuilder {
        BoardBuilder::new()
    }

    /// The catalog offered to the user.
    #[must_use]
    pub const fn catalog(&self) -> &SymbolCatalog {
        &self.catalog
    }

    /// The configured history window.
    #[must_use]
    pub const fn history_window(&self) -> HistoryWindow {
        self.window
    }

    /// Name of the connector serving this board.
    #[must_use]
    pub fn connector_name(&self) -> &'static str {
        self.connector.name()
    }

    async fn with_deadline<T, Fut>(&self, capability: &'static str, fut: Fut) -> Result<T, BoardError>
    where
        Fut: core::future::Future<Output = Result<T, BoardError>>,
    {
        match self.request_timeout {
            Some(limit) => (tokio::time::timeout(limit, fut).await)
                .unwrap_or_else(|_| Err(BoardError::request_timeout(capability))),
            None => fut.await,
        }
    }

    /// Fetch the adjusted-close series of every selected symbol, in selection order.
    ///
    /// The window ends at the time of the call.
    ///
    /// # Errors
    /// Fails on the first symbol outside the catalog or the first failed
    /// fetch; no partial result is returned.
    #[tracing::instrument(
        name = "tickerboard::board::price_series",
        skip(self, selection),
        fields(symbols = selection.len()),
    )]
    pub async fn price_series(&self, selection: &Selection) -> Result<Vec<PriceSeries>, BoardError> {
        self.catalog.validate(selection)?;
        if selection.is_empty() {
            return Ok(Vec::new());
        }
        let provider = self
            .connector
            .as_history_provider()
            .ok_or_else(|| BoardError::unsupported(Capability::History.as_str()))?;
        let req = self.window.request_at(Utc::now())?;
        let name = self.connector.name();

        self.with_deadline(Capability::History.as_str(), async {
            let mut out = Vec::with_capacity(selection.len());
            for symbol in selection {
                let series = provider
                    .history(symbol, req)
                    .await
                    .map_err(|e| tag_err(name, e))?;
                tracing::debug!(symbol = %symbol, points = series.points.len(), "fetched history");
                out.push(series);
            }
            Ok(out)
        })
        .await
    }

    /// Fetch the profile snapshot of every selected symbol, in selection order.
    ///
    /// # Errors
    /// Fails on the first symbol outside the catalog, the first failed fetch
    /// or the first snapshot missing a field.
    #[tracing::instrument(
        name = "tickerboard::board::profiles",
        skip(self, selection),
        fields(symbols = selection.len()),
    )]
    pub async fn profiles(&self, selection: &Selection) -> Result<Vec<ProfileSnapshot>, BoardError> {
        self.catalog.validate(selection)?;
        if selection.is_empty() {
            return Ok(Vec::new());
        }
        let provider = self
            .connector
            .as_profile_provider()
            .ok_or_else(|| BoardError::unsupported(Capability::Profile.as_str()))?;
        let name = self.connector.name();

        self.with_deadline(Capability::Profile.as_str(), async {
            let mut out = Vec::with_capacity(selection.len());
            for symbol in selection {
                let snapshot = provider
                    .profile(symbol)
                    .await
                    .map_err(|e| tag_err(name, e))?;
                tracing::debug!(symbol = %symbol, "fetched profile");
                out.push(snapshot);
            }
            Ok(out)
        })
        .await
    }

    /// Render the price chart: one line trace per selected symbol.
    ///
    /// An empty selection renders [`Figure::empty`] without any fetch.
    ///
    /// # Errors
    /// As [`price_series`](Self::price_series).
    pub async fn price_figure(&self, selection: &Selection) -> Result<Figure, BoardError> {
        let series = self.price_series(selection).await?;
        Ok(Figure::from_series(&series))
    }

    /// Render the profile cards: one card per selected symbol.
    ///
    /// An empty selection renders no cards without any fetch.
    ///
    /// # Errors
    /// As [`profiles`](Self::profiles).
    pub async fn profile_cards(&self, selection: &Selection) -> Result<Vec<ProfileCard>, BoardError> {
        let snapshots = self.profiles(selection).await?;
        Ok(snapshots.iter().map(ProfileCard::from).collect())
    }
}

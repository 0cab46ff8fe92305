//! tickerboard-yahoo
//!
//! Public connector that implements `BoardConnector` on top of Yahoo Finance's
//! JSON API. Exposes daily adjusted-close history (v8 chart) and company
//! profile snapshots (v10 quoteSummary).
#![warn(missing_docs)]

/// Adapter definitions and the production adapter backed by `YahooClient`.
pub mod adapter;
mod builder;
mod client;
mod wire;

use std::sync::Arc;

use adapter::{CloneArcAdapters, RealAdapter, YfHistory, YfProfile};
use async_trait::async_trait;
use tickerboard_core::{
    BoardError, HistoryRequest, PriceSeries, ProfileSnapshot, Symbol,
    connector::{BoardConnector, ConnectorKey, HistoryProvider, ProfileProvider},
};

pub use builder::YahooClientBuilder;
pub use client::{DEFAULT_USER_AGENT, Endpoints, YAHOO_COOKIE_URL, YAHOO_QUERY_URL, YahooClient};

/// Public connector type. Production users will construct with `YahooConnector::new_default()`.
pub struct YahooConnector {
    history: Arc<dyn YfHistory>,
    profile: Arc<dyn YfProfile>,
}

impl YahooConnector {
    /// Static connector key.
    pub const KEY: ConnectorKey = ConnectorKey::new("tickerboard-yahoo");

    fn looks_like_not_found(msg: &str) -> bool {
        let m = msg.to_ascii_lowercase();
        m.contains("not found") || m.contains("no data")
    }

    fn normalize_error(e: BoardError, what: &str) -> BoardError {
        match e {
            BoardError::Connector { connector: _, msg } => {
                if Self::looks_like_not_found(&msg) {
                    BoardError::not_found(what.to_string())
                } else {
                    BoardError::connector(Self::KEY.as_str(), msg)
                }
            }
            BoardError::Other(msg) => BoardError::connector(Self::KEY.as_str(), msg),
            other => other,
        }
    }

    /// Build with a fresh `YahooClient` inside.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new_default() -> Result<Self, BoardError> {
        let a = RealAdapter::new_default()?;
        Ok(Self::from_adapter(&a))
    }

    /// Build from an existing `YahooClient`.
    #[must_use]
    pub fn new_with_client(client: YahooClient) -> Self {
        let a = RealAdapter::new(client);
        Self::from_adapter(&a)
    }

    /// Build from a provided `reqwest::Client`.
    ///
    /// Note: The provided client should enable a cookie store for the crumb flow.
    ///
    /// # Errors
    /// Returns an error if the internal `YahooClient` cannot be constructed.
    pub fn try_new_with_reqwest_client(http: reqwest::Client) -> Result<Self, BoardError> {
        let yc = YahooClient::builder().custom_client(http).build()?;
        Ok(Self::new_with_client(yc))
    }

    /// Build from adapter handles; used for injection in tests.
    pub fn from_adapter<A: CloneArcAdapters + ?Sized>(adapter: &A) -> Self {
        Self {
            history: adapter.clone_arc_history(),
            profile: adapter.clone_arc_profile(),
        }
    }
}

#[async_trait]
impl BoardConnector for YahooConnector {
    fn name(&self) -> &'static str {
        Self::KEY.as_str()
    }

    fn vendor(&self) -> &'static str {
        "Yahoo Finance"
    }

    fn as_history_provider(&self) -> Option<&dyn HistoryProvider> {
        Some(self as &dyn HistoryProvider)
    }

    fn as_profile_provider(&self) -> Option<&dyn ProfileProvider> {
        Some(self as &dyn ProfileProvider)
    }
}

#[async_trait]
impl HistoryProvider for YahooConnector {
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "tickerboard::yahoo",
            skip(self, req),
            fields(symbol = %symbol, start = %req.start(), end = %req.end()),
        )
    )]
    async fn history(
        &self,
        symbol: &Symbol,
        req: HistoryRequest,
    ) -> Result<PriceSeries, BoardError> {
        self.history
            .fetch_series(symbol, req)
            .await
            .map_err(|e| Self::normalize_error(e, &format!("history for {symbol}")))
    }
}

#[async_trait]
impl ProfileProvider for YahooConnector {
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "tickerboard::yahoo",
            skip(self),
            fields(symbol = %symbol),
        )
    )]
    async fn profile(&self, symbol: &Symbol) -> Result<ProfileSnapshot, BoardError> {
        self.profile
            .load(symbol)
            .await
            .map_err(|e| Self::normalize_error(e, &format!("profile for {symbol}")))
    }
}

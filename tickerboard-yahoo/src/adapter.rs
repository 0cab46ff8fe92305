use std::sync::Arc;

use async_trait::async_trait;

use tickerboard_core::{BoardError, HistoryRequest, PriceSeries, ProfileSnapshot, Symbol};

use crate::client::YahooClient;

/// History abstraction (so we can inject fakes in tests).
#[async_trait]
pub trait YfHistory: Send + Sync {
    /// Fetch the daily adjusted-close series for `symbol`.
    async fn fetch_series(
        &self,
        symbol: &Symbol,
        req: HistoryRequest,
    ) -> Result<PriceSeries, BoardError>;
}

/// Profile abstraction for the company snapshot.
#[async_trait]
pub trait YfProfile: Send + Sync {
    /// Load the current profile snapshot for `symbol`.
    async fn load(&self, symbol: &Symbol) -> Result<ProfileSnapshot, BoardError>;
}

/// Real adapter backed by a single `YahooClient` instance.
/// `YahooClient` is `Clone + Send + Sync`, so no external locking is needed.
#[derive(Clone)]
pub struct RealAdapter {
    client: YahooClient,
}

impl RealAdapter {
    /// Build a default `YahooClient` with a recommended user agent.
    ///
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new_default() -> Result<Self, BoardError> {
        Ok(Self {
            client: YahooClient::builder().build()?,
        })
    }

    /// Wrap an existing `YahooClient`.
    #[must_use]
    pub const fn new(client: YahooClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl YfHistory for RealAdapter {
    async fn fetch_series(
        &self,
        symbol: &Symbol,
        req: HistoryRequest,
    ) -> Result<PriceSeries, BoardError> {
        self.client.history(symbol, &req).await
    }
}

#[async_trait]
impl YfProfile for RealAdapter {
    async fn load(&self, symbol: &Symbol) -> Result<ProfileSnapshot, BoardError> {
        self.client.profile(symbol).await
    }
}

/* -------- Lightweight adapter constructors for tests ------- */

impl dyn YfHistory {
    /// Build a `YfHistory` from a closure.
    pub fn from_fn<F>(f: F) -> Arc<dyn YfHistory>
    where
        F: Send + Sync + 'static + Fn(Symbol, HistoryRequest) -> Result<PriceSeries, BoardError>,
    {
        struct FnHist<F>(F);
        #[async_trait]
        impl<F> YfHistory for FnHist<F>
        where
            F: Send
                + Sync
                + 'static
                + Fn(Symbol, HistoryRequest) -> Result<PriceSeries, BoardError>,
        {
            async fn fetch_series(
                &self,
                symbol: &Symbol,
                req: HistoryRequest,
            ) -> Result<PriceSeries, BoardError> {
                (self.0)(symbol.clone(), req)
            }
        }
        Arc::new(FnHist(f))
    }
}

impl dyn YfProfile {
    /// Build a `YfProfile` from a closure.
    pub fn from_fn<F>(f: F) -> Arc<dyn YfProfile>
    where
        F: Send + Sync + 'static + Fn(Symbol) -> Result<ProfileSnapshot, BoardError>,
    {
        struct FnProfile<F>(F);
        #[async_trait]
        impl<F> YfProfile for FnProfile<F>
        where
            F: Send + Sync + 'static + Fn(Symbol) -> Result<ProfileSnapshot, BoardError>,
        {
            async fn load(&self, symbol: &Symbol) -> Result<ProfileSnapshot, BoardError> {
                (self.0)(symbol.clone())
            }
        }
        Arc::new(FnProfile(f))
    }
}

/// Source of adapter handles for [`YahooConnector::from_adapter`](crate::YahooConnector::from_adapter).
///
/// Every method defaults to an adapter that reports the capability as
/// unsupported, so tests override only what they exercise.
pub trait CloneArcAdapters {
    /// Clone as `Arc<dyn YfHistory>`.
    fn clone_arc_history(&self) -> Arc<dyn YfHistory> {
        <dyn YfHistory>::from_fn(|_, _| Err(BoardError::unsupported("history")))
    }

    /// Clone as `Arc<dyn YfProfile>`.
    fn clone_arc_profile(&self) -> Arc<dyn YfProfile> {
        <dyn YfProfile>::from_fn(|_| Err(BoardError::unsupported("profile")))
    }
}

impl CloneArcAdapters for RealAdapter {
    fn clone_arc_history(&self) -> Arc<dyn YfHistory> {
        Arc::new(self.clone())
    }

    fn clone_arc_profile(&self) -> Arc<dyn YfProfile> {
        Arc::new(self.clone())
    }
}

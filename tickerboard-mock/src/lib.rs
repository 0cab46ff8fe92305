//! Mock connectors for tests and offline demos.
//!
//! - [`MockConnector`] serves deterministic fixtures for any symbol.
//! - [`DynamicMockConnector`] defers per-symbol behavior to a test controller
//!   and records every call it receives.

use async_trait::async_trait;
use tickerboard_core::connector::{BoardConnector, HistoryProvider, ProfileProvider};
use tickerboard_core::{BoardError, HistoryRequest, PriceSeries, ProfileSnapshot, Symbol};

mod dynamic;
mod fixtures;

pub use dynamic::{DynamicMockConnector, DynamicMockController, MockBehavior, MockCall};

/// Mock connector for CI-safe runs. Provides deterministic data from static fixtures.
///
/// Reserved symbols:
/// - `FAIL`: every call fails with a connector error.
/// - `INCOMPLETE`: the profile lacks a phone number and fails with a data error.
pub struct MockConnector;

impl Default for MockConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConnector {
    /// Connector name reported in errors and logs.
    pub const NAME: &'static str = "tickerboard-mock";

    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn maybe_fail(symbol: &Symbol, capability: &'static str) -> Result<(), BoardError> {
        match symbol.as_str() {
            "FAIL" => Err(BoardError::connector(
                Self::NAME,
                format!("forced failure: {capability}"),
            )),
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl BoardConnector for MockConnector {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn vendor(&self) -> &'static str {
        "Mock"
    }

    fn as_history_provider(&self) -> Option<&dyn HistoryProvider> {
        Some(self as &dyn HistoryProvider)
    }

    fn as_profile_provider(&self) -> Option<&dyn ProfileProvider> {
        Some(self as &dyn ProfileProvider)
    }
}

#[async_trait]
impl HistoryProvider for MockConnector {
    async fn history(
        &self,
        symbol: &Symbol,
        _req: HistoryRequest,
    ) -> Result<PriceSeries, BoardError> {
        Self::maybe_fail(symbol, "history")?;
        Ok(fixtures::history::by_symbol(symbol))
    }
}

#[async_trait]
impl ProfileProvider for MockConnector {
    async fn profile(&self, symbol: &Symbol) -> Result<ProfileSnapshot, BoardError> {
        Self::maybe_fail(symbol, "profile")?;
        if symbol.as_str() == "INCOMPLETE" {
            return Err(BoardError::missing_field(
                "phone",
                format!("profile for {symbol}"),
            ));
        }
        Ok(fixtures::profile::by_symbol(symbol))
    }
}

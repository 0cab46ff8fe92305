use async_trait::async_trait;

use crate::{BoardError, Capability, HistoryRequest, PriceSeries, ProfileSnapshot, Symbol};
pub use tickerboard_types::ConnectorKey;

/// Focused role trait for connectors that provide daily adjusted-close history.
#[async_trait]
pub trait HistoryProvider: Send + Sync {
    /// Fetch the daily adjusted-close series of `symbol` over `req`.
    async fn history(
        &self,
        symbol: &Symbol,
        req: HistoryRequest,
    ) -> Result<PriceSeries, BoardError>;
}

/// Focused role trait for connectors that provide company profile snapshots.
#[async_trait]
pub trait ProfileProvider: Send + Sync {
    /// Fetch the current profile snapshot of `symbol`.
    ///
    /// Implementations must fail with `BoardError::Data` when the provider
    /// omits any snapshot field.
    async fn profile(&self, symbol: &Symbol) -> Result<ProfileSnapshot, BoardError>;
}

/// Main connector trait implemented by provider crates. Exposes capability discovery.
#[async_trait]
pub trait BoardConnector: Send + Sync {
    /// A stable identifier (e.g., "tickerboard-yahoo").
    fn name(&self) -> &'static str;

    /// Canonical connector key constructed from the static name.
    fn key(&self) -> ConnectorKey {
        ConnectorKey::new(self.name())
    }

    /// Human-friendly vendor string.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// Advertise history capability by returning a usable trait object reference when supported.
    fn as_history_provider(&self) -> Option<&dyn HistoryProvider> {
        None
    }

    /// Advertise profile capability by returning a usable trait object reference when supported.
    fn as_profile_provider(&self) -> Option<&dyn ProfileProvider> {
        None
    }

    /// Whether the connector advertises `capability`.
    fn supports(&self, capability: Capability) -> bool {
        match capability {
            Capability::History => self.as_history_provider().is_some(),
            Capability::Profile => self.as_profile_provider().is_some(),
            _ => false,
        }
    }
}

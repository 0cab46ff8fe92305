//! Re-export of the domain types from `tickerboard-types`.
// Downstream crates depend on `tickerboard-core` only.

pub use tickerboard_types::{BoardConfig, BoardError, Capability, ConnectorKey};
pub use tickerboard_types::{DEFAULT_CATALOG_PATH, DEFAULT_PORT};
pub use tickerboard_types::{
    HistoryRequest, HistoryWindow, PostalAddress, PricePoint, PriceSeries, ProfileSnapshot,
    Selection, Symbol,
};

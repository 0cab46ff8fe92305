//! Domain types, errors, and configuration shared by the tickerboard crates.
#![warn(missing_docs)]

mod capability;
mod config;
mod connector;
mod error;
mod market;
mod profile;

pub use capability::Capability;
pub use config::{BoardConfig, DEFAULT_CATALOG_PATH, DEFAULT_PORT};
pub use connector::ConnectorKey;
pub use error::BoardError;
pub use market::{HistoryRequest, HistoryWindow, PricePoint, PriceSeries, Selection, Symbol};
pub use profile::{PostalAddress, ProfileSnapshot};

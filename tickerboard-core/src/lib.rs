//! tickerboard-core
//!
//! Traits and types shared by the dashboard and its market-data connectors.
//!
//! - `types`: symbols, selections, price series, and profile snapshots.
//! - `connector`: the `BoardConnector` trait and its capability role traits.
//!
//! Connectors are async and assume a Tokio 1.x runtime when they perform I/O.
#![warn(missing_docs)]

/// Connector capability traits and the primary `BoardConnector` interface.
pub mod connector;
/// Re-exported domain types.
pub mod types;

pub use connector::BoardConnector;
pub use types::*;

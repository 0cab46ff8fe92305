//! tickerboard: a single-page stock dashboard.
//!
//! Overview
//! - [`SymbolCatalog`] loads the selectable tickers from a CSV `Symbol` column.
//! - [`Board`] turns a [`Selection`] into a price chart ([`Figure`]) and
//!   profile cards ([`ProfileCard`]), fetching through a connector that
//!   implements the `tickerboard_core` role traits.
//! - [`server::router`] exposes the page at `/` and `/my_dash_app` plus two
//!   update routes the page calls on every selection change.
//!
//! Both views fetch sequentially, once per selected symbol, in selection
//! order. A single failed fetch or missing profile field fails the render;
//! nothing is cached or retried.
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use tickerboard::{Board, Selection, SymbolCatalog};
//! use tickerboard_yahoo::YahooConnector;
//!
//! let board = Board::builder()
//!     .with_connector(Arc::new(YahooConnector::new_default()?))
//!     .catalog(SymbolCatalog::load("constituents.csv")?)
//!     .build()?;
//! let fig = board.price_figure(&Selection::parse("AAPL,MSFT")?).await?;
//! assert_eq!(fig.trace_names().collect::<Vec<_>>(), ["AAPL", "MSFT"]);
//! ```

pub mod cards;
pub mod catalog;
mod core;
pub mod figure;
pub mod page;
pub mod server;

pub use crate::core::{Board, BoardBuilder, tag_err};
pub use cards::ProfileCard;
pub use catalog::SymbolCatalog;
pub use figure::Figure;
pub use tickerboard_core::{
    BoardConfig, BoardConnector, BoardError, HistoryWindow, Selection, Symbol,
};

//! Configuration for the dashboard process and its `Board` orchestrator.

use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::market::HistoryWindow;

/// Default constituent listing read at startup.
pub const DEFAULT_CATALOG_PATH: &str = "constituents.csv";

/// Default listen port.
pub const DEFAULT_PORT: u16 = 5000;

/// Global configuration for the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// CSV listing with a `Symbol` column.
    pub catalog_path: PathBuf,
    /// Address the HTTP server binds to.
    pub bind: SocketAddr,
    /// Start date and timezone of the price chart.
    pub history_window: HistoryWindow,
    /// Optional deadline for a whole view render (all symbols).
    ///
    /// `None` waits for every fetch to finish.
    pub request_timeout: Option<Duration>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
            bind: SocketAddr::from((Ipv4Addr::LOCALHOST, DEFAULT_PORT)),
            history_window: HistoryWindow::default(),
            request_timeout: None,
        }
    }
}

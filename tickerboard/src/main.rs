use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use clap::Parser;
use tickerboard::{Board, BoardConfig, BoardConnector, BoardError, HistoryWindow, SymbolCatalog};
use tickerboard_mock::MockConnector;
use tickerboard_yahoo::YahooConnector;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,tickerboard=debug";

#[derive(Parser, Debug)]
#[command(version, about = "Stock dashboard: adjusted-close charts and company profiles")]
struct Cli {
    /// CSV file with a `Symbol` column.
    #[arg(long, env = "TICKERBOARD_CATALOG", value_name = "FILE", default_value = tickerboard_core::DEFAULT_CATALOG_PATH)]
    catalog: PathBuf,

    /// Address to listen on.
    #[arg(long, env = "TICKERBOARD_BIND", default_value = "127.0.0.1:5000")]
    bind: SocketAddr,

    /// First day of the price chart.
    #[arg(long, env = "TICKERBOARD_START", value_name = "YYYY-MM-DD", default_value = "2018-01-01")]
    start: NaiveDate,

    /// IANA timezone the start day is anchored in.
    #[arg(long, env = "TICKERBOARD_TIMEZONE", default_value = "America/New_York")]
    timezone: String,

    /// Give up on a view render after this many seconds.
    #[arg(long, env = "TICKERBOARD_REQUEST_TIMEOUT", value_name = "SECS")]
    request_timeout: Option<u64>,

    /// Serve deterministic fixtures instead of Yahoo Finance.
    #[arg(long, env = "TICKERBOARD_MOCK")]
    mock: bool,
}

impl Cli {
    fn config(&self) -> Result<BoardConfig, BoardError> {
        let timezone: Tz = self
            .timezone
            .parse()
            .map_err(|e| BoardError::InvalidArg(format!("timezone `{}`: {e}", self.timezone)))?;
        let history_window = HistoryWindow {
            start: self.start,
            timezone,
        };
        // A start in the future would fail every render.
        history_window
            .request_at(Utc::now())
            .map_err(|e| BoardError::InvalidArg(format!("start date {}: {e}", self.start)))?;
        Ok(BoardConfig {
            catalog_path: self.catalog.clone(),
            bind: self.bind,
            history_window,
            request_timeout: self.request_timeout.map(Duration::from_secs),
        })
    }
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing();

    let config = cli.config()?;
    let catalog = SymbolCatalog::load(&config.catalog_path)?;
    tracing::info!(
        path = %config.catalog_path.display(),
        symbols = catalog.len(),
        "loaded symbol catalog"
    );

    let connector: Arc<dyn BoardConnector> = if cli.mock {
        Arc::new(MockConnector::new())
    } else {
        Arc::new(YahooConnector::new_default()?)
    };

    let board = Board::builder()
        .with_connector(connector)
        .catalog(catalog)
        .config(&config)
        .build()?;

    tickerboard::server::serve(Arc::new(board), config.bind).await?;
    Ok(())
}

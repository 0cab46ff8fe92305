#![allow(dead_code)]

use std::sync::Arc;

use chrono::NaiveDate;
use tickerboard::{Board, Selection, Symbol, SymbolCatalog};
use tickerboard_core::{PostalAddress, PricePoint, PriceSeries, ProfileSnapshot};
use tickerboard_mock::{DynamicMockConnector, DynamicMockController, MockConnector};

// ---------- Lightweight fixtures and helpers for tests ----------

/// Common symbol constants used across tests.
pub const AAPL: &str = "AAPL";
pub const MSFT: &str = "MSFT";
pub const GOOG: &str = "GOOG";
pub const TSLA: &str = "TSLA";

/// Catalog offered by the test boards; includes the mock's reserved symbols.
pub const CATALOG: &[&str] = &[
    "AAPL", "BRK.B", "FAIL", "GOOG", "INCOMPLETE", "MSFT", "TSLA",
];

pub fn sym(s: &str) -> Symbol {
    Symbol::new(s).unwrap()
}

pub fn sel(raw: &str) -> Selection {
    Selection::parse(raw).unwrap()
}

pub fn catalog() -> SymbolCatalog {
    SymbolCatalog::from_symbols(CATALOG.iter().map(|s| sym(s)))
}

/// Board over the static fixture connector.
pub fn mock_board() -> Board {
    Board::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .catalog(catalog())
        .build()
        .unwrap()
}

/// Board over a controllable connector; the controller also records calls.
pub fn dynamic_board() -> (Board, DynamicMockController) {
    let (connector, controller) = DynamicMockConnector::new_with_controller("dynamic-mock");
    let board = Board::builder()
        .with_connector(connector)
        .catalog(catalog())
        .build()
        .unwrap();
    (board, controller)
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("invalid date")
}

/// Series with one point per `(day of Jan 2024, adj_close)` row.
pub fn series(symbol: &str, rows: &[(u32, f64)]) -> PriceSeries {
    PriceSeries::new(
        sym(symbol),
        rows.iter()
            .map(|&(d, adj_close)| PricePoint {
                date: date(2024, 1, d),
                adj_close,
            })
            .collect(),
    )
}

pub fn snapshot(symbol: &str, long_name: &str, price: f64) -> ProfileSnapshot {
    ProfileSnapshot {
        symbol: sym(symbol),
        long_name: long_name.to_string(),
        sector: "Technology".into(),
        industry: "Consumer Electronics".into(),
        current_price: price,
        phone: "(408) 996-1010".into(),
        address: PostalAddress {
            address1: "One Apple Park Way".into(),
            city: "Cupertino".into(),
            zip: "95014".into(),
            country: "United States".into(),
        },
        website: "https://www.apple.com".into(),
        long_business_summary: "Designs smartphones.".into(),
    }
}

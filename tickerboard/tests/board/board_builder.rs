use std::sync::Arc;
use std::time::Duration;

use tickerboard::{Board, BoardConfig, BoardConnector, BoardError, HistoryWindow};
use tickerboard_core::Capability;
use tickerboard_mock::MockConnector;

use crate::helpers::{catalog, date, sel};

#[test]
fn build_requires_a_connector() {
    let err = Board::builder().catalog(catalog()).build().err().unwrap();
    assert!(matches!(err, BoardError::InvalidArg(ref m) if m.contains("connector")));
}

#[test]
fn build_requires_a_catalog() {
    let err = Board::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .build()
        .err()
        .unwrap();
    assert!(matches!(err, BoardError::InvalidArg(ref m) if m.contains("catalog")));
}

#[test]
fn defaults_to_2018_in_new_york() {
    let board = Board::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .catalog(catalog())
        .build()
        .unwrap();
    assert_eq!(board.history_window(), HistoryWindow::default());
    assert_eq!(board.history_window().start, date(2018, 1, 1));
    assert_eq!(board.connector_name(), "tickerboard-mock");
}

#[test]
fn config_sets_window() {
    let cfg = BoardConfig {
        history_window: HistoryWindow {
            start: date(2020, 3, 2),
            timezone: chrono_tz::Europe::London,
        },
        request_timeout: Some(Duration::from_secs(3)),
        ..BoardConfig::default()
    };
    let board = Board::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .catalog(catalog())
        .config(&cfg)
        .build()
        .unwrap();
    assert_eq!(board.history_window(), cfg.history_window);
}

struct Bare;

impl BoardConnector for Bare {
    fn name(&self) -> &'static str {
        "bare"
    }
}

#[tokio::test]
async fn connector_without_capability_is_unsupported() {
    let board = Board::builder()
        .with_connector(Arc::new(Bare))
        .catalog(catalog())
        .build()
        .unwrap();

    let err = board.price_figure(&sel("AAPL")).await.unwrap_err();
    assert_eq!(err, BoardError::unsupported(Capability::History.as_str()));
    let err = board.profile_cards(&sel("AAPL")).await.unwrap_err();
    assert_eq!(err, BoardError::unsupported(Capability::Profile.as_str()));
}

use std::sync::Arc;
use std::time::Duration;

use tickerboard::{Board, BoardError};
use tickerboard_mock::{DynamicMockConnector, MockBehavior};

use crate::helpers::{AAPL, catalog, sel, series, sym};

#[tokio::test(start_paused = true)]
async fn stalled_provider_hits_the_render_deadline() {
    let (connector, controller) = DynamicMockConnector::new_with_controller("dynamic-mock");
    controller
        .set_history_behavior(sym(AAPL), MockBehavior::Return(series(AAPL, &[(2, 1.0)])))
        .await;
    controller
        .set_history_behavior(sym("MSFT"), MockBehavior::Hang)
        .await;
    let board = Board::builder()
        .with_connector(connector)
        .catalog(catalog())
        .request_timeout(Duration::from_millis(500))
        .build()
        .unwrap();

    let err = board.price_figure(&sel("AAPL,MSFT")).await.unwrap_err();
    assert_eq!(err, BoardError::request_timeout("history"));
}

#[tokio::test(start_paused = true)]
async fn deadline_covers_profiles_too() {
    let (connector, controller) = DynamicMockConnector::new_with_controller("dynamic-mock");
    controller
        .set_profile_behavior(sym(AAPL), MockBehavior::Hang)
        .await;
    let board = Board::builder()
        .with_connector(Arc::clone(&connector))
        .catalog(catalog())
        .request_timeout(Duration::from_secs(1))
        .build()
        .unwrap();

    let err = board.profile_cards(&sel(AAPL)).await.unwrap_err();
    assert_eq!(err, BoardError::request_timeout("profile"));
}

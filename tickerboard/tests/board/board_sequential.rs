use tickerboard::BoardError;
use tickerboard_core::Capability;
use tickerboard_mock::{MockBehavior, MockCall};

use crate::helpers::{AAPL, GOOG, MSFT, dynamic_board, sel, series, snapshot, sym};

fn call(capability: Capability, s: &str) -> MockCall {
    MockCall {
        capability,
        symbol: sym(s),
    }
}

#[tokio::test]
async fn history_is_fetched_once_per_symbol_in_order() {
    let (board, controller) = dynamic_board();
    for s in [AAPL, MSFT, GOOG] {
        controller
            .set_history_behavior(sym(s), MockBehavior::Return(series(s, &[(2, 1.0), (3, 2.0)])))
            .await;
    }

    let fig = board.price_figure(&sel("GOOG,AAPL,MSFT")).await.unwrap();
    assert_eq!(fig.trace_names().collect::<Vec<_>>(), [GOOG, AAPL, MSFT]);
    assert_eq!(
        controller.calls().await,
        vec![
            call(Capability::History, GOOG),
            call(Capability::History, AAPL),
            call(Capability::History, MSFT),
        ]
    );
}

#[tokio::test]
async fn reselecting_refetches() {
    let (board, controller) = dynamic_board();
    controller
        .set_history_behavior(sym(AAPL), MockBehavior::Return(series(AAPL, &[(2, 1.0)])))
        .await;

    board.price_figure(&sel(AAPL)).await.unwrap();
    board.price_figure(&sel("")).await.unwrap();
    board.price_figure(&sel(AAPL)).await.unwrap();

    assert_eq!(controller.calls().await.len(), 2);
}

#[tokio::test]
async fn first_failure_stops_the_loop() {
    let (board, controller) = dynamic_board();
    controller
        .set_profile_behavior(sym(AAPL), MockBehavior::Return(snapshot(AAPL, "Apple Inc.", 190.0)))
        .await;
    controller
        .set_profile_behavior(
            sym(MSFT),
            MockBehavior::Fail(BoardError::connector("dynamic-mock", "boom")),
        )
        .await;
    controller
        .set_profile_behavior(sym(GOOG), MockBehavior::Return(snapshot(GOOG, "Alphabet Inc.", 140.0)))
        .await;

    let err = board.profile_cards(&sel("AAPL,MSFT,GOOG")).await.unwrap_err();
    assert!(matches!(err, BoardError::Connector { ref msg, .. } if msg == "boom"));
    assert_eq!(
        controller.calls().await,
        vec![call(Capability::Profile, AAPL), call(Capability::Profile, MSFT)]
    );
}

#[tokio::test]
async fn untagged_provider_errors_are_attributed() {
    let (board, controller) = dynamic_board();
    controller
        .set_history_behavior(
            sym(AAPL),
            MockBehavior::Fail(BoardError::Other("socket closed".into())),
        )
        .await;

    let err = board.price_figure(&sel(AAPL)).await.unwrap_err();
    match err {
        BoardError::Connector { connector, msg } => {
            assert_eq!(connector, "dynamic-mock");
            assert!(msg.contains("socket closed"));
        }
        other => panic!("expected connector error, got {other:?}"),
    }
}

#[tokio::test]
async fn whole_number_price_keeps_one_decimal() {
    let (board, controller) = dynamic_board();
    controller
        .set_profile_behavior(sym(AAPL), MockBehavior::Return(snapshot(AAPL, "Apple Inc.", 190.0)))
        .await;
    let cards = board.profile_cards(&sel(AAPL)).await.unwrap();
    assert_eq!(cards[0].lines[2], "Stock Price: $190.0");
}

#[tokio::test]
async fn symbol_unknown_upstream_is_a_connector_error() {
    let (board, _controller) = dynamic_board();

    let err = board.price_figure(&sel(AAPL)).await.unwrap_err();
    assert!(!err.is_client_error(), "{err:?}");
    match err {
        BoardError::Connector { connector, msg } => {
            assert_eq!(connector, "dynamic-mock");
            assert!(msg.contains(AAPL));
        }
        other => panic!("expected connector error, got {other:?}"),
    }
}

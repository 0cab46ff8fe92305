use tickerboard::BoardError;

use crate::helpers::{dynamic_board, mock_board, sel};

#[tokio::test]
async fn symbol_outside_catalog_is_rejected() {
    let board = mock_board();
    let err = board.price_figure(&sel("AAPL,NVDA")).await.unwrap_err();
    assert_eq!(err, BoardError::not_found("symbol NVDA in catalog"));

    let err = board.profile_cards(&sel("NVDA")).await.unwrap_err();
    assert!(err.is_client_error());
}

#[tokio::test]
async fn rejection_happens_before_any_fetch() {
    let (board, controller) = dynamic_board();
    let _ = board.price_figure(&sel("AAPL,NVDA")).await.unwrap_err();
    assert!(controller.calls().await.is_empty());
}

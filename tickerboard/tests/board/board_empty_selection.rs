use tickerboard::{Figure, Selection};

use crate::helpers::{dynamic_board, mock_board, sel};

#[tokio::test]
async fn empty_selection_renders_empty_views() {
    let board = mock_board();
    let fig = board.price_figure(&Selection::empty()).await.unwrap();
    assert_eq!(fig, Figure::empty());
    assert!(fig.layout.title.is_none());

    let cards = board.profile_cards(&Selection::empty()).await.unwrap();
    assert!(cards.is_empty());
}

#[tokio::test]
async fn empty_selection_fetches_nothing() {
    let (board, controller) = dynamic_board();
    board.price_figure(&sel("")).await.unwrap();
    board.profile_cards(&sel(" , ")).await.unwrap();
    assert!(controller.calls().await.is_empty());
}

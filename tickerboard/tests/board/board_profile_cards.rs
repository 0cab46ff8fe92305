use tickerboard::BoardError;
use tickerboard::cards::{CARD_HEADING, SUMMARY_LABEL};

use crate::helpers::{AAPL, MSFT, mock_board, sel};

#[tokio::test]
async fn card_lines_follow_the_profile_layout() {
    let cards = mock_board().profile_cards(&sel(AAPL)).await.unwrap();
    assert_eq!(cards.len(), 1);
    let card = &cards[0];
    assert_eq!(card.heading, CARD_HEADING);
    assert_eq!(card.title, "Apple Inc.");
    assert_eq!(
        card.lines,
        vec![
            "Sector: Technology",
            "Industry: Consumer Electronics",
            "Stock Price: $189.3",
            "Phone: (408) 996-1010",
            "Address: One Apple Park Way, Cupertino, 95014, United States",
            "Website: https://www.apple.com",
        ]
    );
    assert_eq!(card.summary_label, SUMMARY_LABEL);
    assert!(card.summary.starts_with("Apple Inc. designs"));
}

#[tokio::test]
async fn one_card_per_symbol_in_selection_order() {
    let cards = mock_board().profile_cards(&sel("MSFT,AAPL")).await.unwrap();
    let symbols: Vec<&str> = cards.iter().map(|c| c.symbol.as_str()).collect();
    assert_eq!(symbols, [MSFT, AAPL]);
    assert_eq!(cards[0].title, "Microsoft Corporation");
}

#[tokio::test]
async fn missing_field_fails_the_render() {
    let err = mock_board()
        .profile_cards(&sel("AAPL,INCOMPLETE"))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        BoardError::Data("missing field `phone` in profile for INCOMPLETE".into())
    );
    assert!(!err.is_client_error());
}

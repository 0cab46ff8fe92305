use tickerboard::figure::CHART_TITLE;

use crate::helpers::{AAPL, MSFT, date, mock_board, sel};

#[tokio::test]
async fn single_symbol_yields_one_named_trace() {
    let fig = mock_board().price_figure(&sel(AAPL)).await.unwrap();

    assert_eq!(fig.data.len(), 1);
    let trace = &fig.data[0];
    assert_eq!(trace.name, "AAPL");
    assert_eq!(trace.kind, "scatter");
    assert_eq!(trace.mode, "lines");
    assert_eq!(trace.x.first(), Some(&date(2023, 1, 3)));
    assert_eq!(trace.x.len(), trace.y.len());
    assert!((trace.y[0] - 123.63).abs() < 1e-9);
}

#[tokio::test]
async fn traces_follow_selection_order() {
    let board = mock_board();
    let fig = board.price_figure(&sel("AAPL,MSFT")).await.unwrap();
    assert_eq!(fig.trace_names().collect::<Vec<_>>(), [AAPL, MSFT]);

    let fig = board.price_figure(&sel("MSFT,AAPL")).await.unwrap();
    assert_eq!(fig.trace_names().collect::<Vec<_>>(), [MSFT, AAPL]);
}

#[tokio::test]
async fn non_empty_figure_has_centered_title() {
    let fig = mock_board().price_figure(&sel("GOOG")).await.unwrap();
    let title = fig.layout.title.expect("title");
    assert_eq!(title.text, CHART_TITLE);
    assert!((title.x - 0.5).abs() < f64::EPSILON);
    assert!((title.y - 0.9).abs() < f64::EPSILON);
    assert_eq!(title.xanchor, "center");
    assert_eq!(title.yanchor, "top");
}

#[tokio::test]
async fn figure_json_matches_plotly_shape() {
    let fig = mock_board().price_figure(&sel(AAPL)).await.unwrap();
    let v = serde_json::to_value(&fig).unwrap();
    assert_eq!(v["data"][0]["type"], "scatter");
    assert_eq!(v["data"][0]["x"][0], "2023-01-03");
    assert_eq!(v["layout"]["title"]["text"], CHART_TITLE);
}

#[tokio::test]
async fn one_failed_fetch_fails_the_whole_figure() {
    let err = mock_board()
        .price_figure(&sel("AAPL,FAIL,MSFT"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        tickerboard::BoardError::Connector { ref connector, .. } if connector == "tickerboard-mock"
    ));
}

mod helpers;

use std::sync::Arc;

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use tickerboard::server::{FIGURE_ROUTE, PROFILES_ROUTE, router};
use tower::ServiceExt;

use tickerboard::Board;

use helpers::{CATALOG, dynamic_board, mock_board};

async fn get(path: &str) -> (StatusCode, String) {
    get_from(mock_board(), path).await
}

async fn get_from(board: Board, path: &str) -> (StatusCode, String) {
    let app = router(Arc::new(board));
    let resp = app
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn get_json(path: &str) -> serde_json::Value {
    let (status, body) = get(path).await;
    assert_eq!(status, StatusCode::OK, "{body}");
    serde_json::from_str(&body).unwrap()
}

#[tokio::test]
async fn root_and_alias_serve_the_same_page() {
    let (s1, root) = get("/").await;
    let (s2, alias) = get("/my_dash_app").await;
    assert_eq!(s1, StatusCode::OK);
    assert_eq!(s2, StatusCode::OK);
    assert_eq!(root, alias);
}

#[tokio::test]
async fn page_lists_catalog_in_order() {
    let (_, page) = get("/").await;
    let positions: Vec<usize> = CATALOG
        .iter()
        .map(|s| page.find(&format!(r#"<option value="{s}">"#)).expect(s))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
    assert!(page.contains(r#"id="graph""#));
    assert!(page.contains(r#"id="stock-info""#));
    assert!(page.contains(FIGURE_ROUTE));
    assert!(page.contains(PROFILES_ROUTE));
}

#[tokio::test]
async fn unknown_path_is_404() {
    let (status, _) = get("/favicon.ico").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn figure_route_renders_traces_in_order() {
    let v = get_json("/_board/figure?symbols=MSFT,AAPL").await;
    assert_eq!(v["data"][0]["name"], "MSFT");
    assert_eq!(v["data"][1]["name"], "AAPL");
    assert_eq!(v["layout"]["title"]["xanchor"], "center");
}

#[tokio::test]
async fn empty_selection_renders_empty_outputs() {
    assert_eq!(
        get_json("/_board/figure").await,
        serde_json::json!({"data": [], "layout": {}})
    );
    assert_eq!(
        get_json("/_board/profiles?symbols=").await,
        serde_json::json!([])
    );
}

#[tokio::test]
async fn profiles_route_renders_cards() {
    let v = get_json("/_board/profiles?symbols=AAPL").await;
    assert_eq!(v[0]["heading"], "Company Profile");
    assert_eq!(v[0]["title"], "Apple Inc.");
    assert_eq!(v[0]["lines"][2], "Stock Price: $189.3");
    assert_eq!(v[0]["summary_label"], "Business Summary");
}

#[tokio::test]
async fn unknown_or_malformed_symbol_is_400() {
    let (status, body) = get("/_board/figure?symbols=NVDA").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("NVDA"));

    let (status, _) = get("/_board/profiles?symbols=%3Cscript%3E").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn provider_failure_is_502_with_generic_message() {
    let (status, body) = get("/_board/figure?symbols=AAPL,FAIL").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(!body.contains("forced failure"));

    let (status, _) = get("/_board/profiles?symbols=INCOMPLETE").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn catalog_symbol_unknown_upstream_is_502() {
    let (board, _controller) = dynamic_board();

    let (status, body) = get_from(board, "/_board/figure?symbols=AAPL").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body, "failed to load market data");

    let (board, _controller) = dynamic_board();
    let (status, body) = get_from(board, "/_board/profiles?symbols=AAPL").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(!body.contains("not found"));
}

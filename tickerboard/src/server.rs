//! HTTP surface: the page, its alias, and the two view update routes.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use tickerboard_core::{BoardError, Selection};

use crate::cards::ProfileCard;
use crate::core::Board;
use crate::figure::Figure;
use crate::page;

/// Update route for the price chart.
pub const FIGURE_ROUTE: &str = "/_board/figure";
/// Update route for the profile cards.
pub const PROFILES_ROUTE: &str = "/_board/profiles";

const UPSTREAM_FAILURE: &str = "failed to load market data";

#[derive(Clone)]
struct AppState {
    board: Arc<Board>,
    page: Arc<str>,
}

/// `?symbols=AAPL,MSFT`; absent or blank means the empty selection.
#[derive(Debug, Default, Deserialize)]
struct SymbolsQuery {
    #[serde(default)]
    symbols: String,
}

impl SymbolsQuery {
    fn selection(&self) -> Result<Selection, BoardError> {
        Selection::parse(&self.symbols)
    }
}

/// A failed render, answered with a short message.
///
/// Caller mistakes (malformed or unknown symbols) map to 400; everything
/// the provider side caused maps to 502 with a generic body.
#[derive(Debug)]
pub struct RenderError(pub BoardError);

impl From<BoardError> for RenderError {
    fn from(e: BoardError) -> Self {
        Self(e)
    }
}

impl IntoResponse for RenderError {
    fn into_response(self) -> Response {
        if self.0.is_client_error() {
            tracing::info!(error = %self.0, "rejected render request");
            (StatusCode::BAD_REQUEST, self.0.to_string()).into_response()
        } else {
            tracing::error!(error = %self.0, "render failed");
            (StatusCode::BAD_GATEWAY, UPSTREAM_FAILURE).into_response()
        }
    }
}

/// Build the application router for `board`.
///
/// The page is rendered once, from the catalog the board was built with.
pub fn router(board: Arc<Board>) -> Router {
    let page: Arc<str> = page::render(board.catalog()).into();
    let state = AppState { board, page };
    Router::new()
        .route("/", get(index))
        .route("/my_dash_app", get(index))
        .route(FIGURE_ROUTE, get(figure))
        .route(PROFILES_ROUTE, get(profiles))
        .with_state(state)
}

async fn index(State(state): State<AppState>) -> Html<String> {
    Html(state.page.to_string())
}

async fn figure(
    State(state): State<AppState>,
    Query(q): Query<SymbolsQuery>,
) -> Result<Json<Figure>, RenderError> {
    let selection = q.selection()?;
    let fig = state.board.price_figure(&selection).await?;
    tracing::info!(symbols = selection.len(), traces = fig.data.len(), "rendered figure");
    Ok(Json(fig))
}

async fn profiles(
    State(state): State<AppState>,
    Query(q): Query<SymbolsQuery>,
) -> Result<Json<Vec<ProfileCard>>, RenderError> {
    let selection = q.selection()?;
    let cards = state.board.profile_cards(&selection).await?;
    tracing::info!(symbols = selection.len(), cards = cards.len(), "rendered profile cards");
    Ok(Json(cards))
}

/// Bind `addr` and serve until Ctrl-C.
///
/// # Errors
/// Returns `Other` if the address cannot be bound or the server fails.
pub async fn serve(board: Arc<Board>, addr: SocketAddr) -> Result<(), BoardError> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| BoardError::Other(format!("cannot bind {addr}: {e}")))?;
    let local = listener
        .local_addr()
        .map_err(|e| BoardError::Other(e.to_string()))?;
    tracing::info!(addr = %local, connector = board.connector_name(), "serving dashboard");

    axum::serve(listener, router(board))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| BoardError::Other(format!("server error: {e}")))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "cannot listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}

//! Minimal Yahoo Finance HTTP client: chart history and quoteSummary profiles.

use std::sync::Arc;

use reqwest::{StatusCode, header};
use tickerboard_core::{BoardError, HistoryRequest, PriceSeries, ProfileSnapshot, Symbol};
use tokio::sync::Mutex;
use url::Url;

use crate::wire::{ChartEnvelope, PROFILE_MODULES, QuoteSummaryEnvelope};

/// Browser user agent; Yahoo rejects the default `reqwest` one.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/122.0.0.0 Safari/537.36";

/// Page that hands out the consent cookie.
pub const YAHOO_COOKIE_URL: &str = "https://fc.yahoo.com/";
/// Root of the public JSON API.
pub const YAHOO_QUERY_URL: &str = "https://query1.finance.yahoo.com/";

const CONNECTOR: &str = "tickerboard-yahoo";

/// Base URLs the client talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// Page visited once to obtain the consent cookie.
    pub cookie: Url,
    /// Root of the `query1` JSON API.
    pub query: Url,
}

impl Endpoints {
    /// The live Yahoo Finance endpoints.
    ///
    /// # Errors
    /// Returns `InvalidArg` if either built-in URL fails to parse.
    pub fn yahoo() -> Result<Self, BoardError> {
        Ok(Self {
            cookie: parse_url(YAHOO_COOKIE_URL)?,
            query: parse_url(YAHOO_QUERY_URL)?,
        })
    }

    /// Point both the cookie page and the API at one base URL (e.g. a local mock server).
    ///
    /// The cookie page becomes `{base}/cookie`.
    ///
    /// # Errors
    /// Returns `InvalidArg` if `base` is not an absolute URL.
    pub fn from_base(base: &str) -> Result<Self, BoardError> {
        let query = Url::parse(base)
            .map_err(|e| BoardError::InvalidArg(format!("invalid base url `{base}`: {e}")))?;
        let cookie = query
            .join("cookie")
            .map_err(|e| BoardError::InvalidArg(format!("invalid base url `{base}`: {e}")))?;
        Ok(Self { cookie, query })
    }
}

fn parse_url(raw: &str) -> Result<Url, BoardError> {
    Url::parse(raw).map_err(|e| BoardError::InvalidArg(format!("invalid url `{raw}`: {e}")))
}

/// HTTP client for the two Yahoo endpoints the dashboard needs.
///
/// Cheap to clone; clones share the HTTP connection pool and the crumb.
#[derive(Clone)]
pub struct YahooClient {
    http: reqwest::Client,
    endpoints: Arc<Endpoints>,
    user_agent: Arc<str>,
    crumb: Arc<Mutex<Option<String>>>,
}

impl YahooClient {
    /// Start configuring a client.
    #[must_use]
    pub fn builder() -> crate::builder::YahooClientBuilder {
        crate::builder::YahooClientBuilder::default()
    }

    pub(crate) fn from_parts(http: reqwest::Client, endpoints: Endpoints, user_agent: &str) -> Self {
        Self {
            http,
            endpoints: Arc::new(endpoints),
            user_agent: Arc::from(user_agent),
            crumb: Arc::new(Mutex::new(None)),
        }
    }

    /// Endpoints in use.
    #[must_use]
    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    fn api_url(&self, segments: &[&str]) -> Result<Url, BoardError> {
        let mut url = self.endpoints.query.clone();
        url.path_segments_mut()
            .map_err(|()| BoardError::InvalidArg("query endpoint cannot be a base url".into()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn get(&self, url: Url) -> reqwest::RequestBuilder {
        self.http
            .get(url)
            .header(header::USER_AGENT, self.user_agent.as_ref())
    }

    /// Fetch the daily adjusted-close series of `symbol` over `req`.
    ///
    /// # Errors
    /// `NotFound` for unknown symbols, `Connector` for transport or HTTP
    /// failures, `Data` for malformed payloads.
    pub async fn history(
        &self,
        symbol: &Symbol,
        req: &HistoryRequest,
    ) -> Result<PriceSeries, BoardError> {
        let context = format!("history for {symbol}");
        let url = self.api_url(&["v8", "finance", "chart", symbol.as_str()])?;
        let resp = self
            .get(url)
            .query(&[
                ("period1", req.start().timestamp().to_string()),
                ("period2", req.end().timestamp().to_string()),
                ("interval", "1d".to_string()),
                ("events", "div,split".to_string()),
                ("includeAdjustedClose", "true".to_string()),
            ])
            .send()
            .await
            .map_err(|e| transport(&e, &context))?;
        let (status, body) = read_body(resp, &context).await?;
        let env: ChartEnvelope = decode(status, &body, &context)?;
        env.into_series(symbol)
    }

    /// Fetch the current profile snapshot of `symbol`.
    ///
    /// # Errors
    /// As [`history`](Self::history); additionally `Data` naming the first
    /// snapshot field Yahoo left out.
    pub async fn profile(&self, symbol: &Symbol) -> Result<ProfileSnapshot, BoardError> {
        let context = format!("profile for {symbol}");
        let crumb = self.crumb().await?;
        let url = self.api_url(&["v10", "finance", "quoteSummary", symbol.as_str()])?;
        let resp = self
            .get(url)
            .query(&[("modules", PROFILE_MODULES), ("crumb", crumb.as_str())])
            .send()
            .await
            .map_err(|e| transport(&e, &context))?;
        if resp.status() == StatusCode::UNAUTHORIZED {
            // Stale crumb; the next render fetches a fresh one.
            self.crumb.lock().await.take();
            return Err(BoardError::connector(
                CONNECTOR,
                format!("unauthorized (crumb rejected): {context}"),
            ));
        }
        let (status, body) = read_body(resp, &context).await?;
        let env: QuoteSummaryEnvelope = decode(status, &body, &context)?;
        env.into_snapshot(symbol)
    }

    async fn crumb(&self) -> Result<String, BoardError> {
        let mut guard = self.crumb.lock().await;
        if let Some(crumb) = guard.as_ref() {
            return Ok(crumb.clone());
        }

        // Only the Set-Cookie header matters; the page itself answers 404.
        self.get(self.endpoints.cookie.clone())
            .send()
            .await
            .map_err(|e| transport(&e, "consent cookie"))?;

        let url = self.api_url(&["v1", "test", "getcrumb"])?;
        let resp = self
            .get(url)
            .send()
            .await
            .map_err(|e| transport(&e, "crumb"))?;
        let status = resp.status();
        let crumb = resp
            .text()
            .await
            .map_err(|e| transport(&e, "crumb"))?
            .trim()
            .to_string();
        if !status.is_success() || crumb.is_empty() || crumb.contains('<') {
            return Err(BoardError::connector(
                CONNECTOR,
                format!("could not obtain crumb (status {status})"),
            ));
        }
        *guard = Some(crumb.clone());
        Ok(crumb)
    }
}

fn transport(e: &reqwest::Error, context: &str) -> BoardError {
    BoardError::connector(CONNECTOR, format!("{context}: {e}"))
}

async fn read_body(
    resp: reqwest::Response,
    context: &str,
) -> Result<(StatusCode, String), BoardError> {
    let status = resp.status();
    let body = resp.text().await.map_err(|e| transport(&e, context))?;
    match status {
        // Yahoo pairs 404 with a JSON error body; let the envelope explain it.
        s if s.is_success() || s == StatusCode::NOT_FOUND => Ok((s, body)),
        StatusCode::TOO_MANY_REQUESTS => Err(BoardError::connector(
            CONNECTOR,
            format!("rate limit: {context}"),
        )),
        s if s.is_server_error() => Err(BoardError::connector(
            CONNECTOR,
            format!("server error {s}: {context}"),
        )),
        s => Err(BoardError::connector(
            CONNECTOR,
            format!("status {s}: {context}"),
        )),
    }
}

fn decode<T: serde::de::DeserializeOwned>(
    status: StatusCode,
    body: &str,
    context: &str,
) -> Result<T, BoardError> {
    serde_json::from_str(body).map_err(|e| {
        if status == StatusCode::NOT_FOUND {
            BoardError::not_found(context.to_string())
        } else {
            BoardError::Data(format!("malformed response for {context}: {e}"))
        }
    })
}

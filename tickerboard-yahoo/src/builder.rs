use std::time::Duration;

use tickerboard_core::BoardError;

use crate::client::{DEFAULT_USER_AGENT, Endpoints, YahooClient};

/// Builder for [`YahooClient`].
///
/// Defaults: the public Yahoo endpoints, a desktop browser user agent, a
/// cookie-enabled `reqwest` client and no request timeout.
#[derive(Default)]
pub struct YahooClientBuilder {
    endpoints: Option<Endpoints>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
    custom_client: Option<reqwest::Client>,
}

impl YahooClientBuilder {
    /// Override the endpoints (used to point the client at a mock server).
    #[must_use]
    pub fn endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = Some(endpoints);
        self
    }

    /// Override the user agent sent with every request.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Per-request timeout of the internally built HTTP client.
    ///
    /// Ignored when a custom client is supplied.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Use an existing `reqwest::Client`.
    ///
    /// Note: the provided client should enable a cookie store for the crumb flow.
    #[must_use]
    pub fn custom_client(mut self, http: reqwest::Client) -> Self {
        self.custom_client = Some(http);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    /// Returns `Other` if the underlying HTTP client cannot be constructed,
    /// `InvalidArg` if the default endpoints fail to parse.
    pub fn build(self) -> Result<YahooClient, BoardError> {
        let http = match self.custom_client {
            Some(http) => http,
            None => {
                let mut builder = reqwest::Client::builder().cookie_store(true);
                if let Some(t) = self.timeout {
                    builder = builder.timeout(t);
                }
                builder
                    .build()
                    .map_err(|e| BoardError::Other(format!("failed to build http client: {e}")))?
            }
        };
        let endpoints = match self.endpoints {
            Some(endpoints) => endpoints,
            None => Endpoints::yahoo()?,
        };
        let ua = self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT);
        Ok(YahooClient::from_parts(http, endpoints, ua))
    }
}

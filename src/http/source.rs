//! Page source over a page-numbered JSON REST endpoint
//!
//! Handles:
//! - Query assembly (`?page=3` plus any static parameters)
//! - Automatic retries with exponential backoff for retryable failures
//! - Response body parsing into the page envelope

use std::collections::HashMap;
use std::marker::PhantomData;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::error::{is_retryable_status, Error, Result};
use crate::source::{PageSource, RawPage};

/// Configuration for [`HttpPageSource`]
#[derive(Debug, Clone)]
pub struct HttpSourceConfig {
    /// Endpoint serving the paged listing.
    pub endpoint: String,
    /// Query parameter carrying the requested page number.
    pub page_param: String,
    /// Static query parameters added to every request.
    pub query: HashMap<String, String>,
    /// Headers added to every request.
    pub headers: HashMap<String, String>,
    /// Request timeout.
    pub timeout: Duration,
    /// Maximum number of retries for retryable failures.
    pub max_retries: u32,
    /// Initial delay for backoff.
    pub initial_backoff: Duration,
    /// Maximum delay for backoff.
    pub max_backoff: Duration,
    /// User agent string.
    pub user_agent: String,
}

impl HttpSourceConfig {
    /// Create a config for the given listing endpoint, with defaults for
    /// everything else.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            page_param: "page".to_string(),
            query: HashMap::new(),
            headers: HashMap::new(),
            timeout: Duration::from_secs(30),
            max_retries: 3,
            initial_backoff: Duration::from_millis(100),
            max_backoff: Duration::from_secs(60),
            user_agent: format!("connectionify/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Set the page number query parameter name
    #[must_use]
    pub fn page_param(mut self, param: impl Into<String>) -> Self {
        self.page_param = param.into();
        self
    }

    /// Add a static query parameter
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    /// Add a default header
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Set the request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set max retries
    #[must_use]
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    /// Set backoff bounds
    #[must_use]
    pub fn backoff(mut self, initial: Duration, max: Duration) -> Self {
        self.initial_backoff = initial;
        self.max_backoff = max;
        self
    }

    /// Set the user agent
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }
}

/// A [`PageSource`] that fetches pages from a JSON REST endpoint.
///
/// Responses must use the page envelope wire shape:
/// `{ "items": [...], "pageInfo": { "currentPageNum": 1, "nextPageNum": 2, "prevPageNum": null } }`.
pub struct HttpPageSource<T> {
    client: Client,
    config: HttpSourceConfig,
    _item: PhantomData<fn() -> T>,
}

impl<T> HttpPageSource<T> {
    /// Build a source from config.
    ///
    /// The endpoint is validated here so a bad URL fails at construction,
    /// not on the first fetch.
    pub fn new(config: HttpSourceConfig) -> Result<Self> {
        Url::parse(&config.endpoint)?;

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            client,
            config,
            _item: PhantomData,
        })
    }

    fn page_url(&self, page_num: u64) -> Result<Url> {
        let mut url = Url::parse(&self.config.endpoint)?;
        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in &self.config.query {
                pairs.append_pair(key, value);
            }
            pairs.append_pair(&self.config.page_param, &page_num.to_string());
        }
        Ok(url)
    }

    fn backoff_delay(&self, attempt: u32) -> Duration {
        let factor = 2u32.saturating_pow(attempt);
        std::cmp::min(
            self.config.initial_backoff * factor,
            self.config.max_backoff,
        )
    }
}

impl<T> std::fmt::Debug for HttpPageSource<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpPageSource")
            .field("config", &self.config)
            .finish()
    }
}

#[async_trait]
impl<T> PageSource for HttpPageSource<T>
where
    T: DeserializeOwned + Send + Sync,
{
    type Item = T;

    async fn fetch_page(&self, page_num: u64) -> Result<RawPage<T>> {
        let url = self.page_url(page_num)?;
        let mut attempt = 0;

        loop {
            let mut request = self.client.get(url.clone());
            for (key, value) in &self.config.headers {
                request = request.header(key.as_str(), value.as_str());
            }

            match request.send().await {
                Ok(response) => {
                    let status = response.status();

                    if status.is_success() {
                        debug!(page_num, "page fetch succeeded");
                        return Ok(response.json::<RawPage<T>>().await?);
                    }

                    if retryable(status) && attempt < self.config.max_retries {
                        let delay = self.backoff_delay(attempt);
                        warn!(
                            page_num,
                            status = status.as_u16(),
                            attempt,
                            ?delay,
                            "retryable page fetch failure, backing off"
                        );
                        tokio::time::sleep(delay).await;
                        attempt += 1;
                        continue;
                    }

                    let body = response.text().await.unwrap_or_default();
                    return Err(Error::http_status(status.as_u16(), body));
                }
                Err(e) => {
                    if (e.is_timeout() || e.is_connect()) && attempt < self.config.max_retries {
                        let delay = self.backoff_delay(attempt);
                        warn!(page_num, attempt, ?delay, "transport failure, backing off");
                        tokio::time::sleep(delay).await;
                        attempt += 1;
                        continue;
                    }
                    return Err(Error::Http(e));
                }
            }
        }
    }
}

fn retryable(status: StatusCode) -> bool {
    is_retryable_status(status.as_u16())
}

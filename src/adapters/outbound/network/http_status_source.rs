use crate::ports::outbound::{FetchedStatus, StatusSource};
use crate::shared::Result;
use async_trait::async_trait;
use reqwest::header::{CACHE_CONTROL, PRAGMA};
use std::time::Duration;

/// HttpStatusSource adapter fetching the status endpoint over HTTP
///
/// Sends `Cache-Control: no-store` and `Pragma: no-cache` so neither the
/// client nor an intermediary can answer from a cache.
pub struct HttpStatusSource {
    client: reqwest::Client,
    url: String,
}

impl HttpStatusSource {
    /// Creates a source for `url`; `timeout` of `None` waits indefinitely
    pub fn new(url: &str, timeout: Option<Duration>) -> Result<Self> {
        let user_agent = format!("macro-watch/{}", env!("CARGO_PKG_VERSION"));
        let mut builder = reqwest::Client::builder().user_agent(user_agent);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            url: url.to_string(),
        })
    }
}

#[async_trait]
impl StatusSource for HttpStatusSource {
    async fn fetch_status(&self) -> Result<FetchedStatus> {
        let response = self
            .client
            .get(&self.url)
            .header(CACHE_CONTROL, "no-store")
            .header(PRAGMA, "no-cache")
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(FetchedStatus::new(status, body))
    }
}

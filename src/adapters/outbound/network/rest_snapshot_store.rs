use crate::ports::outbound::SnapshotStore;
use crate::shared::Result;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

/// Reply envelope of the KV REST API
#[derive(Debug, Deserialize)]
struct KvReply {
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<String>,
}

/// RestSnapshotStore adapter for Upstash / Vercel KV compatible REST stores
///
/// Issues `GET {url}/get/{key}` with a bearer token and reads the
/// `{"result": ...}` or `{"error": ...}` envelope. One request per read,
/// no retries: a failed read is reported to the caller as-is.
pub struct RestSnapshotStore {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

impl RestSnapshotStore {
    /// Creates a store client; the connection pool is reused for every read
    pub fn new(base_url: &str, token: &str, timeout: Duration) -> Result<Self> {
        let user_agent = format!("macro-watch/{}", env!("CARGO_PKG_VERSION"));
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        })
    }

    fn get_url(&self, key: &str) -> String {
        format!("{}/get/{}", self.base_url, urlencoding::encode(key))
    }

    /// Maps the `result` field to stored text; falsy results count as absent
    fn stored_text(result: Option<Value>) -> Option<String> {
        match result? {
            Value::Null | Value::Bool(false) => None,
            Value::String(text) if text.is_empty() => None,
            Value::String(text) => Some(text),
            Value::Number(n) if n.as_f64() == Some(0.0) => None,
            // The store client may hand back already-decoded JSON; re-encode it
            other => Some(other.to_string()),
        }
    }
}

#[async_trait]
impl SnapshotStore for RestSnapshotStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let response = self
            .client
            .get(self.get_url(key))
            .bearer_auth(&self.token)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        let reply: Option<KvReply> = serde_json::from_str(&text).ok();

        if let Some(message) = reply.as_ref().and_then(|r| r.error.as_deref()) {
            anyhow::bail!("{}", message);
        }
        if !status.is_success() {
            anyhow::bail!("KV REST API returned status code {}", status);
        }

        let reply = reply.ok_or_else(|| anyhow::anyhow!("KV REST API returned an unreadable reply"))?;
        Ok(Self::stored_text(reply.result))
    }
}

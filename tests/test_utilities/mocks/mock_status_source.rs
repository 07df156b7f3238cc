use async_trait::async_trait;
use macro_watch::prelude::*;

/// Mock StatusSource for testing that answers every fetch the same way
pub struct MockStatusSource {
    reply: std::result::Result<FetchedStatus, String>,
}

impl MockStatusSource {
    pub fn responding(status: u16, body: &str) -> Self {
        Self {
            reply: Ok(FetchedStatus::new(status, body)),
        }
    }

    /// Source whose fetch rejects with `message`
    pub fn rejecting(message: &str) -> Self {
        Self {
            reply: Err(message.to_string()),
        }
    }
}

#[async_trait]
impl StatusSource for MockStatusSource {
    async fn fetch_status(&self) -> Result<FetchedStatus> {
        match &self.reply {
            Ok(fetched) => Ok(fetched.clone()),
            Err(message) => Err(anyhow::anyhow!("{}", message)),
        }
    }
}

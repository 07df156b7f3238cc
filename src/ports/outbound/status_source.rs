use crate::shared::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Status line and body of a completed status request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedStatus {
    pub status: u16,
    pub body: String,
}

impl FetchedStatus {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is in the 2xx range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// StatusSource port for the dashboard's single status request
///
/// Implementations must bypass every cache so each call is a live read.
#[async_trait]
pub trait StatusSource: Send + Sync {
    /// Performs one uncached status request
    ///
    /// # Errors
    /// Returns an error only when no status was obtained at all
    /// (connection refused, DNS failure, unreadable body, ...).
    /// Non-2xx statuses are returned as `Ok`.
    async fn fetch_status(&self) -> Result<FetchedStatus>;
}

pub type SharedStatusSource = Arc<dyn StatusSource>;

#[async_trait]
impl<T: StatusSource + ?Sized> StatusSource for Arc<T> {
    async fn fetch_status(&self) -> Result<FetchedStatus> {
        (**self).fetch_status().await
    }
}

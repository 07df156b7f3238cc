use crate::application::use_cases::ReadStatusUseCase;
use crate::ports::outbound::{FetchedStatus, SnapshotStore, StatusSource};
use crate::shared::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// InProcessStatusSource adapter serving the dashboard from the local status use case
///
/// Produces the same status code and body the `/api/status` route would,
/// without a network round trip. Nothing is cached between calls.
pub struct InProcessStatusSource<S> {
    status: Arc<ReadStatusUseCase<S>>,
}

impl<S: SnapshotStore> InProcessStatusSource<S> {
    pub fn new(status: Arc<ReadStatusUseCase<S>>) -> Self {
        Self { status }
    }
}

#[async_trait]
impl<S: SnapshotStore> StatusSource for InProcessStatusSource<S> {
    async fn fetch_status(&self) -> Result<FetchedStatus> {
        let outcome = self.status.execute().await;
        Ok(FetchedStatus::new(outcome.status_code(), outcome.into_body()))
    }
}

use crate::application::dto::{StatusOutcome, KV_ERROR_FALLBACK};
use crate::ports::outbound::SnapshotStore;
use crate::shared::result::message_or;
use crate::stress_snapshot::services::SnapshotParser;
use crate::stress_snapshot::SNAPSHOT_KEY;

/// ReadStatusUseCase - serves the latest stored snapshot
///
/// One store read per call, no retries. The stored text is returned as-is;
/// it is only inspected to warn about payloads the dashboard cannot parse.
///
/// # Type Parameters
/// * `S` - SnapshotStore implementation
pub struct ReadStatusUseCase<S> {
    store: S,
}

impl<S: SnapshotStore> ReadStatusUseCase<S> {
    /// Creates a new ReadStatusUseCase with an injected store
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Reads the snapshot key and classifies the result
    pub async fn execute(&self) -> StatusOutcome {
        match self.store.get(SNAPSHOT_KEY).await {
            Ok(Some(body)) if !body.is_empty() => {
                if !SnapshotParser::is_parseable(&body) {
                    tracing::warn!(
                        key = SNAPSHOT_KEY,
                        "stored snapshot is not a parseable JSON object; dashboard will show an error"
                    );
                }
                tracing::debug!(key = SNAPSHOT_KEY, bytes = body.len(), "snapshot found");
                StatusOutcome::Found(body)
            }
            Ok(_) => {
                tracing::info!(key = SNAPSHOT_KEY, "no snapshot stored yet");
                StatusOutcome::Absent
            }
            Err(err) => {
                let message = message_or(&err, KV_ERROR_FALLBACK);
                tracing::warn!(key = SNAPSHOT_KEY, error = %message, "snapshot store read failed");
                StatusOutcome::StoreFailure(message)
            }
        }
    }
}

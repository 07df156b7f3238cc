use crate::shared::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// SnapshotStore port for reading stored snapshots
///
/// This port abstracts the external key-value store the compute process
/// writes to. The service only ever reads through it.
///
/// # Async Support
/// Reads are async so concurrent requests never block each other.
/// Implementations must be `Send + Sync` to be shared across requests.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Reads the raw value stored under `key`
    ///
    /// # Arguments
    /// * `key` - Store key to read
    ///
    /// # Returns
    /// The stored text exactly as written, or `None` when the key is absent
    ///
    /// # Errors
    /// Returns an error if:
    /// - The store cannot be reached
    /// - The store rejects the credentials
    /// - The store reply cannot be understood
    async fn get(&self, key: &str) -> Result<Option<String>>;
}

/// Store handle shared by every request for the lifetime of the process
pub type SharedSnapshotStore = Arc<dyn SnapshotStore>;

#[async_trait]
impl<T: SnapshotStore + ?Sized> SnapshotStore for Arc<T> {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key).await
    }
}

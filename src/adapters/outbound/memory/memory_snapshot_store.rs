use crate::ports::outbound::SnapshotStore;
use crate::shared::error::WatchError;
use crate::shared::Result;
use crate::stress_snapshot::services::SnapshotParser;
use crate::stress_snapshot::SNAPSHOT_KEY;
use async_trait::async_trait;
use dashmap::DashMap;
use std::path::Path;

/// MemorySnapshotStore adapter keeping values in a concurrent map
///
/// Used to preview the dashboard without a KV service: the map is filled
/// once at startup and only read afterwards.
pub struct MemorySnapshotStore {
    entries: DashMap<String, String>,
}

impl MemorySnapshotStore {
    /// Creates an empty store; every read reports the key as absent
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Adds an entry while building the store
    pub fn with_entry(self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }

    /// Loads a snapshot file and stores it under the snapshot key
    ///
    /// The file is validated here, when it is written into the store, so
    /// the dashboard never receives a payload it cannot parse.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not a snapshot object
    pub fn from_seed_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| WatchError::SeedFileError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        SnapshotParser::parse(&content).map_err(|e| WatchError::SeedFileError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        tracing::info!(path = %path.display(), key = SNAPSHOT_KEY, "seeded in-memory snapshot store");
        Ok(Self::new().with_entry(SNAPSHOT_KEY, &content))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for MemorySnapshotStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SnapshotStore for MemorySnapshotStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).map(|entry| entry.value().clone()))
    }
}

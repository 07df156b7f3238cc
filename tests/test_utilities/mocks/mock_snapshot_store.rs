use async_trait::async_trait;
use macro_watch::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Clone)]
enum Reply {
    Value(String),
    Absent,
    Failure(String),
}

/// Mock SnapshotStore for testing that records the keys it was asked for
#[derive(Clone)]
pub struct MockSnapshotStore {
    reply: Reply,
    pub requested_keys: Arc<std::sync::Mutex<Vec<String>>>,
    calls: Arc<AtomicUsize>,
}

impl MockSnapshotStore {
    fn with_reply(reply: Reply) -> Self {
        Self {
            reply,
            requested_keys: Arc::new(std::sync::Mutex::new(Vec::new())),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn with_value(value: &str) -> Self {
        Self::with_reply(Reply::Value(value.to_string()))
    }

    pub fn absent() -> Self {
        Self::with_reply(Reply::Absent)
    }

    /// Store whose reads fail with `message`; an empty message mimics an
    /// error that carries no description
    pub fn with_failure(message: &str) -> Self {
        Self::with_reply(Reply::Failure(message.to_string()))
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SnapshotStore for MockSnapshotStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requested_keys.lock().unwrap().push(key.to_string());

        match &self.reply {
            Reply::Value(value) => Ok(Some(value.clone())),
            Reply::Absent => Ok(None),
            Reply::Failure(message) => Err(anyhow::anyhow!("{}", message)),
        }
    }
}

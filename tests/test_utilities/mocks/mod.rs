/// Mock implementations for testing
mod mock_snapshot_store;
mod mock_status_source;

pub use mock_snapshot_store::MockSnapshotStore;
pub use mock_status_source::MockStatusSource;

/// In-process snapshot store for local previews and tests
mod memory_snapshot_store;

pub use memory_snapshot_store::MemorySnapshotStore;

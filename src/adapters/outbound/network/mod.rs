/// Network adapters for the KV REST API and the status endpoint
mod http_status_source;
mod rest_snapshot_store;

pub use http_status_source::HttpStatusSource;
pub use rest_snapshot_store::RestSnapshotStore;

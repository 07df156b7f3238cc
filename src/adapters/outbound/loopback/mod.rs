/// Adapters that answer a port from inside the same process
mod in_process_status_source;

pub use in_process_status_source::InProcessStatusSource;

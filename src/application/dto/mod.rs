/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod render_format;
mod status_outcome;

pub use render_format::RenderFormat;
pub use status_outcome::{StatusOutcome, KV_ERROR_FALLBACK, NO_SNAPSHOT_MESSAGE};

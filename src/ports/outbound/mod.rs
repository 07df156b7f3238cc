/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (key-value store, HTTP, console, etc.).
pub mod dashboard_renderer;
pub mod output_presenter;
pub mod progress_reporter;
pub mod snapshot_store;
pub mod status_source;

pub use dashboard_renderer::DashboardRenderer;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use snapshot_store::{SharedSnapshotStore, SnapshotStore};
pub use status_source::{FetchedStatus, SharedStatusSource, StatusSource};

/// Use cases - Application business logic
///
/// Use cases orchestrate the snapshot domain and coordinate
/// with infrastructure through ports.
pub mod load_dashboard;
pub mod read_status;

pub use load_dashboard::{LoadDashboardUseCase, FETCH_FAILURE_FALLBACK};
pub use read_status::ReadStatusUseCase;

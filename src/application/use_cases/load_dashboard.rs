use crate::application::read_models::{DashboardReadModelBuilder, DashboardState};
use crate::ports::outbound::StatusSource;
use crate::shared::result::message_or;
use crate::stress_snapshot::services::SnapshotParser;

/// Message shown when a fetch failure carries no description
pub const FETCH_FAILURE_FALLBACK: &str = "Failed to load";

/// LoadDashboardUseCase - drives the dashboard from Loading to its final state
///
/// Performs exactly one status request per call. Every failure is terminal
/// and becomes `DashboardState::Error`; there are no retries.
///
/// Dropping the returned future cancels the request, so a torn-down view
/// never receives a stale result.
pub struct LoadDashboardUseCase<S> {
    source: S,
}

impl<S: StatusSource> LoadDashboardUseCase<S> {
    /// Creates a new LoadDashboardUseCase with an injected status source
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Fetches the status once and returns the resulting view state
    pub async fn execute(&self) -> DashboardState {
        let fetched = match self.source.fetch_status().await {
            Ok(fetched) => fetched,
            Err(err) => {
                let message = message_or(&err, FETCH_FAILURE_FALLBACK);
                tracing::debug!(error = %message, "status request failed");
                return DashboardState::Error(message);
            }
        };

        if !fetched.is_success() {
            tracing::debug!(status = fetched.status, "status request returned an error status");
            return DashboardState::Error(format!("HTTP {}", fetched.status));
        }

        match SnapshotParser::parse(&fetched.body) {
            Ok(snapshot) => {
                if !snapshot.is_breach_count_consistent() {
                    tracing::warn!(
                        reported = ?snapshot.breach_count,
                        triggered = snapshot.triggered_count(),
                        "breach_count disagrees with the breach flags"
                    );
                }
                tracing::debug!(
                    values = snapshot.values.len(),
                    breaches = snapshot.breaches.len(),
                    "dashboard loaded"
                );
                DashboardState::Loaded(DashboardReadModelBuilder::build(&snapshot))
            }
            Err(err) => DashboardState::Error(message_or(&err, FETCH_FAILURE_FALLBACK)),
        }
    }
}

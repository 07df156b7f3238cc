use axum::routing::{any, get};
use axum::Router;
use std::sync::Arc;

use super::{dashboard, health, status};
use crate::adapters::outbound::loopback::InProcessStatusSource;
use crate::adapters::outbound::renderers::HtmlRenderer;
use crate::application::use_cases::{LoadDashboardUseCase, ReadStatusUseCase};
use crate::ports::outbound::{SharedSnapshotStore, SharedStatusSource};

/// Path of the status endpoint
pub const STATUS_PATH: &str = "/api/status";

#[derive(Clone)]
pub struct AppState {
    pub status: Arc<ReadStatusUseCase<SharedSnapshotStore>>,
    pub dashboard: Arc<LoadDashboardUseCase<SharedStatusSource>>,
    pub renderer: Arc<HtmlRenderer>,
}

impl AppState {
    /// Wires the use cases around one shared store.
    ///
    /// The dashboard reads through `remote_status` when given, otherwise it
    /// calls the local status use case directly.
    pub fn new(store: SharedSnapshotStore, remote_status: Option<SharedStatusSource>) -> Self {
        let status = Arc::new(ReadStatusUseCase::new(store));
        let source: SharedStatusSource = match remote_status {
            Some(remote) => remote,
            None => Arc::new(InProcessStatusSource::new(Arc::clone(&status))),
        };

        Self {
            status,
            dashboard: Arc::new(LoadDashboardUseCase::new(source)),
            renderer: Arc::new(HtmlRenderer::new()),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(dashboard::dashboard))
        .route(STATUS_PATH, any(status::status))
        .route("/healthz", get(health::healthz))
        .with_state(state)
}

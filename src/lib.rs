//! macro-watch - serve and render the latest macro stress snapshot
//!
//! A scheduled producer stores its latest snapshot under `macro:latest` in a
//! key-value store. This library exposes that snapshot over a small HTTP
//! status endpoint and renders it as a dashboard, following hexagonal
//! architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`stress_snapshot`): Snapshot model and its tolerant parser
//! - **Application Layer** (`application`): Use cases, read models and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): HTTP server, KV client, renderers and presenters
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use macro_watch::prelude::*;
//!
//! # async fn run() -> Result<()> {
//! let source = HttpStatusSource::new("http://127.0.0.1:3000/api/status", None)?;
//! let state = LoadDashboardUseCase::new(source).execute().await;
//!
//! let output = TerminalRenderer::new(false).render(&state)?;
//! StdoutPresenter::new().present(&output)?;
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod ports;
pub mod shared;
pub mod stress_snapshot;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::inbound::http::{router, serve, AppState};
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
    pub use crate::adapters::outbound::loopback::InProcessStatusSource;
    pub use crate::adapters::outbound::memory::MemorySnapshotStore;
    pub use crate::adapters::outbound::network::{HttpStatusSource, RestSnapshotStore};
    pub use crate::adapters::outbound::renderers::{HtmlRenderer, TerminalRenderer};
    pub use crate::application::dto::{RenderFormat, StatusOutcome};
    pub use crate::application::read_models::{
        BreachRow, DashboardReadModel, DashboardState, Tone, ValueRow,
    };
    pub use crate::application::use_cases::{LoadDashboardUseCase, ReadStatusUseCase};
    pub use crate::ports::outbound::{
        DashboardRenderer, FetchedStatus, OutputPresenter, ProgressReporter,
        SharedSnapshotStore, SharedStatusSource, SnapshotStore, StatusSource,
    };
    pub use crate::shared::Result;
    pub use crate::stress_snapshot::domain::{
        BreachCount, BreachFlag, IndicatorReading, Reading, Snapshot,
    };
    pub use crate::stress_snapshot::services::SnapshotParser;
    pub use crate::stress_snapshot::SNAPSHOT_KEY;
}

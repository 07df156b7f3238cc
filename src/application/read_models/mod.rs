//! Read models for the dashboard
//!
//! View-optimized structs: the snapshot flattened into display rows,
//! plus the state machine the renderers draw.

pub mod dashboard_read_model;
pub mod dashboard_read_model_builder;

pub use dashboard_read_model::{BreachRow, DashboardReadModel, DashboardState, Tone, ValueRow};
pub use dashboard_read_model_builder::DashboardReadModelBuilder;

//! Snapshot domain: the macro stress reading as the dashboard sees it
pub mod domain;
pub mod services;

/// Fixed store key under which the compute process keeps the latest snapshot
pub const SNAPSHOT_KEY: &str = "macro:latest";

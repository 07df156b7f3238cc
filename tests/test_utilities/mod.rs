#![allow(dead_code)]

/// Shared helpers for integration tests
pub mod mocks;

/// Snapshot as the producer writes it, bare NaN included
pub const SAMPLE_SNAPSHOT: &str = r#"{"generated_utc":"2024-01-01T00:00:00Z","values":{"cpi":3.14159,"gdp":NaN},"breaches":{"cpi_high":true,"gdp_low":false},"breach_count":1}"#;

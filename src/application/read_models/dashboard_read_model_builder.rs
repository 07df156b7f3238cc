//! Builder for constructing DashboardReadModel from a Snapshot

use super::dashboard_read_model::{BreachRow, DashboardReadModel, Tone, ValueRow, CLEAR, TRIGGERED};
use crate::stress_snapshot::domain::{BreachCount, BreachFlag, IndicatorReading, Snapshot};

/// Transforms a snapshot into display rows, keeping source order
pub struct DashboardReadModelBuilder;

impl DashboardReadModelBuilder {
    pub fn build(snapshot: &Snapshot) -> DashboardReadModel {
        DashboardReadModel {
            generated_utc: snapshot.generated_utc.clone(),
            breach_count: snapshot
                .breach_count
                .as_ref()
                .map(BreachCount::display)
                .unwrap_or_default(),
            value_rows: snapshot.values.iter().map(Self::value_row).collect(),
            breach_rows: snapshot.breaches.iter().map(Self::breach_row).collect(),
        }
    }

    fn value_row(value: &IndicatorReading) -> ValueRow {
        ValueRow {
            indicator: value.indicator.clone(),
            latest: value.reading.display(),
        }
    }

    fn breach_row(flag: &BreachFlag) -> BreachRow {
        let (display, tone) = if flag.triggered {
            (TRIGGERED, Tone::Warning)
        } else {
            (CLEAR, Tone::Neutral)
        };
        BreachRow {
            rule: flag.rule.clone(),
            display: display.to_string(),
            tone,
        }
    }
}

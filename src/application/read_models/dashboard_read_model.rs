//! Dashboard read model and render state

/// Display string for a triggered breach
pub const TRIGGERED: &str = "TRUE";

/// Display string for a clear breach rule
pub const CLEAR: &str = "FALSE";

/// Styling class of a breach row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Rule triggered; drawn in the warning colour
    Warning,
    /// Rule clear; drawn in the neutral/positive colour
    Neutral,
}

/// Row of the "Latest Values" table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueRow {
    pub indicator: String,
    /// Reading already formatted for display
    pub latest: String,
}

/// Row of the "Breaches" table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreachRow {
    pub rule: String,
    /// `TRUE` or `FALSE`
    pub display: String,
    pub tone: Tone,
}

/// Everything the loaded dashboard shows, in display order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardReadModel {
    pub generated_utc: String,
    /// Breach count as reported by the producer; empty when it was missing
    pub breach_count: String,
    pub value_rows: Vec<ValueRow>,
    pub breach_rows: Vec<BreachRow>,
}

impl DashboardReadModel {
    /// Breach count used for alerting: the reported count when it is a
    /// number, otherwise the number of triggered rows
    pub fn alert_count(&self) -> u64 {
        self.breach_count.parse().unwrap_or_else(|_| {
            self.breach_rows
                .iter()
                .filter(|row| row.tone == Tone::Warning)
                .count() as u64
        })
    }
}

/// The three mutually exclusive states of the dashboard view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardState {
    /// The status request has not resolved yet
    Loading,
    /// The status request failed; carries the message shown after `Error: `
    Error(String),
    Loaded(DashboardReadModel),
}

impl DashboardState {
    pub fn is_loaded(&self) -> bool {
        matches!(self, DashboardState::Loaded(_))
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            DashboardState::Error(message) => Some(message),
            _ => None,
        }
    }
}

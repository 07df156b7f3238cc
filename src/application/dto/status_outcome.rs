use serde_json::json;

/// Body message returned while the compute process has not stored anything
pub const NO_SNAPSHOT_MESSAGE: &str = "No snapshot yet. Run /api/compute.";

/// Message used when a store error has no description of its own
pub const KV_ERROR_FALLBACK: &str = "KV error";

/// StatusOutcome - the three terminal results of one status read
///
/// It owns the HTTP mapping so every transport (axum handler, in-process
/// dashboard source) answers with the same status and body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusOutcome {
    /// Stored snapshot text, passed through untouched
    Found(String),
    /// Nothing stored under the snapshot key
    Absent,
    /// The store read failed; carries the error description
    StoreFailure(String),
}

impl StatusOutcome {
    pub fn status_code(&self) -> u16 {
        match self {
            StatusOutcome::Found(_) => 200,
            StatusOutcome::Absent => 404,
            StatusOutcome::StoreFailure(_) => 500,
        }
    }

    /// Only successful reads are marked `Cache-Control: no-store`
    pub fn is_found(&self) -> bool {
        matches!(self, StatusOutcome::Found(_))
    }

    /// Response body: the stored text verbatim, or a JSON error object
    pub fn into_body(self) -> String {
        match self {
            StatusOutcome::Found(body) => body,
            StatusOutcome::Absent => json!({ "error": NO_SNAPSHOT_MESSAGE }).to_string(),
            StatusOutcome::StoreFailure(message) => json!({ "error": message }).to_string(),
        }
    }
}

use axum::extract::State;
use axum::http::header::{CACHE_CONTROL, CONTENT_TYPE};
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};

use super::router::AppState;
use crate::application::dto::StatusOutcome;

/// Status endpoint; every method is treated as a read
pub async fn status(State(state): State<AppState>) -> Response {
    outcome_response(state.status.execute().await)
}

fn outcome_response(outcome: StatusOutcome) -> Response {
    let code =
        StatusCode::from_u16(outcome.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let found = outcome.is_found();

    let mut response = (
        code,
        [(CONTENT_TYPE, HeaderValue::from_static("application/json"))],
        outcome.into_body(),
    )
        .into_response();
    if found {
        response
            .headers_mut()
            .insert(CACHE_CONTROL, HeaderValue::from_static("no-store"));
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_found_response_headers() {
        let response = outcome_response(StatusOutcome::Found("{}".to_string()));
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers().get(CACHE_CONTROL).unwrap(), "no-store");
        assert_eq!(response.headers().get(CONTENT_TYPE).unwrap(), "application/json");
    }

    #[test]
    fn test_error_responses_are_not_marked_no_store() {
        let response = outcome_response(StatusOutcome::Absent);
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(response.headers().get(CACHE_CONTROL).is_none());

        let response = outcome_response(StatusOutcome::StoreFailure("timeout".to_string()));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(response.headers().get(CACHE_CONTROL).is_none());
    }
}

/// Integration tests for the status endpoint and the dashboard flow
mod test_utilities;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use macro_watch::prelude::*;
use std::sync::Arc;
use std::time::Duration;
use test_utilities::mocks::*;
use test_utilities::SAMPLE_SNAPSHOT;
use tower::ServiceExt;

struct Reply {
    status: StatusCode,
    content_type: Option<String>,
    cache_control: Option<String>,
    body: String,
}

async fn send(app: Router, method: &str, uri: &str) -> Reply {
    let req = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    let header_value = |name: header::HeaderName| {
        resp.headers()
            .get(name)
            .map(|v| v.to_str().unwrap().to_string())
    };
    let content_type = header_value(header::CONTENT_TYPE);
    let cache_control = header_value(header::CACHE_CONTROL);
    let status = resp.status();
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();

    Reply {
        status,
        content_type,
        cache_control,
        body: String::from_utf8(body.to_vec()).unwrap(),
    }
}

fn app_with(store: MockSnapshotStore) -> Router {
    router(AppState::new(Arc::new(store), None))
}

/// Serves `app` on an ephemeral local port and returns its status URL
async fn spawn_app(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}/api/status", addr)
}

// ============================================================================
// Status endpoint
// ============================================================================

#[tokio::test]
async fn test_status_passes_snapshot_through_verbatim() {
    let store = MockSnapshotStore::with_value(SAMPLE_SNAPSHOT);
    let reply = send(app_with(store.clone()), "GET", "/api/status").await;

    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.body, SAMPLE_SNAPSHOT);
    assert_eq!(reply.content_type.as_deref(), Some("application/json"));
    assert_eq!(reply.cache_control.as_deref(), Some("no-store"));
    assert_eq!(
        store.requested_keys.lock().unwrap().as_slice(),
        &[SNAPSHOT_KEY.to_string()]
    );
}

#[tokio::test]
async fn test_status_absent_snapshot_is_404() {
    let reply = send(app_with(MockSnapshotStore::absent()), "GET", "/api/status").await;

    assert_eq!(reply.status, StatusCode::NOT_FOUND);
    assert_eq!(
        reply.body,
        r#"{"error":"No snapshot yet. Run /api/compute."}"#
    );
    assert_eq!(reply.content_type.as_deref(), Some("application/json"));
}

#[tokio::test]
async fn test_status_store_failure_carries_message() {
    let reply = send(
        app_with(MockSnapshotStore::with_failure("timeout")),
        "GET",
        "/api/status",
    )
    .await;

    assert_eq!(reply.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(reply.body, r#"{"error":"timeout"}"#);
}

#[tokio::test]
async fn test_status_store_failure_without_message() {
    let reply = send(
        app_with(MockSnapshotStore::with_failure("")),
        "GET",
        "/api/status",
    )
    .await;

    assert_eq!(reply.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(reply.body, r#"{"error":"KV error"}"#);
}

#[tokio::test]
async fn test_status_ignores_method() {
    for method in ["POST", "PUT", "DELETE", "PATCH"] {
        let reply = send(
            app_with(MockSnapshotStore::with_value(SAMPLE_SNAPSHOT)),
            method,
            "/api/status",
        )
        .await;
        assert_eq!(reply.status, StatusCode::OK, "method {}", method);
        assert_eq!(reply.body, SAMPLE_SNAPSHOT);
    }
}

#[tokio::test]
async fn test_status_is_idempotent() {
    let store = MockSnapshotStore::with_value(SAMPLE_SNAPSHOT);
    let app = app_with(store.clone());

    let first = send(app.clone(), "GET", "/api/status").await;
    let second = send(app, "GET", "/api/status").await;

    assert_eq!(first.body, second.body);
    assert_eq!(first.status, second.status);
    assert_eq!(store.call_count(), 2);
}

#[tokio::test]
async fn test_status_passes_unparseable_payload_through() {
    let reply = send(
        app_with(MockSnapshotStore::with_value("not json")),
        "GET",
        "/api/status",
    )
    .await;

    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.body, "not json");
}

// ============================================================================
// Dashboard flow
// ============================================================================

#[tokio::test]
async fn test_dashboard_renders_sample_snapshot() {
    let use_case = LoadDashboardUseCase::new(MockStatusSource::responding(200, SAMPLE_SNAPSHOT));
    let state = use_case.execute().await;

    let DashboardState::Loaded(model) = &state else {
        panic!("expected loaded state, got {:?}", state);
    };
    assert_eq!(model.generated_utc, "2024-01-01T00:00:00Z");
    assert_eq!(model.breach_count, "1");
    assert_eq!(
        model.value_rows,
        vec![
            ValueRow {
                indicator: "cpi".to_string(),
                latest: "3.142".to_string()
            },
            ValueRow {
                indicator: "gdp".to_string(),
                latest: "NaN".to_string()
            },
        ]
    );
    assert_eq!(model.breach_rows[0].display, "TRUE");
    assert_eq!(model.breach_rows[0].tone, Tone::Warning);
    assert_eq!(model.breach_rows[1].display, "FALSE");
    assert_eq!(model.breach_rows[1].tone, Tone::Neutral);

    let html = HtmlRenderer::new().render(&state).unwrap();
    assert!(html.contains("2024-01-01T00:00:00Z"));
    assert!(html.contains("<td>cpi</td><td>3.142</td>"));
    assert!(html.contains("<td>gdp</td><td>NaN</td>"));
    assert!(html.contains(r#"<td>cpi_high</td><td class="warning">TRUE</td>"#));
    assert!(html.contains(r#"<td>gdp_low</td><td class="neutral">FALSE</td>"#));
}

#[tokio::test]
async fn test_dashboard_error_status_renders_http_code_only() {
    let state = LoadDashboardUseCase::new(MockStatusSource::responding(503, "{}"))
        .execute()
        .await;
    assert_eq!(state, DashboardState::Error("HTTP 503".to_string()));

    let html = HtmlRenderer::new().render(&state).unwrap();
    assert!(html.contains("Error: HTTP 503"));
    assert!(!html.contains("<table"));

    let text = TerminalRenderer::new(false).render(&state).unwrap();
    assert_eq!(text, "Error: HTTP 503\n");
}

#[tokio::test]
async fn test_dashboard_rejection_without_message() {
    let state = LoadDashboardUseCase::new(MockStatusSource::rejecting(""))
        .execute()
        .await;
    let text = TerminalRenderer::new(false).render(&state).unwrap();
    assert_eq!(text, "Error: Failed to load\n");
}

#[tokio::test]
async fn test_dashboard_rejection_keeps_message() {
    let state = LoadDashboardUseCase::new(MockStatusSource::rejecting("connection reset"))
        .execute()
        .await;
    assert_eq!(state.error_message(), Some("connection reset"));
}

#[tokio::test]
async fn test_dashboard_over_http_end_to_end() {
    let store = MemorySnapshotStore::new().with_entry(SNAPSHOT_KEY, SAMPLE_SNAPSHOT);
    let url = spawn_app(router(AppState::new(Arc::new(store), None))).await;

    let source = HttpStatusSource::new(&url, Some(Duration::from_secs(5))).unwrap();
    let state = LoadDashboardUseCase::new(source).execute().await;

    assert!(state.is_loaded(), "got {:?}", state);
    let text = TerminalRenderer::new(false).render(&state).unwrap();
    assert!(text.contains("Macro Stress Breaches: 1"));
    assert!(text.contains("cpi_high  TRUE"));
}

#[tokio::test]
async fn test_dashboard_over_http_without_snapshot() {
    let url = spawn_app(router(AppState::new(
        Arc::new(MemorySnapshotStore::new()),
        None,
    )))
    .await;

    let source = HttpStatusSource::new(&url, Some(Duration::from_secs(5))).unwrap();
    let state = LoadDashboardUseCase::new(source).execute().await;

    assert_eq!(state, DashboardState::Error("HTTP 404".to_string()));
}

#[tokio::test]
async fn test_dashboard_page_served_from_store() {
    let store = MemorySnapshotStore::new().with_entry(SNAPSHOT_KEY, SAMPLE_SNAPSHOT);
    let reply = send(
        router(AppState::new(Arc::new(store), None)),
        "GET",
        "/",
    )
    .await;

    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.cache_control.as_deref(), Some("no-store"));
    assert!(reply.body.contains("Macro Early Warning Dashboard"));
    assert!(reply.body.contains("<td>gdp</td><td>NaN</td>"));
}

#[tokio::test]
async fn test_dashboard_page_reads_remote_status_source() {
    let remote: SharedStatusSource = Arc::new(MockStatusSource::responding(500, "{}"));
    let app = router(AppState::new(Arc::new(MemorySnapshotStore::new()), Some(remote)));
    let reply = send(app, "GET", "/").await;

    assert!(reply.body.contains("Error: HTTP 500"));
}

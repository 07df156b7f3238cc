/// End-to-end tests for the CLI
///
/// `show` runs against a status server started in-process on an ephemeral
/// port; every command runs in a temp directory so no config file is
/// discovered by accident.
mod test_utilities;

use assert_cmd::cargo::cargo_bin_cmd;
use macro_watch::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;
use test_utilities::SAMPLE_SNAPSHOT;

// ============================================================================
// Helper Functions
// ============================================================================

/// Starts a status server over `store` on its own runtime thread and
/// returns the status URL.
fn spawn_status_server(store: MemorySnapshotStore) -> String {
    let (tx, rx) = std::sync::mpsc::channel();
    std::thread::spawn(move || {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        runtime.block_on(async move {
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
            tx.send(listener.local_addr().unwrap()).unwrap();
            let app = router(AppState::new(Arc::new(store), None));
            axum::serve(listener, app).await.unwrap();
        });
    });
    let addr = rx.recv().unwrap();
    format!("http://{}/api/status", addr)
}

fn seeded_server() -> String {
    spawn_status_server(MemorySnapshotStore::new().with_entry(SNAPSHOT_KEY, SAMPLE_SNAPSHOT))
}

// ============================================================================
// Exit code tests
// ============================================================================

mod exit_code_tests {
    use super::*;

    /// Exit code 0: --help should return success
    #[test]
    fn test_exit_code_help() {
        cargo_bin_cmd!("macro-watch").arg("--help").assert().code(0);
    }

    /// Exit code 0: --version should return success
    #[test]
    fn test_exit_code_version() {
        cargo_bin_cmd!("macro-watch")
            .arg("--version")
            .assert()
            .code(0)
            .stdout(predicate::str::contains("macro-watch"));
    }

    /// Exit code 2: Missing subcommand
    #[test]
    fn test_exit_code_missing_subcommand() {
        cargo_bin_cmd!("macro-watch").assert().code(2);
    }

    /// Exit code 2: Invalid arguments
    #[test]
    fn test_exit_code_invalid_argument() {
        cargo_bin_cmd!("macro-watch")
            .args(["show", "--invalid-option"])
            .assert()
            .code(2);
    }

    /// Exit code 2: Invalid format value
    #[test]
    fn test_exit_code_invalid_format() {
        cargo_bin_cmd!("macro-watch")
            .args(["show", "--format", "pdf"])
            .assert()
            .code(2);
    }

    /// Exit code 0: Snapshot loaded without a threshold
    #[test]
    fn test_exit_code_success() {
        let url = seeded_server();
        let temp_dir = TempDir::new().unwrap();
        cargo_bin_cmd!("macro-watch")
            .current_dir(temp_dir.path())
            .args(["show", "--no-color", "--url", &url])
            .assert()
            .code(0);
    }

    /// Exit code 1: Breach count reached the alert threshold
    #[test]
    fn test_exit_code_breaches_detected() {
        let url = seeded_server();
        let temp_dir = TempDir::new().unwrap();
        cargo_bin_cmd!("macro-watch")
            .current_dir(temp_dir.path())
            .args(["show", "--no-color", "--alert-threshold", "1", "--url", &url])
            .assert()
            .code(1);
    }

    /// Exit code 0: Breach count below the alert threshold
    #[test]
    fn test_exit_code_below_threshold() {
        let url = seeded_server();
        let temp_dir = TempDir::new().unwrap();
        cargo_bin_cmd!("macro-watch")
            .current_dir(temp_dir.path())
            .args(["show", "--no-color", "--alert-threshold", "2", "--url", &url])
            .assert()
            .code(0);
    }

    /// Exit code 3: Nothing listens on the status URL
    #[test]
    fn test_exit_code_unreachable_status() {
        let temp_dir = TempDir::new().unwrap();
        cargo_bin_cmd!("macro-watch")
            .current_dir(temp_dir.path())
            .args([
                "show",
                "--no-color",
                "--timeout",
                "5",
                "--url",
                "http://127.0.0.1:1/api/status",
            ])
            .assert()
            .code(3)
            .stdout(predicate::str::starts_with("Error: "));
    }

    /// Exit code 3: Seed file does not exist
    #[test]
    fn test_exit_code_serve_missing_seed() {
        let temp_dir = TempDir::new().unwrap();
        cargo_bin_cmd!("macro-watch")
            .current_dir(temp_dir.path())
            .args(["serve", "--seed", "/nonexistent/snapshot.json"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Failed to read seed snapshot"));
    }

    /// Exit code 3: Rest store without credentials
    #[test]
    fn test_exit_code_serve_rest_without_credentials() {
        let temp_dir = TempDir::new().unwrap();
        cargo_bin_cmd!("macro-watch")
            .current_dir(temp_dir.path())
            .env_remove("KV_REST_API_URL")
            .env_remove("KV_REST_API_TOKEN")
            .args(["serve", "--store", "rest"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Snapshot store is not configured"));
    }
}

// ============================================================================
// Rendering tests
// ============================================================================

#[test]
fn test_show_renders_terminal_dashboard() {
    let url = seeded_server();
    let temp_dir = TempDir::new().unwrap();
    cargo_bin_cmd!("macro-watch")
        .current_dir(temp_dir.path())
        .args(["show", "--no-color", "--url", &url])
        .assert()
        .success()
        .stdout(predicate::str::contains("Macro Early Warning Dashboard"))
        .stdout(predicate::str::contains("Generated: 2024-01-01T00:00:00Z"))
        .stdout(predicate::str::contains("Macro Stress Breaches: 1"))
        .stdout(predicate::str::is_match(r"\ncpi +3\.142\n").unwrap())
        .stdout(predicate::str::is_match(r"\ngdp +NaN\n").unwrap())
        .stdout(predicate::str::contains("cpi_high  TRUE"))
        .stdout(predicate::str::contains("gdp_low   FALSE"));
}

#[test]
fn test_show_without_snapshot_reports_http_404() {
    let url = spawn_status_server(MemorySnapshotStore::new());
    let temp_dir = TempDir::new().unwrap();
    cargo_bin_cmd!("macro-watch")
        .current_dir(temp_dir.path())
        .args(["show", "--no-color", "--url", &url])
        .assert()
        .code(3)
        .stdout("Error: HTTP 404\n");
}

#[test]
fn test_show_writes_html_file() {
    let url = seeded_server();
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("dashboard.html");

    cargo_bin_cmd!("macro-watch")
        .current_dir(temp_dir.path())
        .args(["show", "--format", "html", "--url", &url, "--output"])
        .arg(&output)
        .assert()
        .success();

    let html = fs::read_to_string(&output).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains(r#"<td class="warning">TRUE</td>"#));
    assert!(html.contains(r#"<td class="neutral">FALSE</td>"#));
}

// ============================================================================
// Config file tests
// ============================================================================

#[test]
fn test_show_uses_discovered_config() {
    let url = seeded_server();
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("macro-watch.config.yml"),
        format!("dashboard:\n  status_url: {}\nalert_threshold: 1\n", url),
    )
    .unwrap();

    cargo_bin_cmd!("macro-watch")
        .current_dir(temp_dir.path())
        .args(["show", "--no-color"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Macro Stress Breaches: 1"));
}

#[test]
fn test_cli_threshold_overrides_config() {
    let url = seeded_server();
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("custom.yml");
    fs::write(&config, format!("dashboard:\n  status_url: {}\nalert_threshold: 1\n", url)).unwrap();

    cargo_bin_cmd!("macro-watch")
        .current_dir(temp_dir.path())
        .args(["show", "--no-color", "--alert-threshold", "5", "--config"])
        .arg(&config)
        .assert()
        .code(0);
}

#[test]
fn test_invalid_config_is_application_error() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("macro-watch.config.yml"),
        "store:\n  kind: redis\n",
    )
    .unwrap();

    cargo_bin_cmd!("macro-watch")
        .current_dir(temp_dir.path())
        .args(["serve"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Invalid store kind: redis"));
}

#[test]
fn test_explicit_missing_config_is_application_error() {
    let temp_dir = TempDir::new().unwrap();
    cargo_bin_cmd!("macro-watch")
        .current_dir(temp_dir.path())
        .args(["show", "--config", "missing.yml"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Failed to read config file"));
}

mod cli;

use cli::{Args, Command, ServeArgs, ShowArgs};
use macro_watch::adapters::inbound::http::{router, serve, AppState};
use macro_watch::adapters::outbound::console::StderrProgressReporter;
use macro_watch::adapters::outbound::memory::MemorySnapshotStore;
use macro_watch::adapters::outbound::network::{HttpStatusSource, RestSnapshotStore};
use macro_watch::adapters::outbound::renderers::TerminalRenderer;
use macro_watch::application::factories::{PresenterFactory, PresenterType, RendererFactory};
use macro_watch::application::read_models::DashboardState;
use macro_watch::application::use_cases::LoadDashboardUseCase;
use macro_watch::config::{
    load_config, EnvOverrides, ServeOverrides, ServeSettings, ShowOverrides, ShowSettings,
    StoreSettings,
};
use macro_watch::ports::outbound::{
    DashboardRenderer, ProgressReporter, SharedSnapshotStore, SharedStatusSource,
};
use macro_watch::shared::error::ExitCode;
use macro_watch::shared::Result;
use std::io::IsTerminal;
use std::process;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let args = Args::parse_args();

    let default_filter = match args.command {
        Command::Serve(_) => "info",
        Command::Show(_) => "warn",
    };
    init_tracing(default_filter);

    let result = match args.command {
        Command::Serve(serve_args) => run_serve(serve_args).await,
        Command::Show(show_args) => run_show(show_args).await,
    };

    match result {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

/// Logs go to stderr; `RUST_LOG` overrides the per-command default
fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run_serve(args: ServeArgs) -> Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let file = load_config(args.config.as_deref(), &cwd)?;
    let settings = ServeSettings::resolve(
        &file,
        &EnvOverrides::from_process(),
        &ServeOverrides::from(&args),
    )?;

    // Create adapters (Dependency Injection)
    let store = build_store(&settings.store)?;
    let remote_status: Option<SharedStatusSource> = match settings.status_url.as_deref() {
        Some(url) => {
            tracing::info!(%url, "dashboard reads a remote status endpoint");
            Some(Arc::new(HttpStatusSource::new(url, settings.status_timeout)?))
        }
        None => None,
    };

    let app = router(AppState::new(store, remote_status));
    serve(&settings.bind, app).await?;

    Ok(ExitCode::Success)
}

fn build_store(settings: &StoreSettings) -> Result<SharedSnapshotStore> {
    match settings {
        StoreSettings::Rest {
            url,
            token,
            timeout,
        } => {
            tracing::info!(%url, "using KV REST store");
            Ok(Arc::new(RestSnapshotStore::new(url, token, *timeout)?))
        }
        StoreSettings::Memory { seed_file } => {
            let store = match seed_file {
                Some(path) => MemorySnapshotStore::from_seed_file(path)?,
                None => MemorySnapshotStore::new(),
            };
            tracing::info!(entries = store.len(), "using in-memory store");
            Ok(Arc::new(store))
        }
    }
}

async fn run_show(args: ShowArgs) -> Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let file = load_config(args.config.as_deref(), &cwd)?;
    let settings = ShowSettings::resolve(&file, &ShowOverrides::from(&args))?;

    let color = !args.no_color
        && args.output.is_none()
        && std::env::var_os("NO_COLOR").is_none()
        && std::io::stdout().is_terminal();
    let renderer = RendererFactory::create(args.format, color);

    // The loading state lives on stderr while the request is in flight
    let progress = StderrProgressReporter::new();
    let loading = TerminalRenderer::new(false).render(&DashboardState::Loading)?;
    progress.report_waiting(loading.trim_end());

    let source = HttpStatusSource::new(&settings.url, settings.timeout)?;
    let state = LoadDashboardUseCase::new(source).execute().await;
    progress.report_completion("");

    let output = renderer.render(&state)?;
    PresenterFactory::create(PresenterType::from(args.output)).present(&output)?;

    Ok(exit_code_for(&state, settings.alert_threshold))
}

fn exit_code_for(state: &DashboardState, alert_threshold: Option<u64>) -> ExitCode {
    match state {
        DashboardState::Error(_) | DashboardState::Loading => ExitCode::ApplicationError,
        DashboardState::Loaded(model) => match alert_threshold {
            Some(threshold) if model.alert_count() >= threshold => ExitCode::BreachesDetected,
            _ => ExitCode::Success,
        },
    }
}

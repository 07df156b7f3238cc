use axum::Router;
use tokio::net::TcpListener;

use crate::shared::error::WatchError;
use crate::shared::Result;

/// Binds `addr` and serves `app` until Ctrl-C
pub async fn serve(addr: &str, app: Router) -> Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| WatchError::BindError {
            addr: addr.to_string(),
            details: e.to_string(),
        })?;

    let local_addr = listener.local_addr()?;
    tracing::info!(%local_addr, "HTTP server starting");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        // Without a signal handler the server runs until killed
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}

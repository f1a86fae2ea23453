use std::{future::Future, io};
use tokio::signal;
use tracing::info;

pub async fn shutdown_signal() {
    let ctrl_c = wait_or_park("Ctrl+C", signal::ctrl_c());

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("🛑 Shutdown signal received (Ctrl+C)."),
        _ = terminate => info!("🛑 Shutdown signal received (SIGTERM)."),
    }
}

/// Resolves when `signal` fires. A handler that failed to install never
/// resolves, leaving shutdown to the other signal.
async fn wait_or_park(name: &str, signal: impl Future<Output = io::Result<()>>) {
    if let Err(e) = signal.await {
        tracing::error!("Failed to install {name} handler: {e}");
        std::future::pending::<()>().await;
    }
}

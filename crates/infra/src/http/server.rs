//! Listener lifecycle

use std::future::Future;
use std::net::SocketAddr;

use axum::Router;
use helpdesk_domain::{HelpdeskError, Result, ServerConfig};
use tokio::net::TcpListener;
use tracing::info;

use crate::errors::InfraError;

/// Bind the configured `host:port`.
///
/// # Errors
/// `HelpdeskError::Io` when the address is invalid or cannot be bound.
pub async fn bind(config: &ServerConfig) -> Result<TcpListener> {
    let address = config.bind_address();
    let listener = TcpListener::bind(&address).await.map_err(|e| {
        let err: HelpdeskError = InfraError::from(e).into();
        HelpdeskError::Io(format!("cannot bind {address}: {err}"))
    })?;
    let local = listener.local_addr().map_err(InfraError::from)?;
    info!(address = %local, "listener_bound");
    Ok(listener)
}

/// Serve `router` until `shutdown` resolves, then drain in-flight requests.
///
/// # Errors
/// `HelpdeskError::Io` if the accept loop fails.
pub async fn serve<F>(listener: TcpListener, router: Router, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router.into_make_service_with_connect_info::<SocketAddr>())
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| HelpdeskError::from(InfraError::from(e)))?;
    info!("server_stopped");
    Ok(())
}

/// Resolves on Ctrl-C (and SIGTERM on Unix).
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "ctrl_c_handler_failed");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "sigterm_handler_failed");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    info!("shutdown_signal_received");
}

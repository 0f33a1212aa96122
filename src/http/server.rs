use crate::clients::UserClient;
use crate::error::ServerError;
use crate::http::router;
use std::future::Future;
use tokio::net::TcpListener;
use tracing::{error, info};

/// Serves the users API on `listener` until `shutdown` resolves.
///
/// In-flight requests are drained before this returns. The router, and with it every
/// client clone the handlers held, is dropped on return.
pub async fn serve<F>(
    listener: TcpListener,
    user_client: UserClient,
    shutdown: F,
) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = router(user_client);
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "Listening");
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(ServerError::Serve)
}

/// Resolves on Ctrl-C.
///
/// If the signal handler cannot be installed the future never resolves, so the server
/// keeps running instead of shutting down immediately.
pub async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            error!(error = %e, "Failed to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}

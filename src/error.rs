//! Process-level errors. Any of these ends the service.

use std::net::SocketAddr;
use thiserror::Error;

/// Fatal errors returned from `main`.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The listener could not be bound.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// The accept loop failed.
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),

    /// The user actor task panicked or was cancelled.
    #[error("actor task failed: {0}")]
    ActorTask(#[from] tokio::task::JoinError),
}

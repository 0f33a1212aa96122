//! # User Directory Server
//!
//! Binds `0.0.0.0:8000`, serves the users API until Ctrl-C, then stops the store.
//! A failed bind ends the process with a non-zero exit status.

use tokio::net::TcpListener;
use tracing::info;
use user_directory::config::ServerConfig;
use user_directory::error::ServerError;
use user_directory::http;
use user_directory::lifecycle::{setup_tracing, UserSystem};

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    setup_tracing();

    let config = ServerConfig::default();
    let system = UserSystem::new(config.channel_buffer);

    println!("Server starting on port {}...", config.port);

    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    http::serve(
        listener,
        system.user_client.clone(),
        http::shutdown_signal(),
    )
    .await?;

    system.shutdown().await?;

    info!("Server stopped");
    Ok(())
}

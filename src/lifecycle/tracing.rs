//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the process-wide subscriber. Log lines use the compact format
//! without the module prefix (`with_target(false)`); the structured fields (`entity_type`,
//! `id`, `size`, `status`) carry the context instead.
//!
//! ## Configuration
//!
//! The filter comes from `RUST_LOG` and defaults to `info`:
//!
//! ```bash
//! # Startup, creates and shutdown
//! cargo run
//!
//! # Full payloads and every list request
//! RUST_LOG=debug cargo run
//!
//! # Only the actor internals
//! RUST_LOG=user_directory::framework=debug cargo run
//! ```
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: startup (with seed size) and shutdown
//! - **Store Operations**: `Create` with the assigned id and new size, `List`
//! - **Requests**: one span per handler, client spans nested inside
//! - **Errors**: rejected bodies at `warn`, store failures at `error`
//!
//! With `RUST_LOG=info`, a create looks like:
//!
//! ```text
//! INFO create_user: Created entity_type="User" id=3 size=3
//! ```
use tracing_subscriber::EnvFilter;

pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // entity_type identifies the store instead
        .compact()
        .init();
}

//! # System Lifecycle
//!
//! Starting, wiring and stopping the pieces of the service.
//!
//! ## Responsibilities
//!
//! 1. **Actor Creation** - [`UserSystem::new`] builds the seeded user actor and its client
//! 2. **Dependency Injection** - the client is handed to the HTTP router as state, so
//!    handlers never touch a global
//! 3. **Graceful Shutdown** - [`UserSystem::shutdown`] closes the channel and awaits the actor
//! 4. **Observability Setup** - [`setup_tracing`] initializes logging
//!
//! ## Graceful Shutdown
//!
//! 1. **Stop serving** - the HTTP server drains in-flight requests and drops the router,
//!    releasing the handlers' client clones
//! 2. **Drop the last client** - closes the sender side of the channel
//! 3. **Actor detects closure** - `receiver.recv()` returns `None`, final size is logged
//! 4. **Await completion** - the actor task is joined

pub mod tracing;
pub mod user_system;

pub use self::tracing::*;
pub use user_system::*;

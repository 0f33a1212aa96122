use crate::clients::UserClient;
use crate::error::ServerError;
use tracing::{error, info};

/// The runtime owner of the user store.
///
/// `UserSystem` is responsible for:
/// - **Lifecycle Management**: starting the user actor and stopping it again
/// - **Dependency Wiring**: handing out the [`UserClient`] that handlers receive as state
///
/// Every `UserSystem` owns an independent, freshly seeded store, so tests can build
/// as many as they like without sharing state.
///
/// # Example
///
/// ```ignore
/// let system = UserSystem::new(32);
/// let app = http::router(system.user_client.clone());
/// // ... serve ...
/// system.shutdown().await?;
/// ```
pub struct UserSystem {
    /// Client for interacting with the User actor
    pub user_client: UserClient,

    /// Task handle of the running actor (used for graceful shutdown)
    handle: tokio::task::JoinHandle<()>,
}

impl UserSystem {
    /// Creates the seeded user actor and spawns it on the current runtime.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - Capacity of the actor's request channel.
    pub fn new(buffer_size: usize) -> Self {
        let (user_actor, user_client) = crate::user_actor::new(buffer_size);

        // Users have no dependencies (Context = ())
        let handle = tokio::spawn(user_actor.run(()));

        Self {
            user_client,
            handle,
        }
    }

    /// Gracefully shuts down the store.
    ///
    /// Drops this system's client and waits for the actor task. The actor only
    /// exits once *every* clone of the client is gone, so callers must drop the
    /// router (and anything else holding a clone) first.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if the actor shut down cleanly
    /// - `Err(ServerError::ActorTask)` if the actor task panicked
    pub async fn shutdown(self) -> Result<(), ServerError> {
        info!("Shutting down user store...");

        // Dropping the sender makes the actor's `recv()` return None.
        drop(self.user_client);

        if let Err(e) = self.handle.await {
            error!(error = %e, "Actor task failed");
            return Err(ServerError::from(e));
        }

        info!("User store shutdown complete.");
        Ok(())
    }
}

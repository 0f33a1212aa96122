//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the task that owns a store of records and
//! processes requests against it one at a time.

use crate::framework::client::ResourceClient;
use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use crate::framework::message::ResourceRequest;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that owns an ordered, append-only collection of records.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the state (`store`) and
/// the receiver end of the channel.
///
/// **Concurrency Model**:
/// Handlers may run on many tasks at once, but they only ever talk to the store
/// through a [`ResourceClient`]. The actor processes its messages *sequentially*,
/// so reading the store length, assigning `len + 1` as the new id and appending
/// the record happen as one step. No `Mutex` is needed and concurrent creates
/// can never observe the same length.
///
/// # Usage Pattern
///
/// 1.  **Create**: call [`ResourceActor::new`] or [`ResourceActor::seeded`] to get the
///     `actor` (server) and `client` (interface).
/// 2.  **Wire & Run**: spawn `actor.run(context)` on the runtime.
/// 3.  **Use**: clone the client into whatever needs the store.
///
/// ```rust,ignore
/// let (actor, client) = ResourceActor::<User>::seeded(32, seed_users());
/// tokio::spawn(actor.run(()));
/// let users = client.list().await?;
/// ```
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: Vec<T>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates an actor with an empty store and its associated `ResourceClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client wait until there is space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        Self::seeded(buffer_size, Vec::new())
    }

    /// Creates an actor whose store starts with `entries`, in the given order.
    ///
    /// Seed records must already carry the ids `1..=entries.len()`; the next
    /// created record receives `entries.len() + 1`.
    pub fn seeded(buffer_size: usize, entries: Vec<T>) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: entries,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    ///
    /// # Context Injection
    /// The `context` argument is handed to every entity hook.
    pub async fn run(mut self, context: T::Context) {
        // Extract just the type name (e.g., "User" instead of "user_directory::model::user::User")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, size = self.store.len(), "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = T::Id::from(self.store.len() as u64 + 1);

                    match T::from_create_params(id.clone(), params) {
                        Ok(mut item) => {
                            if let Err(e) = item.on_create(&context).await {
                                warn!(entity_type, error = %e, "on_create failed");
                                let _ =
                                    respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                                continue;
                            }
                            self.store.push(item.clone());
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(item));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::List { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "List");
                    let _ = respond_to.send(Ok(self.store.clone()));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}

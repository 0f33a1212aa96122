//! # User Actor
//!
//! The store of registered users, built on the generic
//! [`ResourceActor`](crate::framework::ResourceActor).
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`User`]
//! - [`error`] - [`UserError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the seeded actor and its client
//!
//! ## Usage
//!
//! ```rust,ignore
//! let (actor, client) = user_actor::new(32);
//! tokio::spawn(actor.run(()));
//!
//! let alice = client.create_user(UserCreate {
//!     name: "Alice".to_string(),
//!     email: "alice@example.com".to_string(),
//! }).await?;
//! assert_eq!(alice.id, 3);
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::UserClient;
use crate::framework::ResourceActor;
use crate::model::User;

/// The records every fresh store starts with, in order.
pub fn seed_users() -> Vec<User> {
    vec![
        User::new(1, "John Doe", "john@example.com"),
        User::new(2, "Jane Smith", "jane@example.com"),
    ]
}

/// Creates a new User actor, seeded with [`seed_users`], and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<User>, UserClient) {
    let (actor, generic_client) = ResourceActor::seeded(buffer_size, seed_users());
    let client = UserClient::new(generic_client);

    (actor, client)
}

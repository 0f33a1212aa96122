//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).

pub mod actor_client;
pub mod user_client;

pub use actor_client::*;
pub use user_client::*;

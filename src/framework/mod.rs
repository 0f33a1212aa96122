//! Generic actor framework for in-memory record stores.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that record types implement to be stored by an actor
//! - [`ResourceActor`] - Generic actor that owns an append-only store
//! - [`ResourceClient`] - Type-safe, cloneable handle for talking to the actor
//! - [`FrameworkError`] - Common error types
//!
//! # Testing
//!
//! See [`mock`] for a client whose replies are scripted instead of computed.

pub mod actor;
pub mod client;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};

//! # ActorEntity Trait
//!
//! The `ActorEntity` trait is the contract a record type implements to be stored by the
//! generic [`ResourceActor`](crate::framework::ResourceActor). It names the identifier type,
//! the creation payload, the injected context and the error type, and provides the
//! `on_create` lifecycle hook.
//!
//! # Architecture Note
//! The actor loop is written *once* against this trait. A `User` store requires a
//! `UserCreate` payload, and the compiler rejects anything else sent to it.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_create`] runs after construction and before the record is appended.
//!   The default implementation accepts every record (`Ok(())`).

use async_trait::async_trait;
use std::fmt::{Debug, Display};

/// Trait that any record type must implement to be managed by `ResourceActor`.
///
/// # Sequential Identifiers
/// Identifiers are derived from the store position: the actor hands
/// `len(store) + 1` to [`ActorEntity::from_create_params`], so `Id` must be
/// constructible from a `u64`.
///
/// # Async & Context
/// The trait is `#[async_trait]` so hooks may await (e.g. call other actors).
/// `Context` is injected into every hook by `run()`, which allows dependencies to be
/// bound after the actor is constructed.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The identifier for this record. Must be convertible from the 1-based store position.
    type Id: Clone + Send + Sync + Display + Debug + From<u64>;

    /// The data required to create a new record.
    type Create: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this record type.
    ///
    /// One error enum per actor rather than one per message: callers deal with a
    /// single type, at the cost of some precision about which operation can fail how.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full record from its assigned id and the creation payload.
    /// Called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Called after the record is constructed and before it is appended.
    /// Returning an error leaves the store untouched.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }
}

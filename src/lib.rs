//! # User Directory
//!
//! > **A small users API on top of a single-owner actor store.**
//!
//! The service keeps an ordered, in-memory list of users and exposes it over HTTP:
//! `GET /users` lists every user, `POST /users` appends one. Nothing is persisted.
//!
//! ## 🏗️ Design
//!
//! ### One owner for the store
//! The list of users is owned by a single Tokio task, a
//! [`ResourceActor`](framework::ResourceActor). Handlers never touch it directly; they send
//! messages through a cloneable [`UserClient`](clients::UserClient). Because the actor handles
//! one message at a time, assigning `len + 1` as the new id and appending the record cannot
//! interleave with another request: ids stay unique and gap-free under any load.
//!
//! ### No globals
//! A [`UserSystem`](lifecycle::UserSystem) owns the actor and hands its client to the router as
//! axum state. Every test builds its own system and therefore its own, freshly seeded store.
//!
//! ### Type-safe errors
//! Each layer has its own error enum:
//! [`FrameworkError`](framework::FrameworkError) for channel plumbing,
//! [`UserError`](user_actor::UserError) for the store,
//! [`ApiError`](http::ApiError) for a single request and
//! [`ServerError`](error::ServerError) for the process.
//!
//! ## 🗺️ Module Tour
//!
//! - [`framework`]: the generic actor, client, messages and a mock client for tests.
//! - [`model`]: [`User`](model::User) and the request payloads.
//! - [`user_actor`]: seed data and the `ActorEntity` implementation for users.
//! - [`clients`]: the [`ActorClient`](clients::ActorClient) trait and `UserClient`.
//! - [`lifecycle`]: starting and stopping the store, tracing setup.
//! - [`http`]: router, handlers and the server loop.
//! - [`config`]: the fixed listen address.
//!
//! ## 🚀 Running
//!
//! ```bash
//! RUST_LOG=info cargo run
//! curl localhost:8000/users
//! curl -X POST localhost:8000/users -d '{"name":"Alice","email":"alice@x.com"}'
//! ```

pub mod clients;
pub mod config;
pub mod error;
pub mod framework;
pub mod http;
pub mod lifecycle;
pub mod model;
pub mod user_actor;

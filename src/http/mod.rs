//! # HTTP Surface
//!
//! | Method | Path | Response |
//! |---|---|---|
//! | GET | `/users` | 200, JSON array of users |
//! | POST | `/users` | 201, the created user; 400 on unreadable or malformed body |
//! | other | `/users` | 405 `Method not allowed` |
//! | any | elsewhere | 404 |
//!
//! Failures are described by [`ApiError`].

pub mod error;
pub mod handlers;
pub mod server;

pub use error::ApiError;
pub use server::{serve, shutdown_signal};

use crate::clients::UserClient;
use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::Router;

/// Path of the only route.
pub const USERS_PATH: &str = "/users";

/// Builds the application router around the given store client.
pub fn router(user_client: UserClient) -> Router {
    Router::new()
        .route(
            USERS_PATH,
            get(handlers::list_users)
                .post(handlers::create_user)
                // `get` would otherwise answer HEAD too
                .head(handlers::method_not_allowed)
                .fallback(handlers::method_not_allowed)
                .layer(DefaultBodyLimit::disable()),
        )
        .with_state(user_client)
}

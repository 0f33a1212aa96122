//! Handlers for the `/users` route.
//!
//! Each handler receives the [`UserClient`] as axum state; there is no global store.

use crate::clients::{ActorClient, UserClient};
use crate::http::error::ApiError;
use crate::model::{CreateUserRequest, User, UserCreate};
use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use tracing::{debug, instrument};

/// `GET /users`: every stored user, in insertion order.
#[instrument(skip_all)]
pub async fn list_users(State(client): State<UserClient>) -> Result<Json<Vec<User>>, ApiError> {
    let users = client.list().await?;
    debug!(count = users.len(), "Listing users");
    Ok(Json(users))
}

/// `POST /users`: append a user built from the JSON body.
///
/// The body is taken as raw bytes so that read failures and decode failures can be
/// answered separately.
#[instrument(skip_all)]
pub async fn create_user(
    State(client): State<UserClient>,
    body: Result<Bytes, BytesRejection>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let body = body.map_err(ApiError::BodyRead)?;
    let params = parse_create_request(&body)?;
    let user = client.create_user(params).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Any other verb on `/users`.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// Decodes a create body. A bare `null` counts as an empty object.
fn parse_create_request(body: &[u8]) -> Result<UserCreate, ApiError> {
    let request: Option<CreateUserRequest> =
        serde_json::from_slice(body).map_err(ApiError::MalformedJson)?;
    Ok(request.unwrap_or_default().into())
}

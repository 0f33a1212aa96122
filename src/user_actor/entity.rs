//! [`ActorEntity`] implementation for the [`User`] record.
//!
//! Users need no dependencies (`Context = ()`) and accept every payload: name and email
//! are copied verbatim, empty strings included.

use crate::framework::ActorEntity;
use crate::model::{User, UserCreate, UserId};
use crate::user_actor::UserError;
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for User {
    type Id = UserId;
    type Create = UserCreate;
    type Context = ();
    type Error = UserError;

    /// Creates a new User from creation parameters.
    fn from_create_params(id: UserId, params: UserCreate) -> Result<Self, Self::Error> {
        Ok(Self::new(id, params.name, params.email))
    }
}

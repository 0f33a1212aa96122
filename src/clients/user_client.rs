use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{User, UserCreate};
use crate::user_actor::UserError;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the User actor.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

impl UserClient {
    pub fn new(inner: ResourceClient<User>) -> Self {
        Self { inner }
    }

    /// Appends a user and returns it with its assigned id.
    #[instrument(skip(self))]
    pub async fn create_user(&self, params: UserCreate) -> Result<User, UserError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<User> for UserClient {
    type Error = UserError;

    fn inner(&self) -> &ResourceClient<User> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        UserError::from(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::MockClient;
    use crate::user_actor;

    #[tokio::test]
    async fn test_fresh_store_lists_seed_users() {
        let (actor, client) = user_actor::new(8);
        tokio::spawn(actor.run(()));

        let users = client.list().await.unwrap();
        assert_eq!(users, user_actor::seed_users());
    }

    #[tokio::test]
    async fn test_create_user_copies_fields_verbatim() {
        let (actor, client) = user_actor::new(8);
        tokio::spawn(actor.run(()));

        let params = UserCreate {
            name: "  Alice ".to_string(),
            email: "not an email".to_string(),
        };
        let user = client.create_user(params).await.unwrap();
        assert_eq!(user, User::new(3, "  Alice ", "not an email"));
    }

    #[tokio::test]
    async fn test_framework_errors_map_to_user_errors() {
        let mut mock = MockClient::<User>::new();
        mock.expect_list().return_err(FrameworkError::ActorClosed);
        mock.expect_create()
            .return_err(FrameworkError::EntityError("bad record".into()));

        let client = UserClient::new(mock.client());
        assert_eq!(
            client.list().await,
            Err(UserError::StoreUnavailable("Actor closed".to_string()))
        );
        assert_eq!(
            client.create_user(UserCreate::default()).await,
            Err(UserError::Rejected("bad record".to_string()))
        );
        mock.verify();
    }
}

use serde::{Deserialize, Serialize};

/// Identifier of a stored user: its 1-based position in the store.
pub type UserId = u64;

/// Represents a registered user in the system.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing it to be stored by a [`ResourceActor`](crate::framework::ResourceActor).
///
/// Serializes as `{"id": .., "name": .., "email": ..}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

impl User {
    /// Creates a new User instance.
    ///
    /// # Arguments
    /// * `id` - Position-derived identifier
    /// * `name` - User's display name
    /// * `email` - User's email address
    pub fn new(id: UserId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Payload for creating a new user. Both fields are copied verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserCreate {
    pub name: String,
    pub email: String,
}

/// Body of a `POST /users` request.
///
/// Every field is optional on the wire: absent and `null` fields both fall back to
/// the empty string when converted into a [`UserCreate`]. Unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl From<CreateUserRequest> for UserCreate {
    fn from(req: CreateUserRequest) -> Self {
        Self {
            name: req.name.unwrap_or_default(),
            email: req.email.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_serializes_in_wire_order() {
        let user = User::new(3, "Alice", "alice@x.com");
        let json = serde_json::to_string(&user).unwrap();
        assert_eq!(json, r#"{"id":3,"name":"Alice","email":"alice@x.com"}"#);
    }

    #[test]
    fn test_missing_and_null_fields_become_empty() {
        let req: CreateUserRequest = serde_json::from_str(r#"{"email":null}"#).unwrap();
        assert_eq!(UserCreate::from(req), UserCreate::default());
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let req: CreateUserRequest =
            serde_json::from_str(r#"{"name":"Bob","role":"admin"}"#).unwrap();
        let params = UserCreate::from(req);
        assert_eq!(params.name, "Bob");
        assert_eq!(params.email, "");
    }

    #[test]
    fn test_wrong_field_type_is_rejected() {
        let result = serde_json::from_str::<CreateUserRequest>(r#"{"name":42}"#);
        assert!(result.is_err());
    }
}

use crate::id::DbId;

/// The user attached to the current session
///
/// The backend sends its whole user record, only these fields are kept
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
pub struct SessionUser {
    pub id: DbId,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
}

/// What the profile page displays and edits
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq, Default)]
pub struct UserProfile {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
}

/// Reference to a user by id only, as expected inside a transaction
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct UserRef {
    pub id: DbId,
}

impl From<DbId> for UserRef {
    fn from(id: DbId) -> Self {
        Self { id }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_user_ignores_extra_fields() {
        let json = r#"{
            "id": 4,
            "username": "bob",
            "email": "bob@mail.com",
            "password": "$2a$10$hash",
            "connections": []
        }"#;

        let actual: SessionUser = serde_json::from_str(json).unwrap();

        assert_eq!(
            actual,
            SessionUser {
                id: 4.into(),
                username: "bob".into(),
                email: "bob@mail.com".into()
            }
        );
    }

    #[test]
    fn profile_ignores_null_password() {
        let json = r#"{"username":"bob","email":"bob@mail.com","password":null}"#;

        let actual: UserProfile = serde_json::from_str(json).unwrap();

        assert_eq!(actual.username, "bob");
        assert_eq!(actual.email, "bob@mail.com");
    }
}

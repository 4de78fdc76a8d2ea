use crate::id::DbId;

use super::SessionUser;

/// A row of the relations table
///
/// The backend does not include the id when listing connections
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
pub struct Connection {
    #[serde(default)]
    pub id: Option<DbId>,
    pub username: String,
    pub email: String,
}

impl From<SessionUser> for Connection {
    fn from(value: SessionUser) -> Self {
        Self {
            id: Some(value.id),
            username: value.username,
            email: value.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_from_backend_has_no_ids() {
        let json = r#"[
            {"username":"alice","email":"alice@mail.com","password":null},
            {"username":"carol","email":"carol@mail.com","password":null}
        ]"#;

        let actual: Vec<Connection> = serde_json::from_str(json).unwrap();

        assert_eq!(actual.len(), 2);
        assert!(actual.iter().all(|c| c.id.is_none()));
        assert_eq!(actual[1].username, "carol");
    }

    #[test]
    fn resolved_user_keeps_its_id() {
        let user = SessionUser {
            id: 9.into(),
            username: "dave".into(),
            email: "dave@mail.com".into(),
        };

        let actual = Connection::from(user);

        assert_eq!(actual.id, Some(9.into()));
        assert_eq!(actual.email, "dave@mail.com");
    }
}

use buddy_shared::{
    const_config::path::{
        PATH_LOGIN, PATH_USERS_ADD_CONNECTION, PATH_USERS_CONNECTION, PATH_USERS_CONNECTIONS,
        PATH_USERS_FIND, PATH_USERS_SESSION, PATH_USERS_SIGNUP,
    },
    id::DbId,
    models::{Connection, Email, SessionUser},
    req_args::{LoginReqArgs, SignupReqArgs},
};
use secrecy::ExposeSecret as _;

use crate::{
    client::{encode_path_segment, RequestBody},
    AwaitingType, Client,
};

impl Client {
    /// Any success status means the credentials were accepted (the redirect
    /// the backend answers with is followed)
    #[tracing::instrument]
    pub fn login(&self, args: LoginReqArgs) -> AwaitingType<()> {
        let body = RequestBody::Form(vec![
            ("username", String::from(args.username)),
            ("password", args.password.expose_secret().to_string()),
        ]);
        self.send_request_expect_empty(PATH_LOGIN, body)
    }

    #[tracing::instrument]
    pub fn signup(&self, args: SignupReqArgs) -> AwaitingType<()> {
        let body = RequestBody::Json(serde_json::json!({
            "username": args.username,
            "email": args.email,
            "password": args.password.expose_secret(),
        }));
        self.send_request_expect_empty(PATH_USERS_SIGNUP, body)
    }

    #[tracing::instrument]
    pub fn session_user(&self) -> AwaitingType<SessionUser> {
        self.send_request_expect_json(PATH_USERS_SESSION, RequestBody::Empty)
    }

    /// Looks up any user by email
    #[tracing::instrument]
    pub fn find_user(&self, email: &Email) -> AwaitingType<SessionUser> {
        let email = encode_path_segment(email.as_ref());
        self.send_request_expect_json(PATH_USERS_FIND.with_params(&[&email]), RequestBody::Empty)
    }

    #[tracing::instrument]
    pub fn list_connections(&self, user_id: DbId) -> AwaitingType<Vec<Connection>> {
        self.send_request_expect_json(
            PATH_USERS_CONNECTIONS.with_params(&[&user_id]),
            RequestBody::Empty,
        )
    }

    /// Looks up one of the session user's connections by email
    #[tracing::instrument]
    pub fn find_connection(&self, email: &Email) -> AwaitingType<Connection> {
        let email = encode_path_segment(email.as_ref());
        self.send_request_expect_json(
            PATH_USERS_CONNECTION.with_params(&[&email]),
            RequestBody::Empty,
        )
    }

    #[tracing::instrument]
    pub fn add_connection(&self, user_id: DbId, other_id: DbId) -> AwaitingType<()> {
        self.send_request_expect_empty(
            PATH_USERS_ADD_CONNECTION.with_params(&[&user_id, &other_id]),
            RequestBody::Empty,
        )
    }
}

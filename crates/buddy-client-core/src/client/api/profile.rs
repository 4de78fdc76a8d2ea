use buddy_shared::{
    const_config::path::{
        PATH_API_USER_PROFILE_DELETE, PATH_API_USER_PROFILE_GET, PATH_API_USER_PROFILE_UPDATE,
    },
    models::UserProfile,
    req_args::ProfileUpdateReqArgs,
};
use secrecy::ExposeSecret as _;

use crate::{client::RequestBody, AwaitingType, Client};

impl Client {
    #[tracing::instrument]
    pub fn get_profile(&self) -> AwaitingType<UserProfile> {
        self.send_request_expect_json(PATH_API_USER_PROFILE_GET, RequestBody::Empty)
    }

    /// A `null` password leaves it unchanged on the backend
    #[tracing::instrument]
    pub fn update_profile(&self, args: ProfileUpdateReqArgs) -> AwaitingType<()> {
        let body = RequestBody::Json(serde_json::json!({
            "email": args.email,
            "password": args.password.as_ref().map(|password| password.expose_secret()),
        }));
        self.send_request_expect_empty(PATH_API_USER_PROFILE_UPDATE, body)
    }

    #[tracing::instrument]
    pub fn delete_profile(&self) -> AwaitingType<()> {
        self.send_request_expect_empty(PATH_API_USER_PROFILE_DELETE, RequestBody::Empty)
    }
}

//! Stores settings that are not expected to need to change but grouped together
//! for discoverability and reuse. Each constant should be prefixed by the module
//! name to allow importing the constant only and still be readable

pub mod client {
    use std::time::Duration;

    /// Used when no configuration is found
    pub const CLIENT_DEFAULT_SERVER_ADDRESS: &str = "http://localhost:8080";

    /// How long the confirmation stays visible after deleting the account
    /// before going back to the home page
    pub const CLIENT_DELETE_REDIRECT_DELAY: Duration = Duration::from_secs(2);

    /// How long the signup confirmation stays visible before going to the
    /// login page
    pub const CLIENT_SIGNUP_REDIRECT_DELAY: Duration = Duration::from_secs(3);
}

pub mod path {
    mod path_spec;
    pub use path_spec::PathSpec;
    pub const PATH_API_USER_PROFILE_DELETE: PathSpec = PathSpec::delete("/api/user/profile");
    pub const PATH_API_USER_PROFILE_GET: PathSpec = PathSpec::get("/api/user/profile");
    pub const PATH_API_USER_PROFILE_UPDATE: PathSpec = PathSpec::post("/api/user/profile");
    pub const PATH_LOGIN: PathSpec = PathSpec::post("/login");
    pub const PATH_TRANSACTIONS_CREATE: PathSpec = PathSpec::post("/transactions");
    pub const PATH_TRANSACTIONS_DELETE: PathSpec = PathSpec::delete("/transactions/{id}");
    pub const PATH_TRANSACTIONS_OF_USER: PathSpec = PathSpec::get("/transactions/user/{id}");
    pub const PATH_USERS_ADD_CONNECTION: PathSpec =
        PathSpec::put("/users/add/{uid}/connections/{other_id}");
    pub const PATH_USERS_CONNECTION: PathSpec = PathSpec::get("/users/connection/{email}");
    pub const PATH_USERS_CONNECTIONS: PathSpec = PathSpec::get("/users/{id}/connections");
    pub const PATH_USERS_FIND: PathSpec = PathSpec::get("/users/find/{email}");
    pub const PATH_USERS_SESSION: PathSpec = PathSpec::get("/users/email");
    pub const PATH_USERS_SIGNUP: PathSpec = PathSpec::post("/users/signup");
}

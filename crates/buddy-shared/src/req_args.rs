//! This module stores the expected format of the arguments for the requests
//! that carry user input. They are not serializable on purpose, the client
//! builds the body and only exposes the secrets at that point

use secrecy::{ExposeSecret, SecretString};
use std::fmt::Debug;

use crate::models::Email;

/// Sent form-urlencoded. The backend identifies users by email but names the
/// field `username`
#[derive(Clone)]
pub struct LoginReqArgs {
    pub username: Email,
    pub password: SecretString,
}

#[derive(Clone)]
pub struct SignupReqArgs {
    pub username: String,
    pub email: Email,
    pub password: SecretString,
}

#[derive(Clone)]
pub struct ProfileUpdateReqArgs {
    pub email: Email,
    /// `None` leaves the password unchanged
    pub password: Option<SecretString>,
}

impl LoginReqArgs {
    pub fn new(username: Email, password: SecretString) -> Self {
        Self { username, password }
    }
}

impl SignupReqArgs {
    pub fn new<S: Into<String>>(username: S, email: Email, password: SecretString) -> Self {
        Self {
            username: username.into(),
            email,
            password,
        }
    }
}

impl ProfileUpdateReqArgs {
    /// A password that is empty once trimmed is treated as "no change"
    pub fn new(email: Email, password: &SecretString) -> Self {
        let trimmed = password.expose_secret().trim();
        let password = if trimmed.is_empty() {
            None
        } else {
            Some(SecretString::from(trimmed))
        };
        Self { email, password }
    }
}

impl Debug for LoginReqArgs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginReqArgs")
            .field("username", &self.username)
            .field("has_password", &!self.password.expose_secret().is_empty())
            .finish()
    }
}

impl Debug for SignupReqArgs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignupReqArgs")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("has_password", &!self.password.expose_secret().is_empty())
            .finish()
    }
}

impl Debug for ProfileUpdateReqArgs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProfileUpdateReqArgs")
            .field("email", &self.email)
            .field("changes_password", &self.password.is_some())
            .finish()
    }
}

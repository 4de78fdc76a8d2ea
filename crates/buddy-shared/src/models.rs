//! Entities owned by the backend. The client only holds them while displaying
//! them and never caches them beyond a page

mod connection;
mod email;
mod transaction;
mod user;

pub use connection::Connection;
pub use email::Email;
pub use transaction::{NewTransaction, Transaction};
pub use user::{SessionUser, UserProfile, UserRef};

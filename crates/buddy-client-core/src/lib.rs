//! Stores the functionality to talk to the PayMyBuddy backend that every
//! client front-end needs
//! NB: The assumption is made that the async runtime has already been started
//! before any request is sent

#![warn(unused_crate_dependencies)]

mod api;
mod awaiting;
mod client;
mod errors;
pub mod session;

#[cfg(not(target_arch = "wasm32"))]
pub mod configuration;

pub use api::BuddyApi;
pub use awaiting::AwaitingType;
pub use client::{response::classify_error, Client, WakeFn};
pub use errors::ClientError;
pub use session::{SessionState, SessionStatus};

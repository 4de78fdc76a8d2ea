//! The user attached to the session, fetched once and shared by every page

use buddy_shared::{id::DbId, models::SessionUser};
use std::task::Poll;
use tracing::{info, warn};

use crate::{AwaitingType, BuddyApi, ClientError};

#[derive(Debug, Default)]
pub struct SessionState {
    user: SessionData,
}

#[derive(Debug, Default)]
enum SessionData {
    #[default]
    NotRequested,
    AwaitingResponse(AwaitingType<SessionUser>),
    Present(SessionUser),
    Failed(ClientError),
}

#[derive(Debug, PartialEq, Eq)]
pub enum SessionStatus<'a> {
    NotRequested,
    Loading,
    Ready(&'a SessionUser),
    Failed(&'a ClientError),
}

impl SessionState {
    /// Starts the fetch unless it was already started. Does nothing once the
    /// user is known or the fetch failed (see [`SessionState::reset`])
    pub fn request<A: BuddyApi>(&mut self, api: &A) {
        if matches!(self.user, SessionData::NotRequested) {
            info!("requesting session user");
            self.user = SessionData::AwaitingResponse(api.session_user());
        }
    }

    /// Advances the fetch if one is in flight and reports where it is at
    pub fn poll(&mut self) -> SessionStatus<'_> {
        if let SessionData::AwaitingResponse(rx) = &mut self.user {
            if let Poll::Ready(result) = rx.try_take() {
                self.user = match result {
                    Ok(user) => {
                        info!(user_id = %user.id, "session user loaded");
                        SessionData::Present(user)
                    }
                    Err(e) => {
                        warn!(?e, "failed to fetch session user");
                        SessionData::Failed(e)
                    }
                };
            }
        }
        self.status()
    }

    pub fn status(&self) -> SessionStatus<'_> {
        match &self.user {
            SessionData::NotRequested => SessionStatus::NotRequested,
            SessionData::AwaitingResponse(_) => SessionStatus::Loading,
            SessionData::Present(user) => SessionStatus::Ready(user),
            SessionData::Failed(e) => SessionStatus::Failed(e),
        }
    }

    pub fn user(&self) -> Option<&SessionUser> {
        match &self.user {
            SessionData::Present(user) => Some(user),
            _ => None,
        }
    }

    pub fn user_id(&self) -> Option<DbId> {
        self.user().map(|user| user.id)
    }

    /// Forgets the user so the next [`SessionState::request`] fetches it again
    pub fn reset(&mut self) {
        info!("session user cleared");
        self.user = SessionData::NotRequested;
    }
}

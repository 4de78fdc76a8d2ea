//! Lists the relations of the session user, looks one up by email or adds a
//! new one

use buddy_client_core::{AwaitingType, BuddyApi, ClientError, SessionState};
use buddy_shared::{
    id::DbId,
    models::{Connection, Email, SessionUser},
};
use std::{fmt::Debug, task::Poll};
use tracing::{info, warn};

use super::{session_user_id, Page};
use crate::{feedback::Banner, navigation::Navigation};

mod frontend;

const MSG_NONE_FOUND: &str = "Aucune connection trouvée";
const MSG_LIST_FAILED: &str = "Erreur lors de la récupération des connections";
const MSG_NOT_LINKED: &str = "Vous n'avez pas de liaison avec cette personne";
const MSG_LOOKUP_FAILED: &str = "Erreur lors de la recherche de la relation";
const MSG_ADD_EMPTY: &str = "Veuillez saisir une adresse mail à ajouter";
const MSG_ADD_SUCCESS: &str = "Utilisateur ajouté à la liste des connections";
const MSG_RESOLVE_FAILED: &str = "Erreur lors de la recherche de l'utilisateur";
const MSG_ADD_FAILED: &str = "Erreur lors de l'ajout";

#[derive(Debug, Default)]
pub struct ConnectionsPage {
    email: String,
    rows: Vec<Connection>,
    flow: ConnectionsFlow,
    banner: Banner,
}

/// The request in flight for the last action. Each variant is one step
#[derive(Default)]
enum ConnectionsFlow {
    #[default]
    Idle,
    ListAll(AwaitingType<Vec<Connection>>),
    Lookup(AwaitingType<Connection>),
    ResolveForAdd {
        user_id: DbId,
        rx: AwaitingType<SessionUser>,
    },
    AddEdge {
        found: SessionUser,
        rx: AwaitingType<()>,
    },
}

impl Debug for ConnectionsFlow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::ListAll(_) => write!(f, "ListAll"),
            Self::Lookup(_) => write!(f, "Lookup"),
            Self::ResolveForAdd { user_id, .. } => f
                .debug_struct("ResolveForAdd")
                .field("user_id", user_id)
                .finish(),
            Self::AddEdge { found, .. } => {
                f.debug_struct("AddEdge").field("found", found).finish()
            }
        }
    }
}

impl ConnectionsPage {
    pub fn rows(&self) -> &[Connection] {
        &self.rows
    }

    pub fn is_table_visible(&self) -> bool {
        !self.rows.is_empty()
    }

    /// Starts a new action. Whatever was in flight is dropped
    fn reset(&mut self) {
        self.banner.hide();
        self.rows.clear();
        self.flow = ConnectionsFlow::Idle;
    }

    /// Lists every relation when the email is empty, otherwise looks up the
    /// relation with that email
    pub fn search<A: BuddyApi>(&mut self, api: &A, session: &mut SessionState) {
        self.reset();
        match Email::try_from(self.email.as_str()) {
            Ok(email) => {
                info!(%email, "looking up connection");
                self.flow = ConnectionsFlow::Lookup(api.find_connection(&email));
            }
            Err(_) => {
                let Some(user_id) = session_user_id(api, session, &mut self.banner) else {
                    return;
                };
                info!(%user_id, "listing connections");
                self.flow = ConnectionsFlow::ListAll(api.list_connections(user_id));
            }
        }
    }

    pub fn add<A: BuddyApi>(&mut self, api: &A, session: &mut SessionState) {
        self.reset();
        let Ok(email) = Email::try_from(self.email.as_str()) else {
            self.banner.show_warning(MSG_ADD_EMPTY);
            return;
        };
        let Some(user_id) = session_user_id(api, session, &mut self.banner) else {
            return;
        };
        info!(%email, "resolving user to add");
        self.flow = ConnectionsFlow::ResolveForAdd {
            user_id,
            rx: api.find_user(&email),
        };
    }

    fn on_list(&mut self, result: Result<Vec<Connection>, ClientError>) {
        match result {
            Ok(connections) if connections.is_empty() => self.banner.show_warning(MSG_NONE_FOUND),
            Ok(connections) => self.rows = connections,
            Err(e) if e.is_not_found() => self.banner.show_warning(MSG_NONE_FOUND),
            Err(e) => {
                warn!(?e, "failed to list connections");
                self.banner
                    .show_error(format!("{MSG_LIST_FAILED} : {}", e.detail()));
            }
        }
    }

    fn on_lookup(&mut self, result: Result<Connection, ClientError>) {
        match result {
            Ok(connection) => self.rows = vec![connection],
            Err(e) if e.is_not_found() => self.banner.show_warning(MSG_NOT_LINKED),
            Err(e) => {
                warn!(?e, "failed to look up connection");
                self.banner.show_error(MSG_LOOKUP_FAILED);
            }
        }
    }

    fn on_add(&mut self, found: SessionUser, result: Result<(), ClientError>) {
        match result {
            Ok(()) => {
                info!(other_id = %found.id, "connection added");
                self.banner.show_success(MSG_ADD_SUCCESS);
                self.rows.push(found.into());
            }
            Err(e) => {
                warn!(?e, "failed to add connection");
                let msg = match e.server_message() {
                    Some(server_msg) => format!("{MSG_ADD_FAILED} : {server_msg}"),
                    None => MSG_ADD_FAILED.to_string(),
                };
                self.banner.show_error(msg);
            }
        }
    }
}

impl Page for ConnectionsPage {
    fn on_load<A: BuddyApi>(&mut self, api: &A, session: &mut SessionState) {
        session.request(api);
    }

    fn poll<A: BuddyApi>(&mut self, api: &A, session: &mut SessionState) {
        session.poll();
        match std::mem::take(&mut self.flow) {
            ConnectionsFlow::Idle => {}
            ConnectionsFlow::ListAll(mut rx) => match rx.try_take() {
                Poll::Ready(result) => self.on_list(result),
                Poll::Pending => self.flow = ConnectionsFlow::ListAll(rx),
            },
            ConnectionsFlow::Lookup(mut rx) => match rx.try_take() {
                Poll::Ready(result) => self.on_lookup(result),
                Poll::Pending => self.flow = ConnectionsFlow::Lookup(rx),
            },
            ConnectionsFlow::ResolveForAdd { user_id, mut rx } => match rx.try_take() {
                Poll::Ready(Ok(found)) => {
                    info!(%user_id, other_id = %found.id, "adding connection");
                    let rx = api.add_connection(user_id, found.id);
                    self.flow = ConnectionsFlow::AddEdge { found, rx };
                }
                Poll::Ready(Err(e)) => {
                    warn!(?e, "failed to resolve user to add");
                    self.banner.show_error(MSG_RESOLVE_FAILED);
                }
                Poll::Pending => self.flow = ConnectionsFlow::ResolveForAdd { user_id, rx },
            },
            ConnectionsFlow::AddEdge { found, mut rx } => match rx.try_take() {
                Poll::Ready(result) => self.on_add(found, result),
                Poll::Pending => self.flow = ConnectionsFlow::AddEdge { found, rx },
            },
        }
    }

    fn banner(&self) -> &Banner {
        &self.banner
    }

    fn take_navigation(&mut self) -> Option<Navigation> {
        None
    }

    fn is_busy(&self) -> bool {
        !matches!(self.flow, ConnectionsFlow::Idle)
    }
}

//! Sends money to a relation and shows the history of the session user

use buddy_client_core::{AwaitingType, BuddyApi, ClientError, SessionState, SessionStatus};
use buddy_shared::{
    id::DbId,
    models::{Connection, NewTransaction, SessionUser, Transaction},
    validation::{positive_amount, selected_recipient},
};
use std::{fmt::Debug, task::Poll};
use tracing::{info, warn};

use super::{session_user_id, Page, MSG_SESSION_FAILED};
use crate::{feedback::Banner, navigation::Navigation};

mod frontend;

const MSG_NO_RELATIONS: &str = "Aucune connection trouvée";
const MSG_RELATIONS_FAILED: &str = "Erreur lors de la récupération des connections";
const MSG_NO_TRANSACTIONS: &str = "Aucune transaction trouvée";
const MSG_HISTORY_FAILED: &str = "Erreur lors de la récupération des transactions";
const MSG_CREATE_SUCCESS: &str = "Transaction créée avec succès";
const MSG_CREATE_FAILED: &str = "Erreur lors de la création de la transaction";
const MSG_DELETE_FAILED: &str = "Erreur lors de la suppression de la transaction";

#[derive(Debug, Default)]
pub struct TransactionsPage {
    recipient: Option<String>,
    description: String,
    amount: String,
    relations: Vec<Connection>,
    history: Vec<Transaction>,
    is_loading_session: bool,
    /// Set when the session could not be loaded, the next action retries
    needs_reload: bool,
    relations_request: Option<AwaitingType<Vec<Connection>>>,
    history_request: Option<AwaitingType<Vec<Transaction>>>,
    submit_flow: SubmitFlow,
    delete_request: Option<DeleteRequest>,
    banner: Banner,
}

#[derive(Default)]
enum SubmitFlow {
    #[default]
    Idle,
    ResolveRecipient {
        sender_id: DbId,
        description: String,
        amount: f64,
        rx: AwaitingType<SessionUser>,
    },
    Create {
        sender_id: DbId,
        rx: AwaitingType<()>,
    },
}

impl Debug for SubmitFlow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::ResolveRecipient {
                sender_id, amount, ..
            } => f
                .debug_struct("ResolveRecipient")
                .field("sender_id", sender_id)
                .field("amount", amount)
                .finish(),
            Self::Create { sender_id, .. } => f
                .debug_struct("Create")
                .field("sender_id", sender_id)
                .finish(),
        }
    }
}

#[derive(Debug)]
struct DeleteRequest {
    transaction_id: DbId,
    rx: AwaitingType<()>,
}

impl TransactionsPage {
    pub fn relations(&self) -> &[Connection] {
        &self.relations
    }

    pub fn history(&self) -> &[Transaction] {
        &self.history
    }

    pub fn is_submitting(&self) -> bool {
        !matches!(self.submit_flow, SubmitFlow::Idle)
    }

    pub fn is_deleting(&self) -> bool {
        self.delete_request.is_some()
    }

    fn fetch_relations<A: BuddyApi>(&mut self, api: &A, user_id: DbId) {
        info!(%user_id, "fetching relations");
        self.relations_request = Some(api.list_connections(user_id));
    }

    /// Any history request in flight is replaced
    fn fetch_history<A: BuddyApi>(&mut self, api: &A, user_id: DbId) {
        info!(%user_id, "fetching transaction history");
        self.history_request = Some(api.list_transactions(user_id));
    }

    pub fn submit<A: BuddyApi>(&mut self, api: &A, session: &mut SessionState) {
        if self.is_submitting() {
            return;
        }
        self.banner.hide();
        if self.needs_reload {
            self.load(api, session);
            return;
        }
        let validated = selected_recipient(self.recipient.as_deref())
            .and_then(|recipient| Ok((recipient, positive_amount(&self.amount)?)));
        let (recipient, amount) = match validated {
            Ok(x) => x,
            Err(e) => {
                self.banner.show_warning(e.to_string());
                return;
            }
        };
        let Some(sender_id) = session_user_id(api, session, &mut self.banner) else {
            return;
        };
        info!(%recipient, amount, "resolving recipient");
        self.submit_flow = SubmitFlow::ResolveRecipient {
            sender_id,
            description: self.description.trim().to_string(),
            amount,
            rx: api.find_user(&recipient),
        };
    }

    /// Deletes the transaction with `transaction_id`. Ignored while another
    /// deletion is in flight
    pub fn delete<A: BuddyApi>(&mut self, api: &A, transaction_id: DbId) {
        if self.is_deleting() {
            return;
        }
        info!(%transaction_id, "deleting transaction");
        self.delete_request = Some(DeleteRequest {
            transaction_id,
            rx: api.delete_transaction(transaction_id),
        });
    }

    fn reset_form(&mut self) {
        self.recipient = None;
        self.description.clear();
        self.amount.clear();
    }

    /// Requests the session user, relations and history follow once it is known
    fn load<A: BuddyApi>(&mut self, api: &A, session: &mut SessionState) {
        info!("loading transactions page");
        session.request(api);
        self.is_loading_session = true;
        self.needs_reload = false;
        self.poll_session(api, session);
    }

    fn poll_session<A: BuddyApi>(&mut self, api: &A, session: &mut SessionState) {
        if !self.is_loading_session {
            return;
        }
        let user_id = match session.poll() {
            SessionStatus::Ready(user) => user.id,
            SessionStatus::Loading => return,
            SessionStatus::Failed(_) => {
                self.banner.show_error(MSG_SESSION_FAILED);
                session.reset();
                self.is_loading_session = false;
                self.needs_reload = true;
                return;
            }
            // Failure already reported by whoever reset the session
            SessionStatus::NotRequested => {
                self.is_loading_session = false;
                self.needs_reload = true;
                return;
            }
        };
        self.is_loading_session = false;
        self.fetch_relations(api, user_id);
        self.fetch_history(api, user_id);
    }

    fn poll_relations(&mut self) {
        let Some(rx) = self.relations_request.as_mut() else {
            return;
        };
        let Poll::Ready(result) = rx.try_take() else {
            return;
        };
        self.relations_request = None;
        match result {
            Ok(relations) => {
                if relations.is_empty() {
                    self.banner.show_warning(MSG_NO_RELATIONS);
                }
                self.relations = relations;
            }
            Err(e) if e.is_not_found() => {
                self.relations.clear();
                self.banner.show_warning(MSG_NO_RELATIONS);
            }
            Err(e) => {
                warn!(?e, "failed to fetch relations");
                self.relations.clear();
                self.banner
                    .show_error(format!("{MSG_RELATIONS_FAILED} : {}", e.detail()));
            }
        }
    }

    fn poll_history(&mut self) {
        let Some(rx) = self.history_request.as_mut() else {
            return;
        };
        let Poll::Ready(result) = rx.try_take() else {
            return;
        };
        self.history_request = None;
        self.history = match result {
            Ok(history) => {
                if history.is_empty() {
                    self.banner.show_warning(MSG_NO_TRANSACTIONS);
                }
                history
            }
            Err(e) if e.is_not_found() => {
                self.banner.show_warning(MSG_NO_TRANSACTIONS);
                Vec::new()
            }
            Err(e) => {
                warn!(?e, "failed to fetch transaction history");
                self.banner
                    .show_error(format!("{MSG_HISTORY_FAILED} : {}", e.detail()));
                Vec::new()
            }
        };
    }

    fn poll_submit<A: BuddyApi>(&mut self, api: &A) {
        match std::mem::take(&mut self.submit_flow) {
            SubmitFlow::Idle => {}
            SubmitFlow::ResolveRecipient {
                sender_id,
                description,
                amount,
                mut rx,
            } => match rx.try_take() {
                Poll::Ready(Ok(receiver)) => {
                    let transaction = NewTransaction {
                        sender: sender_id.into(),
                        receiver: receiver.id.into(),
                        description,
                        amount,
                    };
                    info!(?transaction, "creating transaction");
                    self.submit_flow = SubmitFlow::Create {
                        sender_id,
                        rx: api.create_transaction(transaction),
                    };
                }
                Poll::Ready(Err(e)) => self.on_create_failed(e),
                Poll::Pending => {
                    self.submit_flow = SubmitFlow::ResolveRecipient {
                        sender_id,
                        description,
                        amount,
                        rx,
                    }
                }
            },
            SubmitFlow::Create { sender_id, mut rx } => match rx.try_take() {
                Poll::Ready(Ok(())) => {
                    info!("transaction created");
                    self.banner.show_success(MSG_CREATE_SUCCESS);
                    self.reset_form();
                    self.fetch_history(api, sender_id);
                }
                Poll::Ready(Err(e)) => self.on_create_failed(e),
                Poll::Pending => self.submit_flow = SubmitFlow::Create { sender_id, rx },
            },
        }
    }

    fn on_create_failed(&mut self, e: ClientError) {
        warn!(?e, "failed to create transaction");
        self.banner
            .show_error(format!("{MSG_CREATE_FAILED} : {}", e.detail()));
    }

    fn poll_delete<A: BuddyApi>(&mut self, api: &A, session: &mut SessionState) {
        let Some(request) = self.delete_request.as_mut() else {
            return;
        };
        let Poll::Ready(result) = request.rx.try_take() else {
            return;
        };
        let transaction_id = request.transaction_id;
        self.delete_request = None;
        match result {
            Ok(()) => {
                info!(%transaction_id, "transaction deleted");
                if let Some(user_id) = session_user_id(api, session, &mut self.banner) {
                    self.fetch_history(api, user_id);
                }
            }
            Err(e) => {
                warn!(?e, %transaction_id, "failed to delete transaction");
                self.banner.show_error(MSG_DELETE_FAILED);
            }
        }
    }
}

impl Page for TransactionsPage {
    fn on_load<A: BuddyApi>(&mut self, api: &A, session: &mut SessionState) {
        self.load(api, session);
    }

    fn poll<A: BuddyApi>(&mut self, api: &A, session: &mut SessionState) {
        self.poll_session(api, session);
        self.poll_relations();
        self.poll_history();
        self.poll_submit(api);
        self.poll_delete(api, session);
    }

    fn banner(&self) -> &Banner {
        &self.banner
    }

    fn take_navigation(&mut self) -> Option<Navigation> {
        None
    }

    fn is_busy(&self) -> bool {
        self.is_loading_session
            || self.relations_request.is_some()
            || self.history_request.is_some()
            || self.is_submitting()
            || self.is_deleting()
    }
}

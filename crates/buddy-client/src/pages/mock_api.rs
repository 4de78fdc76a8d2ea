//! A [`BuddyApi`] that answers from scripted responses and records every call

use buddy_client_core::{AwaitingType, BuddyApi, ClientError, SessionState};
use buddy_shared::{
    id::DbId,
    models::{Connection, Email, NewTransaction, SessionUser, Transaction, UserProfile},
    req_args::{LoginReqArgs, ProfileUpdateReqArgs, SignupReqArgs},
};
use futures::channel::oneshot;
use secrecy::ExposeSecret as _;
use std::{cell::RefCell, collections::VecDeque};

use super::Page;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    Login { username: String, password: String },
    Signup { username: String, email: String, password: String },
    GetProfile,
    UpdateProfile { email: String, password: Option<String> },
    DeleteProfile,
    SessionUser,
    FindUser(String),
    ListConnections(DbId),
    FindConnection(String),
    AddConnection(DbId, DbId),
    CreateTransaction(NewTransaction),
    ListTransactions(DbId),
    DeleteTransaction(DbId),
}

/// Answers for one endpoint, used in order
///
/// When no answer is queued the request stays pending until
/// [`Responses::resolve`] is called
pub(crate) struct Responses<T> {
    queued: RefCell<VecDeque<Result<T, ClientError>>>,
    waiting: RefCell<VecDeque<oneshot::Sender<Result<T, ClientError>>>>,
}

impl<T> Default for Responses<T> {
    fn default() -> Self {
        Self {
            queued: Default::default(),
            waiting: Default::default(),
        }
    }
}

impl<T> Responses<T> {
    pub fn push(&self, response: Result<T, ClientError>) {
        self.queued.borrow_mut().push_back(response);
    }

    /// Answers the oldest request still pending
    pub fn resolve(&self, response: Result<T, ClientError>) {
        let tx = self
            .waiting
            .borrow_mut()
            .pop_front()
            .expect("no request is waiting for a response");
        assert!(tx.send(response).is_ok(), "receiver was dropped");
    }

    fn next(&self) -> AwaitingType<T> {
        match self.queued.borrow_mut().pop_front() {
            Some(response) => AwaitingType::ready(response),
            None => {
                let (tx, rx) = oneshot::channel();
                self.waiting.borrow_mut().push_back(tx);
                AwaitingType::new(rx)
            }
        }
    }
}

#[derive(Default)]
pub(crate) struct MockApi {
    calls: RefCell<Vec<Call>>,
    pub login: Responses<()>,
    pub signup: Responses<()>,
    pub get_profile: Responses<UserProfile>,
    pub update_profile: Responses<()>,
    pub delete_profile: Responses<()>,
    pub session_user: Responses<SessionUser>,
    pub find_user: Responses<SessionUser>,
    pub list_connections: Responses<Vec<Connection>>,
    pub find_connection: Responses<Connection>,
    pub add_connection: Responses<()>,
    pub create_transaction: Responses<()>,
    pub list_transactions: Responses<Vec<Transaction>>,
    pub delete_transaction: Responses<()>,
}

impl MockApi {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, predicate: impl Fn(&Call) -> bool) -> usize {
        self.calls.borrow().iter().filter(|call| predicate(call)).count()
    }

    /// Forgets the calls recorded so far
    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

impl BuddyApi for MockApi {
    fn login(&self, args: LoginReqArgs) -> AwaitingType<()> {
        self.record(Call::Login {
            username: args.username.to_string(),
            password: args.password.expose_secret().to_string(),
        });
        self.login.next()
    }

    fn signup(&self, args: SignupReqArgs) -> AwaitingType<()> {
        self.record(Call::Signup {
            username: args.username,
            email: args.email.to_string(),
            password: args.password.expose_secret().to_string(),
        });
        self.signup.next()
    }

    fn get_profile(&self) -> AwaitingType<UserProfile> {
        self.record(Call::GetProfile);
        self.get_profile.next()
    }

    fn update_profile(&self, args: ProfileUpdateReqArgs) -> AwaitingType<()> {
        self.record(Call::UpdateProfile {
            email: args.email.to_string(),
            password: args
                .password
                .as_ref()
                .map(|password| password.expose_secret().to_string()),
        });
        self.update_profile.next()
    }

    fn delete_profile(&self) -> AwaitingType<()> {
        self.record(Call::DeleteProfile);
        self.delete_profile.next()
    }

    fn session_user(&self) -> AwaitingType<SessionUser> {
        self.record(Call::SessionUser);
        self.session_user.next()
    }

    fn find_user(&self, email: &Email) -> AwaitingType<SessionUser> {
        self.record(Call::FindUser(email.to_string()));
        self.find_user.next()
    }

    fn list_connections(&self, user_id: DbId) -> AwaitingType<Vec<Connection>> {
        self.record(Call::ListConnections(user_id));
        self.list_connections.next()
    }

    fn find_connection(&self, email: &Email) -> AwaitingType<Connection> {
        self.record(Call::FindConnection(email.to_string()));
        self.find_connection.next()
    }

    fn add_connection(&self, user_id: DbId, other_id: DbId) -> AwaitingType<()> {
        self.record(Call::AddConnection(user_id, other_id));
        self.add_connection.next()
    }

    fn create_transaction(&self, transaction: NewTransaction) -> AwaitingType<()> {
        self.record(Call::CreateTransaction(transaction));
        self.create_transaction.next()
    }

    fn list_transactions(&self, user_id: DbId) -> AwaitingType<Vec<Transaction>> {
        self.record(Call::ListTransactions(user_id));
        self.list_transactions.next()
    }

    fn delete_transaction(&self, transaction_id: DbId) -> AwaitingType<()> {
        self.record(Call::DeleteTransaction(transaction_id));
        self.delete_transaction.next()
    }
}

pub(crate) fn session_user() -> SessionUser {
    SessionUser {
        id: 1.into(),
        username: "alice".into(),
        email: "alice@example.com".into(),
    }
}

pub(crate) fn other_user() -> SessionUser {
    SessionUser {
        id: 2.into(),
        username: "bob".into(),
        email: "bob@example.com".into(),
    }
}

pub(crate) fn http_error(status: u16, message: &str) -> ClientError {
    ClientError::Http {
        status,
        message: message.into(),
    }
}

pub(crate) fn not_found() -> ClientError {
    http_error(ClientError::STATUS_NOT_FOUND, "")
}

/// A session whose user is already known
pub(crate) fn loaded_session(api: &MockApi) -> SessionState {
    api.session_user.push(Ok(session_user()));
    let mut result = SessionState::default();
    result.request(api);
    result.poll();
    api.clear_calls();
    result
}

/// Polls until no request is left in flight or a few frames went by
pub(crate) fn settle<P: Page>(page: &mut P, api: &MockApi, session: &mut SessionState) {
    for _ in 0..10 {
        page.poll(api, session);
        if !page.is_busy() {
            break;
        }
    }
}

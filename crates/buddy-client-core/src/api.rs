use buddy_shared::{
    id::DbId,
    models::{Connection, Email, NewTransaction, SessionUser, Transaction, UserProfile},
    req_args::{LoginReqArgs, ProfileUpdateReqArgs, SignupReqArgs},
};

use crate::{AwaitingType, Client};

/// Every call the pages can make to the backend
///
/// Implemented by [`Client`]. Pages are generic over this trait so they can be
/// driven without a backend
pub trait BuddyApi {
    fn login(&self, args: LoginReqArgs) -> AwaitingType<()>;
    fn signup(&self, args: SignupReqArgs) -> AwaitingType<()>;
    fn get_profile(&self) -> AwaitingType<UserProfile>;
    fn update_profile(&self, args: ProfileUpdateReqArgs) -> AwaitingType<()>;
    fn delete_profile(&self) -> AwaitingType<()>;
    fn session_user(&self) -> AwaitingType<SessionUser>;
    fn find_user(&self, email: &Email) -> AwaitingType<SessionUser>;
    fn list_connections(&self, user_id: DbId) -> AwaitingType<Vec<Connection>>;
    fn find_connection(&self, email: &Email) -> AwaitingType<Connection>;
    fn add_connection(&self, user_id: DbId, other_id: DbId) -> AwaitingType<()>;
    fn create_transaction(&self, transaction: NewTransaction) -> AwaitingType<()>;
    fn list_transactions(&self, user_id: DbId) -> AwaitingType<Vec<Transaction>>;
    fn delete_transaction(&self, transaction_id: DbId) -> AwaitingType<()>;
}

impl BuddyApi for Client {
    fn login(&self, args: LoginReqArgs) -> AwaitingType<()> {
        Client::login(self, args)
    }

    fn signup(&self, args: SignupReqArgs) -> AwaitingType<()> {
        Client::signup(self, args)
    }

    fn get_profile(&self) -> AwaitingType<UserProfile> {
        Client::get_profile(self)
    }

    fn update_profile(&self, args: ProfileUpdateReqArgs) -> AwaitingType<()> {
        Client::update_profile(self, args)
    }

    fn delete_profile(&self) -> AwaitingType<()> {
        Client::delete_profile(self)
    }

    fn session_user(&self) -> AwaitingType<SessionUser> {
        Client::session_user(self)
    }

    fn find_user(&self, email: &Email) -> AwaitingType<SessionUser> {
        Client::find_user(self, email)
    }

    fn list_connections(&self, user_id: DbId) -> AwaitingType<Vec<Connection>> {
        Client::list_connections(self, user_id)
    }

    fn find_connection(&self, email: &Email) -> AwaitingType<Connection> {
        Client::find_connection(self, email)
    }

    fn add_connection(&self, user_id: DbId, other_id: DbId) -> AwaitingType<()> {
        Client::add_connection(self, user_id, other_id)
    }

    fn create_transaction(&self, transaction: NewTransaction) -> AwaitingType<()> {
        Client::create_transaction(self, transaction)
    }

    fn list_transactions(&self, user_id: DbId) -> AwaitingType<Vec<Transaction>> {
        Client::list_transactions(self, user_id)
    }

    fn delete_transaction(&self, transaction_id: DbId) -> AwaitingType<()> {
        Client::delete_transaction(self, transaction_id)
    }
}

use buddy_shared::{
    const_config::path::{
        PATH_TRANSACTIONS_CREATE, PATH_TRANSACTIONS_DELETE, PATH_TRANSACTIONS_OF_USER,
    },
    id::DbId,
    models::{NewTransaction, Transaction},
};

use crate::{client::RequestBody, AwaitingType, Client, ClientError};

impl Client {
    /// The backend answers with a text confirmation that is ignored
    #[tracing::instrument]
    pub fn create_transaction(&self, transaction: NewTransaction) -> AwaitingType<()> {
        match serde_json::to_value(&transaction) {
            Ok(value) => {
                self.send_request_expect_empty(PATH_TRANSACTIONS_CREATE, RequestBody::Json(value))
            }
            Err(e) => AwaitingType::ready(Err(ClientError::Parse(buddy_shared::internal_error!(
                format!("failed to serialize transaction: {e}")
            )))),
        }
    }

    #[tracing::instrument]
    pub fn list_transactions(&self, user_id: DbId) -> AwaitingType<Vec<Transaction>> {
        self.send_request_expect_json(
            PATH_TRANSACTIONS_OF_USER.with_params(&[&user_id]),
            RequestBody::Empty,
        )
    }

    #[tracing::instrument]
    pub fn delete_transaction(&self, transaction_id: DbId) -> AwaitingType<()> {
        self.send_request_expect_empty(
            PATH_TRANSACTIONS_DELETE.with_params(&[&transaction_id]),
            RequestBody::Empty,
        )
    }
}

use crate::id::DbId;

use super::UserRef;

/// A row of the ledger as returned by `GET /transactions/user/{id}`
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: DbId,
    #[serde(default)]
    pub sender: Option<UserRef>,
    #[serde(default)]
    pub receiver: Option<UserRef>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub connection_name: Option<String>,
}

impl Transaction {
    pub fn connection_name_or_default(&self) -> &str {
        match self.connection_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => "Unknown",
        }
    }

    pub fn description_or_default(&self) -> &str {
        match self.description.as_deref() {
            Some(description) if !description.is_empty() => description,
            _ => "No description",
        }
    }

    /// Amount with two decimals
    pub fn amount_display(&self) -> String {
        format!("{:.2}", self.amount.unwrap_or_default())
    }
}

/// Body of `POST /transactions`
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq)]
pub struct NewTransaction {
    pub sender: UserRef,
    pub receiver: UserRef,
    pub description: String,
    pub amount: f64,
}

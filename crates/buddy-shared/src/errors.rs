use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConversionError {
    #[error("Empty not allowed")]
    Empty,
}

/// Raised before a request is sent. The request is never issued
///
/// The messages are shown to the user as is
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ValidationError {
    #[error("Veuillez renseigner le champ « {field} »")]
    Required { field: &'static str },
    #[error("Veuillez choisir le destinataire")]
    NoRecipient,
    #[error("Veuillez entrer un montant valide")]
    InvalidAmount,
}

//! The single validation contract every form goes through before a request
//! is sent. A failure means no request is issued and the error message is
//! shown as a warning

use secrecy::{ExposeSecret as _, SecretString};
use tracing::debug;

use crate::{errors::ValidationError, models::Email};

pub const FIELD_EMAIL: &str = "adresse mail";
pub const FIELD_PASSWORD: &str = "mot de passe";
pub const FIELD_USERNAME: &str = "nom d'utilisateur";

/// Returns the trimmed value or an error if nothing is left
pub fn required(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        debug!(field, "required field is empty");
        Err(ValidationError::Required { field })
    } else {
        Ok(trimmed.to_string())
    }
}

pub fn required_email(value: &str) -> Result<Email, ValidationError> {
    Email::try_from(value).map_err(|_| {
        debug!("email is empty");
        ValidationError::Required { field: FIELD_EMAIL }
    })
}

/// Only checks the secret is not blank, the secret itself is left untouched
pub fn required_secret(field: &'static str, value: &SecretString) -> Result<(), ValidationError> {
    if value.expose_secret().trim().is_empty() {
        debug!(field, "required secret is empty");
        Err(ValidationError::Required { field })
    } else {
        Ok(())
    }
}

pub fn selected_recipient(value: Option<&str>) -> Result<Email, ValidationError> {
    value
        .and_then(|recipient| Email::try_from(recipient).ok())
        .ok_or(ValidationError::NoRecipient)
}

/// Parses an amount typed by the user. Accepts `,` as decimal separator.
/// Only finite amounts strictly greater than zero are valid
pub fn positive_amount(value: &str) -> Result<f64, ValidationError> {
    let normalized = value.trim().replace(',', ".");
    match normalized.parse::<f64>() {
        Ok(amount) if amount.is_finite() && amount > 0.0 => Ok(amount),
        _ => {
            debug!(?value, "invalid amount");
            Err(ValidationError::InvalidAmount)
        }
    }
}

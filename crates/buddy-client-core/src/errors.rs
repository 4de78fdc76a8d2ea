/// Why a request did not produce the expected result
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ClientError {
    /// The request could not be sent or no response was received
    #[error("failed to send request: {0}")]
    Network(String),
    /// The backend answered with a non success status
    #[error("request failed with status code {status}: {message}")]
    Http { status: u16, message: String },
    /// The body could not be understood
    #[error("failed to parse response: {0}")]
    Parse(String),
    #[error("response channel closed before a result arrived")]
    Canceled,
}

impl ClientError {
    pub const STATUS_NOT_FOUND: u16 = 404;

    /// The message sent by the backend, if any, untouched
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ClientError::Http { message, .. } if !message.is_empty() => Some(message),
            _ => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns `true` if the backend answered `404 Not Found`
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(Self::STATUS_NOT_FOUND)
    }

    /// Text suitable to append to a user facing message
    ///
    /// The server message when there is one, the error itself otherwise
    pub fn detail(&self) -> String {
        match self.server_message() {
            Some(msg) => msg.to_string(),
            None => self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_only_for_non_empty_http() {
        let with_msg = ClientError::Http {
            status: 401,
            message: "Adresse mail ou mot de passe invalid".into(),
        };
        let without_msg = ClientError::Http {
            status: 500,
            message: String::new(),
        };

        assert_eq!(
            with_msg.server_message(),
            Some("Adresse mail ou mot de passe invalid")
        );
        assert_eq!(without_msg.server_message(), None);
        assert_eq!(ClientError::Network("refused".into()).server_message(), None);
    }

    #[test]
    fn detail_falls_back_to_error_text() {
        let err = ClientError::Parse("expected value".into());
        assert_eq!(err.detail(), "failed to parse response: expected value");
    }

    #[test]
    fn not_found_detected() {
        let err = ClientError::Http {
            status: 404,
            message: String::new(),
        };
        assert!(err.is_not_found());
        assert!(!ClientError::Canceled.is_not_found());
    }
}

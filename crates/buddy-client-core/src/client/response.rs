//! Turns an unsuccessful response into a [`ClientError`]
//!
//! Error bodies are JSON or plain text depending on the endpoint, the
//! `Content-Type` header decides how the body is read

use serde_json::Value;

use crate::ClientError;

/// Keys checked in order for the message of a JSON error body
const MESSAGE_KEYS: [&str; 2] = ["error", "message"];

/// Builds the error for a non success response
///
/// A JSON content type with a body that is not JSON is a
/// [`ClientError::Parse`], anything else is a [`ClientError::Http`] carrying
/// the server message (possibly empty)
pub fn classify_error(status: u16, content_type: Option<&str>, body: &str) -> ClientError {
    let body = body.trim();
    if body.is_empty() {
        return ClientError::Http {
            status,
            message: String::new(),
        };
    }
    if !is_json(content_type) {
        return ClientError::Http {
            status,
            message: body.to_string(),
        };
    }
    match serde_json::from_str::<Value>(body) {
        Ok(value) => ClientError::Http {
            status,
            message: message_from_json(&value).unwrap_or_default(),
        },
        Err(e) => ClientError::Parse(format!("error body is not valid json: {e}")),
    }
}

fn is_json(content_type: Option<&str>) -> bool {
    content_type.is_some_and(|value| value.to_ascii_lowercase().contains("application/json"))
}

fn message_from_json(value: &Value) -> Option<String> {
    match value {
        Value::String(msg) => Some(msg.clone()),
        Value::Object(map) => MESSAGE_KEYS
            .iter()
            .find_map(|key| map.get(*key).and_then(Value::as_str))
            .map(str::to_string),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const JSON: Option<&str> = Some("application/json");
    const JSON_UTF8: Option<&str> = Some("application/json;charset=UTF-8");
    const TEXT: Option<&str> = Some("text/plain;charset=UTF-8");

    fn http(status: u16, message: &str) -> ClientError {
        ClientError::Http {
            status,
            message: message.to_string(),
        }
    }

    #[rstest]
    #[case::error_key(401, JSON, r#"{"error":"x"}"#, http(401, "x"))]
    #[case::charset(401, JSON_UTF8, r#"{"error":"Adresse mail ou mot de passe invalid"}"#, http(401, "Adresse mail ou mot de passe invalid"))]
    #[case::message_key(400, JSON, r#"{"message":"bad"}"#, http(400, "bad"))]
    #[case::error_wins(400, JSON, r#"{"message":"m","error":"e"}"#, http(400, "e"))]
    #[case::json_string(400, JSON, r#""Données invalides""#, http(400, "Données invalides"))]
    #[case::no_message(500, JSON, r#"{"status":500}"#, http(500, ""))]
    #[case::text(404, TEXT, "Transaction non trouvée", http(404, "Transaction non trouvée"))]
    #[case::no_content_type(400, None, " Données invalides\n", http(400, "Données invalides"))]
    #[case::empty_body(404, JSON, "", http(404, ""))]
    #[case::empty_text(404, None, "", http(404, ""))]
    fn classifies(
        #[case] status: u16,
        #[case] content_type: Option<&str>,
        #[case] body: &str,
        #[case] expected: ClientError,
    ) {
        assert_eq!(classify_error(status, content_type, body), expected);
    }

    #[test]
    fn invalid_json_is_parse_error() {
        let actual = classify_error(500, JSON, "<html>oops</html>");
        assert!(matches!(actual, ClientError::Parse(_)), "{actual:?}");
    }
}

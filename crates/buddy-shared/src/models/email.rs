use std::fmt::Display;

use crate::errors::ConversionError;

/// An email address as typed by the user, trimmed and constrained to not be
/// empty
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl TryFrom<String> for Email {
    type Error = ConversionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ConversionError::Empty);
        }
        if trimmed.len() == value.len() {
            Ok(Self(value))
        } else {
            Ok(Self(trimmed.to_string()))
        }
    }
}

impl TryFrom<&str> for Email {
    type Error = ConversionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.to_string().try_into()
    }
}

impl From<Email> for String {
    fn from(value: Email) -> Self {
        value.0
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("bob@mail.com", "bob@mail.com")]
    #[case("  bob@mail.com\t", "bob@mail.com")]
    fn trims_input(#[case] input: &str, #[case] expected: &str) {
        let email = Email::try_from(input).unwrap();
        assert_eq!(email.as_ref(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn rejects_blank(#[case] input: &str) {
        assert_eq!(Email::try_from(input), Err(ConversionError::Empty));
    }

    #[test]
    fn deserialize_rejects_blank() {
        let result: Result<Email, _> = serde_json::from_str(r#""  ""#);
        assert!(result.is_err());
    }
}
